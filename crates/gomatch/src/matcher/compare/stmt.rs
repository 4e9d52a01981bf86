//! Statements and blocks.

use gomatch_ast::{BlockStmt, Node, NodeKind, Slot, Stmt};

use super::{seq, slot, token};
use crate::matcher::MatchContext;
use crate::pattern::Shape;

impl Shape for Stmt {
    const KIND: NodeKind = NodeKind::Stmt;

    fn accepts(node: Node<'_>) -> bool {
        matches!(node, Node::Stmt(_) | Node::BlockStmt(_))
    }

    fn view(slot: &Slot<Self>) -> Node<'_> {
        Node::from(slot)
    }

    fn compare<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool {
        match self {
            Self::Empty => matches!(node, Node::Stmt(Stmt::Empty)),
            Self::Block(x) => x.compare(node, ctx),
            Self::Decl(x) => {
                let y = narrow!(node, Stmt::Decl);
                slot(&x.decl, &y.decl, ctx)
            }
            Self::Labeled(x) => {
                let y = narrow!(node, Stmt::Labeled);
                slot(&x.label, &y.label, ctx) && slot(&x.stmt, &y.stmt, ctx)
            }
            Self::Expr(x) => {
                let y = narrow!(node, Stmt::Expr);
                slot(&x.x, &y.x, ctx)
            }
            Self::Send(x) => {
                let y = narrow!(node, Stmt::Send);
                slot(&x.chan, &y.chan, ctx) && slot(&x.value, &y.value, ctx)
            }
            Self::IncDec(x) => {
                let y = narrow!(node, Stmt::IncDec);
                slot(&x.x, &y.x, ctx) && token(&x.tok, y.tok, ctx)
            }
            Self::Assign(x) => {
                let y = narrow!(node, Stmt::Assign);
                seq(&x.lhs, &y.lhs, ctx) && token(&x.tok, y.tok, ctx) && seq(&x.rhs, &y.rhs, ctx)
            }
            Self::Go(x) => {
                let y = narrow!(node, Stmt::Go);
                slot(&x.call, &y.call, ctx)
            }
            Self::Defer(x) => {
                let y = narrow!(node, Stmt::Defer);
                slot(&x.call, &y.call, ctx)
            }
            Self::Return(x) => {
                let y = narrow!(node, Stmt::Return);
                seq(&x.results, &y.results, ctx)
            }
            Self::Branch(x) => {
                let y = narrow!(node, Stmt::Branch);
                token(&x.tok, y.tok, ctx) && slot(&x.label, &y.label, ctx)
            }
            Self::If(x) => {
                let y = narrow!(node, Stmt::If);
                slot(&x.init, &y.init, ctx)
                    && slot(&x.cond, &y.cond, ctx)
                    && slot(&x.body, &y.body, ctx)
                    && slot(&x.els, &y.els, ctx)
            }
            Self::CaseClause(x) => {
                let y = narrow!(node, Stmt::CaseClause);
                seq(&x.list, &y.list, ctx) && seq(&x.body, &y.body, ctx)
            }
            Self::Switch(x) => {
                let y = narrow!(node, Stmt::Switch);
                slot(&x.init, &y.init, ctx)
                    && slot(&x.tag, &y.tag, ctx)
                    && slot(&x.body, &y.body, ctx)
            }
            Self::TypeSwitch(x) => {
                let y = narrow!(node, Stmt::TypeSwitch);
                slot(&x.init, &y.init, ctx)
                    && slot(&x.assign, &y.assign, ctx)
                    && slot(&x.body, &y.body, ctx)
            }
            Self::CommClause(x) => {
                let y = narrow!(node, Stmt::CommClause);
                slot(&x.comm, &y.comm, ctx) && seq(&x.body, &y.body, ctx)
            }
            Self::Select(x) => {
                let y = narrow!(node, Stmt::Select);
                slot(&x.body, &y.body, ctx)
            }
            Self::For(x) => {
                let y = narrow!(node, Stmt::For);
                slot(&x.init, &y.init, ctx)
                    && slot(&x.cond, &y.cond, ctx)
                    && slot(&x.post, &y.post, ctx)
                    && slot(&x.body, &y.body, ctx)
            }
            Self::Range(x) => {
                let y = narrow!(node, Stmt::Range);
                // No nil-is-wildcard for `tok`: a keyless range carries
                // `Illegal`.
                slot(&x.key, &y.key, ctx)
                    && slot(&x.value, &y.value, ctx)
                    && token(&x.tok, y.tok, ctx)
                    && slot(&x.x, &y.x, ctx)
                    && slot(&x.body, &y.body, ctx)
            }
        }
    }
}

impl Shape for BlockStmt {
    const KIND: NodeKind = NodeKind::BlockStmt;

    fn accepts(node: Node<'_>) -> bool {
        node.block().is_some()
    }

    fn view(slot: &Slot<Self>) -> Node<'_> {
        Node::from(slot)
    }

    fn compare<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool {
        let Some(y) = node.block() else {
            return false;
        };
        seq(&self.list, &y.list, ctx)
    }
}
