//! Expressions and the node types that also sit in typed positions.

use gomatch_ast::{
    BasicLit, CallExpr, Expr, FuncType, Ident, Node, NodeKind, Slot, unparen_slot,
};

use super::{seq, slot, token};
use crate::config::MatcherConfig;
use crate::matcher::MatchContext;
use crate::pattern::Shape;

impl Shape for Expr {
    const KIND: NodeKind = NodeKind::Expr;

    fn accepts(node: Node<'_>) -> bool {
        matches!(
            node,
            Node::Expr(_) | Node::Ident(_) | Node::BasicLit(_) | Node::CallExpr(_) | Node::FuncType(_)
        )
    }

    fn view(slot: &Slot<Self>) -> Node<'_> {
        Node::from(slot)
    }

    fn normalize(slot: &Slot<Self>, config: MatcherConfig) -> &Slot<Self> {
        if config.unparen_expr() {
            unparen_slot(slot)
        } else {
            slot
        }
    }

    fn normalize_node(node: Node<'_>, config: MatcherConfig) -> Node<'_> {
        match node {
            Node::Expr(expr) if config.unparen_expr() => Node::Expr(expr.unparen()),
            _ => node,
        }
    }

    fn compare<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool {
        match self {
            Self::Ident(x) => x.compare(node, ctx),
            Self::BasicLit(x) => x.compare(node, ctx),
            Self::Call(x) => x.compare(node, ctx),
            Self::FuncType(x) => x.compare(node, ctx),
            Self::CompositeLit(x) => {
                let y = narrow!(node, Expr::CompositeLit);
                slot(&x.ty, &y.ty, ctx) && seq(&x.elts, &y.elts, ctx)
            }
            Self::FuncLit(x) => {
                let y = narrow!(node, Expr::FuncLit);
                slot(&x.ty, &y.ty, ctx) && slot(&x.body, &y.body, ctx)
            }
            Self::Paren(x) => {
                let y = narrow!(node, Expr::Paren);
                slot(&x.x, &y.x, ctx)
            }
            Self::Selector(x) => {
                let y = narrow!(node, Expr::Selector);
                slot(&x.x, &y.x, ctx) && slot(&x.sel, &y.sel, ctx)
            }
            Self::Index(x) => {
                let y = narrow!(node, Expr::Index);
                slot(&x.x, &y.x, ctx) && slot(&x.index, &y.index, ctx)
            }
            Self::IndexList(x) => {
                let y = narrow!(node, Expr::IndexList);
                slot(&x.x, &y.x, ctx) && seq(&x.indices, &y.indices, ctx)
            }
            Self::Slice(x) => {
                let y = narrow!(node, Expr::Slice);
                x.slice3 == y.slice3
                    && slot(&x.x, &y.x, ctx)
                    && slot(&x.low, &y.low, ctx)
                    && slot(&x.high, &y.high, ctx)
                    && slot(&x.max, &y.max, ctx)
            }
            Self::TypeAssert(x) => {
                let y = narrow!(node, Expr::TypeAssert);
                slot(&x.x, &y.x, ctx) && slot(&x.ty, &y.ty, ctx)
            }
            Self::Star(x) => {
                let y = narrow!(node, Expr::Star);
                slot(&x.x, &y.x, ctx)
            }
            Self::Unary(x) => {
                let y = narrow!(node, Expr::Unary);
                token(&x.op, y.op, ctx) && slot(&x.x, &y.x, ctx)
            }
            Self::Binary(x) => {
                let y = narrow!(node, Expr::Binary);
                slot(&x.x, &y.x, ctx) && token(&x.op, y.op, ctx) && slot(&x.y, &y.y, ctx)
            }
            Self::KeyValue(x) => {
                let y = narrow!(node, Expr::KeyValue);
                slot(&x.key, &y.key, ctx) && slot(&x.value, &y.value, ctx)
            }
            Self::Ellipsis(x) => {
                let y = narrow!(node, Expr::Ellipsis);
                slot(&x.elt, &y.elt, ctx)
            }
            Self::ArrayType(x) => {
                let y = narrow!(node, Expr::ArrayType);
                slot(&x.len, &y.len, ctx) && slot(&x.elt, &y.elt, ctx)
            }
            Self::StructType(x) => {
                let y = narrow!(node, Expr::StructType);
                slot(&x.fields, &y.fields, ctx)
            }
            Self::InterfaceType(x) => {
                let y = narrow!(node, Expr::InterfaceType);
                slot(&x.methods, &y.methods, ctx)
            }
            Self::MapType(x) => {
                let y = narrow!(node, Expr::MapType);
                slot(&x.key, &y.key, ctx) && slot(&x.value, &y.value, ctx)
            }
            Self::ChanType(x) => {
                let y = narrow!(node, Expr::ChanType);
                x.dir == y.dir && slot(&x.value, &y.value, ctx)
            }
        }
    }
}

impl Shape for Ident {
    const KIND: NodeKind = NodeKind::Ident;

    fn accepts(node: Node<'_>) -> bool {
        node.ident().is_some()
    }

    fn view(slot: &Slot<Self>) -> Node<'_> {
        Node::from(slot)
    }

    fn compare<'a>(&self, node: Node<'a>, _ctx: &mut MatchContext<'a>) -> bool {
        node.ident().is_some_and(|y| y.name == self.name)
    }
}

impl Shape for BasicLit {
    const KIND: NodeKind = NodeKind::BasicLit;

    fn accepts(node: Node<'_>) -> bool {
        node.basic_lit().is_some()
    }

    fn view(slot: &Slot<Self>) -> Node<'_> {
        Node::from(slot)
    }

    /// Literals compare by value: `16` and `0x10` are equal, `"1"` and
    /// `1` are not. Malformed literals equal nothing.
    fn compare<'a>(&self, node: Node<'a>, _ctx: &mut MatchContext<'a>) -> bool {
        let Some(y) = node.basic_lit() else {
            return false;
        };
        match (self.parsed(), y.parsed()) {
            (Some(a), Some(b)) => a.same_value(&b),
            _ => false,
        }
    }
}

impl Shape for CallExpr {
    const KIND: NodeKind = NodeKind::CallExpr;

    fn accepts(node: Node<'_>) -> bool {
        node.call().is_some()
    }

    fn view(slot: &Slot<Self>) -> Node<'_> {
        Node::from(slot)
    }

    fn compare<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool {
        let Some(y) = node.call() else {
            return false;
        };
        if ctx.config().match_call_ellipsis() && self.ellipsis != y.ellipsis {
            return false;
        }
        slot(&self.fun, &y.fun, ctx) && seq(&self.args, &y.args, ctx)
    }
}

impl Shape for FuncType {
    const KIND: NodeKind = NodeKind::FuncType;

    fn accepts(node: Node<'_>) -> bool {
        node.func_type().is_some()
    }

    fn view(slot: &Slot<Self>) -> Node<'_> {
        Node::from(slot)
    }

    fn compare<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool {
        let Some(y) = node.func_type() else {
            return false;
        };
        slot(&self.type_params, &y.type_params, ctx)
            && slot(&self.params, &y.params, ctx)
            && slot(&self.results, &y.results, ctx)
    }
}
