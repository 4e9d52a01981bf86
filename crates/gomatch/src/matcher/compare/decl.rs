//! Declarations, specifications, fields and files.

use gomatch_ast::{Decl, Field, FieldList, File, Node, NodeKind, Seq, Slot, Spec};

use super::{seq, slot, token};
use crate::matcher::MatchContext;
use crate::pattern::Shape;

impl Shape for Decl {
    const KIND: NodeKind = NodeKind::Decl;

    fn accepts(node: Node<'_>) -> bool {
        matches!(node, Node::Decl(_))
    }

    fn view(slot: &Slot<Self>) -> Node<'_> {
        Node::from(slot)
    }

    fn compare<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool {
        match self {
            Self::Gen(x) => {
                let y = narrow!(node, Decl::Gen);
                token(&x.tok, y.tok, ctx) && seq(&x.specs, &y.specs, ctx)
            }
            Self::Func(x) => {
                let y = narrow!(node, Decl::Func);
                slot(&x.recv, &y.recv, ctx)
                    && slot(&x.name, &y.name, ctx)
                    && slot(&x.ty, &y.ty, ctx)
                    && slot(&x.body, &y.body, ctx)
            }
        }
    }
}

impl Shape for Spec {
    const KIND: NodeKind = NodeKind::Spec;

    fn accepts(node: Node<'_>) -> bool {
        matches!(node, Node::Spec(_))
    }

    fn view(slot: &Slot<Self>) -> Node<'_> {
        Node::from(slot)
    }

    fn compare<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool {
        match self {
            Self::Import(x) => {
                let y = narrow!(node, Spec::Import);
                slot(&x.name, &y.name, ctx) && slot(&x.path, &y.path, ctx)
            }
            Self::Value(x) => {
                let y = narrow!(node, Spec::Value);
                seq(&x.names, &y.names, ctx)
                    && slot(&x.ty, &y.ty, ctx)
                    && seq(&x.values, &y.values, ctx)
            }
            Self::Type(x) => {
                // `alias` is spelling, like the position of `=`.
                let y = narrow!(node, Spec::Type);
                slot(&x.name, &y.name, ctx)
                    && slot(&x.type_params, &y.type_params, ctx)
                    && slot(&x.ty, &y.ty, ctx)
            }
        }
    }
}

impl Shape for Field {
    const KIND: NodeKind = NodeKind::Field;

    fn accepts(node: Node<'_>) -> bool {
        matches!(node, Node::Field(_))
    }

    fn view(slot: &Slot<Self>) -> Node<'_> {
        Node::from(slot)
    }

    fn compare<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool {
        let Some(y) = node.field() else {
            return false;
        };
        seq(&self.names, &y.names, ctx) && slot(&self.ty, &y.ty, ctx) && slot(&self.tag, &y.tag, ctx)
    }
}

impl Shape for FieldList {
    const KIND: NodeKind = NodeKind::FieldList;

    fn accepts(node: Node<'_>) -> bool {
        matches!(node, Node::FieldList(_))
    }

    fn view(slot: &Slot<Self>) -> Node<'_> {
        Node::from(slot)
    }

    /// A missing field list is shown to a list predicate as the empty
    /// list, so `func()` with no results satisfies "results of length 0".
    fn compare<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool {
        if let (Node::Nil, Seq::Hole(hole)) = (node, &self.list) {
            return ctx.invoke(*hole, Node::Fields(&[]));
        }
        let Some(y) = node.field_list() else {
            return false;
        };
        seq(&self.list, &y.list, ctx)
    }
}

impl Shape for File {
    const KIND: NodeKind = NodeKind::File;

    fn accepts(node: Node<'_>) -> bool {
        matches!(node, Node::File(_))
    }

    fn view(slot: &Slot<Self>) -> Node<'_> {
        Node::from(slot)
    }

    fn compare<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool {
        let Some(y) = node.file() else {
            return false;
        };
        slot(&self.name, &y.name, ctx) && seq(&self.decls, &y.decls, ctx)
    }
}
