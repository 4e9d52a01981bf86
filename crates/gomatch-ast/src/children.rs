//! Child enumeration in grammar order.

use crate::node::{
    BlockStmt, CallExpr, Decl, Expr, Field, FieldList, File, FuncType, Spec, Stmt,
};
use crate::slot::{Seq, Slot};
use crate::view::Node;

/// A child node together with the name of the field that holds it.
#[derive(Debug, Clone, Copy)]
pub struct Child<'a> {
    /// Field name in the parent.
    pub field: &'static str,
    /// The child node.
    pub node: Node<'a>,
}

#[derive(Default)]
struct Children<'a>(Vec<Child<'a>>);

impl<'a> Children<'a> {
    fn slot<T>(&mut self, field: &'static str, slot: &'a Slot<T>) -> &mut Self
    where
        Node<'a>: From<&'a T>,
    {
        if let Some(node) = slot.as_node() {
            self.0.push(Child {
                field,
                node: Node::from(node),
            });
        }
        self
    }

    fn seq<T>(&mut self, field: &'static str, seq: &'a Seq<T>) -> &mut Self
    where
        Node<'a>: From<&'a T>,
    {
        for node in seq.nodes() {
            self.0.push(Child {
                field,
                node: Node::from(node),
            });
        }
        self
    }

    fn items<T>(&mut self, field: &'static str, items: &'a [Slot<T>]) -> &mut Self
    where
        Node<'a>: From<&'a T>,
    {
        for slot in items {
            self.slot(field, slot);
        }
        self
    }

    fn finish(&mut self) -> Vec<Child<'a>> {
        std::mem::take(&mut self.0)
    }
}

impl<'a> Node<'a> {
    /// Returns the direct children in grammar order.
    ///
    /// Missing children and predicate holes are skipped. Tokens are leaves
    /// and never appear as children.
    #[must_use]
    pub fn children(self) -> Vec<Child<'a>> {
        let mut out = Children::default();
        match self {
            Self::Nil
            | Self::Token(_)
            | Self::Ident(_)
            | Self::BasicLit(_) => {}
            Self::File(file) => file_children(&mut out, file),
            Self::Decl(decl) => decl_children(&mut out, decl),
            Self::Spec(spec) => spec_children(&mut out, spec),
            Self::Stmt(stmt) => stmt_children(&mut out, stmt),
            Self::Expr(expr) => expr_children(&mut out, expr),
            Self::CallExpr(call) => call_children(&mut out, call),
            Self::FuncType(func) => func_type_children(&mut out, func),
            Self::BlockStmt(block) => block_children(&mut out, block),
            Self::Field(field) => field_children(&mut out, field),
            Self::FieldList(list) => field_list_children(&mut out, list),
            Self::Stmts(items) => {
                out.items("list", items);
            }
            Self::Exprs(items) => {
                out.items("list", items);
            }
            Self::Specs(items) => {
                out.items("list", items);
            }
            Self::Idents(items) => {
                out.items("list", items);
            }
            Self::Fields(items) => {
                out.items("list", items);
            }
            Self::Decls(items) => {
                out.items("list", items);
            }
        }
        out.finish()
    }
}

fn file_children<'a>(out: &mut Children<'a>, file: &'a File) {
    out.slot("name", &file.name).seq("decls", &file.decls);
}

fn decl_children<'a>(out: &mut Children<'a>, decl: &'a Decl) {
    match decl {
        Decl::Gen(gen_decl) => {
            out.seq("specs", &gen_decl.specs);
        }
        Decl::Func(func) => {
            out.slot("recv", &func.recv)
                .slot("name", &func.name)
                .slot("ty", &func.ty)
                .slot("body", &func.body);
        }
    }
}

fn spec_children<'a>(out: &mut Children<'a>, spec: &'a Spec) {
    match spec {
        Spec::Import(import) => {
            out.slot("name", &import.name).slot("path", &import.path);
        }
        Spec::Value(value) => {
            out.seq("names", &value.names)
                .slot("ty", &value.ty)
                .seq("values", &value.values);
        }
        Spec::Type(ty) => {
            out.slot("name", &ty.name)
                .slot("type_params", &ty.type_params)
                .slot("ty", &ty.ty);
        }
    }
}

fn stmt_children<'a>(out: &mut Children<'a>, stmt: &'a Stmt) {
    match stmt {
        Stmt::Empty => {}
        Stmt::Decl(s) => {
            out.slot("decl", &s.decl);
        }
        Stmt::Labeled(s) => {
            out.slot("label", &s.label).slot("stmt", &s.stmt);
        }
        Stmt::Expr(s) => {
            out.slot("x", &s.x);
        }
        Stmt::Send(s) => {
            out.slot("chan", &s.chan).slot("value", &s.value);
        }
        Stmt::IncDec(s) => {
            out.slot("x", &s.x);
        }
        Stmt::Assign(s) => {
            out.seq("lhs", &s.lhs).seq("rhs", &s.rhs);
        }
        Stmt::Go(s) => {
            out.slot("call", &s.call);
        }
        Stmt::Defer(s) => {
            out.slot("call", &s.call);
        }
        Stmt::Return(s) => {
            out.seq("results", &s.results);
        }
        Stmt::Branch(s) => {
            out.slot("label", &s.label);
        }
        Stmt::Block(s) => block_children(out, s),
        Stmt::If(s) => {
            out.slot("init", &s.init)
                .slot("cond", &s.cond)
                .slot("body", &s.body)
                .slot("els", &s.els);
        }
        Stmt::CaseClause(s) => {
            out.seq("list", &s.list).seq("body", &s.body);
        }
        Stmt::Switch(s) => {
            out.slot("init", &s.init)
                .slot("tag", &s.tag)
                .slot("body", &s.body);
        }
        Stmt::TypeSwitch(s) => {
            out.slot("init", &s.init)
                .slot("assign", &s.assign)
                .slot("body", &s.body);
        }
        Stmt::CommClause(s) => {
            out.slot("comm", &s.comm).seq("body", &s.body);
        }
        Stmt::Select(s) => {
            out.slot("body", &s.body);
        }
        Stmt::For(s) => {
            out.slot("init", &s.init)
                .slot("cond", &s.cond)
                .slot("post", &s.post)
                .slot("body", &s.body);
        }
        Stmt::Range(s) => {
            out.slot("key", &s.key)
                .slot("value", &s.value)
                .slot("x", &s.x)
                .slot("body", &s.body);
        }
    }
}

fn expr_children<'a>(out: &mut Children<'a>, expr: &'a Expr) {
    match expr {
        Expr::Ident(_) | Expr::BasicLit(_) => {}
        Expr::CompositeLit(e) => {
            out.slot("ty", &e.ty).seq("elts", &e.elts);
        }
        Expr::FuncLit(e) => {
            out.slot("ty", &e.ty).slot("body", &e.body);
        }
        Expr::Paren(e) => {
            out.slot("x", &e.x);
        }
        Expr::Selector(e) => {
            out.slot("x", &e.x).slot("sel", &e.sel);
        }
        Expr::Index(e) => {
            out.slot("x", &e.x).slot("index", &e.index);
        }
        Expr::IndexList(e) => {
            out.slot("x", &e.x).seq("indices", &e.indices);
        }
        Expr::Slice(e) => {
            out.slot("x", &e.x)
                .slot("low", &e.low)
                .slot("high", &e.high)
                .slot("max", &e.max);
        }
        Expr::TypeAssert(e) => {
            out.slot("x", &e.x).slot("ty", &e.ty);
        }
        Expr::Call(e) => call_children(out, e),
        Expr::Star(e) => {
            out.slot("x", &e.x);
        }
        Expr::Unary(e) => {
            out.slot("x", &e.x);
        }
        Expr::Binary(e) => {
            out.slot("x", &e.x).slot("y", &e.y);
        }
        Expr::KeyValue(e) => {
            out.slot("key", &e.key).slot("value", &e.value);
        }
        Expr::Ellipsis(e) => {
            out.slot("elt", &e.elt);
        }
        Expr::ArrayType(e) => {
            out.slot("len", &e.len).slot("elt", &e.elt);
        }
        Expr::StructType(e) => {
            out.slot("fields", &e.fields);
        }
        Expr::FuncType(e) => func_type_children(out, e),
        Expr::InterfaceType(e) => {
            out.slot("methods", &e.methods);
        }
        Expr::MapType(e) => {
            out.slot("key", &e.key).slot("value", &e.value);
        }
        Expr::ChanType(e) => {
            out.slot("value", &e.value);
        }
    }
}

fn call_children<'a>(out: &mut Children<'a>, call: &'a CallExpr) {
    out.slot("fun", &call.fun).seq("args", &call.args);
}

fn func_type_children<'a>(out: &mut Children<'a>, func: &'a FuncType) {
    out.slot("type_params", &func.type_params)
        .slot("params", &func.params)
        .slot("results", &func.results);
}

fn block_children<'a>(out: &mut Children<'a>, block: &'a BlockStmt) {
    out.seq("list", &block.list);
}

fn field_children<'a>(out: &mut Children<'a>, field: &'a Field) {
    out.seq("names", &field.names)
        .slot("ty", &field.ty)
        .slot("tag", &field.tag);
}

fn field_list_children<'a>(out: &mut Children<'a>, list: &'a FieldList) {
    out.seq("list", &list.list);
}
