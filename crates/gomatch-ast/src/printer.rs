//! Source rendering of nodes and pattern fragments.
//!
//! The output is Go-like source text intended for diagnostics and logs; it
//! is not guaranteed to be valid input for a formatter. Predicate holes
//! render as `$<index>`, wildcard lists as `...`, and rest lists end in
//! `$<index>...`.

use std::fmt::{self, Write};

use crate::node::{
    BasicLit, BlockStmt, CallExpr, Decl, Expr, Field, FieldList, File, FuncType, Ident, Spec, Stmt,
};
use crate::slot::{Seq, Slot, TokenSlot};
use crate::token::ChanDir;
use crate::view::Node;

/// Renders any node view as source text.
#[must_use]
pub fn show_node(node: Node<'_>) -> String {
    node.to_string()
}

#[derive(Default)]
struct Printer {
    out: String,
    depth: usize,
}

impl Printer {
    fn text(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.depth {
            self.out.push('\t');
        }
    }

    fn token(&mut self, tok: TokenSlot) -> &mut Self {
        match tok {
            TokenSlot::Token(token) => self.text(token.as_str()),
            TokenSlot::Hole(hole) => {
                let _ = write!(self.out, "{hole}");
                self
            }
        }
    }

    fn slot<T>(&mut self, slot: &Slot<T>, print: impl FnOnce(&mut Self, &T)) -> &mut Self {
        match slot {
            Slot::Nil => {}
            Slot::Node(node) => print(self, &**node),
            Slot::Hole(hole) => {
                let _ = write!(self.out, "{hole}");
            }
        }
        self
    }

    fn seq<T>(&mut self, seq: &Seq<T>, sep: &str, mut print: impl FnMut(&mut Self, &T)) -> &mut Self {
        match seq {
            Seq::Any => {
                self.text("...");
            }
            Seq::Hole(hole) => {
                let _ = write!(self.out, "{hole}");
            }
            Seq::Items(items) => self.join(items, sep, &mut print),
            Seq::Rest(items, hole) => {
                self.join(items, sep, &mut print);
                if !items.is_empty() {
                    self.text(sep);
                }
                let _ = write!(self.out, "{hole}...");
            }
        }
        self
    }

    fn join<T>(&mut self, items: &[Slot<T>], sep: &str, print: &mut impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.text(sep);
            }
            match item {
                Slot::Nil => {
                    self.text("_");
                }
                Slot::Node(node) => print(self, &**node),
                Slot::Hole(hole) => {
                    let _ = write!(self.out, "{hole}");
                }
            }
        }
    }

    fn expr_slot(&mut self, slot: &Slot<Expr>) -> &mut Self {
        self.slot(slot, Self::expr)
    }

    fn exprs(&mut self, seq: &Seq<Expr>) -> &mut Self {
        self.seq(seq, ", ", Self::expr)
    }

    fn ident(&mut self, ident: &Ident) {
        self.text(&ident.name);
    }

    fn basic_lit(&mut self, lit: &BasicLit) {
        self.text(&lit.value);
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(e) => self.ident(e),
            Expr::BasicLit(e) => self.basic_lit(e),
            Expr::CompositeLit(e) => {
                self.expr_slot(&e.ty).text("{").exprs(&e.elts).text("}");
            }
            Expr::FuncLit(e) => {
                self.text("func").slot(&e.ty, Self::signature).text(" ");
                self.slot(&e.body, Self::block);
            }
            Expr::Paren(e) => {
                self.text("(").expr_slot(&e.x).text(")");
            }
            Expr::Selector(e) => {
                self.expr_slot(&e.x).text(".").slot(&e.sel, Self::ident);
            }
            Expr::Index(e) => {
                self.expr_slot(&e.x)
                    .text("[")
                    .expr_slot(&e.index)
                    .text("]");
            }
            Expr::IndexList(e) => {
                self.expr_slot(&e.x).text("[").exprs(&e.indices).text("]");
            }
            Expr::Slice(e) => {
                self.expr_slot(&e.x)
                    .text("[")
                    .expr_slot(&e.low)
                    .text(":")
                    .expr_slot(&e.high);
                if e.slice3 {
                    self.text(":").expr_slot(&e.max);
                }
                self.text("]");
            }
            Expr::TypeAssert(e) => {
                self.expr_slot(&e.x).text(".(");
                if e.ty.is_nil() {
                    self.text("type");
                } else {
                    self.expr_slot(&e.ty);
                }
                self.text(")");
            }
            Expr::Call(e) => self.call(e),
            Expr::Star(e) => {
                self.text("*").expr_slot(&e.x);
            }
            Expr::Unary(e) => {
                self.token(e.op).expr_slot(&e.x);
            }
            Expr::Binary(e) => {
                self.expr_slot(&e.x)
                    .text(" ")
                    .token(e.op)
                    .text(" ")
                    .expr_slot(&e.y);
            }
            Expr::KeyValue(e) => {
                self.expr_slot(&e.key).text(": ").expr_slot(&e.value);
            }
            Expr::Ellipsis(e) => {
                self.text("...").expr_slot(&e.elt);
            }
            Expr::ArrayType(e) => {
                self.text("[").expr_slot(&e.len).text("]").expr_slot(&e.elt);
            }
            Expr::StructType(e) => {
                self.text("struct{");
                self.slot(&e.fields, |p, list| {
                    p.seq(&list.list, "; ", Self::field);
                });
                self.text("}");
            }
            Expr::FuncType(e) => {
                self.text("func").signature(e);
            }
            Expr::InterfaceType(e) => {
                self.text("interface{");
                self.slot(&e.methods, |p, list| {
                    p.seq(&list.list, "; ", Self::interface_elem);
                });
                self.text("}");
            }
            Expr::MapType(e) => {
                self.text("map[")
                    .expr_slot(&e.key)
                    .text("]")
                    .expr_slot(&e.value);
            }
            Expr::ChanType(e) => {
                let prefix = match e.dir {
                    ChanDir::Send => "chan<- ",
                    ChanDir::Recv => "<-chan ",
                    ChanDir::Both => "chan ",
                };
                self.text(prefix).expr_slot(&e.value);
            }
        }
    }

    fn call(&mut self, call: &CallExpr) {
        self.expr_slot(&call.fun).text("(").exprs(&call.args);
        if call.ellipsis {
            self.text("...");
        }
        self.text(")");
    }

    fn signature(&mut self, func: &FuncType) {
        if !func.type_params.is_nil() {
            self.text("[");
            self.slot(&func.type_params, |p, list| {
                p.seq(&list.list, ", ", Self::field);
            });
            self.text("]");
        }
        self.text("(");
        self.slot(&func.params, |p, list| {
            p.seq(&list.list, ", ", Self::field);
        });
        self.text(")");
        match &func.results {
            Slot::Nil => {}
            Slot::Hole(hole) => {
                let _ = write!(self.out, " {hole}");
            }
            Slot::Node(results) => {
                let single = results.list.items().len() == 1
                    && results.list.nodes().all(|f| f.names.items().is_empty());
                if single {
                    self.text(" ").seq(&results.list, ", ", Self::field);
                } else {
                    self.text(" (").seq(&results.list, ", ", Self::field).text(")");
                }
            }
        }
    }

    fn field(&mut self, field: &Field) {
        if !field.names.items().is_empty() {
            self.seq(&field.names, ", ", Self::ident).text(" ");
        }
        self.expr_slot(&field.ty);
        if !field.tag.is_nil() {
            self.text(" ").slot(&field.tag, Self::basic_lit);
        }
    }

    fn interface_elem(&mut self, field: &Field) {
        match (field.names.items().first(), &field.ty) {
            (Some(name), Slot::Node(ty)) => {
                if let (Some(name), Expr::FuncType(func)) = (name.as_node(), &**ty) {
                    self.ident(name);
                    self.signature(func);
                } else {
                    self.field(field);
                }
            }
            _ => self.field(field),
        }
    }

    fn field_list(&mut self, list: &FieldList) {
        self.text("(").seq(&list.list, ", ", Self::field).text(")");
    }

    fn block(&mut self, block: &BlockStmt) {
        self.text("{");
        self.depth += 1;
        match &block.list {
            Seq::Items(items) | Seq::Rest(items, _) => {
                for item in items {
                    self.newline();
                    self.slot(item, Self::stmt);
                }
                if let Seq::Rest(_, hole) = &block.list {
                    self.newline();
                    let _ = write!(self.out, "{hole}...");
                }
            }
            Seq::Any => {
                self.newline();
                self.text("...");
            }
            Seq::Hole(hole) => {
                self.newline();
                let _ = write!(self.out, "{hole}");
            }
        }
        self.depth = self.depth.saturating_sub(1);
        self.newline();
        self.text("}");
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Empty => {}
            Stmt::Decl(s) => {
                self.slot(&s.decl, Self::decl);
            }
            Stmt::Labeled(s) => {
                self.slot(&s.label, Self::ident).text(": ").slot(&s.stmt, Self::stmt);
            }
            Stmt::Expr(s) => {
                self.expr_slot(&s.x);
            }
            Stmt::Send(s) => {
                self.expr_slot(&s.chan).text(" <- ").expr_slot(&s.value);
            }
            Stmt::IncDec(s) => {
                self.expr_slot(&s.x).token(s.tok);
            }
            Stmt::Assign(s) => {
                self.exprs(&s.lhs)
                    .text(" ")
                    .token(s.tok)
                    .text(" ")
                    .exprs(&s.rhs);
            }
            Stmt::Go(s) => {
                self.text("go ").slot(&s.call, Self::call);
            }
            Stmt::Defer(s) => {
                self.text("defer ").slot(&s.call, Self::call);
            }
            Stmt::Return(s) => {
                self.text("return");
                if !matches!(&s.results, Seq::Items(items) if items.is_empty()) {
                    self.text(" ").exprs(&s.results);
                }
            }
            Stmt::Branch(s) => {
                self.token(s.tok);
                if !s.label.is_nil() {
                    self.text(" ").slot(&s.label, Self::ident);
                }
            }
            Stmt::Block(s) => self.block(s),
            Stmt::If(s) => {
                self.text("if ");
                if !s.init.is_nil() {
                    self.slot(&s.init, Self::stmt).text("; ");
                }
                self.expr_slot(&s.cond).text(" ").slot(&s.body, Self::block);
                if !s.els.is_nil() {
                    self.text(" else ").slot(&s.els, Self::stmt);
                }
            }
            Stmt::CaseClause(s) => {
                if s.list.items().is_empty() && matches!(s.list, Seq::Items(_)) {
                    self.text("default:");
                } else {
                    self.text("case ").exprs(&s.list).text(":");
                }
                self.clause_body(&s.body);
            }
            Stmt::Switch(s) => {
                self.text("switch ");
                if !s.init.is_nil() {
                    self.slot(&s.init, Self::stmt).text("; ");
                }
                if !s.tag.is_nil() {
                    self.expr_slot(&s.tag).text(" ");
                }
                self.slot(&s.body, Self::block);
            }
            Stmt::TypeSwitch(s) => {
                self.text("switch ");
                if !s.init.is_nil() {
                    self.slot(&s.init, Self::stmt).text("; ");
                }
                self.slot(&s.assign, Self::stmt).text(" ").slot(&s.body, Self::block);
            }
            Stmt::CommClause(s) => {
                if s.comm.is_nil() {
                    self.text("default:");
                } else {
                    self.text("case ").slot(&s.comm, Self::stmt).text(":");
                }
                self.clause_body(&s.body);
            }
            Stmt::Select(s) => {
                self.text("select ").slot(&s.body, Self::block);
            }
            Stmt::For(s) => {
                self.text("for ");
                if !s.init.is_nil() || !s.post.is_nil() {
                    self.slot(&s.init, Self::stmt)
                        .text("; ")
                        .expr_slot(&s.cond)
                        .text("; ")
                        .slot(&s.post, Self::stmt)
                        .text(" ");
                } else if !s.cond.is_nil() {
                    self.expr_slot(&s.cond).text(" ");
                }
                self.slot(&s.body, Self::block);
            }
            Stmt::Range(s) => {
                self.text("for ");
                if !s.key.is_nil() {
                    self.expr_slot(&s.key);
                    if !s.value.is_nil() {
                        self.text(", ").expr_slot(&s.value);
                    }
                    self.text(" ").token(s.tok).text(" ");
                }
                self.text("range ").expr_slot(&s.x).text(" ").slot(&s.body, Self::block);
            }
        }
    }

    fn clause_body(&mut self, body: &Seq<Stmt>) {
        self.depth += 1;
        for item in body.items() {
            self.newline();
            self.slot(item, Self::stmt);
        }
        self.depth = self.depth.saturating_sub(1);
    }

    fn decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Gen(d) => {
                self.token(d.tok).text(" ");
                if d.specs.items().len() == 1 {
                    self.seq(&d.specs, "; ", Self::spec);
                } else {
                    self.text("(").seq(&d.specs, "; ", Self::spec).text(")");
                }
            }
            Decl::Func(d) => {
                self.text("func ");
                if !d.recv.is_nil() {
                    self.slot(&d.recv, Self::field_list).text(" ");
                }
                self.slot(&d.name, Self::ident);
                self.slot(&d.ty, Self::signature);
                if !d.body.is_nil() {
                    self.text(" ").slot(&d.body, Self::block);
                }
            }
        }
    }

    fn spec(&mut self, spec: &Spec) {
        match spec {
            Spec::Import(s) => {
                if !s.name.is_nil() {
                    self.slot(&s.name, Self::ident).text(" ");
                }
                self.slot(&s.path, Self::basic_lit);
            }
            Spec::Value(s) => {
                self.seq(&s.names, ", ", Self::ident);
                if !s.ty.is_nil() {
                    self.text(" ").expr_slot(&s.ty);
                }
                if !s.values.items().is_empty() {
                    self.text(" = ").exprs(&s.values);
                }
            }
            Spec::Type(s) => {
                self.slot(&s.name, Self::ident);
                if !s.type_params.is_nil() {
                    self.text("[");
                    self.slot(&s.type_params, |p, list| {
                        p.seq(&list.list, ", ", Self::field);
                    });
                    self.text("]");
                }
                self.text(if s.alias { " = " } else { " " }).expr_slot(&s.ty);
            }
        }
    }

    fn file(&mut self, file: &File) {
        self.text("package ").slot(&file.name, Self::ident);
        for decl in file.decls.items() {
            self.newline();
            self.newline();
            self.slot(decl, Self::decl);
        }
    }

    fn list<T>(&mut self, items: &[Slot<T>], print: impl FnMut(&mut Self, &T)) {
        let mut print = print;
        self.join(items, ", ", &mut print);
    }

    fn node(&mut self, node: Node<'_>) {
        match node {
            Node::Nil => {
                self.text("nil");
            }
            Node::File(n) => self.file(n),
            Node::Decl(n) => self.decl(n),
            Node::Spec(n) => self.spec(n),
            Node::Stmt(n) => self.stmt(n),
            Node::Expr(n) => self.expr(n),
            Node::Ident(n) => self.ident(n),
            Node::BasicLit(n) => self.basic_lit(n),
            Node::CallExpr(n) => self.call(n),
            Node::FuncType(n) => {
                self.text("func").signature(n);
            }
            Node::BlockStmt(n) => self.block(n),
            Node::Field(n) => self.field(n),
            Node::FieldList(n) => self.field_list(n),
            Node::Token(token) => {
                self.text(token.as_str());
            }
            Node::Stmts(items) => {
                self.text("[").list(items, Self::stmt);
                self.text("]");
            }
            Node::Exprs(items) => {
                self.text("[").list(items, Self::expr);
                self.text("]");
            }
            Node::Specs(items) => {
                self.text("[").list(items, Self::spec);
                self.text("]");
            }
            Node::Idents(items) => {
                self.text("[").list(items, Self::ident);
                self.text("]");
            }
            Node::Fields(items) => {
                self.text("[").list(items, Self::field);
                self.text("]");
            }
            Node::Decls(items) => {
                self.text("[").list(items, Self::decl);
                self.text("]");
            }
        }
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printer = Printer::default();
        printer.node(*self);
        f.write_str(&printer.out)
    }
}

macro_rules! display_via_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&Node::from(self), f)
                }
            }
        )*
    };
}

display_via_node!(
    File, Decl, Spec, Stmt, Expr, Ident, BasicLit, CallExpr, FuncType, BlockStmt, Field, FieldList,
);
