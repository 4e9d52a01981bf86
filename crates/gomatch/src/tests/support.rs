//! A small typed package shared by the tests.

use gomatch_ast::{Expr, build};
use gomatch_types::{
    BasicKind, Mode, ObjectId, Oracle, Package, Selection, SelectionKind, TypeAndValue, TypeId,
};

/// A package declaring a `Reader` interface, a `File` type whose `Read`
/// method satisfies it, and a user function `myAppend`.
pub(super) struct Io {
    pub(super) pkg: Package,
    pub(super) reader_ty: TypeId,
    pub(super) reader_read: ObjectId,
    pub(super) file_ty: TypeId,
    pub(super) file_read: ObjectId,
    pub(super) int: TypeId,
}

impl Default for Io {
    fn default() -> Self {
        Self::new()
    }
}

impl Io {
    pub(super) fn new() -> Self {
        let mut pkg = Package::new("example.com/io", "io");
        let pkg_id = pkg.id();
        let universe = pkg.universe_mut();
        let byte = universe.basic(BasicKind::Uint8);
        let bytes = universe.slice(byte);
        let int = universe.basic(BasicKind::Int);

        let (_, reader_ty) = universe.new_named(pkg_id, "Reader");
        let iface = universe.new_interface(Vec::new());
        universe.set_underlying(reader_ty, iface);
        let buf = universe.new_var(pkg_id, "p", bytes);
        let count = universe.new_var(pkg_id, "n", int);
        let reader_read = universe.add_interface_method(reader_ty, "Read", vec![buf], vec![count]);

        let (_, file_ty) = universe.new_named(pkg_id, "File");
        let body = universe.new_struct(Vec::new(), Vec::new());
        universe.set_underlying(file_ty, body);
        let file_buf = universe.new_var(pkg_id, "p", bytes);
        let file_count = universe.new_var(pkg_id, "n", int);
        let file_read = universe.add_method(file_ty, "Read", vec![file_buf], vec![file_count], false);

        let item = universe.new_var(pkg_id, "x", int);
        let sig = universe.new_signature(None, vec![item], Vec::new(), false);
        universe.new_func(pkg_id, "myAppend", sig);

        Self {
            pkg,
            reader_ty,
            reader_read,
            file_ty,
            file_read,
            int,
        }
    }

    /// Resolves a package-level or predeclared name.
    pub(super) fn object(&self, name: &str) -> ObjectId {
        let universe = self.pkg.universe();
        self.pkg
            .id()
            .and_then(|pkg| universe.lookup_in(pkg, name))
            .or_else(|| universe.lookup(name))
            .expect("name should be declared")
    }

    /// Builds `name(a0, a1, ...)` with `name` referring to `callee`.
    pub(super) fn call_of(&mut self, name: &str, callee: ObjectId, args: usize) -> Expr {
        let call = build::call(
            build::ident(name),
            (0..args).map(|i| build::ident_expr(format!("a{i}"))).collect(),
        );
        if let Some(Expr::Ident(fun)) = call.fun.as_node() {
            self.pkg.refer(fun, callee);
        }
        Expr::Call(call)
    }

    /// Builds `r.Read(buf)` with `r` of type `recv_ty` selecting `method`.
    pub(super) fn read_call(&mut self, recv_ty: TypeId, method: ObjectId) -> Expr {
        let selector = build::selector(build::ident("r"), "Read");
        self.pkg.record_selection(
            selector.id,
            Selection {
                kind: SelectionKind::MethodVal,
                recv: recv_ty,
                obj: method,
                index: vec![0],
                indirect: false,
            },
        );
        if let Some(x) = selector.x.as_node() {
            self.pkg
                .record_type(x.id(), TypeAndValue::new(Mode::Variable, recv_ty));
        }
        Expr::Call(build::call(selector, vec![build::ident_expr("buf")]))
    }

    /// Builds an identifier expression whose recorded type is `ty`.
    pub(super) fn typed_ident(&mut self, name: &str, ty: TypeId) -> Expr {
        let expr = build::ident_expr(name);
        self.pkg
            .record_type(expr.id(), TypeAndValue::new(Mode::Variable, ty));
        expr
    }
}
