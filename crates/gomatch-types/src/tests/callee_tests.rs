//! Tests for call target resolution through the oracle.

use gomatch_ast::{Expr, IndexExpr, NodeId, Slot, build};

use crate::{
    BasicKind, Mode, ObjectKind, Oracle, Package, Selection, SelectionKind, TypeAndValue,
};

#[test]
fn identifier_calls_resolve_through_uses() {
    let mut pkg = Package::new("example.com/p", "p");
    let pkg_id = pkg.id().expect("package id");
    let universe = pkg.universe_mut();
    let sig = universe.new_signature(None, Vec::new(), Vec::new(), false);
    let run = universe.new_func(Some(pkg_id), "run", sig);

    let call = build::call(build::ident("run"), Vec::new());
    let Some(Expr::Ident(fun)) = call.fun.as_node() else {
        panic!("call target should be an identifier");
    };
    pkg.refer(fun, run);

    assert_eq!(pkg.callee(&call), Some(run));
    assert_eq!(pkg.static_callee(&call), Some(run));
}

#[test]
fn builtins_are_callees_but_not_static_callees() {
    let mut pkg = Package::new("example.com/p", "p");
    let append = pkg.universe().lookup("append").expect("append");
    let call = build::call(build::ident("append"), vec![build::ident_expr("xs")]);
    let Some(Expr::Ident(fun)) = call.fun.as_node() else {
        panic!("call target should be an identifier");
    };
    pkg.refer(fun, append);

    assert_eq!(pkg.callee(&call), Some(append));
    assert_eq!(pkg.static_callee(&call), None);
}

#[test]
fn conversions_have_no_callee() {
    let mut pkg = Package::new("example.com/p", "p");
    let int = pkg.universe().lookup("int").expect("int");
    let call = build::call(build::ident("int"), vec![build::ident_expr("x")]);
    let Some(Expr::Ident(fun)) = call.fun.as_node() else {
        panic!("call target should be an identifier");
    };
    pkg.refer(fun, int);
    assert_eq!(pkg.callee(&call), None);
}

#[test]
fn interface_method_calls_resolve_through_selections() {
    let mut pkg = Package::new("io", "io");
    let pkg_id = pkg.id();
    let universe = pkg.universe_mut();
    let (_, reader) = universe.new_named(pkg_id, "Reader");
    let iface = universe.new_interface(Vec::new());
    universe.set_underlying(reader, iface);
    let byte = universe.basic(BasicKind::Uint8);
    let bytes = universe.slice(byte);
    let int = universe.basic(BasicKind::Int);
    let param = universe.new_var(pkg_id, "p", bytes);
    let count = universe.new_var(pkg_id, "n", int);
    let read = universe.add_interface_method(reader, "Read", vec![param], vec![count]);
    let r = universe.new_var(pkg_id, "r", reader);

    let selector = build::selector(build::ident("r"), "Read");
    let selector_id = selector.id;
    let call = build::call(
        Expr::Paren(gomatch_ast::ParenExpr {
            id: NodeId::fresh(),
            x: Slot::node(Expr::Selector(selector)),
        }),
        vec![build::ident_expr("buf")],
    );
    pkg.record_selection(
        selector_id,
        Selection {
            kind: SelectionKind::MethodVal,
            recv: reader,
            obj: read,
            index: vec![0],
            indirect: false,
        },
    );

    assert_eq!(pkg.callee(&call), Some(read));
    assert_eq!(pkg.static_callee(&call), None);
    assert!(
        pkg.universe()
            .object(r)
            .is_some_and(|obj| obj.kind() == ObjectKind::Var)
    );
}

#[test]
fn explicit_instantiation_is_stripped_for_functions() {
    let mut pkg = Package::new("example.com/p", "p");
    let pkg_id = pkg.id();
    let universe = pkg.universe_mut();
    let sig = universe.new_signature(None, Vec::new(), Vec::new(), false);
    let map_fn = universe.new_func(pkg_id, "Map", sig);

    let generic = build::ident("Map");
    pkg.refer(&generic, map_fn);
    let call = build::call(
        Expr::Index(IndexExpr {
            id: NodeId::fresh(),
            x: Slot::node(Expr::Ident(generic)),
            index: Slot::node(build::ident_expr("int")),
        }),
        Vec::new(),
    );
    assert_eq!(pkg.callee(&call), Some(map_fn));
}

#[test]
fn type_of_falls_back_to_the_object_type() {
    let mut pkg = Package::new("example.com/p", "p");
    let pkg_id = pkg.id().expect("package id");
    let universe = pkg.universe_mut();
    let string = universe.basic(BasicKind::String);
    let name = universe.new_global(pkg_id, "name", string);

    let ident = build::ident("name");
    pkg.refer(&ident, name);
    assert_eq!(pkg.type_of(gomatch_ast::Node::Ident(&ident)), Some(string));
}

#[test]
fn metadata_hooks_copy_facts_between_nodes() {
    let pkg = Package::new("example.com/p", "p");
    let int = pkg.universe().basic(BasicKind::Int);
    let from = NodeId::fresh();
    let to = NodeId::fresh();
    pkg.update_type(from, TypeAndValue::new(Mode::Variable, int));
    pkg.copy_type_info(from, to);
    assert_eq!(
        pkg.type_and_value(to),
        Some(TypeAndValue::new(Mode::Variable, int))
    );
}

/// Oracle that reads through a package and logs every metadata write.
struct Recording {
    inner: Package,
    writes: std::cell::RefCell<Vec<&'static str>>,
}

impl Oracle for Recording {
    fn universe(&self) -> &crate::Universe {
        self.inner.universe()
    }

    fn defined_object(&self, id: NodeId) -> Option<crate::ObjectId> {
        self.inner.defined_object(id)
    }

    fn used_object(&self, id: NodeId) -> Option<crate::ObjectId> {
        self.inner.used_object(id)
    }

    fn type_and_value(&self, id: NodeId) -> Option<TypeAndValue> {
        self.inner.type_and_value(id)
    }

    fn selection(&self, id: NodeId) -> Option<Selection> {
        self.inner.selection(id)
    }

    fn update_type(&self, id: NodeId, tv: TypeAndValue) {
        self.writes.borrow_mut().push("type");
        self.inner.update_type(id, tv);
    }

    fn update_uses(&self, id: NodeId, obj: crate::ObjectId) {
        self.writes.borrow_mut().push("uses");
        self.inner.update_uses(id, obj);
    }

    fn update_defs(&self, id: NodeId, obj: crate::ObjectId) {
        self.writes.borrow_mut().push("defs");
        self.inner.update_defs(id, obj);
    }
}

#[test]
fn copying_facts_goes_through_the_implementor_hooks() {
    let inner = Package::new("example.com/p", "p");
    let int = inner.universe().basic(BasicKind::Int);
    let nil = inner.universe().lookup("nil").expect("nil");
    let from = NodeId::fresh();
    let to = NodeId::fresh();
    inner.update_type(from, TypeAndValue::new(Mode::Variable, int));
    inner.update_uses(from, nil);
    inner.update_defs(from, nil);
    let oracle = Recording {
        inner,
        writes: std::cell::RefCell::new(Vec::new()),
    };

    oracle.copy_type_info(from, to);

    assert_eq!(*oracle.writes.borrow(), ["type", "uses", "defs"]);
    assert_eq!(oracle.used_object(to), Some(nil));
    assert_eq!(oracle.defined_object(to), Some(nil));
}
