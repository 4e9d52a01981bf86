//! Callee, type relation and object predicates against a typed package.

use gomatch_ast::{Expr, IfStmt, Slot, Stmt, build};
use gomatch_types::{BasicKind, Mode, Oracle, TypeAndValue};
use rstest::{fixture, rstest};

use super::support::Io;
use crate::combinator::{
    func_decl_of, ident_is_func, ident_is_method, init_func, is_builtin, selector_field_of,
    selector_pkg_of,
};
use crate::semantic::{
    builtin_callee, callee_of, func_callee, func_or_method_callee_of, iface_callee,
    method_callee, method_callee_of, static_callee_of, type_assignable_to, type_convertible_to,
    type_identical, type_implements, type_of, type_ptr_implements, var_callee_of,
};
use crate::{ExprPattern, Matcher, PatternError};

#[fixture]
fn io() -> Io {
    Io::new()
}

#[rstest]
fn builtin_callee_matches_calls_of_that_builtin(mut io: Io) {
    let mut m = Matcher::new();
    let append = io.object("append");
    let len = io.object("len");
    let my_append = io.object("myAppend");
    let pattern: ExprPattern =
        builtin_callee(&mut m, io.pkg.universe(), "append").expect("append is a builtin");
    let call_append = io.call_of("append", append, 2);
    let call_len = io.call_of("len", len, 1);
    let call_mine = io.call_of("myAppend", my_append, 1);
    assert!(m.matches(&io.pkg, &pattern, &call_append));
    assert!(!m.matches(&io.pkg, &pattern, &call_len));
    assert!(!m.matches(&io.pkg, &pattern, &call_mine));
}

#[rstest]
#[case("frobnicate")]
#[case("int")]
#[case("myAppend")]
fn builtin_callee_rejects_other_names(io: Io, #[case] name: &str) {
    let mut m = Matcher::new();
    let result: Result<ExprPattern, PatternError> = builtin_callee(&mut m, io.pkg.universe(), name);
    assert_eq!(result.err(), Some(PatternError::unknown_builtin(name)));
}

#[rstest]
fn func_callee_matches_the_exact_function(mut io: Io) {
    let mut m = Matcher::new();
    let my_append = io.object("myAppend");
    let append = io.object("append");
    let pattern: ExprPattern =
        func_callee(&mut m, io.pkg.universe(), my_append).expect("myAppend is a function");

    let int = io.int;
    let universe = io.pkg.universe_mut();
    let param = universe.new_var(None, "x", int);
    let sig = universe.new_signature(None, vec![param], Vec::new(), false);
    let impostor = universe.new_func(None, "myAppend", sig);

    let call_mine = io.call_of("myAppend", my_append, 1);
    let call_impostor = io.call_of("myAppend", impostor, 1);
    let call_builtin = io.call_of("append", append, 1);
    assert!(m.matches(&io.pkg, &pattern, &call_mine));
    assert!(!m.matches(&io.pkg, &pattern, &call_impostor));
    assert!(!m.matches(&io.pkg, &pattern, &call_builtin));
}

#[rstest]
fn func_callee_rejects_non_functions(io: Io) {
    let mut m = Matcher::new();
    let reader = io.object("Reader");
    let result: Result<ExprPattern, PatternError> = func_callee(&mut m, io.pkg.universe(), reader);
    assert_eq!(result.err(), Some(PatternError::not_a_function("Reader")));
    let method: Result<ExprPattern, PatternError> =
        func_callee(&mut m, io.pkg.universe(), io.file_read);
    assert!(matches!(method, Err(PatternError::NotAFunction { .. })));
}

#[rstest]
fn method_callee_matches_concrete_method_calls(mut io: Io) {
    let mut m = Matcher::new();
    let file = io.object("File");
    let pattern: ExprPattern =
        method_callee(&mut m, io.pkg.universe(), file, "Read", false).expect("File.Read exists");
    let concrete = io.read_call(io.file_ty, io.file_read);
    let dynamic = io.read_call(io.reader_ty, io.reader_read);
    assert!(m.matches(&io.pkg, &pattern, &concrete));
    assert!(!m.matches(&io.pkg, &pattern, &dynamic));
}

#[rstest]
fn method_callee_reports_resolution_failures(io: Io) {
    let mut m = Matcher::new();
    let file = io.object("File");
    let missing: Result<ExprPattern, PatternError> =
        method_callee(&mut m, io.pkg.universe(), file, "Write", false);
    let type_name = io.pkg.universe().type_name(io.file_ty);
    assert_eq!(
        missing.err(),
        Some(PatternError::method_not_found(type_name, "Write"))
    );
    let not_a_type: Result<ExprPattern, PatternError> =
        method_callee(&mut m, io.pkg.universe(), io.object("myAppend"), "Read", false);
    assert_eq!(not_a_type.err(), Some(PatternError::not_a_type_name("myAppend")));
}

#[rstest]
fn iface_callee_matches_only_dynamic_calls(mut io: Io) {
    let mut m = Matcher::new();
    let reader = io.object("Reader");
    let pattern: ExprPattern =
        iface_callee(&mut m, io.pkg.universe(), reader, "Read").expect("Reader.Read exists");
    let concrete = io.read_call(io.file_ty, io.file_read);
    let dynamic = io.read_call(io.reader_ty, io.reader_read);
    assert!(!m.matches(&io.pkg, &pattern, &concrete));
    assert!(m.matches(&io.pkg, &pattern, &dynamic));
}

#[rstest]
fn iface_callee_requires_an_interface(io: Io) {
    let mut m = Matcher::new();
    let file = io.object("File");
    let result: Result<ExprPattern, PatternError> =
        iface_callee(&mut m, io.pkg.universe(), file, "Read");
    assert!(matches!(result, Err(PatternError::NotAnInterface { .. })));
    let reader = io.object("Reader");
    let missing: Result<ExprPattern, PatternError> =
        iface_callee(&mut m, io.pkg.universe(), reader, "Close");
    assert!(matches!(missing, Err(PatternError::MethodNotFound { .. })));
}

#[rstest]
fn callee_families_partition_calls(mut io: Io) {
    let mut m = Matcher::new();
    let append = io.object("append");
    let my_append = io.object("myAppend");
    let sig = io
        .pkg
        .universe()
        .object(my_append)
        .map(gomatch_types::Object::ty)
        .expect("myAppend has a type");
    let pkg_id = io.pkg.id();
    let handler = io.pkg.universe_mut().new_var(pkg_id, "handler", sig);

    let calls = [
        io.call_of("append", append, 1),
        io.call_of("myAppend", my_append, 1),
        io.call_of("handler", handler, 1),
        io.read_call(io.file_ty, io.file_read),
        io.read_call(io.reader_ty, io.reader_read),
    ];

    let families: [(&str, ExprPattern, [bool; 5]); 5] = [
        ("any", callee_of(&mut m, |_, _| true), [true, true, true, true, true]),
        ("var", var_callee_of(&mut m, |_, _| true), [false, false, true, false, false]),
        (
            "func or method",
            func_or_method_callee_of(&mut m, |_, _| true),
            [false, true, false, true, true],
        ),
        ("method", method_callee_of(&mut m, |_, _| true), [false, false, false, true, true]),
        ("static", static_callee_of(&mut m, |_, _| true), [false, true, false, true, false]),
    ];
    for (name, pattern, expected) in &families {
        let actual: Vec<bool> = calls
            .iter()
            .map(|call| m.matches(&io.pkg, pattern, call))
            .collect();
        assert_eq!(actual, expected, "{name} callee family");
    }
}

#[rstest]
fn conversions_have_no_callee(mut io: Io) {
    let mut m = Matcher::new();
    let reader = io.object("Reader");
    let conversion = io.call_of("Reader", reader, 1);
    let pattern: ExprPattern = callee_of(&mut m, |_, _| true);
    assert!(!m.matches(&io.pkg, &pattern, &conversion));
}

#[rstest]
fn type_relations_consult_recorded_types(mut io: Io) {
    let mut m = Matcher::new();
    let (file_ty, reader_ty, int) = (io.file_ty, io.reader_ty, io.int);
    let float = io.pkg.universe().basic(BasicKind::Float64);
    let f = io.typed_ident("f", file_ty);
    let n = io.typed_ident("n", int);

    let implements: ExprPattern =
        type_implements(&mut m, io.pkg.universe(), reader_ty).expect("Reader is an interface");
    let identical: ExprPattern = type_identical(&mut m, int);
    let assignable: ExprPattern = type_assignable_to(&mut m, reader_ty);
    let convertible: ExprPattern = type_convertible_to(&mut m, float);

    assert!(m.matches(&io.pkg, &implements, &f));
    assert!(!m.matches(&io.pkg, &implements, &n));
    assert!(m.matches(&io.pkg, &identical, &n));
    assert!(!m.matches(&io.pkg, &identical, &f));
    assert!(m.matches(&io.pkg, &assignable, &f));
    assert!(m.matches(&io.pkg, &convertible, &n));
    assert!(!m.matches(&io.pkg, &convertible, &f));
}

#[rstest]
fn pointer_receivers_count_only_through_pointers(mut io: Io) {
    let mut m = Matcher::new();
    let (reader_ty, int) = (io.reader_ty, io.int);
    let pkg_id = io.pkg.id();
    let universe = io.pkg.universe_mut();
    let (_, buffer) = universe.new_named(pkg_id, "Buffer");
    let body = universe.new_struct(Vec::new(), Vec::new());
    universe.set_underlying(buffer, body);
    let byte = universe.basic(BasicKind::Uint8);
    let bytes = universe.slice(byte);
    let p = universe.new_var(pkg_id, "p", bytes);
    let count = universe.new_var(pkg_id, "n", int);
    universe.add_method(buffer, "Read", vec![p], vec![count], true);
    let b = io.typed_ident("b", buffer);

    let by_value: ExprPattern =
        type_implements(&mut m, io.pkg.universe(), reader_ty).expect("Reader is an interface");
    let by_pointer: ExprPattern =
        type_ptr_implements(&mut m, io.pkg.universe(), reader_ty).expect("Reader is an interface");
    assert!(!m.matches(&io.pkg, &by_value, &b));
    assert!(m.matches(&io.pkg, &by_pointer, &b));
}

#[rstest]
fn type_implements_requires_an_interface(io: Io) {
    let mut m = Matcher::new();
    let result: Result<ExprPattern, PatternError> =
        type_implements(&mut m, io.pkg.universe(), io.int);
    assert_eq!(result.err(), Some(PatternError::not_an_interface("int")));
}

#[rstest]
fn missing_expressions_have_no_type(io: Io) {
    let mut m = Matcher::new();
    let cond: ExprPattern = type_of(&mut m, |_, _| true);
    let pattern = Slot::node(Stmt::If(IfStmt {
        cond,
        ..IfStmt::default()
    }));
    assert!(!m.matches(&io.pkg, &pattern, &Stmt::If(IfStmt::default())));
}

#[rstest]
fn identifier_kind_predicates(mut io: Io) {
    let mut m = Matcher::new();
    let func: ExprPattern = ident_is_func(&mut m);
    let method: ExprPattern = ident_is_method(&mut m);
    let builtin: ExprPattern = is_builtin(&mut m);

    let my_append = io.object("myAppend");
    let append = io.object("append");
    let file_read = io.file_read;
    let mut named = |name: &str, obj| {
        let ident = build::ident(name);
        io.pkg.refer(&ident, obj);
        Expr::Ident(ident)
    };
    let to_func = named("myAppend", my_append);
    let to_method = named("Read", file_read);
    let to_builtin = named("append", append);

    assert!(m.matches(&io.pkg, &func, &to_func));
    assert!(!m.matches(&io.pkg, &func, &to_method));
    assert!(m.matches(&io.pkg, &method, &to_method));
    assert!(!m.matches(&io.pkg, &method, &to_func));
    assert!(m.matches(&io.pkg, &builtin, &to_builtin));
    assert!(!m.matches(&io.pkg, &builtin, &to_func));
}

#[rstest]
fn selector_pkg_of_resolves_the_qualifier(mut io: Io) {
    let mut m = Matcher::new();
    let pkg_id = io.pkg.id();
    let universe = io.pkg.universe_mut();
    let fmt = universe.new_package("fmt", "fmt");
    let fmt_name = universe.new_pkg_name(pkg_id, "fmt", fmt);
    let int = universe.basic(BasicKind::Int);
    let local = universe.new_var(pkg_id, "fmt", int);

    let mut qualified = |obj| {
        let selector = build::selector(build::ident("fmt"), "Println");
        if let Some(Expr::Ident(x)) = selector.x.as_node() {
            io.pkg.refer(x, obj);
        }
        Expr::Selector(selector)
    };
    let through_import = qualified(fmt_name);
    let through_var = qualified(local);

    let pattern: ExprPattern =
        Slot::node(Expr::Selector(selector_pkg_of(&mut m, move |_, pkg| pkg == fmt)));
    assert!(m.matches(&io.pkg, &pattern, &through_import));
    assert!(!m.matches(&io.pkg, &pattern, &through_var));
}

#[rstest]
fn selector_field_of_checks_struct_and_field(mut io: Io) {
    let mut m = Matcher::new();
    let pkg_id = io.pkg.id();
    let int = io.int;
    let universe = io.pkg.universe_mut();
    let x_field = universe.new_field(pkg_id, "X", int, false);
    let y_field = universe.new_field(pkg_id, "Y", int, false);
    let body = universe.new_struct(vec![x_field, y_field], Vec::new());
    let (_, point) = universe.new_named(pkg_id, "Point");
    universe.set_underlying(point, body);
    let point_ptr = universe.pointer(point);

    let select = |io: &mut Io, operand_ty, field| {
        let operand = io.typed_ident("p", operand_ty);
        let selector = build::selector(operand, "X");
        if let Some(sel) = selector.sel.as_node() {
            io.pkg.refer(sel, field);
        }
        Expr::Selector(selector)
    };
    let on_value = select(&mut io, point, x_field);
    let on_pointer = select(&mut io, point_ptr, x_field);
    let other_field = select(&mut io, point, y_field);

    let pattern = selector_field_of(
        &mut m,
        |_, fields| fields.fields.len() == 2,
        move |_, field| field == x_field,
    );
    assert!(m.matches(&io.pkg, &pattern, &on_value));
    assert!(!m.matches(&io.pkg, &pattern, &on_pointer));
    assert!(!m.matches(&io.pkg, &pattern, &other_field));
}

#[rstest]
#[case("init", false, true)]
#[case("main", false, false)]
#[case("init", true, false)]
fn init_func_matches_niladic_init(
    mut io: Io,
    #[case] name: &str,
    #[case] with_param: bool,
    #[case] expected: bool,
) {
    let mut m = Matcher::new();
    let pattern = init_func(&mut m);
    let pkg_id = io.pkg.id();
    let int = io.int;
    let universe = io.pkg.universe_mut();
    let params = if with_param {
        vec![universe.new_var(pkg_id, "x", int)]
    } else {
        Vec::new()
    };
    let sig = universe.new_signature(None, params, Vec::new(), false);
    let obj = universe.new_func(pkg_id, name, sig);
    let ident = build::ident(name);
    io.pkg.define(&ident, obj);
    let decl = build::func_decl(ident, build::func_type(Vec::new(), Vec::new()), Vec::new());
    assert_eq!(m.matches(&io.pkg, &pattern, &decl), expected);
}

#[rstest]
fn func_decl_of_sees_the_declared_object(mut io: Io) {
    let mut m = Matcher::new();
    let my_append = io.object("myAppend");
    let pattern = func_decl_of(&mut m, move |_, obj| obj == my_append);
    let ident = build::ident("myAppend");
    io.pkg.define(&ident, my_append);
    let decl = build::func_decl(ident, build::func_type(Vec::new(), Vec::new()), Vec::new());
    let unresolved = build::func_decl(
        build::ident("myAppend"),
        build::func_type(Vec::new(), Vec::new()),
        Vec::new(),
    );
    assert!(m.matches(&io.pkg, &pattern, &decl));
    assert!(!m.matches(&io.pkg, &pattern, &unresolved));
}

#[rstest]
fn scan_callbacks_can_record_type_information(mut io: Io) {
    let mut m = Matcher::new();
    let int = io.int;
    let typed = io.typed_ident("n", int);
    let replacement = build::ident_expr("m");
    let replacement_id = replacement.id();
    let call = Expr::Call(build::call(build::ident("f"), vec![typed]));

    let n: ExprPattern = Slot::node(build::ident_expr("n"));
    let mut copied = 0;
    m.scan(&io.pkg, &n, &call, |node, ctx| {
        if let Some(id) = node.id() {
            ctx.copy_type_info(id, replacement_id);
            copied += 1;
        }
    });
    assert_eq!(copied, 1);
    let recorded = io.pkg.type_and_value(replacement_id);
    assert_eq!(recorded, Some(TypeAndValue::new(Mode::Variable, int)));
    assert_eq!(io.pkg.type_of((&replacement).into()), Some(int));
}
