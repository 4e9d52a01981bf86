//! Tests for source rendering.

use crate::{
    CallExpr, Expr, Hole, Ident, LitKind, Seq, Slot, Token, build, show_node, Node,
};

#[test]
fn renders_expressions() {
    let expr = build::binary(
        build::call(build::selector(build::ident("r"), "Read"), vec![build::ident_expr("buf")]),
        Token::Neq,
        build::ident_expr("nil"),
    );
    assert_eq!(expr.to_string(), "r.Read(buf) != nil");
}

#[test]
fn renders_spread_calls() {
    let call = build::call_spread(
        build::ident("append"),
        vec![build::ident_expr("xs"), build::ident_expr("ys")],
    );
    assert_eq!(call.to_string(), "append(xs, ys...)");
}

#[test]
fn renders_pattern_holes_and_wildcards() {
    let call = CallExpr {
        fun: Slot::node(Expr::Ident(Ident::named("append"))),
        args: Seq::Rest(vec![Slot::Hole(Hole::new(1, 3))], Hole::new(1, 4)),
        ..CallExpr::default()
    };
    assert_eq!(call.to_string(), "append($3, $4...)");

    let any_args = CallExpr {
        fun: Slot::Hole(Hole::new(1, 0)),
        ..CallExpr::default()
    };
    assert_eq!(any_args.to_string(), "$0(...)");
}

#[test]
fn renders_functions() {
    let decl = build::func_decl(
        build::ident("add"),
        build::func_type(
            vec![build::field(&["a", "b"], build::ident("int"))],
            vec![build::field(&[], build::ident("int"))],
        ),
        vec![build::ret(vec![build::binary(
            build::ident("a"),
            Token::Add,
            build::ident("b"),
        )])],
    );
    assert_eq!(
        decl.to_string(),
        "func add(a, b int) int {\n\treturn a + b\n}"
    );
}

#[test]
fn renders_lists_and_nil() {
    let lit = build::lit(LitKind::String, "\"x\"");
    let exprs = Seq::from(vec![Expr::BasicLit(lit)]);
    assert_eq!(show_node(Node::from(&exprs)), "[\"x\"]");
    assert_eq!(show_node(Node::Nil), "nil");
}
