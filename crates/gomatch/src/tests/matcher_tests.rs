//! Structural comparison, sequence laws and traversal.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gomatch_ast::{
    ArrayType, AssignStmt, BinaryExpr, BlockStmt, BranchStmt, CallExpr, CaseClause,
    ChanType, CommClause, CompositeLit, DeclStmt, DeferStmt, Ellipsis, Expr, ExprStmt, ForStmt,
    FuncLit, FuncType, GoStmt, Ident, IfStmt, IncDecStmt, IndexExpr, IndexListExpr,
    InterfaceType, KeyValueExpr, LabeledStmt, LitKind, MapType, Node, ParenExpr, RangeStmt,
    ReturnStmt, SelectStmt, SelectorExpr, SendStmt, Seq, SliceExpr, Slot, StarExpr, Stmt,
    StructType, SwitchStmt, Token, TypeAssertExpr, TypeSwitchStmt, UnaryExpr, build,
};
use gomatch_types::Package;
use rstest::rstest;

use crate::{Bindings, ExprPattern, ExprsPattern, Matcher, MatcherConfig, StmtPattern};

fn package() -> Package {
    Package::new("example.com/p", "p")
}

fn call_pattern(args: ExprsPattern) -> ExprPattern {
    Slot::node(Expr::Call(CallExpr {
        args,
        ..CallExpr::default()
    }))
}

fn every_expr() -> Vec<Expr> {
    vec![
        Expr::Ident(Ident::default()),
        Expr::BasicLit(build::lit(LitKind::Int, "1")),
        Expr::CompositeLit(CompositeLit::default()),
        Expr::FuncLit(FuncLit::default()),
        Expr::Paren(ParenExpr::default()),
        Expr::Selector(SelectorExpr::default()),
        Expr::Index(IndexExpr::default()),
        Expr::IndexList(IndexListExpr::default()),
        Expr::Slice(SliceExpr::default()),
        Expr::TypeAssert(TypeAssertExpr::default()),
        Expr::Call(CallExpr::default()),
        Expr::Star(StarExpr::default()),
        Expr::Unary(UnaryExpr::default()),
        Expr::Binary(BinaryExpr::default()),
        Expr::KeyValue(KeyValueExpr::default()),
        Expr::Ellipsis(Ellipsis::default()),
        Expr::ArrayType(ArrayType::default()),
        Expr::StructType(StructType::default()),
        Expr::FuncType(FuncType::default()),
        Expr::InterfaceType(InterfaceType::default()),
        Expr::MapType(MapType::default()),
        Expr::ChanType(ChanType::default()),
    ]
}

fn every_stmt() -> Vec<Stmt> {
    vec![
        Stmt::Empty,
        Stmt::Decl(DeclStmt::default()),
        Stmt::Labeled(LabeledStmt::default()),
        Stmt::Expr(ExprStmt::default()),
        Stmt::Send(SendStmt::default()),
        Stmt::IncDec(IncDecStmt::default()),
        Stmt::Assign(AssignStmt::default()),
        Stmt::Go(GoStmt::default()),
        Stmt::Defer(DeferStmt::default()),
        Stmt::Return(ReturnStmt::default()),
        Stmt::Branch(BranchStmt::default()),
        Stmt::Block(BlockStmt::default()),
        Stmt::If(IfStmt::default()),
        Stmt::CaseClause(CaseClause::default()),
        Stmt::Switch(SwitchStmt::default()),
        Stmt::TypeSwitch(TypeSwitchStmt::default()),
        Stmt::CommClause(CommClause::default()),
        Stmt::Select(SelectStmt::default()),
        Stmt::For(ForStmt::default()),
        Stmt::Range(RangeStmt::default()),
    ]
}

#[test]
fn each_expression_variant_matches_only_itself() {
    let m = Matcher::new();
    let pkg = package();
    let exprs = every_expr();
    assert_eq!(exprs.len(), 22);
    for (i, pattern) in exprs.iter().enumerate() {
        let pattern: ExprPattern = Slot::node(pattern.clone());
        for (j, candidate) in exprs.iter().enumerate() {
            assert_eq!(
                m.matches(&pkg, &pattern, candidate),
                i == j,
                "pattern {i} against candidate {j}"
            );
        }
    }
}

#[test]
fn each_statement_variant_matches_only_itself() {
    let m = Matcher::new();
    let pkg = package();
    let stmts = every_stmt();
    assert_eq!(stmts.len(), 20);
    for (i, pattern) in stmts.iter().enumerate() {
        let pattern: StmtPattern = Slot::node(pattern.clone());
        for (j, candidate) in stmts.iter().enumerate() {
            assert_eq!(
                m.matches(&pkg, &pattern, candidate),
                i == j,
                "pattern {i} against candidate {j}"
            );
        }
    }
}

#[rstest]
#[case(LitKind::Int, "16", LitKind::Int, "0x10", true)]
#[case(LitKind::Int, "8", LitKind::Int, "0o10", true)]
#[case(LitKind::Int, "1_000", LitKind::Int, "1000", true)]
#[case(LitKind::Int, "1", LitKind::Int, "2", false)]
#[case(LitKind::Int, "1", LitKind::String, "\"1\"", false)]
#[case(LitKind::String, "\"a\"", LitKind::String, "`a`", true)]
#[case(LitKind::Int, "08", LitKind::Int, "8", false)]
fn literals_compare_by_value(
    #[case] pattern_kind: LitKind,
    #[case] pattern_text: &str,
    #[case] candidate_kind: LitKind,
    #[case] candidate_text: &str,
    #[case] expected: bool,
) {
    let m = Matcher::new();
    let pkg = package();
    let pattern: ExprPattern = Slot::node(Expr::BasicLit(build::lit(pattern_kind, pattern_text)));
    let candidate = Expr::BasicLit(build::lit(candidate_kind, candidate_text));
    assert_eq!(m.matches(&pkg, &pattern, &candidate), expected);
}

#[test]
fn identifiers_compare_by_name() {
    let m = Matcher::new();
    let pkg = package();
    let pattern: ExprPattern = Slot::node(build::ident_expr("x"));
    assert!(m.matches(&pkg, &pattern, &build::ident_expr("x")));
    assert!(!m.matches(&pkg, &pattern, &build::ident_expr("y")));
}

#[test]
fn nil_slot_matches_anything() {
    let m = Matcher::new();
    let pkg = package();
    let pattern: ExprPattern = Slot::Nil;
    assert!(m.matches(&pkg, &pattern, &build::ident_expr("x")));
    assert!(m.matches(&pkg, &pattern, Node::Nil));
}

#[rstest]
#[case(0, false)]
#[case(1, true)]
#[case(2, false)]
fn item_lists_require_exact_length(#[case] args: usize, #[case] expected: bool) {
    let mut m = Matcher::new();
    let pkg = package();
    let x = m.var("x");
    let pattern = call_pattern(Seq::of(vec![x]));
    let candidate = Expr::Call(build::call(
        build::ident("f"),
        (0..args).map(|i| build::ident_expr(format!("a{i}"))).collect(),
    ));
    assert_eq!(m.matches(&pkg, &pattern, &candidate), expected);
}

#[rstest]
#[case(0, None)]
#[case(1, Some(0))]
#[case(3, Some(2))]
fn rest_lists_pass_the_suffix_to_the_tail(#[case] args: usize, #[case] tail: Option<usize>) {
    let mut m = Matcher::new();
    let pkg = package();
    let head = m.var("first");
    let rest = m.rest_var(vec![head], "tail");
    let pattern = call_pattern(rest);
    let candidate = Expr::Call(build::call(
        build::ident("f"),
        (0..args).map(|i| build::ident_expr(format!("a{i}"))).collect(),
    ));
    let found = m.find_first(&pkg, &pattern, &candidate);
    let bound = found
        .as_ref()
        .and_then(|result| result.capture("tail"))
        .and_then(Node::len);
    assert_eq!(bound, tail);
    if tail.is_some() {
        let first = found.and_then(|result| result.capture("first"));
        assert_eq!(first.map(|node| node.to_string()), Some("a0".to_owned()));
    }
}

#[test]
fn any_list_matches_every_length() {
    let m = Matcher::new();
    let pkg = package();
    let pattern = call_pattern(Seq::Any);
    for args in 0..3 {
        let candidate = Expr::Call(build::call(
            build::ident("f"),
            (0..args).map(|i| build::ident_expr(format!("a{i}"))).collect(),
        ));
        assert!(m.matches(&pkg, &pattern, &candidate));
    }
}

#[test]
fn parentheses_are_significant_unless_stripped() {
    let pkg = package();
    let pattern: ExprPattern = Slot::node(build::ident_expr("x"));
    let candidate = build::paren(build::paren(build::ident_expr("x")));

    let exact = Matcher::new();
    assert!(!exact.matches(&pkg, &pattern, &candidate));

    let relaxed = Matcher::with_config(MatcherConfig::default().with_unparen_expr(true));
    assert!(relaxed.matches(&pkg, &pattern, &candidate));

    let wrapped: ExprPattern = Slot::node(build::paren(build::ident_expr("x")));
    assert!(relaxed.matches(&pkg, &wrapped, &build::ident_expr("x")));
}

#[rstest]
#[case(false, true)]
#[case(true, false)]
fn spread_calls_are_told_apart_on_request(#[case] strict: bool, #[case] expected: bool) {
    let pkg = package();
    let m = Matcher::with_config(MatcherConfig::default().with_match_call_ellipsis(strict));
    let pattern: ExprPattern = Slot::node(Expr::Call(build::call(
        build::ident("f"),
        vec![build::ident_expr("xs")],
    )));
    let spread = Expr::Call(build::call_spread(
        build::ident("f"),
        vec![build::ident_expr("xs")],
    ));
    assert_eq!(m.matches(&pkg, &pattern, &spread), expected);
}

#[test]
fn tokens_compare_literally() {
    let m = Matcher::new();
    let pkg = package();
    let pattern: ExprPattern = Slot::node(build::binary(
        build::ident_expr("a"),
        Token::Add,
        build::ident_expr("b"),
    ));
    let sum = build::binary(build::ident_expr("a"), Token::Add, build::ident_expr("b"));
    let difference = build::binary(build::ident_expr("a"), Token::Sub, build::ident_expr("b"));
    assert!(m.matches(&pkg, &pattern, &sum));
    assert!(!m.matches(&pkg, &pattern, &difference));
}

#[test]
fn scan_visits_children_before_parents() {
    let mut m = Matcher::new();
    let pkg = package();
    let any: ExprPattern = m.pattern(|_, _| true);
    let tree = Expr::Call(build::call(
        build::ident("f"),
        vec![Expr::Call(build::call(
            build::ident("g"),
            vec![build::ident_expr("x")],
        ))],
    ));
    let mut seen = Vec::new();
    m.scan(&pkg, &any, &tree, |node, _| seen.push(node.to_string()));
    assert_eq!(seen, ["f", "g", "x", "g(x)", "f(g(x))"]);
}

#[test]
fn scan_reports_the_ancestor_path() {
    let mut m = Matcher::new();
    let pkg = package();
    let target: ExprPattern = m.pattern(|node, _| node.ident().is_some_and(|id| id.name == "x"));
    let tree = Expr::Call(build::call(
        build::ident("f"),
        vec![Expr::Call(build::call(
            build::ident("g"),
            vec![build::ident_expr("x")],
        ))],
    ));
    let results = m.find_all(&pkg, &target, &tree);
    assert_eq!(results.len(), 1);
    let result = results.first().expect("one match");
    let stack: Vec<String> = result.stack().iter().map(ToString::to_string).collect();
    assert_eq!(stack, ["f(g(x))", "g(x)", "x"]);
    assert_eq!(result.names(), ["", "args", "args"]);
}

#[test]
fn any_match_stops_at_the_first_hit() {
    let mut m = Matcher::new();
    let pkg = package();
    let calls = Rc::new(Cell::new(0_usize));
    let counter = Rc::clone(&calls);
    let ident: ExprPattern = m.pattern(move |node, _| {
        counter.set(counter.get() + 1);
        node.ident().is_some()
    });
    let tree = Expr::Call(build::call(
        build::ident("f"),
        vec![build::ident_expr("a"), build::ident_expr("b")],
    ));
    assert!(m.any_match(&pkg, &ident, &tree));
    assert_eq!(calls.get(), 1);
}

#[test]
fn any_match_without_a_hit_visits_every_node() {
    let mut m = Matcher::new();
    let pkg = package();
    let calls = Rc::new(Cell::new(0_usize));
    let counter = Rc::clone(&calls);
    let never: ExprPattern = m.pattern(move |_, _| {
        counter.set(counter.get() + 1);
        false
    });
    let everything: ExprPattern = m.pattern(|_, _| true);
    let tree = Expr::Call(build::call(
        build::ident("f"),
        vec![
            build::ident_expr("a"),
            Expr::Call(build::call(build::ident("g"), vec![build::int("1")])),
        ],
    ));
    let node_count = m.find_all(&pkg, &everything, &tree).len();

    assert!(!m.any_match(&pkg, &never, &tree));
    assert!(node_count >= 6);
    assert_eq!(calls.get(), node_count);
}

#[test]
fn scan_until_reports_the_break() {
    let mut m = Matcher::new();
    let pkg = package();
    let any: ExprPattern = m.pattern(|_, _| true);
    let tree = Expr::Call(build::call(build::ident("f"), vec![build::ident_expr("a")]));
    let mut count = 0;
    let flow = m.scan_until(&pkg, &any, &tree, |_, _| {
        count += 1;
        std::ops::ControlFlow::Break(())
    });
    assert!(flow.is_break());
    assert_eq!(count, 1);
}

#[test]
fn contexts_are_fresh_per_visit() {
    let mut m = Matcher::new();
    let pkg = package();
    let leaked = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&leaked);
    let x: ExprPattern = m.var("x");
    let pattern: ExprPattern = m.pattern(move |node, ctx| {
        sink.borrow_mut().push(ctx.bindings().len());
        ctx.matches(&x, node)
    });
    let tree = Expr::Call(build::call(build::ident("f"), vec![build::ident_expr("a")]));
    let results = m.find_all(&pkg, &pattern, &tree);
    assert_eq!(results.len(), 3);
    assert!(leaked.borrow().iter().all(|&len| len == 0));
}

#[test]
fn repeated_variable_keeps_the_last_write() {
    let mut m = Matcher::new();
    let pkg = package();
    let fun = m.var("v");
    let arg = m.var("v");
    let pattern = Slot::node(Expr::Call(CallExpr {
        fun,
        args: Seq::of(vec![arg]),
        ..CallExpr::default()
    }));
    let candidate = Expr::Call(build::call(build::ident("f"), vec![build::ident_expr("x")]));
    let result = m.find_first(&pkg, &pattern, &candidate).expect("call matches");
    assert_eq!(result.capture("v").map(|node| node.to_string()), Some("x".to_owned()));
    assert_eq!(result.bindings().len(), 1);
}

#[test]
fn matching_twice_binds_the_same_node() {
    let mut m = Matcher::new();
    let pkg = package();
    let x = m.var("x");
    let pattern = call_pattern(Seq::of(vec![x]));
    let candidate = Expr::Call(build::call(build::ident("f"), vec![build::ident_expr("a")]));
    let first = m.find_first(&pkg, &pattern, &candidate).and_then(|r| r.capture("x"));
    let second = m.find_first(&pkg, &pattern, &candidate).and_then(|r| r.capture("x"));
    match (first, second) {
        (Some(a), Some(b)) => assert!(a.same(b)),
        other => panic!("expected two bindings, got {other:?}"),
    }
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "foreign matcher")]
fn foreign_holes_are_rejected() {
    let mut owner = Matcher::new();
    let other = Matcher::new();
    let pkg = package();
    let pattern: ExprPattern = owner.var("x");
    let _ = other.matches(&pkg, &pattern, &build::ident_expr("a"));
}

#[cfg(not(debug_assertions))]
#[test]
fn foreign_holes_never_match() {
    let mut owner = Matcher::new();
    let other = Matcher::new();
    let pkg = package();
    let pattern: ExprPattern = owner.var("x");
    assert!(!other.matches(&pkg, &pattern, &build::ident_expr("a")));
}

#[test]
fn predicate_of_resolves_only_own_holes() {
    let mut owner = Matcher::new();
    let other = Matcher::new();
    let pattern: ExprPattern = owner.var("x");
    assert!(owner.predicate_of(&pattern).is_some());
    assert!(other.predicate_of(&pattern).is_none());
    let concrete: ExprPattern = Slot::node(build::ident_expr("x"));
    assert!(owner.predicate_of(&concrete).is_none());
    assert_eq!(owner.predicate_count(), 1);
}

#[test]
fn typed_positions_see_through_expressions() {
    let mut m = Matcher::new();
    let pkg = package();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let call: Slot<CallExpr> = m.pattern(move |node, _| {
        sink.borrow_mut().push(node.to_string());
        true
    });
    let pattern: StmtPattern = Slot::node(Stmt::Defer(DeferStmt { call }));
    let stmt = Stmt::Defer(DeferStmt {
        call: Slot::node(build::call(build::ident("f"), Vec::new())),
    });
    assert!(m.matches(&pkg, &pattern, &stmt));
    assert_eq!(*seen.borrow(), ["f()"]);
}

#[rstest]
#[case("{}", MatcherConfig::new(false, false))]
#[case(r#"{"unparen_expr": true}"#, MatcherConfig::new(true, false))]
#[case(
    r#"{"unparen_expr": true, "match_call_ellipsis": true}"#,
    MatcherConfig::new(true, true)
)]
fn config_deserializes_with_defaults(#[case] json: &str, #[case] expected: MatcherConfig) {
    let config: MatcherConfig = serde_json::from_str(json).expect("valid config");
    assert_eq!(config, expected);
}

#[test]
fn config_rejects_unknown_fields() {
    let result = serde_json::from_str::<MatcherConfig>(r#"{"unparen": true}"#);
    assert!(result.is_err());
}

#[test]
fn binding_names_are_reported_sorted() {
    let mut bindings = Bindings::new();
    let tree = build::ident_expr("x");
    bindings.insert("zeta", Node::from(&tree));
    bindings.insert("alpha", Node::from(&tree));
    bindings.insert("mid", Node::from(&tree));
    assert_eq!(bindings.names(), ["alpha", "mid", "zeta"]);
    assert_eq!(bindings.iter().count(), 3);
}
