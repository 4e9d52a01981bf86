//! Call target resolution.

use gomatch_ast::{CallExpr, Expr, Slot};

use crate::object::{ObjectId, ObjectKind};
use crate::oracle::Oracle;

/// Resolves the object a call expression invokes.
///
/// Parentheses and explicit instantiation (`f[int](x)`) are stripped first.
/// Conversions such as `T(x)` resolve to nothing.
pub fn callee<O: Oracle + ?Sized>(oracle: &O, call: &CallExpr) -> Option<ObjectId> {
    let fun = call.fun.as_node()?.unparen();
    let target = strip_instantiation(oracle, fun);
    let obj = match target {
        Expr::Ident(ident) => oracle.used_object(ident.id),
        Expr::Selector(selector) => oracle
            .selection(selector.id)
            .map(|selection| selection.obj)
            .or_else(|| {
                selector
                    .sel
                    .as_node()
                    .and_then(|sel| oracle.used_object(sel.id))
            }),
        _ => None,
    }?;
    let object = oracle.universe().object(obj)?;
    if object.is_type_name() {
        return None;
    }
    Some(obj)
}

/// Resolves the function or concrete method a call statically invokes.
///
/// Builtins, function-typed variables and interface methods resolve to
/// nothing.
pub fn static_callee<O: Oracle + ?Sized>(oracle: &O, call: &CallExpr) -> Option<ObjectId> {
    let obj = callee(oracle, call)?;
    let universe = oracle.universe();
    let object = universe.object(obj)?;
    if !matches!(object.kind(), ObjectKind::Func) {
        return None;
    }
    match universe.recv_type(obj) {
        Some(recv) if universe.is_interface(recv) => None,
        _ => Some(obj),
    }
}

fn strip_instantiation<'e, O: Oracle + ?Sized>(oracle: &O, fun: &'e Expr) -> &'e Expr {
    let operand = match fun {
        Expr::Index(index) => &index.x,
        Expr::IndexList(list) => &list.x,
        _ => return fun,
    };
    let Slot::Node(generic) = operand else {
        return fun;
    };
    let inner = generic.unparen();
    let resolved = match inner {
        Expr::Ident(ident) => oracle.used_object(ident.id),
        Expr::Selector(selector) => selector
            .sel
            .as_node()
            .and_then(|sel| oracle.used_object(sel.id)),
        _ => None,
    };
    let is_func = resolved
        .and_then(|obj| oracle.universe().object(obj))
        .is_some_and(crate::Object::is_func);
    if is_func { inner } else { fun }
}
