//! Call target predicates.
//!
//! A call resolves to at most one callee: a builtin, a function, a method
//! (concrete or interface) or a variable holding a function value.
//! Conversions such as `T(x)` have no callee and match none of these.

use gomatch_types::{Object, ObjectId, ObjectKind, PackageId, TypeId, Universe};
use tracing::debug;

use super::SEMANTIC_TARGET;
use crate::error::PatternError;
use crate::matcher::{MatchContext, Matcher};
use crate::pattern::Syntax;

/// How a function object receives its receiver.
enum Receiver {
    None,
    Concrete,
    Interface,
}

fn receiver(universe: &Universe, func: ObjectId) -> Option<Receiver> {
    let object = universe.object(func).filter(|object| object.is_func())?;
    let sig = universe.signature(object.ty())?;
    let Some(recv) = sig.recv else {
        return Some(Receiver::None);
    };
    let recv_ty = universe.object(recv)?.ty();
    if universe.is_interface(recv_ty) {
        Some(Receiver::Interface)
    } else {
        Some(Receiver::Concrete)
    }
}

/// Identity of a function or method for exact callee matching: two
/// objects are the same callee when name, package and signature agree.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FuncKey {
    name: String,
    pkg: Option<PackageId>,
    ty: TypeId,
}

impl FuncKey {
    fn of(object: &Object) -> Self {
        Self {
            name: object.name().to_owned(),
            pkg: object.pkg(),
            ty: object.ty(),
        }
    }

    fn matches(&self, universe: &Universe, obj: ObjectId) -> bool {
        universe.object(obj).is_some_and(|object| {
            object.name() == self.name && object.pkg() == self.pkg && object.ty() == self.ty
        })
    }
}

/// Matches a call whose callee satisfies `predicate`.
///
/// The pattern fills call positions: expression slots and the calls of
/// `go` and `defer` statements.
pub fn callee_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, ObjectId) -> bool + 'static,
) -> P {
    m.pattern(move |node, ctx| ctx.callee(node).is_some_and(|obj| predicate(ctx, obj)))
}

/// Matches a call of a builtin function satisfying `predicate`.
pub fn builtin_callee_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, ObjectId) -> bool + 'static,
) -> P {
    callee_of(m, move |ctx, obj| {
        let is_builtin = ctx
            .oracle()
            .universe()
            .object(obj)
            .is_some_and(Object::is_builtin);
        is_builtin && predicate(ctx, obj)
    })
}

/// Matches a call of the builtin `name`.
///
/// # Errors
///
/// Returns [`PatternError::UnknownBuiltin`] when `name` is not a builtin
/// function in `universe`.
pub fn builtin_callee<P: Syntax>(
    m: &mut Matcher,
    universe: &Universe,
    name: &str,
) -> Result<P, PatternError> {
    let known = universe
        .lookup(name)
        .and_then(|obj| universe.object(obj))
        .is_some_and(Object::is_builtin);
    if !known {
        debug!(target: SEMANTIC_TARGET, name, "unknown builtin");
        return Err(PatternError::unknown_builtin(name));
    }
    let expected = name.to_owned();
    Ok(builtin_callee_of(m, move |ctx, obj| {
        ctx.oracle()
            .universe()
            .object(obj)
            .is_some_and(|object| object.name() == expected)
    }))
}

/// Matches a call of a function value held by a variable or field.
pub fn var_callee_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, ObjectId) -> bool + 'static,
) -> P {
    callee_of(m, move |ctx, obj| {
        let is_var = ctx
            .oracle()
            .universe()
            .object(obj)
            .is_some_and(|object| {
                matches!(object.kind(), ObjectKind::Var | ObjectKind::Field { .. })
            });
        is_var && predicate(ctx, obj)
    })
}

/// Matches a call of a declared function or method, excluding builtins
/// and function values.
pub fn func_or_method_callee_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, ObjectId) -> bool + 'static,
) -> P {
    callee_of(m, move |ctx, obj| {
        receiver(ctx.oracle().universe(), obj).is_some() && predicate(ctx, obj)
    })
}

/// Matches a call of a function without a receiver.
pub fn func_callee_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, ObjectId) -> bool + 'static,
) -> P {
    callee_of(m, move |ctx, obj| {
        matches!(receiver(ctx.oracle().universe(), obj), Some(Receiver::None))
            && predicate(ctx, obj)
    })
}

/// Matches a call of exactly the function `func`.
///
/// A local function of the same name but another package or signature
/// does not match.
///
/// # Errors
///
/// Returns [`PatternError::NotAFunction`] when `func` is not a function
/// without a receiver in `universe`.
pub fn func_callee<P: Syntax>(
    m: &mut Matcher,
    universe: &Universe,
    func: ObjectId,
) -> Result<P, PatternError> {
    let function = universe
        .object(func)
        .filter(|_| matches!(receiver(universe, func), Some(Receiver::None)));
    let Some(object) = function else {
        let name = display_name(universe, func);
        debug!(target: SEMANTIC_TARGET, name = %name, "expected a function");
        return Err(PatternError::not_a_function(name));
    };
    let key = FuncKey::of(object);
    Ok(func_callee_of(m, move |ctx, obj| {
        key.matches(ctx.oracle().universe(), obj)
    }))
}

/// Matches a call of a method, concrete or interface.
pub fn method_callee_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, ObjectId) -> bool + 'static,
) -> P {
    callee_of(m, move |ctx, obj| {
        matches!(
            receiver(ctx.oracle().universe(), obj),
            Some(Receiver::Concrete | Receiver::Interface)
        ) && predicate(ctx, obj)
    })
}

/// Matches a call of the method `method` of the type named by
/// `type_name`.
///
/// `addressable` states whether the receiver expression is addressable,
/// which makes methods with pointer receivers reachable from a value.
///
/// # Errors
///
/// Returns [`PatternError::NotATypeName`] when `type_name` does not name a
/// type, and [`PatternError::MethodNotFound`] or
/// [`PatternError::NotAFunction`] when the type has no such method.
pub fn method_callee<P: Syntax>(
    m: &mut Matcher,
    universe: &Universe,
    type_name: ObjectId,
    method: &str,
    addressable: bool,
) -> Result<P, PatternError> {
    let key = resolve_method(universe, type_name, method, addressable)?;
    Ok(method_callee_of(m, move |ctx, obj| {
        key.matches(ctx.oracle().universe(), obj)
    }))
}

/// Matches a statically dispatched call: a function, or a method whose
/// receiver is not an interface.
pub fn static_callee_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, ObjectId) -> bool + 'static,
) -> P {
    m.pattern(move |node, ctx| {
        ctx.static_callee(node)
            .is_some_and(|obj| predicate(ctx, obj))
    })
}

/// Matches a dynamically dispatched call of an interface method.
pub fn iface_callee_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, ObjectId) -> bool + 'static,
) -> P {
    method_callee_of(m, move |ctx, obj| {
        matches!(
            receiver(ctx.oracle().universe(), obj),
            Some(Receiver::Interface)
        ) && predicate(ctx, obj)
    })
}

/// Matches a call of the method `method` through the interface named by
/// `iface`.
///
/// Calls of a concrete method that merely satisfies the interface do not
/// match; combine [`static_callee_of`] with a type relation for those.
///
/// # Errors
///
/// Returns [`PatternError::NotATypeName`] or
/// [`PatternError::NotAnInterface`] when `iface` does not name an
/// interface, and [`PatternError::MethodNotFound`] when the interface has
/// no such method.
pub fn iface_callee<P: Syntax>(
    m: &mut Matcher,
    universe: &Universe,
    iface: ObjectId,
    method: &str,
) -> Result<P, PatternError> {
    let ty = type_of_name(universe, iface)?;
    if !universe.is_interface(ty) {
        let name = universe.type_name(ty);
        debug!(target: SEMANTIC_TARGET, ty = %name, "expected an interface type");
        return Err(PatternError::not_an_interface(name));
    }
    let key = resolve_method(universe, iface, method, false)?;
    Ok(iface_callee_of(m, move |ctx, obj| {
        key.matches(ctx.oracle().universe(), obj)
    }))
}

fn display_name(universe: &Universe, obj: ObjectId) -> String {
    universe
        .object(obj)
        .map_or_else(|| obj.to_string(), |object| object.name().to_owned())
}

fn type_of_name(universe: &Universe, type_name: ObjectId) -> Result<TypeId, PatternError> {
    match universe.object(type_name) {
        Some(object) if object.is_type_name() => Ok(object.ty()),
        _ => {
            let name = display_name(universe, type_name);
            debug!(target: SEMANTIC_TARGET, name = %name, "expected a type name");
            Err(PatternError::not_a_type_name(name))
        }
    }
}

fn resolve_method(
    universe: &Universe,
    type_name: ObjectId,
    method: &str,
    addressable: bool,
) -> Result<FuncKey, PatternError> {
    let ty = type_of_name(universe, type_name)?;
    let Some(found) = universe.lookup_field_or_method(ty, addressable, method) else {
        let name = universe.type_name(ty);
        debug!(target: SEMANTIC_TARGET, ty = %name, method, "method not found");
        return Err(PatternError::method_not_found(name, method));
    };
    match universe.object(found.obj) {
        Some(object) if object.is_func() => Ok(FuncKey::of(object)),
        _ => {
            debug!(target: SEMANTIC_TARGET, method, "selected member is not a method");
            Err(PatternError::not_a_function(method))
        }
    }
}
