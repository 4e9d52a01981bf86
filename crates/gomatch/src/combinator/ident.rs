//! Identifier predicates.

use gomatch_ast::Ident;
use gomatch_types::{ObjectId, ObjectKind, Signature, TypeId};
use regex::Regex;
use tracing::debug;

use super::COMBINATOR_TARGET;
use crate::error::PatternError;
use crate::matcher::{MatchContext, Matcher};
use crate::pattern::Syntax;

/// Matches an identifier satisfying `predicate`.
///
/// Identifiers match in both typed identifier positions and expression
/// positions.
pub fn ident_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, &Ident) -> bool + 'static,
) -> P {
    m.pattern(move |node, ctx| node.ident().is_some_and(|ident| predicate(ctx, ident)))
}

/// Matches an identifier spelled `name`.
pub fn ident_name_of<P: Syntax>(m: &mut Matcher, name: impl Into<String>) -> P {
    let expected = name.into();
    ident_of(m, move |_, ident| ident.name == expected)
}

/// Matches an identifier whose name matches the regular expression
/// `pattern`.
///
/// # Errors
///
/// Returns [`PatternError::InvalidRegex`] when `pattern` does not compile.
pub fn ident_name_matches<P: Syntax>(m: &mut Matcher, pattern: &str) -> Result<P, PatternError> {
    let regex = Regex::new(pattern).map_err(|err| {
        debug!(target: COMBINATOR_TARGET, pattern, error = %err, "rejected identifier regex");
        PatternError::invalid_regex(pattern, err.to_string())
    })?;
    Ok(ident_of(m, move |_, ident| regex.is_match(&ident.name)))
}

/// Matches an identifier that declares or refers to an object satisfying
/// `predicate`. Unresolved identifiers never match.
pub fn ident_object_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, ObjectId) -> bool + 'static,
) -> P {
    ident_of(m, move |ctx, ident| {
        ctx.oracle()
            .object_of(ident)
            .is_some_and(|obj| predicate(ctx, obj))
    })
}

/// Matches an identifier whose object's type satisfies `predicate`.
pub fn ident_type_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, TypeId) -> bool + 'static,
) -> P {
    ident_object_of(m, move |ctx, obj| {
        let universe = ctx.oracle().universe();
        universe
            .object(obj)
            .is_some_and(|object| predicate(ctx, object.ty()))
    })
}

/// Matches an identifier of function type whose signature satisfies
/// `predicate`.
pub fn ident_sig_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, &Signature) -> bool + 'static,
) -> P {
    ident_type_of(m, move |ctx, ty| {
        let universe = ctx.oracle().universe();
        universe
            .signature(ty)
            .is_some_and(|sig| predicate(ctx, sig))
    })
}

/// Matches an identifier naming a function without a receiver.
pub fn ident_is_func<P: Syntax>(m: &mut Matcher) -> P {
    ident_sig_of(m, |_, sig| sig.recv.is_none())
}

/// Matches an identifier naming a method.
pub fn ident_is_method<P: Syntax>(m: &mut Matcher) -> P {
    ident_sig_of(m, |_, sig| sig.recv.is_some())
}

/// Matches an identifier referring to a predeclared builtin function.
pub fn is_builtin<P: Syntax>(m: &mut Matcher) -> P {
    ident_object_of(m, |ctx, obj| {
        ctx.oracle()
            .universe()
            .object(obj)
            .is_some_and(|object| matches!(object.kind(), ObjectKind::Builtin))
    })
}
