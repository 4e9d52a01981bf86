//! Matcher configuration.

use serde::{Deserialize, Serialize};

/// Options that relax structural comparison.
///
/// # Defaults
///
/// Both options are off, so comparison is exact:
///
/// - `unparen_expr`: `false`
/// - `match_call_ellipsis`: `false`
///
/// The configuration deserializes from any serde format; missing keys take
/// their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    /// Strip redundant parentheses from both sides before comparing
    /// expressions.
    unparen_expr: bool,
    /// Also require calls to agree on spreading their last argument.
    match_call_ellipsis: bool,
}

impl MatcherConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub const fn new(unparen_expr: bool, match_call_ellipsis: bool) -> Self {
        Self {
            unparen_expr,
            match_call_ellipsis,
        }
    }

    /// Returns whether parentheses are stripped before comparing.
    #[must_use]
    pub const fn unparen_expr(&self) -> bool {
        self.unparen_expr
    }

    /// Returns whether `f(xs...)` and `f(xs)` are told apart.
    #[must_use]
    pub const fn match_call_ellipsis(&self) -> bool {
        self.match_call_ellipsis
    }

    /// Returns a copy with `unparen_expr` set.
    #[must_use]
    pub const fn with_unparen_expr(self, enabled: bool) -> Self {
        Self {
            unparen_expr: enabled,
            ..self
        }
    }

    /// Returns a copy with `match_call_ellipsis` set.
    #[must_use]
    pub const fn with_match_call_ellipsis(self, enabled: bool) -> Self {
        Self {
            match_call_ellipsis: enabled,
            ..self
        }
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self::new(false, false)
    }
}
