//! Error types for pattern construction.
//!
//! Matching itself never fails: a structural mismatch or a missing semantic
//! fact is simply `false`. The errors here surface when a pattern refers to
//! something that cannot exist, such as a builtin that is not predeclared or
//! a method the named type does not have. They are returned from the call
//! that builds the offending pattern.

use thiserror::Error;

/// Errors raised while building a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PatternError {
    /// The universe has no builtin function with this name.
    #[error("unknown builtin: {name}")]
    UnknownBuiltin {
        /// The requested builtin name.
        name: String,
    },

    /// The object is not a function or method.
    #[error("{name} is not a function")]
    NotAFunction {
        /// Name of the offending object.
        name: String,
    },

    /// The type is not an interface.
    #[error("{name} is not an interface type")]
    NotAnInterface {
        /// Name of the offending type.
        name: String,
    },

    /// The object does not name a type.
    #[error("{name} is not a type name")]
    NotATypeName {
        /// Name of the offending object.
        name: String,
    },

    /// The type has no method with this name.
    #[error("type {type_name} has no method {method}")]
    MethodNotFound {
        /// Name of the receiver type.
        type_name: String,
        /// The requested method.
        method: String,
    },

    /// An identifier name pattern did not compile.
    #[error("invalid identifier pattern {pattern:?}: {message}")]
    InvalidRegex {
        /// The pattern source.
        pattern: String,
        /// Description of the compilation failure.
        message: String,
    },
}

impl PatternError {
    /// Creates an unknown builtin error.
    #[must_use]
    pub fn unknown_builtin(name: impl Into<String>) -> Self {
        Self::UnknownBuiltin { name: name.into() }
    }

    /// Creates a not-a-function error.
    #[must_use]
    pub fn not_a_function(name: impl Into<String>) -> Self {
        Self::NotAFunction { name: name.into() }
    }

    /// Creates a not-an-interface error.
    #[must_use]
    pub fn not_an_interface(name: impl Into<String>) -> Self {
        Self::NotAnInterface { name: name.into() }
    }

    /// Creates a not-a-type-name error.
    #[must_use]
    pub fn not_a_type_name(name: impl Into<String>) -> Self {
        Self::NotATypeName { name: name.into() }
    }

    /// Creates a missing method error.
    #[must_use]
    pub fn method_not_found(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self::MethodNotFound {
            type_name: type_name.into(),
            method: method.into(),
        }
    }

    /// Creates an invalid identifier pattern error.
    #[must_use]
    pub fn invalid_regex(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRegex {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}
