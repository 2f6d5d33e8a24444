// File: src/error.rs
// Purpose: Errors raised while constructing rules

use thiserror::Error;

/// Malformed rule construction.
///
/// Invalid field values are never errors; they show up as messages from
/// [`validate`](crate::validate). These variants only cover rules that could
/// not be built in the first place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    #[error("unknown predicate '{0}'")]
    UnknownPredicate(String),

    #[error("predicate '{0}' requires a parameter")]
    MissingParameter(&'static str),

    #[error("invalid parameter '{param}' for predicate '{predicate}'")]
    InvalidParameter {
        predicate: &'static str,
        param: String,
    },

    #[error("predicate '{predicate}' takes no parameter, got '{param}'")]
    UnexpectedParameter {
        predicate: &'static str,
        param: String,
    },
}
