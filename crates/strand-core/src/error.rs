//! Error types for strand.

use thiserror::Error;

/// Result type alias using strand's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for strand operations.
///
/// Every variant is request-scoped and recoverable. None of them is fatal to
/// the process.
#[derive(Error, Debug)]
pub enum Error {
    /// Content with the same trimmed value is already stored
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Record lookup or delete missed
    #[error("Not found: {0}")]
    NotFound(String),

    /// Natural-language query matched no interpreter rule
    #[error("Unparseable query: {0}")]
    Unparseable(String),

    /// Query was understood but no stored record satisfies it
    #[error("No match: {0}")]
    NoMatch(String),

    /// Invalid or missing input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Short machine-readable name of the variant, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Conflict(_) => "conflict",
            Error::NotFound(_) => "not_found",
            Error::Unparseable(_) => "unparseable",
            Error::NoMatch(_) => "no_match",
            Error::InvalidInput(_) => "invalid_input",
            Error::Internal(_) => "internal",
        }
    }
}
