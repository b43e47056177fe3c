//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid user input to the discovery pipeline.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid template query: {message}")]
    Template { message: String },
}

/// Discovery type outside the supported set. Not an error for the run:
/// callers log it and finish without output.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("discovery type {0} not supported")]
pub struct UnsupportedDiscovery(pub String);

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
