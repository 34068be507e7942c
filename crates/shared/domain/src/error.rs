//! Domain-level errors.
//!
//! These errors represent business rule violations and failed logins.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors. The display text is the rule message itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A domain invariant was violated (invalid field, duplicate email)
    #[error("{0}")]
    BusinessRule(String),

    /// Unknown account or credential mismatch
    #[error("{0}")]
    Authentication(String),
}

impl DomainError {
    /// Create a business rule error
    pub fn business_rule(msg: impl Into<String>) -> Self {
        DomainError::BusinessRule(msg.into())
    }

    /// Create an authentication error
    pub fn authentication(msg: impl Into<String>) -> Self {
        DomainError::Authentication(msg.into())
    }

    /// The rule message carried by this error
    pub fn message(&self) -> &str {
        match self {
            DomainError::BusinessRule(msg) | DomainError::Authentication(msg) => msg,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
