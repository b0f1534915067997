//! Error types for the name-based token surface

use crate::tokens::TokenKind;
use thiserror::Error;

/// Errors raised when a token is addressed by name or given a dynamic value
///
/// The typed API (`SeedField`, `GlobalField`, `ComponentFamily` with a value
/// of the right kind) never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    #[error("unknown seed field: {0}")]
    UnknownSeedField(String),

    #[error("unknown global token field: {0}")]
    UnknownGlobalField(String),

    #[error("unknown component family: {0}")]
    UnknownFamily(String),

    #[error("component {family} has no field {field}")]
    UnknownComponentField { family: String, field: String },

    #[error("unknown theme mode: {0}")]
    UnknownThemeMode(String),

    #[error("{field} expects a {expected} value, got {found}")]
    KindMismatch {
        field: String,
        expected: TokenKind,
        found: TokenKind,
    },
}

/// Result type for token operations
pub type Result<T> = std::result::Result<T, TokenError>;
