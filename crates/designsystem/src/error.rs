//! Error types raised by the token store and exporters.

use thiserror::Error;

/// Error returned by a strict-mode store mutation.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// No token with the given name exists in the category.
    #[error("no token named '{0}'")]
    NotFound(String),
    /// The target name is already used in the category.
    #[error("a token named '{0}' already exists")]
    AlreadyExists(String),
    /// Token names cannot be empty.
    #[error("token name cannot be empty")]
    EmptyName,
    /// The default theme cannot be removed or renamed.
    #[error("theme '{0}' is protected")]
    ProtectedTheme(String),
    /// The confirmation gate declined a destructive operation.
    #[error("deletion of '{0}' was cancelled")]
    Cancelled(String),
    /// A color value is not a `#RRGGBB` hex string.
    #[error("'{0}' is not a #RRGGBB color")]
    InvalidColor(String),
    /// A field value falls outside its accepted range.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// Field that was rejected.
        field: &'static str,
        /// Human readable explanation.
        reason: String,
    },
}

/// Error raised while rendering an export document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Wraps JSON serialization issues.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
