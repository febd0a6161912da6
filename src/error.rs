//! Error handling module for calctui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

#![allow(dead_code)] // Error variants and helpers are available for future use

use thiserror::Error;

/// Main error type for calctui
#[derive(Error, Debug)]
pub enum CalcError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Division (or modulo) with a zero divisor. The engine has already
    /// reset itself when this is returned; the caller only renders the
    /// notification.
    #[error("Cannot divide by zero!")]
    DivideByZero,

    /// Storage errors (history/preferences files)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for calctui operations
pub type Result<T> = std::result::Result<T, CalcError>;

// Convenient error constructors
impl CalcError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}
