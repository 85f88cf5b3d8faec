/*!
# Unified Error Type

This module provides the unified error enum used across the crate, together
with a `Result` alias for fallible operations.
*/

use std::error::Error;
use std::fmt;

/// Unified error type for all glod operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlodError {
    /// The input graph violates the simple-graph contract (self loop,
    /// non-positive weight, parallel edge, duplicate label, ...)
    InvalidGraph(String),

    /// Invalid argument or parameter
    InvalidArgument(String),

    /// Serialization error while producing a report payload
    Serialization(String),
}

impl GlodError {
    /// Creates an invalid graph error.
    pub fn invalid_graph(message: impl Into<String>) -> Self {
        GlodError::InvalidGraph(message.into())
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        GlodError::InvalidArgument(message.into())
    }

    /// Creates a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        GlodError::Serialization(message.into())
    }
}

impl fmt::Display for GlodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlodError::InvalidGraph(msg) => write!(f, "InvalidGraph: {}", msg),
            GlodError::InvalidArgument(msg) => write!(f, "InvalidArgument: {}", msg),
            GlodError::Serialization(msg) => write!(f, "Serialization: {}", msg),
        }
    }
}

impl Error for GlodError {}

/// Convenient Result alias using `GlodError`.
pub type Result<T> = std::result::Result<T, GlodError>;
