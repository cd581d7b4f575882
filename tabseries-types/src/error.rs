use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tabseries workspace.
///
/// Table operations are pure and deterministic, so every failure is a
/// validation failure: either the table itself is unusable for the requested
/// operation, or a scalar argument is out of range.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TabError {
    /// Malformed or missing required input (empty table, absent column, etc.).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid scalar argument (e.g. a zero window size).
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl TabError {
    /// Helper: build an `InvalidInput` error from a description of the problem.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Helper: build an `InvalidArg` error from a description of the problem.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// True when the error was caused by the table contents rather than an argument.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
