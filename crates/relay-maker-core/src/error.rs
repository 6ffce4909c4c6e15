//! Unified error handling for the bundle maker core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MakerError {
    /// Invalid or missing input.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A pipeline step failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl MakerError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or invalid options.
    Configuration,
    /// The target already exists.
    Conflict,
    /// An external tool failed or could not start.
    External,
    Internal,
}

/// Convenient result type alias.
pub type MakerResult<T> = Result<T, MakerError>;
