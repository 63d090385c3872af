//! Error types for Cascade.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CascadeError`] - Top-level error type for all Cascade operations
//! - [`CollectionError`] - Errors raised by mutating a provider collection
//!
//! Errors raised by providers themselves travel as [`BoxError`] and are never
//! wrapped by the lookup scans.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Cascade operations.
#[derive(Error, Debug)]
pub enum CascadeError {
    /// A provider collection rejected a mutation.
    #[error("collection error: {0}")]
    Collection(#[from] CollectionError),

    /// A value provider failed while being queried.
    #[error(transparent)]
    Provider(BoxError),
}

/// Errors that can occur while building or mutating a provider collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A required argument was absent.
    #[error("value cannot be null (parameter '{param}')")]
    NullArgument {
        /// Logical name of the rejected parameter (`"list"` or `"item"`).
        param: &'static str,
    },
}

impl CollectionError {
    pub const fn null_argument(param: &'static str) -> Self {
        Self::NullArgument { param }
    }

    /// The name of the parameter that caused the error.
    pub fn param_name(&self) -> &'static str {
        match self {
            Self::NullArgument { param } => param,
        }
    }
}

impl From<BoxError> for CascadeError {
    fn from(err: BoxError) -> Self {
        CascadeError::Provider(err)
    }
}
