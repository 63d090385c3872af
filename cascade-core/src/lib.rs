//! # cascade-core
//!
//! Core traits for the Cascade value provider aggregator.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! crates that only implement providers and don't need the collection types
//! from `cascade-std`.
//!
//! # Building Blocks
//!
//! - [`ValueProvider`] - a lookup source answering prefix and key queries
//! - [`UnvalidatedValueProvider`] - the optional skip-validation capability
//! - [`get_value_from_provider`] - the single point where that capability is
//!   inspected
//! - [`ValueProviderResult`] - the opaque value a successful lookup yields
//!
//! # Error Types
//!
//! - [`CascadeError`] - Top-level error type
//! - [`CollectionError`] - Collection mutation errors
//! - [`BoxError`] - Errors raised by providers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod provider;
mod result;

// Re-exports
pub use error::{BoxError, CascadeError, CollectionError};
pub use provider::{
    SharedProvider, UnvalidatedValueProvider, ValueProvider, get_value_from_provider,
};
pub use result::ValueProviderResult;
