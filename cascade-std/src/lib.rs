//! # cascade-std
//!
//! Standard implementations for the Cascade value provider aggregator.
//!
//! This crate provides:
//! - **Collection**: [`ValueProviderCollection`], [`CollectionBuilder`], [`providers!`] macro
//! - **Resolver**: ordered, short-circuiting prefix and value scans
//! - **Standard providers**: Dictionary, Validated, Tracing
//! - **Testing**: [`SpyProvider`](testing::SpyProvider)
//!
//! [`ValueProviderCollection`]: collection::ValueProviderCollection
//! [`CollectionBuilder`]: collection::CollectionBuilder

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use cascade_core;

// Modules
pub mod collection;
pub mod providers;
pub mod resolver;
pub mod testing;
