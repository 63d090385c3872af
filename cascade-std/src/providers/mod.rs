//! Standard provider implementations.
//!
//! - [`DictionaryValueProvider`]: in-memory keys with hierarchical prefix matching
//! - [`ValidatedProvider`]: runs a validator unless validation is skipped
//! - [`TracingProvider`]: instruments an inner provider with `tracing` spans

pub mod dictionary;
pub mod traced;
pub mod validated;

pub use dictionary::DictionaryValueProvider;
pub use traced::TracingProvider;
pub use validated::ValidatedProvider;
