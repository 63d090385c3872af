//! # Value Providers
//!
//! A value provider is a pluggable lookup source. It answers two questions:
//! does any key start with a given prefix, and what value is stored under a
//! given key.
//!
//! # Capabilities
//!
//! Every provider implements [`ValueProvider`]. Providers that distinguish
//! validated from unvalidated lookups additionally implement
//! [`UnvalidatedValueProvider`] and advertise it by overriding
//! [`ValueProvider::as_unvalidated`].
//!
//! Callers never branch on the capability themselves. They go through
//! [`get_value_from_provider`], which routes the `skip_validation` flag to
//! providers that understand it and drops it for those that don't.

use crate::{error::BoxError, result::ValueProviderResult};
use std::sync::Arc;

/// A shared, type-erased value provider.
pub type SharedProvider = Arc<dyn ValueProvider>;

/// A lookup source that resolves keys to values.
///
/// A provider returns `Ok(None)` when it has nothing for a key. `Err` is
/// reserved for failures of the source itself and is propagated unchanged by
/// every aggregate that queries it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `ValueProvider`",
    label = "missing `ValueProvider` implementation",
    note = "Value providers must implement `contains_prefix` and `get_value`."
)]
pub trait ValueProvider: Send + Sync + 'static {
    /// Whether any key held by this provider begins with `prefix`.
    fn contains_prefix(&self, prefix: &str) -> Result<bool, BoxError>;

    /// Look up the value stored under `key`.
    fn get_value(&self, key: &str) -> Result<Option<ValueProviderResult>, BoxError>;

    /// Expose the skip-validation capability, if this provider has one.
    ///
    /// Providers implementing [`UnvalidatedValueProvider`] should return
    /// `Some(self)`. The default reports a validation-agnostic provider.
    fn as_unvalidated(&self) -> Option<&dyn UnvalidatedValueProvider> {
        None
    }
}

/// A value provider that can bypass request validation on lookup.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not support unvalidated lookups",
    label = "missing `UnvalidatedValueProvider` implementation",
    note = "Implement `get_value_with` and return `Some(self)` from `as_unvalidated`."
)]
pub trait UnvalidatedValueProvider: ValueProvider {
    /// Look up `key`, skipping validation of the found value when asked to.
    fn get_value_with(
        &self,
        key: &str,
        skip_validation: bool,
    ) -> Result<Option<ValueProviderResult>, BoxError>;
}

/// Look up `key` in a single provider, honoring its capabilities.
///
/// Providers exposing [`UnvalidatedValueProvider`] receive `skip_validation`
/// unchanged. All other providers are treated as validation-agnostic: they
/// get a plain [`ValueProvider::get_value`] call whatever the flag says.
pub fn get_value_from_provider<P>(
    provider: &P,
    key: &str,
    skip_validation: bool,
) -> Result<Option<ValueProviderResult>, BoxError>
where
    P: ValueProvider + ?Sized,
{
    match provider.as_unvalidated() {
        Some(unvalidated) => unvalidated.get_value_with(key, skip_validation),
        None => provider.get_value(key),
    }
}

// Allow shared and boxed providers to be used where a provider is expected.
impl<P: ValueProvider + ?Sized> ValueProvider for Arc<P> {
    fn contains_prefix(&self, prefix: &str) -> Result<bool, BoxError> {
        (**self).contains_prefix(prefix)
    }

    fn get_value(&self, key: &str) -> Result<Option<ValueProviderResult>, BoxError> {
        (**self).get_value(key)
    }

    fn as_unvalidated(&self) -> Option<&dyn UnvalidatedValueProvider> {
        (**self).as_unvalidated()
    }
}

impl<P: ValueProvider + ?Sized> ValueProvider for Box<P> {
    fn contains_prefix(&self, prefix: &str) -> Result<bool, BoxError> {
        (**self).contains_prefix(prefix)
    }

    fn get_value(&self, key: &str) -> Result<Option<ValueProviderResult>, BoxError> {
        (**self).get_value(key)
    }

    fn as_unvalidated(&self) -> Option<&dyn UnvalidatedValueProvider> {
        (**self).as_unvalidated()
    }
}
