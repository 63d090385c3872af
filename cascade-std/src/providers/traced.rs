//! Tracing wrapper for value providers.

use cascade_core::{
    BoxError, UnvalidatedValueProvider, ValueProvider, ValueProviderResult,
    get_value_from_provider,
};

/// A provider wrapper that instruments every query with a `tracing` span.
///
/// The wrapper keeps the capabilities of the provider it wraps: it exposes
/// [`UnvalidatedValueProvider`] exactly when the inner provider does. Without
/// the `tracing` feature it is a plain pass-through.
pub struct TracingProvider<P> {
    inner: P,
    name: &'static str,
}

impl<P> TracingProvider<P> {
    /// Create a new `TracingProvider` wrapper around a provider.
    pub const fn new(inner: P, name: &'static str) -> Self {
        Self { inner, name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<P: Clone> Clone for TracingProvider<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<P: ValueProvider> ValueProvider for TracingProvider<P> {
    fn contains_prefix(&self, prefix: &str) -> Result<bool, BoxError> {
        #[cfg(feature = "tracing")]
        let _guard = tracing::debug_span!("contains_prefix", provider = %self.name, prefix).entered();

        let found = self.inner.contains_prefix(prefix);

        #[cfg(feature = "tracing")]
        {
            match &found {
                Ok(found) => tracing::trace!(found = *found, "Prefix query answered"),
                Err(err) => tracing::warn!(error = %err, "Prefix query failed"),
            }
        }
        found
    }

    fn get_value(&self, key: &str) -> Result<Option<ValueProviderResult>, BoxError> {
        #[cfg(feature = "tracing")]
        let _guard = tracing::debug_span!("get_value", provider = %self.name, key).entered();

        let result = self.inner.get_value(key);
        #[cfg(feature = "tracing")]
        trace_lookup(&result);
        result
    }

    fn as_unvalidated(&self) -> Option<&dyn UnvalidatedValueProvider> {
        self.inner
            .as_unvalidated()
            .map(|_| self as &dyn UnvalidatedValueProvider)
    }
}

impl<P: ValueProvider> UnvalidatedValueProvider for TracingProvider<P> {
    fn get_value_with(
        &self,
        key: &str,
        skip_validation: bool,
    ) -> Result<Option<ValueProviderResult>, BoxError> {
        #[cfg(feature = "tracing")]
        let _guard = tracing::debug_span!(
            "get_value",
            provider = %self.name,
            key,
            skip_validation
        )
        .entered();

        let result = get_value_from_provider(&self.inner, key, skip_validation);
        #[cfg(feature = "tracing")]
        trace_lookup(&result);
        result
    }
}

#[cfg(feature = "tracing")]
fn trace_lookup(result: &Result<Option<ValueProviderResult>, BoxError>) {
    match result {
        Ok(Some(found)) => tracing::trace!(value = %found.attempted_value(), "Value found"),
        Ok(None) => tracing::trace!("No value"),
        Err(err) => tracing::warn!(error = %err, "Lookup failed"),
    }
}
