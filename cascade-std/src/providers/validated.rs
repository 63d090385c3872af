//! Validating provider wrapper.

use cascade_core::{
    BoxError, UnvalidatedValueProvider, ValueProvider, ValueProviderResult,
    get_value_from_provider,
};

/// A provider that validates values found by an inner provider.
///
/// Plain lookups are always validated. Lookups made through
/// [`UnvalidatedValueProvider::get_value_with`] with `skip_validation` set
/// return the inner value untouched. The flag is also forwarded to the inner
/// provider when it supports it.
///
/// # Example
///
/// ```rust,ignore
/// let guarded = ValidatedProvider::new(form_values, |key, value| {
///     if value.attempted_value().contains('<') {
///         Err(format!("potentially dangerous value for '{key}'").into())
///     } else {
///         Ok(())
///     }
/// });
/// ```
pub struct ValidatedProvider<P, F> {
    inner: P,
    validator: F,
}

impl<P, F> ValidatedProvider<P, F> {
    /// Wrap `inner`, checking its values with `validator`.
    pub fn new(inner: P, validator: F) -> Self {
        Self { inner, validator }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P, F> ValueProvider for ValidatedProvider<P, F>
where
    P: ValueProvider,
    F: Fn(&str, &ValueProviderResult) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn contains_prefix(&self, prefix: &str) -> Result<bool, BoxError> {
        self.inner.contains_prefix(prefix)
    }

    fn get_value(&self, key: &str) -> Result<Option<ValueProviderResult>, BoxError> {
        self.get_value_with(key, false)
    }

    fn as_unvalidated(&self) -> Option<&dyn UnvalidatedValueProvider> {
        Some(self)
    }
}

impl<P, F> UnvalidatedValueProvider for ValidatedProvider<P, F>
where
    P: ValueProvider,
    F: Fn(&str, &ValueProviderResult) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn get_value_with(
        &self,
        key: &str,
        skip_validation: bool,
    ) -> Result<Option<ValueProviderResult>, BoxError> {
        let Some(result) = get_value_from_provider(&self.inner, key, skip_validation)? else {
            return Ok(None);
        };
        if !skip_validation {
            (self.validator)(key, &result)?;
        }
        Ok(Some(result))
    }
}
