//! Ordered lookup scans over a sequence of providers.
//!
//! Both scans query providers strictly in sequence order and return as soon as
//! the answer is known; providers after the deciding one are never touched.
//! A provider error aborts the scan and is returned unchanged.

use cascade_core::{BoxError, ValueProvider, ValueProviderResult, get_value_from_provider};

/// Whether any provider in `providers` contains `prefix`.
///
/// Returns `Ok(true)` at the first provider answering `true`. Returns
/// `Ok(false)` only after every provider has been asked.
pub fn contains_prefix<'a, I, P>(providers: I, prefix: &str) -> Result<bool, BoxError>
where
    I: IntoIterator<Item = &'a P>,
    P: ValueProvider + ?Sized + 'a,
{
    for (index, provider) in providers.into_iter().enumerate() {
        #[cfg(feature = "tracing")]
        tracing::trace!(index, prefix, "Querying provider for prefix");

        if provider.contains_prefix(prefix)? {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, prefix, "Prefix matched");
            #[cfg(not(feature = "tracing"))]
            let _ = index;

            return Ok(true);
        }
    }
    Ok(false)
}

/// The first non-empty value any provider holds for `key`.
///
/// Equivalent to [`get_value_with`] with validation enabled.
pub fn get_value<'a, I, P>(providers: I, key: &str) -> Result<Option<ValueProviderResult>, BoxError>
where
    I: IntoIterator<Item = &'a P>,
    P: ValueProvider + ?Sized + 'a,
{
    get_value_with(providers, key, false)
}

/// The first non-empty value any provider holds for `key`, forwarding
/// `skip_validation` to providers that support it.
pub fn get_value_with<'a, I, P>(
    providers: I,
    key: &str,
    skip_validation: bool,
) -> Result<Option<ValueProviderResult>, BoxError>
where
    I: IntoIterator<Item = &'a P>,
    P: ValueProvider + ?Sized + 'a,
{
    for (index, provider) in providers.into_iter().enumerate() {
        #[cfg(feature = "tracing")]
        tracing::trace!(index, key, skip_validation, "Querying provider for value");

        if let Some(result) = get_value_from_provider(provider, key, skip_validation)? {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, key, value = %result.attempted_value(), "Value found");
            #[cfg(not(feature = "tracing"))]
            let _ = index;

            return Ok(Some(result));
        }
    }
    Ok(None)
}
