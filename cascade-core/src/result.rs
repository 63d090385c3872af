//! The opaque lookup result.

use std::{any::Any, fmt, sync::Arc};

/// A value found by a [`ValueProvider`].
///
/// The raw value is type-erased and shared; cloning a result never clones the
/// underlying value. Cascade treats results as identity-only: scans hand them
/// back exactly as the provider produced them.
///
/// Two results are equal when they share the same raw value allocation and
/// carry the same attempted value and culture.
///
/// [`ValueProvider`]: crate::ValueProvider
#[derive(Clone)]
pub struct ValueProviderResult {
    raw_value: Arc<dyn Any + Send + Sync>,
    attempted_value: String,
    culture: Option<String>,
}

impl ValueProviderResult {
    /// Create a result from a raw value and its string form.
    pub fn new<T>(raw_value: T, attempted_value: impl Into<String>) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            raw_value: Arc::new(raw_value),
            attempted_value: attempted_value.into(),
            culture: None,
        }
    }

    /// Attach the culture (locale/format tag) the raw value was produced under.
    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    /// The raw value as produced by the provider.
    pub fn raw_value(&self) -> &(dyn Any + Send + Sync) {
        self.raw_value.as_ref()
    }

    /// Borrow the raw value as `T`, if that is its concrete type.
    pub fn raw_value_as<T: Any>(&self) -> Option<&T> {
        self.raw_value.downcast_ref::<T>()
    }

    /// The raw value rendered as a string.
    pub fn attempted_value(&self) -> &str {
        &self.attempted_value
    }

    pub fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }
}

impl PartialEq for ValueProviderResult {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.raw_value, &other.raw_value)
            && self.attempted_value == other.attempted_value
            && self.culture == other.culture
    }
}

impl Eq for ValueProviderResult {}

impl fmt::Debug for ValueProviderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueProviderResult")
            .field("attempted_value", &self.attempted_value)
            .field("culture", &self.culture)
            .finish_non_exhaustive()
    }
}
