//! Ordered provider collection.
//!
//! [`ValueProviderCollection`] owns an ordered list of providers and resolves
//! lookups against them in insertion order. It is itself a provider, so
//! collections can be nested inside other collections.

use crate::resolver;
use cascade_core::{
    BoxError, CollectionError, SharedProvider, UnvalidatedValueProvider, ValueProvider,
    ValueProviderResult,
};
use std::{fmt, ops::Index, slice, sync::Arc};

/// An ordered collection of value providers.
///
/// Every mutating entry point rejects an absent provider with
/// [`CollectionError::NullArgument`] before touching the list.
#[derive(Clone, Default)]
pub struct ValueProviderCollection {
    providers: Vec<SharedProvider>,
}

impl ValueProviderCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Adopt an existing sequence of providers, keeping its order.
    ///
    /// Fails with `NullArgument("list")` when no sequence is supplied.
    pub fn from_sequence(list: Option<Vec<SharedProvider>>) -> Result<Self, CollectionError> {
        let providers = list.ok_or(CollectionError::null_argument("list"))?;
        Ok(Self { providers })
    }

    /// Append a provider.
    pub fn add(&mut self, item: Option<SharedProvider>) -> Result<(), CollectionError> {
        let item = Self::require(item)?;
        self.providers.push(item);
        Ok(())
    }

    /// Insert a provider at `index`, shifting later providers back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(
        &mut self,
        index: usize,
        item: Option<SharedProvider>,
    ) -> Result<(), CollectionError> {
        let item = Self::require(item)?;
        self.providers.insert(index, item);
        Ok(())
    }

    /// Replace the provider at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, item: Option<SharedProvider>) -> Result<(), CollectionError> {
        let item = Self::require(item)?;
        self.providers[index] = item;
        Ok(())
    }

    /// Remove and return the provider at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> SharedProvider {
        self.providers.remove(index)
    }

    /// Remove all providers.
    pub fn clear(&mut self) {
        self.providers.clear();
    }

    pub fn get(&self, index: usize) -> Option<&SharedProvider> {
        self.providers.get(index)
    }

    /// Get the number of providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Iterate over the providers in scan order.
    pub fn iter(&self) -> slice::Iter<'_, SharedProvider> {
        self.providers.iter()
    }

    /// Whether any provider contains `prefix`. Stops at the first match.
    pub fn contains_prefix(&self, prefix: &str) -> Result<bool, BoxError> {
        resolver::contains_prefix(self.iter(), prefix)
    }

    /// The first non-empty value for `key`. Stops at the first match.
    pub fn get_value(&self, key: &str) -> Result<Option<ValueProviderResult>, BoxError> {
        resolver::get_value(self.iter(), key)
    }

    /// Like [`get_value`](Self::get_value), forwarding `skip_validation` to
    /// providers that support it.
    pub fn get_value_with(
        &self,
        key: &str,
        skip_validation: bool,
    ) -> Result<Option<ValueProviderResult>, BoxError> {
        resolver::get_value_with(self.iter(), key, skip_validation)
    }

    fn require(item: Option<SharedProvider>) -> Result<SharedProvider, CollectionError> {
        item.ok_or(CollectionError::null_argument("item"))
    }
}

impl fmt::Debug for ValueProviderCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueProviderCollection")
            .field("len", &self.providers.len())
            .finish()
    }
}

impl Index<usize> for ValueProviderCollection {
    type Output = SharedProvider;

    fn index(&self, index: usize) -> &Self::Output {
        &self.providers[index]
    }
}

impl<'a> IntoIterator for &'a ValueProviderCollection {
    type Item = &'a SharedProvider;
    type IntoIter = slice::Iter<'a, SharedProvider>;

    fn into_iter(self) -> Self::IntoIter {
        self.providers.iter()
    }
}

impl FromIterator<SharedProvider> for ValueProviderCollection {
    fn from_iter<T: IntoIterator<Item = SharedProvider>>(iter: T) -> Self {
        Self {
            providers: iter.into_iter().collect(),
        }
    }
}

impl ValueProvider for ValueProviderCollection {
    fn contains_prefix(&self, prefix: &str) -> Result<bool, BoxError> {
        resolver::contains_prefix(self.iter(), prefix)
    }

    fn get_value(&self, key: &str) -> Result<Option<ValueProviderResult>, BoxError> {
        resolver::get_value(self.iter(), key)
    }

    fn as_unvalidated(&self) -> Option<&dyn UnvalidatedValueProvider> {
        Some(self)
    }
}

impl UnvalidatedValueProvider for ValueProviderCollection {
    fn get_value_with(
        &self,
        key: &str,
        skip_validation: bool,
    ) -> Result<Option<ValueProviderResult>, BoxError> {
        resolver::get_value_with(self.iter(), key, skip_validation)
    }
}

/// Builder for constructing a [`ValueProviderCollection`].
#[derive(Default)]
pub struct CollectionBuilder {
    providers: Vec<SharedProvider>,
}

impl CollectionBuilder {
    /// Create a new empty collection builder.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Register a provider.
    pub fn provider<P: ValueProvider>(mut self, provider: P) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Register an already shared provider.
    pub fn shared(mut self, provider: SharedProvider) -> Self {
        self.providers.push(provider);
        self
    }

    /// Build the collection.
    pub fn build(self) -> ValueProviderCollection {
        ValueProviderCollection {
            providers: self.providers,
        }
    }
}

/// Build a [`ValueProviderCollection`] from a list of providers.
///
/// # Example
///
/// ```rust,ignore
/// let collection = providers![form_provider, query_provider, route_provider];
/// ```
#[macro_export]
macro_rules! providers {
    () => { $crate::collection::ValueProviderCollection::new() };
    ($($provider:expr),+ $(,)?) => {
        $crate::collection::CollectionBuilder::new()
            $(.provider($provider))+
            .build()
    };
}
