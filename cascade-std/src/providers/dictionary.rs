//! Dictionary-backed value provider.
//!
//! Keys are hierarchical names such as `order.lines[0].sku`. A prefix matches
//! a key when it is the whole key or is followed in the key by `.` or `[`.
//! Matching ignores ASCII case.

use cascade_core::{BoxError, ValueProvider, ValueProviderResult};
use std::collections::{HashMap, HashSet};

/// A provider backed by a `HashMap`.
///
/// This is the default in-memory provider; it requires no external data
/// source and never fails.
#[derive(Debug, Clone, Default)]
pub struct DictionaryValueProvider {
    values: HashMap<String, ValueProviderResult>,
    prefixes: HashSet<String>,
    culture: Option<String>,
}

impl DictionaryValueProvider {
    /// Create a new empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every value inserted after this call with `culture`.
    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    /// Store a string value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        let mut result = ValueProviderResult::new(value.clone(), value);
        if let Some(culture) = &self.culture {
            result = result.with_culture(culture.clone());
        }
        self.insert_result(key, result);
    }

    /// Store a prepared result under `key`.
    pub fn insert_result(&mut self, key: impl Into<String>, result: ValueProviderResult) {
        let key = key.into().to_ascii_lowercase();
        self.prefixes.extend(prefixes_of(&key).map(str::to_string));
        self.values.insert(key, result);
    }

    /// Get the number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the provider is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for DictionaryValueProvider
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut provider = Self::new();
        for (key, value) in iter {
            provider.insert(key, value);
        }
        provider
    }
}

impl ValueProvider for DictionaryValueProvider {
    fn contains_prefix(&self, prefix: &str) -> Result<bool, BoxError> {
        if prefix.is_empty() {
            return Ok(!self.values.is_empty());
        }
        Ok(self.prefixes.contains(&prefix.to_ascii_lowercase()))
    }

    fn get_value(&self, key: &str) -> Result<Option<ValueProviderResult>, BoxError> {
        Ok(self.values.get(&key.to_ascii_lowercase()).cloned())
    }
}

/// The key itself followed by every shorter prefix ending before a `.` or `[`.
fn prefixes_of(key: &str) -> impl Iterator<Item = &str> {
    let cuts = key
        .char_indices()
        .rev()
        .filter(|&(_, c)| matches!(c, '.' | '['))
        .map(move |(i, _)| &key[..i]);
    std::iter::once(key).chain(cuts)
}
