//! Testing utilities for Cascade.
//!
//! This module provides utilities to make testing code that consumes value
//! providers easier.
//!
//! # Features
//!
//! - [`SpyProvider`]: A programmable provider that records every query it receives
//! - [`Lookup`]: A recorded value lookup

use cascade_core::{BoxError, UnvalidatedValueProvider, ValueProvider, ValueProviderResult};
use std::sync::{Arc, Mutex};

/// A value lookup recorded by a [`SpyProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// A plain `get_value` call.
    Plain(String),
    /// A `get_value_with` call and the flag it carried.
    WithFlag(String, bool),
}

impl Lookup {
    /// The key that was looked up.
    pub fn key(&self) -> &str {
        match self {
            Lookup::Plain(key) | Lookup::WithFlag(key, _) => key,
        }
    }
}

#[derive(Default)]
struct SpyState {
    prefix_queries: Vec<String>,
    lookups: Vec<Lookup>,
    prefix_answer: bool,
    value: Option<ValueProviderResult>,
    unvalidated_value: Option<ValueProviderResult>,
    error: Option<String>,
}

/// A provider that records queries and can be programmed to return specific answers.
///
/// A spy is either *standard* (no skip-validation capability) or *extended*.
/// Clones share state, so keep a clone around to inspect calls after handing
/// the spy to a collection.
///
/// # Example
///
/// ```rust,ignore
/// let spy = SpyProvider::standard().with_prefix(true);
/// let collection = providers![spy.clone()];
///
/// assert!(collection.contains_prefix("user")?);
/// assert_eq!(spy.call_count(), 1);
/// ```
#[derive(Clone)]
pub struct SpyProvider {
    state: Arc<Mutex<SpyState>>,
    extended: bool,
}

impl SpyProvider {
    /// Create a spy without the skip-validation capability.
    pub fn standard() -> Self {
        Self {
            state: Arc::new(Mutex::new(SpyState::default())),
            extended: false,
        }
    }

    /// Create a spy exposing the skip-validation capability.
    pub fn extended() -> Self {
        Self {
            extended: true,
            ..Self::standard()
        }
    }

    /// Set the answer to `contains_prefix`.
    pub fn with_prefix(self, answer: bool) -> Self {
        self.state.lock().unwrap().prefix_answer = answer;
        self
    }

    /// Set the value returned by validated lookups.
    ///
    /// Unvalidated lookups fall back to this value unless
    /// [`with_unvalidated_value`](Self::with_unvalidated_value) is set.
    pub fn with_value(self, value: ValueProviderResult) -> Self {
        self.state.lock().unwrap().value = Some(value);
        self
    }

    /// Set the value returned by lookups that skip validation.
    pub fn with_unvalidated_value(self, value: ValueProviderResult) -> Self {
        self.state.lock().unwrap().unvalidated_value = Some(value);
        self
    }

    /// Make every subsequent query fail with `error`.
    pub fn set_error(&self, error: impl Into<String>) {
        self.state.lock().unwrap().error = Some(error.into());
    }

    /// Clear error state.
    pub fn clear_error(&self) {
        self.state.lock().unwrap().error = None;
    }

    /// Prefixes passed to `contains_prefix`, in call order.
    pub fn prefix_queries(&self) -> Vec<String> {
        self.state.lock().unwrap().prefix_queries.clone()
    }

    /// Value lookups received, in call order.
    pub fn lookups(&self) -> Vec<Lookup> {
        self.state.lock().unwrap().lookups.clone()
    }

    /// Total number of queries of any kind.
    pub fn call_count(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.prefix_queries.len() + state.lookups.len()
    }

    fn fail(state: &SpyState) -> Result<(), BoxError> {
        match &state.error {
            Some(err) => Err(err.clone().into()),
            None => Ok(()),
        }
    }
}

impl ValueProvider for SpyProvider {
    fn contains_prefix(&self, prefix: &str) -> Result<bool, BoxError> {
        let mut state = self.state.lock().unwrap();
        state.prefix_queries.push(prefix.to_string());
        Self::fail(&state)?;
        Ok(state.prefix_answer)
    }

    fn get_value(&self, key: &str) -> Result<Option<ValueProviderResult>, BoxError> {
        let mut state = self.state.lock().unwrap();
        state.lookups.push(Lookup::Plain(key.to_string()));
        Self::fail(&state)?;
        Ok(state.value.clone())
    }

    fn as_unvalidated(&self) -> Option<&dyn UnvalidatedValueProvider> {
        if self.extended { Some(self) } else { None }
    }
}

impl UnvalidatedValueProvider for SpyProvider {
    fn get_value_with(
        &self,
        key: &str,
        skip_validation: bool,
    ) -> Result<Option<ValueProviderResult>, BoxError> {
        let mut state = self.state.lock().unwrap();
        state
            .lookups
            .push(Lookup::WithFlag(key.to_string(), skip_validation));
        Self::fail(&state)?;
        if skip_validation && state.unvalidated_value.is_some() {
            Ok(state.unvalidated_value.clone())
        } else {
            Ok(state.value.clone())
        }
    }
}
