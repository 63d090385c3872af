#![allow(dead_code)]

use cascade::{BoxError, UnvalidatedValueProvider, ValueProvider, ValueProviderResult};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Providers
// ============================================================================

/// Answers every query with fixed values and counts calls.
pub struct CountingProvider {
    pub call_count: Arc<AtomicUsize>,
    pub prefix: bool,
    pub value: Option<ValueProviderResult>,
}

impl CountingProvider {
    pub fn new(prefix: bool, value: Option<ValueProviderResult>) -> (Self, Arc<AtomicUsize>) {
        let call_count = Arc::new(AtomicUsize::new(0));
        let provider = Self {
            call_count: call_count.clone(),
            prefix,
            value,
        };
        (provider, call_count)
    }
}

impl ValueProvider for CountingProvider {
    fn contains_prefix(&self, _prefix: &str) -> Result<bool, BoxError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.prefix)
    }

    fn get_value(&self, _key: &str) -> Result<Option<ValueProviderResult>, BoxError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.value.clone())
    }
}

/// Records its id every time it is queried.
pub struct OrderRecordingProvider {
    pub id: usize,
    pub order: Arc<Mutex<Vec<usize>>>,
}

impl ValueProvider for OrderRecordingProvider {
    fn contains_prefix(&self, _prefix: &str) -> Result<bool, BoxError> {
        self.order.lock().unwrap().push(self.id);
        Ok(false)
    }

    fn get_value(&self, _key: &str) -> Result<Option<ValueProviderResult>, BoxError> {
        self.order.lock().unwrap().push(self.id);
        Ok(None)
    }
}

/// Returns a different result depending on the skip-validation flag.
pub struct FlagSensitiveProvider {
    pub validated: ValueProviderResult,
    pub unvalidated: ValueProviderResult,
}

impl ValueProvider for FlagSensitiveProvider {
    fn contains_prefix(&self, _prefix: &str) -> Result<bool, BoxError> {
        Ok(true)
    }

    fn get_value(&self, key: &str) -> Result<Option<ValueProviderResult>, BoxError> {
        self.get_value_with(key, false)
    }

    fn as_unvalidated(&self) -> Option<&dyn UnvalidatedValueProvider> {
        Some(self)
    }
}

impl UnvalidatedValueProvider for FlagSensitiveProvider {
    fn get_value_with(
        &self,
        _key: &str,
        skip_validation: bool,
    ) -> Result<Option<ValueProviderResult>, BoxError> {
        if skip_validation {
            Ok(Some(self.unvalidated.clone()))
        } else {
            Ok(Some(self.validated.clone()))
        }
    }
}

#[derive(Debug)]
pub struct SourceUnavailable;

impl std::fmt::Display for SourceUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("source unavailable")
    }
}

impl std::error::Error for SourceUnavailable {}

/// Fails every query with [`SourceUnavailable`].
pub struct FailingProvider;

impl ValueProvider for FailingProvider {
    fn contains_prefix(&self, _prefix: &str) -> Result<bool, BoxError> {
        Err(Box::new(SourceUnavailable))
    }

    fn get_value(&self, _key: &str) -> Result<Option<ValueProviderResult>, BoxError> {
        Err(Box::new(SourceUnavailable))
    }
}
