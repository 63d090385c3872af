//! Capability dispatch tests.

use cascade::{ValueProviderResult, get_value_from_provider};

mod common;
use common::{CountingProvider, FlagSensitiveProvider};

#[test]
fn test_normal_provider_do_not_skip_validation() {
    let expected = ValueProviderResult::new("Success", "Success");
    let (provider, _) = CountingProvider::new(false, Some(expected.clone()));

    let actual = get_value_from_provider(&provider, "key", false).unwrap();

    assert_eq!(actual, Some(expected));
}

#[test]
fn test_normal_provider_skip_validation() {
    let expected = ValueProviderResult::new("Success", "Success");
    let (provider, calls) = CountingProvider::new(false, Some(expected.clone()));

    let actual = get_value_from_provider(&provider, "key", true).unwrap();

    // Standard providers are validation-agnostic.
    assert_eq!(actual, Some(expected));
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn test_unvalidated_provider_do_not_skip_validation() {
    let provider = FlagSensitiveProvider {
        validated: ValueProviderResult::new("Success", "Success"),
        unvalidated: ValueProviderResult::new("<Success>", "<Success>"),
    };

    let actual = get_value_from_provider(&provider, "key", false).unwrap();

    assert_eq!(actual, Some(provider.validated.clone()));
}

#[test]
fn test_unvalidated_provider_skip_validation() {
    let provider = FlagSensitiveProvider {
        validated: ValueProviderResult::new("Success", "Success"),
        unvalidated: ValueProviderResult::new("<Success>", "<Success>"),
    };

    let actual = get_value_from_provider(&provider, "key", true).unwrap();

    assert_eq!(actual, Some(provider.unvalidated.clone()));
}

#[test]
fn test_dispatch_through_shared_handle() {
    let provider: cascade::SharedProvider = std::sync::Arc::new(FlagSensitiveProvider {
        validated: ValueProviderResult::new(1_i32, "1"),
        unvalidated: ValueProviderResult::new(2_i32, "2"),
    });

    let actual = get_value_from_provider(provider.as_ref(), "key", true).unwrap();

    assert_eq!(actual.unwrap().raw_value_as::<i32>(), Some(&2));
}
