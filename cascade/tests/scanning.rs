//! Ordered, short-circuiting scan tests.

use cascade::{
    ValueProviderCollection, ValueProviderResult, providers, resolver,
    testing::{Lookup, SpyProvider},
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

mod common;
use common::{CountingProvider, FailingProvider, OrderRecordingProvider, SourceUnavailable};

#[test]
fn test_contains_prefix() {
    let (first, first_calls) = CountingProvider::new(false, None);
    let (second, second_calls) = CountingProvider::new(true, None);
    let (third, third_calls) = CountingProvider::new(false, None);
    let collection = providers![first, second, third];

    assert!(collection.contains_prefix("somePrefix").unwrap());
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    assert_eq!(third_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_get_value() {
    let two = ValueProviderResult::new(2_i32, "2");
    let (first, _) = CountingProvider::new(false, None);
    let (second, _) = CountingProvider::new(false, Some(two.clone()));
    let (third, third_calls) =
        CountingProvider::new(false, Some(ValueProviderResult::new(3_i32, "3")));
    let collection = providers![first, second, third];

    let result = collection.get_value("someKey").unwrap().unwrap();

    assert_eq!(result, two);
    assert_eq!(result.raw_value_as::<i32>(), Some(&2));
    assert_eq!(third_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_all_empty_providers_queried_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut collection = ValueProviderCollection::new();
    for _ in 0..3 {
        collection
            .add(Some(Arc::new(CountingProvider {
                call_count: calls.clone(),
                prefix: false,
                value: None,
            })))
            .unwrap();
    }

    assert!(!collection.contains_prefix("p").unwrap());
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    assert_eq!(collection.get_value("k").unwrap(), None);
    assert_eq!(calls.load(Ordering::SeqCst), 6);
}

#[test]
fn test_scan_follows_insertion_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let collection = providers![
        OrderRecordingProvider { id: 1, order: order.clone() },
        OrderRecordingProvider { id: 2, order: order.clone() },
        OrderRecordingProvider { id: 3, order: order.clone() },
    ];

    collection.get_value("k").unwrap();

    assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_provider_error_propagates_unchanged() {
    let after = SpyProvider::standard().with_prefix(true);
    let collection = providers![SpyProvider::standard(), FailingProvider, after.clone()];

    let err = collection.contains_prefix("p").unwrap_err();
    assert!(err.downcast_ref::<SourceUnavailable>().is_some());

    let err = collection.get_value("k").unwrap_err();
    assert!(err.is::<SourceUnavailable>());

    assert_eq!(after.call_count(), 0);
}

#[test]
fn test_get_value_with_forwards_flag() {
    let standard = SpyProvider::standard();
    let extended = SpyProvider::extended();
    let collection = providers![standard.clone(), extended.clone()];

    assert_eq!(collection.get_value_with("k", true).unwrap(), None);

    assert_eq!(standard.lookups(), vec![Lookup::Plain("k".into())]);
    assert_eq!(extended.lookups(), vec![Lookup::WithFlag("k".into(), true)]);
}

#[test]
fn test_resolver_over_slice() {
    let found = ValueProviderResult::new('x', "x");
    let spies = [
        SpyProvider::standard(),
        SpyProvider::standard().with_value(found.clone()),
    ];

    assert_eq!(resolver::get_value(&spies, "k").unwrap(), Some(found));
    assert!(!resolver::contains_prefix(&spies, "k").unwrap());
}
