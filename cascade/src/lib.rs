//! # cascade - Ordered Value Provider Aggregation
//!
//! `cascade` resolves keys against an ordered list of value providers. The
//! first provider holding a value wins; a prefix is present if any provider
//! reports it. Both scans stop as soon as their answer is known.
//!
//! Providers may optionally support lookups that skip validation. The
//! collection forwards the flag only to providers that understand it; all
//! others are queried normally.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cascade::prelude::*;
//!
//! let form: DictionaryValueProvider = [("user.name", "ada")].into_iter().collect();
//! let query: DictionaryValueProvider = [("page", "2")].into_iter().collect();
//!
//! let collection = providers![form, query];
//!
//! assert!(collection.contains_prefix("user")?);
//! let page = collection.get_value("page")?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use cascade_core::{
    // Error types
    BoxError,
    CascadeError,
    CollectionError,
    // Provider traits
    SharedProvider,
    UnvalidatedValueProvider,
    ValueProvider,
    // Result
    ValueProviderResult,
    // Dispatch
    get_value_from_provider,
};

// Collection
pub use cascade_std::collection::{CollectionBuilder, ValueProviderCollection};

// Standard providers (module) and the `providers!` macro share this name.
pub use cascade_std::providers;

/// Ordered lookup scans over any sequence of providers.
pub mod resolver {
    pub use cascade_std::resolver::{contains_prefix, get_value, get_value_with};
}

/// Testing utilities.
pub mod testing {
    pub use cascade_std::testing::{Lookup, SpyProvider};
}

/// Prelude module - common imports for Cascade.
///
/// # Usage
///
/// ```rust,ignore
/// use cascade::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        CollectionBuilder,
        CollectionError,
        // Core traits
        UnvalidatedValueProvider,
        ValueProvider,
        // Collection
        ValueProviderCollection,
        ValueProviderResult,
        get_value_from_provider,
        providers,
        providers::{DictionaryValueProvider, TracingProvider, ValidatedProvider},
    };
}
