//! Read-mostly cache of candidate forms per attribute.
//!
//! Autocomplete needs the full list of values for free-form attributes
//! (lexical forms, inflected forms), which an external collaborator fetches
//! from the search API once per text. This cache holds those lists and
//! hands out immutable snapshots: a reader mid-match keeps its snapshot
//! even if a refresh replaces the list underneath it, so the matcher can
//! treat candidates as frozen for the duration of a call.

use std::sync::Arc;

use dashmap::DashMap;

/// Concurrent store mapping attribute id → snapshot of candidate forms.
///
/// Writers replace an attribute's list wholesale; per-form mutation is
/// deliberately not offered. Safe to share across threads.
///
/// # Example
///
/// ```rust,ignore
/// use morphquery::cache::AttributeValueCache;
///
/// let cache = AttributeValueCache::new();
/// cache.insert("lemma", vec!["λόγος".to_string(), "ἀγάπη".to_string()]);
///
/// if let Some(forms) = cache.forms("lemma") {
///     assert_eq!(forms.len(), 2);
/// }
/// ```
#[derive(Debug, Default)]
pub struct AttributeValueCache {
    values: DashMap<String, Arc<[String]>>,
}

impl AttributeValueCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the candidate forms for an attribute
    pub fn insert(&self, attribute: impl Into<String>, forms: Vec<String>) {
        let attribute = attribute.into();
        tracing::debug!(attribute = %attribute, count = forms.len(), "caching attribute values");
        self.values.insert(attribute, forms.into());
    }

    /// Snapshot of the candidate forms for an attribute, if cached
    pub fn forms(&self, attribute: &str) -> Option<Arc<[String]>> {
        self.values.get(attribute).map(|entry| entry.value().clone())
    }

    /// Whether an attribute has a cached list
    pub fn contains(&self, attribute: &str) -> bool {
        self.values.contains_key(attribute)
    }

    /// Drop everything; used when the active text changes
    pub fn clear(&self) {
        self.values.clear();
    }
}
