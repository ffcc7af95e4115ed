//! # morphquery
//!
//! Query-building core for morphological search over ancient-language texts
//! (the reference text being the Koine Greek New Testament).
//!
//! The crate provides two independent, pure subsystems:
//!
//! - **Transliteration-aware fuzzy matching** ([`matcher`]): given a
//!   Latin-alphabet query typed by a user and a list of Greek candidate
//!   forms, produce a ranked, deduplicated, length-bounded list of the best
//!   matches, considering every plausible Greek spelling the query could be
//!   a transliteration of.
//! - **Query verbalization and attribute rules** ([`verbalize`], [`schema`]):
//!   given a structured word-sequence query, produce a human-readable
//!   description ("a preposition followed by a genitive ..."), and decide
//!   which linguistic attributes are relevant given the others already
//!   selected (e.g. tense only applies to verbs).
//!
//! Both subsystems are stateless and side-effect free; configuration (the
//! transliteration table, the per-text attribute schema) is passed in
//! explicitly rather than read from ambient state. The only shared resource
//! is the read-mostly [`cache::AttributeValueCache`] of candidate forms,
//! which hands out immutable snapshots.
//!
//! ## Example
//!
//! ```rust,ignore
//! use morphquery::prelude::*;
//!
//! let table = TransliterationTable::koine_greek();
//! let matcher = TransliteratedMatcher::new(&table);
//!
//! let forms = vec!["λόγος".to_string(), "ἀγάπη".to_string()];
//! for form in matcher.matches(&forms, "log", 8) {
//!     println!("match: {}", form);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod matcher;
pub mod query;
pub mod schema;
pub mod verbalize;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::cache::AttributeValueCache;
    pub use crate::matcher::{
        MatchRank, TransliteratedMatcher, TransliterationTable, MAX_EXPANSIONS,
    };
    pub use crate::query::{AttributeMap, Link, Query, Sequence, WordQuery};
    pub use crate::schema::{AttributeRule, SchemaError, TextSchema, VerbalizationRoles};
    pub use crate::verbalize::{
        spans_to_string, verbalize_attributes, verbalize_query, QuerySpan,
    };
}
