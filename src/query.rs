//! Structured linguistic query model.
//!
//! A [`Query`] describes one or more sequences of words the user is looking
//! for in the text. Each [`WordQuery`] constrains a single word by its
//! linguistic attributes (part of speech, case, tense, ...), and an optional
//! [`Link`] loosens the adjacency requirement to the *next* word in the
//! sequence.
//!
//! This crate never evaluates a query against a text corpus; the model
//! exists to be verbalized for the user and serialized for the remote
//! search API. With the `serde` feature the JSON field names match the wire
//! shape the API expects (`allowedWordsBetween`).

use rustc_hash::FxHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Attribute assignments for one word: attribute id → raw value.
///
/// Keys come from the per-text [`TextSchema`](crate::schema::TextSchema);
/// unknown keys are tolerated everywhere and simply ignored.
pub type AttributeMap = FxHashMap<String, String>;

/// An ordered chain of word constraints that must occur together.
pub type Sequence = Vec<WordQuery>;

/// A full search query: one or more word sequences.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Query {
    /// The word sequences; results must satisfy all of them
    pub sequences: Vec<Sequence>,
}

impl Query {
    /// Create a query with a single sequence
    pub fn single_sequence(sequence: Sequence) -> Self {
        Self {
            sequences: vec![sequence],
        }
    }
}

/// Constraints on a single word in a sequence.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordQuery {
    /// Attribute constraints; absent means "any word"
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub attributes: Option<AttributeMap>,
    /// Relationship to the next word in the sequence; absent on the last
    /// word, and means "immediately followed by" elsewhere
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub link: Option<Link>,
}

impl WordQuery {
    /// A word query with no constraints
    pub fn any() -> Self {
        Self::default()
    }

    /// Add an attribute constraint, creating the attribute map if needed
    pub fn with_attribute(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(AttributeMap::default)
            .insert(id.into(), value.into());
        self
    }

    /// Set the link to the next word in the sequence
    pub fn linked(mut self, allowed_words_between: u32) -> Self {
        self.link = Some(Link {
            allowed_words_between,
        });
        self
    }
}

/// Relationship between a word and the next word in its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Link {
    /// The next word must appear within this many intervening words
    pub allowed_words_between: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_query_builder() {
        let word = WordQuery::any()
            .with_attribute("class", "noun")
            .with_attribute("case", "genitive")
            .linked(2);

        let attributes = word.attributes.as_ref().unwrap();
        assert_eq!(attributes.get("class").map(String::as_str), Some("noun"));
        assert_eq!(
            attributes.get("case").map(String::as_str),
            Some("genitive")
        );
        assert_eq!(word.link.unwrap().allowed_words_between, 2);
    }

    #[test]
    fn test_any_word_has_no_attributes() {
        let word = WordQuery::any();
        assert!(word.attributes.is_none());
        assert!(word.link.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_link_wire_shape() {
        let word = WordQuery::any().with_attribute("class", "prep").linked(1);
        let json = serde_json::to_value(&word).unwrap();
        assert_eq!(json["link"]["allowedWordsBetween"], 1);
    }
}
