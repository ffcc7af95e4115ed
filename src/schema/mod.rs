//! Per-text attribute schemas: display tables and enablement rules.
//!
//! Every text provider (Greek NT, Hebrew OT, ...) exposes its own set of
//! queryable attributes. A [`TextSchema`] declares them as an *ordered* list
//! of [`AttributeRule`] records — order is display order, which is why this
//! is a list of records rather than a map — plus the
//! [`VerbalizationRoles`] that tell the verbalizer which attributes play
//! which grammatical part.
//!
//! Each rule carries a pure enablement predicate deciding whether the
//! attribute is currently relevant given the word's other attributes (tense
//! makes no sense unless the part of speech is a verb, or still unchosen).
//! Predicates are evaluated independently per attribute; the answer for one
//! attribute never depends on evaluation order of the others.
//!
//! Schemas are plain configuration values, built once and passed by
//! reference wherever needed; nothing in this crate reads them from global
//! state.

mod koine;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::query::AttributeMap;

/// Pure predicate deciding whether an attribute is relevant given a word's
/// full attribute set.
///
/// `None` means the caller has no attribute map at all; predicates must
/// treat that (and an absent discriminating key) as "still possible", i.e.
/// return `true`.
pub type EnabledPredicate = fn(Option<&AttributeMap>) -> bool;

/// Errors from schema construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The same attribute id was declared twice
    #[error("attribute '{id}' is declared more than once")]
    DuplicateAttribute {
        /// The offending attribute id
        id: String,
    },

    /// A verbalization role or cache entry names an undeclared attribute
    #[error("{role} refers to unknown attribute '{id}'")]
    UnknownAttribute {
        /// The offending attribute id
        id: String,
        /// Which part of the schema referenced it
        role: &'static str,
    },
}

/// Declaration of one queryable attribute.
#[derive(Debug, Clone)]
pub struct AttributeRule {
    /// Stable attribute id, as used in queries and the search API
    pub id: String,
    /// Human-readable name for editors and verbalization
    pub display_name: String,
    /// Possible raw values with their display names, in display order.
    /// Empty for free-form attributes (lexical/inflected forms).
    pub values: Vec<(String, String)>,
    /// Whether this attribute is relevant given the word's other attributes
    pub enabled: EnabledPredicate,
}

impl AttributeRule {
    /// Build a rule from static display tables
    pub fn new(
        id: &str,
        display_name: &str,
        values: &[(&str, &str)],
        enabled: EnabledPredicate,
    ) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            values: values
                .iter()
                .map(|(raw, display)| (raw.to_string(), display.to_string()))
                .collect(),
            enabled,
        }
    }

    /// Display name for a raw value, falling back to the raw value itself
    pub fn display_value<'a>(&'a self, raw: &'a str) -> &'a str {
        self.values
            .iter()
            .find(|(value, _)| value == raw)
            .map(|(_, display)| display.as_str())
            .unwrap_or(raw)
    }
}

/// Which attributes play which grammatical role during verbalization.
///
/// The verbalizer composes descriptors in a fixed grammatical order and
/// treats a few attributes specially (the word root, the part of speech,
/// and the moods that *become* the part of speech, like participles). Those
/// roles are per-text configuration, not hardcoded attribute ids.
#[derive(Debug, Clone)]
pub struct VerbalizationRoles {
    /// Attribute ids composed into the descriptor string, in order,
    /// excluding the part of speech (which always comes last)
    pub descriptor_order: Vec<String>,
    /// The part-of-speech attribute id
    pub part_of_speech: String,
    /// The mood attribute id
    pub mood: String,
    /// Mood values that replace the part-of-speech descriptor entirely
    /// ("future participle", not "future participle verbal")
    pub mood_as_part_of_speech: Vec<String>,
    /// The lexical (dictionary) form attribute id
    pub lexical_form: String,
    /// The inflected (surface) form attribute id; preferred over the
    /// lexical form as the word root
    pub inflected_form: String,
}

/// Attribute schema for one text provider.
#[derive(Debug, Clone)]
pub struct TextSchema {
    rules: Vec<AttributeRule>,
    by_id: FxHashMap<String, usize>,
    verbalization: VerbalizationRoles,
    cached_attributes: Vec<String>,
}

impl TextSchema {
    /// Build a schema, validating that attribute ids are unique and that
    /// every verbalization role and cached attribute refers to a declared
    /// attribute.
    pub fn new(
        rules: Vec<AttributeRule>,
        verbalization: VerbalizationRoles,
        cached_attributes: Vec<String>,
    ) -> Result<Self, SchemaError> {
        let mut by_id = FxHashMap::default();
        for (index, rule) in rules.iter().enumerate() {
            if by_id.insert(rule.id.clone(), index).is_some() {
                return Err(SchemaError::DuplicateAttribute {
                    id: rule.id.clone(),
                });
            }
        }

        let check = |id: &str, role: &'static str| {
            if by_id.contains_key(id) {
                Ok(())
            } else {
                Err(SchemaError::UnknownAttribute {
                    id: id.to_string(),
                    role,
                })
            }
        };
        for id in &verbalization.descriptor_order {
            check(id, "descriptor order")?;
        }
        check(&verbalization.part_of_speech, "part-of-speech role")?;
        check(&verbalization.mood, "mood role")?;
        check(&verbalization.lexical_form, "lexical-form role")?;
        check(&verbalization.inflected_form, "inflected-form role")?;
        for id in &cached_attributes {
            check(id, "cached attributes")?;
        }

        Ok(Self {
            rules,
            by_id,
            verbalization,
            cached_attributes,
        })
    }

    /// The attribute rules in display order
    pub fn rules(&self) -> &[AttributeRule] {
        &self.rules
    }

    /// Look up a rule by attribute id
    pub fn rule(&self, id: &str) -> Option<&AttributeRule> {
        self.by_id.get(id).map(|&index| &self.rules[index])
    }

    /// The verbalization role assignments
    pub fn verbalization(&self) -> &VerbalizationRoles {
        &self.verbalization
    }

    /// Attribute ids whose value lists are fetched from the server and held
    /// in an [`AttributeValueCache`](crate::cache::AttributeValueCache)
    pub fn cached_attributes(&self) -> &[String] {
        &self.cached_attributes
    }

    /// Whether `attribute` is currently relevant given `all_attributes`.
    ///
    /// Unknown attribute ids and absent attribute maps are enabled: until
    /// the user narrows the selection, everything is possible.
    pub fn is_enabled(&self, attribute: &str, all_attributes: Option<&AttributeMap>) -> bool {
        match self.rule(attribute) {
            Some(rule) => (rule.enabled)(all_attributes),
            None => true,
        }
    }
}
