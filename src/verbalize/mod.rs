//! Natural-language rendering of structured queries.
//!
//! Turns a [`Query`] into the English phrase shown above search results
//! ("a preposition followed by a genitive with up to 2 words in between"),
//! so users can confirm the query they actually built.
//!
//! [`verbalize_attributes`] renders one word's attribute set;
//! [`verbalize_query`] renders a whole query as a sequence of
//! [`QuerySpan`]s, distinguishing the word descriptions (which callers
//! typically highlight) from the connective text between them.
//!
//! Both functions degrade gracefully rather than fail: unknown attribute
//! ids are ignored, unknown values fall back to their raw spelling, and an
//! empty query yields an empty span list — substituting placeholder text
//! like "an empty query" is the caller's decision, not this module's.

use crate::query::{AttributeMap, Query};
use crate::schema::TextSchema;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One piece of a verbalized query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QuerySpan {
    /// Connective text between words (" followed by ", " and ", ...)
    Text(String),
    /// The description of one word, typically rendered highlighted
    Word(String),
}

impl QuerySpan {
    /// The span's text regardless of kind
    pub fn as_str(&self) -> &str {
        match self {
            QuerySpan::Text(text) | QuerySpan::Word(text) => text,
        }
    }
}

/// Describe one word's attribute constraints in English.
///
/// - No attributes at all → `"a word"`.
/// - Attribute values resolve through the schema's display tables, falling
///   back to the raw value; unknown attribute ids are ignored.
/// - Descriptors compose in fixed grammatical order (person, number, case,
///   gender, tense, voice, mood), with the part of speech last — except
///   that a participle or infinitive mood *is* the part of speech and
///   replaces it ("a future participle", never "a future participle
///   verbal").
/// - A lexical or inflected form becomes the word root, appended as
///   `from {root}`; the inflected form wins when both are set. A root with
///   no descriptors is returned bare, with no article.
///
/// The result is lowercased and trimmed; only attributes containing
/// nothing recognizable produce an empty string.
pub fn verbalize_attributes(schema: &TextSchema, attributes: Option<&AttributeMap>) -> String {
    let attributes = match attributes {
        Some(map) if !map.is_empty() => map,
        _ => return "a word".to_string(),
    };

    let roles = schema.verbalization();
    let display = |id: &str, raw: &str| -> String {
        schema
            .rule(id)
            .map(|rule| rule.display_value(raw).to_string())
            .unwrap_or_else(|| raw.to_string())
    };

    // A participle/infinitive mood takes over the part-of-speech slot and
    // drops out of the generic descriptor list.
    let mood_value = attributes.get(&roles.mood);
    let mood_takes_over = mood_value
        .map(|value| roles.mood_as_part_of_speech.contains(value))
        .unwrap_or(false);

    let mut descriptors: Vec<String> = Vec::new();
    for id in &roles.descriptor_order {
        if mood_takes_over && *id == roles.mood {
            continue;
        }
        if let Some(raw) = attributes.get(id) {
            descriptors.push(display(id, raw));
        }
    }
    if mood_takes_over {
        if let Some(raw) = mood_value {
            descriptors.push(display(&roles.mood, raw));
        }
    } else if let Some(raw) = attributes.get(&roles.part_of_speech) {
        descriptors.push(display(&roles.part_of_speech, raw));
    }
    let descriptors = descriptors.join(" ");

    let root = attributes
        .get(&roles.inflected_form)
        .or_else(|| attributes.get(&roles.lexical_form));

    let verbalization = match (root, descriptors.is_empty()) {
        (Some(root), false) => {
            format!("{} {} from {}", article_for(&descriptors), descriptors, root)
        }
        (Some(root), true) => root.clone(),
        (None, false) => format!("{} {}", article_for(&descriptors), descriptors),
        (None, true) => String::new(),
    };

    verbalization.to_lowercase().trim().to_string()
}

/// "a" or "an", chosen by the leading vowel of the descriptor string.
fn article_for(descriptors: &str) -> &'static str {
    match descriptors.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Describe a whole query as a span sequence.
///
/// Words within a sequence join with `" followed by "`; when the earlier
/// word carries a link, `" with up to N word(s) in between"` follows the
/// later word ("word", not "words", exactly when N is 1). Non-empty
/// sequences join with `" and "`; empty sequences contribute nothing, not
/// even a join. A query with no non-empty sequences yields an empty vec.
pub fn verbalize_query(schema: &TextSchema, query: &Query) -> Vec<QuerySpan> {
    let mut spans: Vec<QuerySpan> = Vec::new();

    for sequence in &query.sequences {
        if sequence.is_empty() {
            continue;
        }
        if !spans.is_empty() {
            spans.push(QuerySpan::Text(" and ".to_string()));
        }
        for (position, word) in sequence.iter().enumerate() {
            if position > 0 {
                spans.push(QuerySpan::Text(" followed by ".to_string()));
            }
            spans.push(QuerySpan::Word(verbalize_attributes(
                schema,
                word.attributes.as_ref(),
            )));
            if position > 0 {
                if let Some(link) = &sequence[position - 1].link {
                    let n = link.allowed_words_between;
                    let plural = if n == 1 { "" } else { "s" };
                    spans.push(QuerySpan::Text(format!(
                        " with up to {} word{} in between",
                        n, plural
                    )));
                }
            }
        }
    }

    spans
}

/// Flatten spans into plain text, for callers without highlighting.
pub fn spans_to_string(spans: &[QuerySpan]) -> String {
    spans.iter().map(QuerySpan::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{AttributeMap, WordQuery};

    fn schema() -> TextSchema {
        TextSchema::koine_greek_nt()
    }

    fn attrs(pairs: &[(&str, &str)]) -> AttributeMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_attributes_is_a_word() {
        assert_eq!(verbalize_attributes(&schema(), None), "a word");
        assert_eq!(
            verbalize_attributes(&schema(), Some(&AttributeMap::default())),
            "a word"
        );
    }

    #[test]
    fn test_unknown_attributes_ignored() {
        let attributes = attrs(&[("wrong", "attr")]);
        assert_eq!(verbalize_attributes(&schema(), Some(&attributes)), "");
    }

    #[test]
    fn test_unknown_value_falls_back_to_raw() {
        let attributes = attrs(&[("case", "fake case")]);
        assert_eq!(
            verbalize_attributes(&schema(), Some(&attributes)),
            "a fake case"
        );
    }

    #[test]
    fn test_descriptor_order() {
        let attributes = attrs(&[
            ("class", "verbal"),
            ("case", "nominative"),
            ("person", "first"),
            ("number", "singular"),
            ("gender", "feminine"),
            ("tense", "aorist"),
            ("voice", "active"),
            ("mood", "indicative"),
        ]);
        assert_eq!(
            verbalize_attributes(&schema(), Some(&attributes)),
            "a 1st person singular nominative feminine aorist active indicative verbal"
        );
    }

    #[test]
    fn test_participle_replaces_part_of_speech() {
        let attributes = attrs(&[("tense", "future"), ("mood", "participle")]);
        assert_eq!(
            verbalize_attributes(&schema(), Some(&attributes)),
            "a future participle"
        );

        let with_class = attrs(&[
            ("class", "verb"),
            ("tense", "future"),
            ("mood", "participle"),
        ]);
        assert_eq!(
            verbalize_attributes(&schema(), Some(&with_class)),
            "a future participle"
        );
    }

    #[test]
    fn test_infinitive_replaces_part_of_speech() {
        let attributes = attrs(&[
            ("class", "verb"),
            ("tense", "future"),
            ("mood", "infinitive"),
        ]);
        assert_eq!(
            verbalize_attributes(&schema(), Some(&attributes)),
            "a future infinitive"
        );
    }

    #[test]
    fn test_root_only_returned_bare() {
        let lemma = attrs(&[("lemma", "ἀνοίγω")]);
        assert_eq!(verbalize_attributes(&schema(), Some(&lemma)), "ἀνοίγω");

        let normalized = attrs(&[("normalized", "ἀνοίγω")]);
        assert_eq!(verbalize_attributes(&schema(), Some(&normalized)), "ἀνοίγω");
    }

    #[test]
    fn test_inflected_form_preferred_over_lexical() {
        let attributes = attrs(&[("lemma", "ἀνοίγω"), ("normalized", "ἀνοίξω")]);
        assert_eq!(verbalize_attributes(&schema(), Some(&attributes)), "ἀνοίξω");
    }

    #[test]
    fn test_root_with_descriptors_adds_from() {
        let attributes = attrs(&[
            ("lemma", "ἀνοίγω"),
            ("tense", "future"),
            ("voice", "passive"),
        ]);
        assert_eq!(
            verbalize_attributes(&schema(), Some(&attributes)),
            "a future passive from ἀνοίγω"
        );
    }

    #[test]
    fn test_part_of_speech_kept_alongside_root() {
        let attributes = attrs(&[
            ("lemma", "ἀνοίγω"),
            ("class", "verb"),
            ("tense", "future"),
        ]);
        assert_eq!(
            verbalize_attributes(&schema(), Some(&attributes)),
            "a future verbal from ἀνοίγω"
        );

        let with_participle = attrs(&[
            ("lemma", "ἀνοίγω"),
            ("class", "verb"),
            ("tense", "future"),
            ("mood", "participle"),
        ]);
        assert_eq!(
            verbalize_attributes(&schema(), Some(&with_participle)),
            "a future participle from ἀνοίγω"
        );
    }

    #[test]
    fn test_article_an_before_vowel() {
        let adjective = attrs(&[("class", "adj")]);
        assert_eq!(
            verbalize_attributes(&schema(), Some(&adjective)),
            "an adjective"
        );

        let genitive = attrs(&[("case", "genitive")]);
        assert_eq!(
            verbalize_attributes(&schema(), Some(&genitive)),
            "a genitive"
        );
    }

    #[test]
    fn test_verbalize_query_single_word() {
        let query = Query::single_sequence(vec![
            WordQuery::any().with_attribute("class", "noun")
        ]);
        let spans = verbalize_query(&schema(), &query);
        assert_eq!(spans, vec![QuerySpan::Word("a noun".to_string())]);
    }

    #[test]
    fn test_verbalize_query_empty_is_empty() {
        let query = Query::default();
        assert!(verbalize_query(&schema(), &query).is_empty());

        let only_empty_sequences = Query {
            sequences: vec![vec![], vec![]],
        };
        assert!(verbalize_query(&schema(), &only_empty_sequences).is_empty());
    }
}
