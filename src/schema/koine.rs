//! Attribute schema for the Koine Greek New Testament.

use super::{AttributeRule, TextSchema, VerbalizationRoles};
use crate::query::AttributeMap;

/// Parts of speech that inflect for case, number, and gender.
const NOMINAL_CLASSES: [&str; 5] = ["adj", "det", "noun", "pron", "verb"];

fn always_enabled(_: Option<&AttributeMap>) -> bool {
    true
}

fn class_is_undecided_or(attributes: Option<&AttributeMap>, classes: &[&str]) -> bool {
    let Some(attributes) = attributes else {
        return true;
    };
    match attributes.get("class") {
        None => true,
        Some(class) if class.is_empty() => true,
        Some(class) => classes.iter().any(|allowed| *allowed == class.as_str()),
    }
}

fn enabled_for_nominals(attributes: Option<&AttributeMap>) -> bool {
    class_is_undecided_or(attributes, &NOMINAL_CLASSES)
}

fn enabled_for_verbs(attributes: Option<&AttributeMap>) -> bool {
    class_is_undecided_or(attributes, &["verb"])
}

impl TextSchema {
    /// Attribute schema for the Koine Greek New Testament.
    ///
    /// Part of speech, lexical form, and inflected form are always
    /// relevant; case, number, and gender apply to nominals (and verbs,
    /// whose participles inflect like adjectives); person, tense, voice,
    /// and mood apply to verbs only.
    pub fn koine_greek_nt() -> Self {
        let rules = vec![
            AttributeRule::new(
                "class",
                "Part of Speech",
                &[
                    ("adj", "Adjective"),
                    ("adv", "Adverb"),
                    ("det", "Article/Determiner"),
                    ("conj", "Conjunction"),
                    ("intj", "Interjection"),
                    ("noun", "Noun"),
                    ("ptcl", "Particle"),
                    ("prep", "Preposition"),
                    ("pron", "Pronoun"),
                    ("verb", "Verbal"),
                ],
                always_enabled,
            ),
            AttributeRule::new("lemma", "Lexical Form", &[], always_enabled),
            AttributeRule::new("normalized", "Inflected Form", &[], always_enabled),
            AttributeRule::new(
                "case",
                "Case",
                &[
                    ("accusative", "Accusative"),
                    ("dative", "Dative"),
                    ("genitive", "Genitive"),
                    ("nominative", "Nominative"),
                    ("vocative", "Vocative"),
                ],
                enabled_for_nominals,
            ),
            AttributeRule::new(
                "person",
                "Person",
                &[
                    ("first", "1st person"),
                    ("second", "2nd person"),
                    ("third", "3rd person"),
                ],
                enabled_for_verbs,
            ),
            AttributeRule::new(
                "number",
                "Number",
                &[("singular", "Singular"), ("plural", "Plural")],
                enabled_for_nominals,
            ),
            AttributeRule::new(
                "gender",
                "Gender",
                &[
                    ("masculine", "Masculine"),
                    ("feminine", "Feminine"),
                    ("neuter", "Neuter"),
                ],
                enabled_for_nominals,
            ),
            AttributeRule::new(
                "tense",
                "Tense",
                &[
                    ("aorist", "Aorist"),
                    ("imperfect", "Imperfect"),
                    ("future", "Future"),
                    ("perfect", "Perfect"),
                    ("pluperfect", "Pluperfect"),
                    ("present", "Present"),
                ],
                enabled_for_verbs,
            ),
            AttributeRule::new(
                "voice",
                "Voice",
                &[
                    ("active", "Active"),
                    ("passive", "Passive"),
                    ("middle", "Middle"),
                    ("middlepassive", "Middle/Passive"),
                ],
                enabled_for_verbs,
            ),
            AttributeRule::new(
                "mood",
                "Mood",
                &[
                    ("indicative", "Indicative"),
                    ("imperative", "Imperative"),
                    ("infinitive", "Infinitive"),
                    ("optative", "Optative"),
                    ("participle", "Participle"),
                    ("subjunctive", "Subjunctive"),
                ],
                enabled_for_verbs,
            ),
        ];

        let verbalization = VerbalizationRoles {
            descriptor_order: vec![
                "person".to_string(),
                "number".to_string(),
                "case".to_string(),
                "gender".to_string(),
                "tense".to_string(),
                "voice".to_string(),
                "mood".to_string(),
            ],
            part_of_speech: "class".to_string(),
            mood: "mood".to_string(),
            mood_as_part_of_speech: vec!["participle".to_string(), "infinitive".to_string()],
            lexical_form: "lemma".to_string(),
            inflected_form: "normalized".to_string(),
        };

        let cached_attributes = vec!["lemma".to_string(), "normalized".to_string()];

        TextSchema::new(rules, verbalization, cached_attributes)
            .expect("Koine Greek schema tables are well-formed")
    }
}
