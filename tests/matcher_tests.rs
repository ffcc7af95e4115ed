//! End-to-end matcher tests against a realistic lemma list.

use morphquery::prelude::*;

fn lemmas() -> Vec<String> {
    [
        "ἀγάπη",
        "ἀγαπάω",
        "ἄνθρωπος",
        "ἀνοίγω",
        "θεός",
        "κόσμος",
        "λέγω",
        "λόγος",
        "πίστις",
        "πνεῦμα",
        "χάρις",
        "ψυχή",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn koine_matches(query: &str, limit: usize) -> Vec<String> {
    let table = TransliterationTable::koine_greek();
    let matcher = TransliteratedMatcher::new(&table);
    matcher.matches(&lemmas(), query, limit)
}

#[test]
fn empty_query_passes_candidates_through() {
    let table = TransliterationTable::koine_greek();
    let matcher = TransliteratedMatcher::new(&table);
    let candidates = vec!["λογος".to_string(), "αγαπη".to_string()];
    assert_eq!(matcher.matches(&candidates, "", 8), candidates);
}

#[test]
fn romanized_prefix_finds_lemma() {
    let matches = koine_matches("log", 8);
    assert_eq!(matches.first().map(String::as_str), Some("λόγος"));
    assert!(!matches.contains(&"ἀγάπη".to_string()));
}

#[test]
fn aspirated_digraph_convention() {
    // "ch" → χ
    let matches = koine_matches("char", 8);
    assert_eq!(matches, vec!["χάρις".to_string()]);
}

#[test]
fn theta_via_digraph_and_shortcut() {
    // Both "th" and "q" romanize θ. "q" may also read as silent, so the
    // single-letter spelling "ε" admits weaker substring matches; the prefix
    // match on θεός must still rank first.
    assert_eq!(koine_matches("the", 8), vec!["θεός".to_string()]);
    assert_eq!(koine_matches("qe", 8).first().map(String::as_str), Some("θεός"));
}

#[test]
fn psi_via_digraph_and_shortcut() {
    assert_eq!(koine_matches("psu", 8), vec!["ψυχή".to_string()]);
    assert_eq!(koine_matches("yu", 8), vec!["ψυχή".to_string()]);
}

#[test]
fn rough_breathing_h_is_optional() {
    // "ha" reads as η+α or just α
    let matches = koine_matches("hagap", 8);
    assert!(matches.contains(&"ἀγάπη".to_string()) || matches.contains(&"ἀγαπάω".to_string()));
}

#[test]
fn prefix_shared_by_multiple_lemmas() {
    let matches = koine_matches("agap", 8);
    assert!(matches.contains(&"ἀγάπη".to_string()));
    assert!(matches.contains(&"ἀγαπάω".to_string()));
    assert_eq!(matches.len(), 2);
}

#[test]
fn exact_form_ranks_above_longer_prefix_match() {
    let matches = koine_matches("logos", 8);
    assert_eq!(matches.first().map(String::as_str), Some("λόγος"));
}

#[test]
fn literal_greek_input_still_matches() {
    assert_eq!(koine_matches("λόγος", 8), vec!["λόγος".to_string()]);
    assert_eq!(koine_matches("λογος", 8), vec!["λόγος".to_string()]);
}

#[test]
fn limit_and_uniqueness() {
    let matches = koine_matches("a", 3);
    assert!(matches.len() <= 3);
    let mut deduped = matches.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), matches.len());
}

#[test]
fn unmatched_query_is_empty_not_error() {
    assert!(koine_matches("xyzzy", 8).is_empty());
}

#[test]
fn results_are_drawn_from_candidates() {
    let candidates = lemmas();
    for m in koine_matches("p", 12) {
        assert!(candidates.contains(&m));
    }
}
