//! Property tests for the transliteration-aware matcher.

use proptest::prelude::*;

use morphquery::prelude::*;

fn greek_form() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        proptest::sample::select(vec![
            'α', 'β', 'γ', 'δ', 'ε', 'η', 'θ', 'ι', 'κ', 'λ', 'μ', 'ν', 'ο', 'π', 'ρ', 'σ',
            'τ', 'υ', 'φ', 'χ', 'ψ', 'ω',
        ]),
        1..8,
    )
    .prop_map(|letters| letters.into_iter().collect())
}

fn latin_query() -> impl Strategy<Value = String> {
    "[a-z]{0,6}"
}

proptest! {
    #[test]
    fn result_never_exceeds_limit(
        candidates in proptest::collection::vec(greek_form(), 0..20),
        query in latin_query(),
        limit in 0usize..10,
    ) {
        let table = TransliterationTable::koine_greek();
        let matcher = TransliteratedMatcher::new(&table);
        let matches = matcher.matches(&candidates, &query, limit);
        prop_assert!(matches.len() <= limit);
    }

    #[test]
    fn result_contains_no_duplicates(
        candidates in proptest::collection::vec(greek_form(), 0..20),
        // The empty-query passthrough intentionally does not deduplicate
        query in "[a-z]{1,6}",
    ) {
        let table = TransliterationTable::koine_greek();
        let matcher = TransliteratedMatcher::new(&table);
        let matches = matcher.matches(&candidates, &query, 50);
        let mut deduped = matches.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), matches.len());
    }

    #[test]
    fn results_are_drawn_from_candidates(
        candidates in proptest::collection::vec(greek_form(), 0..20),
        query in latin_query(),
    ) {
        let table = TransliterationTable::koine_greek();
        let matcher = TransliteratedMatcher::new(&table);
        for m in matcher.matches(&candidates, &query, 50) {
            prop_assert!(candidates.contains(&m));
        }
    }

    #[test]
    fn empty_query_is_a_passthrough(
        candidates in proptest::collection::vec(greek_form(), 0..20),
        limit in 0usize..30,
    ) {
        let table = TransliterationTable::koine_greek();
        let matcher = TransliteratedMatcher::new(&table);
        let matches = matcher.matches(&candidates, "", limit);
        let expected: Vec<String> = candidates.iter().take(limit).cloned().collect();
        prop_assert_eq!(matches, expected);
    }

    #[test]
    fn expansion_count_is_bounded(query in "[a-z]{0,16}") {
        let table = TransliterationTable::koine_greek();
        prop_assert!(table.expansions(&query).len() <= MAX_EXPANSIONS);
    }

    #[test]
    fn matching_never_panics_on_arbitrary_input(
        candidates in proptest::collection::vec(".{0,12}", 0..10),
        query in ".{0,12}",
    ) {
        let table = TransliterationTable::koine_greek();
        let matcher = TransliteratedMatcher::new(&table);
        let _ = matcher.matches(&candidates, &query, 8);
    }
}
