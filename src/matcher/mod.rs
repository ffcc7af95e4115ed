//! Transliteration-aware fuzzy matching for autocomplete.
//!
//! This module implements the candidate matcher behind lexical-form and
//! inflected-form autocomplete: the user types romanized Greek, and the
//! matcher finds the best Greek forms among the cached candidates.
//!
//! The pipeline, per query:
//!
//! 1. Lowercase the query and [expand](transliteration) it into every
//!    plausible Greek spelling (the literal query is kept as one spelling so
//!    Greek-keyboard input still matches).
//! 2. [Rank](ranking) every candidate against each spelling independently,
//!    keeping substring matches and better, sorted best-first.
//! 3. Merge the per-spelling lists by repeatedly taking the best remaining
//!    head across all of them, skipping candidates already selected, until
//!    the match limit is reached or every list is exhausted.
//!
//! The matcher is a pure function of its inputs: no interior state, no I/O,
//! safe to call concurrently from any number of callers.

pub mod normalize;
pub mod ranking;
pub mod transliteration;

pub use ranking::{rank_match, MatchRank, RankedCandidate};
pub use transliteration::{TransliterationTable, MAX_EXPANSIONS};

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use normalize::fold_for_comparison;
use ranking::compare_best_first;

/// Fuzzy matcher over target-script candidate forms, aware of
/// transliteration ambiguity in the query.
///
/// Borrows its [`TransliterationTable`] so one table (typically a static
/// per-text configuration) can serve any number of matchers and calls.
///
/// # Example
///
/// ```rust,ignore
/// use morphquery::prelude::*;
///
/// let table = TransliterationTable::koine_greek();
/// let matcher = TransliteratedMatcher::new(&table);
///
/// let forms = vec!["λόγος".to_string(), "ἀγάπη".to_string()];
/// assert_eq!(matcher.matches(&forms, "log", 8), vec!["λόγος".to_string()]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TransliteratedMatcher<'a> {
    table: &'a TransliterationTable,
}

impl<'a> TransliteratedMatcher<'a> {
    /// Create a matcher using the given transliteration table
    pub fn new(table: &'a TransliterationTable) -> Self {
        Self { table }
    }

    /// Return up to `max_matches` candidates best matching `query`, ranked.
    ///
    /// An empty query short-circuits: no ranking is performed and the first
    /// `max_matches` candidates are returned in their existing order, which
    /// is what an autocomplete dropdown should show before the user has
    /// typed anything.
    ///
    /// The result contains no duplicate strings even when several query
    /// spellings match the same candidate, and never exceeds `max_matches`
    /// entries. A query matching nothing yields an empty result; no input
    /// is an error.
    pub fn matches(
        &self,
        candidates: &[String],
        query: &str,
        max_matches: usize,
    ) -> Vec<String> {
        if query.is_empty() {
            return candidates.iter().take(max_matches).cloned().collect();
        }

        let query = query.to_lowercase();

        // The literal query is ranked alongside its expansions so input
        // already in the target script keeps working.
        let mut spellings = vec![query.clone()];
        spellings.extend(self.table.expansions(&query));

        let folded: Vec<String> = candidates
            .iter()
            .map(|c| fold_for_comparison(c))
            .collect();

        let mut per_spelling: Vec<VecDeque<RankedCandidate>> = spellings
            .iter()
            .map(|spelling| {
                let folded_spelling = fold_for_comparison(spelling);
                let mut ranked: Vec<RankedCandidate> = folded
                    .iter()
                    .enumerate()
                    .filter_map(|(index, candidate)| {
                        let rank = rank_match(candidate, &folded_spelling);
                        (rank >= MatchRank::Contains)
                            .then_some(RankedCandidate { index, rank })
                    })
                    .collect();
                ranked.sort_by(|a, b| compare_best_first(a, b, candidates));
                ranked.into()
            })
            .collect();

        // Top-K merge: take the best head across all spelling lists. Ties
        // go to the earliest spelling, which makes branch order in the
        // transliteration table the final tie-break.
        let mut selected: Vec<String> = Vec::new();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        while selected.len() < max_matches {
            let mut best: Option<(usize, RankedCandidate)> = None;
            for (list_index, list) in per_spelling.iter().enumerate() {
                let Some(&head) = list.front() else {
                    continue;
                };
                best = match best {
                    Some((_, best_head))
                        if compare_best_first(&head, &best_head, candidates).is_ge() =>
                    {
                        best
                    }
                    _ => Some((list_index, head)),
                };
            }

            let Some((list_index, head)) = best else {
                break;
            };
            per_spelling[list_index].pop_front();
            let form = candidates[head.index].as_str();
            if seen.insert(form) {
                selected.push(form.to_string());
            }
        }

        selected
    }
}
