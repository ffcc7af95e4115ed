//! Ranking of candidate forms against one query spelling.
//!
//! Each candidate is scored against a single query spelling (the typed query
//! or one of its transliteration expansions) with a small ordinal scale
//! tuned for single-word autocomplete: an exact match beats a prefix match,
//! a prefix match beats a substring match, and anything below a substring
//! match is discarded.

use std::cmp::Ordering;

use super::normalize::collate;

/// How well a query spelling matched a candidate form.
///
/// Ordered from worst to best so `Ord` agrees with "higher rank is better".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchRank {
    /// No usable match; the candidate is dropped
    NoMatch,
    /// The query spelling occurs somewhere inside the candidate
    Contains,
    /// The candidate begins with the query spelling
    StartsWith,
    /// The candidate and the query spelling are identical
    Exact,
}

/// Score one candidate form against one query spelling.
///
/// Both arguments must already be folded with
/// [`fold_for_comparison`](super::normalize::fold_for_comparison); this
/// function does no normalization of its own.
///
/// A spelling longer than the candidate can never match (the user typed more
/// letters than the form has), so it ranks [`MatchRank::NoMatch`]
/// immediately.
pub fn rank_match(candidate: &str, spelling: &str) -> MatchRank {
    if spelling.chars().count() > candidate.chars().count() {
        return MatchRank::NoMatch;
    }
    if candidate == spelling {
        return MatchRank::Exact;
    }
    if candidate.starts_with(spelling) {
        return MatchRank::StartsWith;
    }
    if candidate.contains(spelling) {
        return MatchRank::Contains;
    }
    MatchRank::NoMatch
}

/// A candidate (by index into the shared candidate list) with its rank
/// against one query spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedCandidate {
    /// Index into the candidate list
    pub index: usize,
    /// Rank against the spelling this list was built for
    pub rank: MatchRank,
}

/// Best-first comparison of two ranked candidates.
///
/// # Ordering Guarantees
///
/// 1. **Primary:** Higher rank first (exact, then prefix, then substring)
/// 2. **Secondary:** Collation of the candidate forms (diacritic-insensitive,
///    then raw) — a deterministic stand-in for locale-aware ordering
///
/// The same comparison is used both to sort a single spelling's matches and
/// to pick the best head across spellings during merging, so the merged
/// output observes one consistent order.
pub fn compare_best_first(
    a: &RankedCandidate,
    b: &RankedCandidate,
    candidates: &[String],
) -> Ordering {
    b.rank
        .cmp(&a.rank)
        .then_with(|| collate(&candidates[a.index], &candidates[b.index]))
}
