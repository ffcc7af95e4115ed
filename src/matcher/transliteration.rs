//! Latin-to-Greek transliteration expansion.
//!
//! Users type romanized Greek ("logos", "agaph", "qeos"), and romanization
//! conventions vary: "th" or "q" for θ, "e" or "ē" for η, "ps" or "y" for ψ.
//! Rather than pick one convention, the matcher enumerates *every* plausible
//! Greek spelling of the input and ranks candidates against each of them.
//!
//! A [`TransliterationTable`] holds two mapping tables:
//!
//! - **Digraphs**: two-letter Latin sequences with Greek possibilities
//!   ("ch" → χ, "th" → θ, ...)
//! - **Single letters**: one-letter mappings, where a possibility may be the
//!   empty string ("h" → η or nothing, since rough breathing is often
//!   romanized as a leading "h" that corresponds to no Greek letter)
//!
//! Expansion is recursive: at each position the digraph table is tried first
//! (every possibility, recursing on the rest), and the single-letter table is
//! *additionally* tried for the leading letter; a letter with no mapping in
//! either table is skipped unmapped. Both interpretations of an ambiguous
//! prefix therefore contribute branches ("ps" yields ψ via the digraph *and*
//! π+σ via the letter table).
//!
//! # Bounded Expansion
//!
//! The branch count is exponential in the number of ambiguous letters, so
//! expansion stops once [`MAX_EXPANSIONS`] spellings have been produced.
//! Real queries are short words and stay far below the cap; hitting it is
//! reported as a `tracing` debug event.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Upper bound on the number of Greek spellings one query may expand into.
///
/// A query with `n` maximally ambiguous letters (3 possibilities each)
/// produces `3^n` spellings; the cap keeps a pathological paste of ~8+
/// ambiguous letters from stalling a keystroke-driven caller.
pub const MAX_EXPANSIONS: usize = 4096;

/// Mapping tables from romanized (Latin-alphabet) text to possible
/// target-script spellings.
///
/// Possibility order within a table entry is preserved: it determines the
/// order in which expansion branches are produced, and thereby which variant
/// is considered first when ranks tie during merging.
///
/// # Example
///
/// ```rust,ignore
/// use morphquery::matcher::TransliterationTable;
///
/// let mut table = TransliterationTable::new();
/// table.map_digraph('t', 'h', "θ");
/// table.map_letter('e', "ε");
/// table.map_letter('o', "ο");
/// table.map_letter('s', "σ");
///
/// let spellings = table.expansions("theos");
/// assert!(spellings.contains(&"θεοσ".to_string()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransliterationTable {
    digraphs: FxHashMap<(char, char), Vec<Box<str>>>,
    single_letters: FxHashMap<char, Vec<Box<str>>>,
}

impl TransliterationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a possibility for a two-letter Latin sequence.
    ///
    /// Calling this repeatedly for the same sequence accumulates
    /// possibilities in call order.
    pub fn map_digraph(&mut self, first: char, second: char, replacement: &str) {
        self.digraphs
            .entry((first, second))
            .or_default()
            .push(replacement.into());
    }

    /// Add a possibility for a single Latin letter.
    ///
    /// An empty `replacement` means the letter may correspond to nothing in
    /// the target script (silent letters, breathing marks).
    pub fn map_letter(&mut self, letter: char, replacement: &str) {
        self.single_letters
            .entry(letter)
            .or_default()
            .push(replacement.into());
    }

    /// Standard romanization table for Koine Greek.
    ///
    /// Covers the common conventions side by side: aspirated digraphs
    /// (ch/ph/th), "ps" for ψ, Beta-code-style shortcuts (q → θ, j → ξ,
    /// v/w → ω or final σ, y → ψ), macron vowels (ē → η, ō → ω), and the
    /// vowels that are genuinely ambiguous without macrons (o → ο or ω).
    pub fn koine_greek() -> Self {
        let mut table = Self::new();

        table.map_digraph('c', 'h', "χ");
        table.map_digraph('p', 'h', "φ");
        table.map_digraph('p', 's', "ψ");
        table.map_digraph('t', 'h', "θ");

        table.map_letter('a', "α");
        table.map_letter('b', "β");
        table.map_letter('c', "χ");
        table.map_letter('c', "ψ");
        table.map_letter('d', "δ");
        table.map_letter('e', "ε");
        table.map_letter('ē', "η");
        table.map_letter('f', "φ");
        table.map_letter('g', "γ");
        table.map_letter('h', "η");
        table.map_letter('h', "");
        table.map_letter('i', "ι");
        table.map_letter('j', "");
        table.map_letter('j', "ξ");
        table.map_letter('k', "κ");
        table.map_letter('l', "λ");
        table.map_letter('m', "μ");
        table.map_letter('n', "ν");
        table.map_letter('o', "ο");
        table.map_letter('o', "ω");
        table.map_letter('ō', "ω");
        table.map_letter('p', "π");
        table.map_letter('q', "θ");
        table.map_letter('q', "");
        table.map_letter('r', "ρ");
        table.map_letter('s', "σ");
        table.map_letter('t', "τ");
        table.map_letter('u', "υ");
        table.map_letter('u', "θ");
        table.map_letter('v', "σ");
        table.map_letter('v', "ω");
        table.map_letter('v', "");
        table.map_letter('w', "ω");
        table.map_letter('w', "σ");
        table.map_letter('x', "ξ");
        table.map_letter('x', "χ");
        table.map_letter('y', "ψ");
        table.map_letter('y', "υ");
        table.map_letter('z', "ζ");

        table
    }

    /// Enumerate every plausible target-script spelling of `query`.
    ///
    /// Returns at most [`MAX_EXPANSIONS`] spellings. The same spelling may
    /// appear more than once when distinct branch sequences converge on it;
    /// downstream ranking deduplicates candidates, not spellings.
    ///
    /// An empty query, or a query whose letters all map to the empty string,
    /// produces no spellings.
    pub fn expansions(&self, query: &str) -> Vec<String> {
        let letters: SmallVec<[char; 24]> = query.chars().collect();
        let mut spellings = Vec::new();
        let mut accumulated = String::new();
        self.expand(&letters, &mut accumulated, &mut spellings);
        if spellings.len() >= MAX_EXPANSIONS {
            tracing::debug!(
                query,
                cap = MAX_EXPANSIONS,
                "transliteration expansion truncated at cap"
            );
        }
        spellings
    }

    fn expand(&self, rest: &[char], accumulated: &mut String, out: &mut Vec<String>) {
        if out.len() >= MAX_EXPANSIONS {
            return;
        }
        let (&letter, tail) = match rest.split_first() {
            Some(split) => split,
            None => {
                if !accumulated.is_empty() {
                    out.push(accumulated.clone());
                }
                return;
            }
        };

        let mut mapped = false;

        if let Some(&second) = tail.first() {
            if let Some(possibilities) = self.digraphs.get(&(letter, second)) {
                mapped = true;
                for possibility in possibilities {
                    let mark = accumulated.len();
                    accumulated.push_str(possibility);
                    self.expand(&tail[1..], accumulated, out);
                    accumulated.truncate(mark);
                }
            }
        }

        if let Some(possibilities) = self.single_letters.get(&letter) {
            mapped = true;
            for possibility in possibilities {
                let mark = accumulated.len();
                accumulated.push_str(possibility);
                self.expand(tail, accumulated, out);
                accumulated.truncate(mark);
            }
        }

        if !mapped {
            // Unmappable letter (digits, punctuation): skip it without
            // emitting anything rather than failing the whole expansion.
            self.expand(tail, accumulated, out);
        }
    }
}
