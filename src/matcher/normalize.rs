//! Comparison normalization for Greek text.
//!
//! A polytonic Greek form carries accents, breathing marks, and
//! iota-subscripts the user will never type, and uses the final-sigma
//! letterform ς where a romanized query maps to σ. All ranking therefore
//! happens on folded strings: NFD-decomposed with combining marks stripped,
//! lowercased, with final sigma mapped to its canonical form.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block (U+0300–U+036F).
///
/// After NFD decomposition, every polytonic Greek accent and breathing mark
/// lands in this range.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Fold a string for ranking comparisons.
///
/// Decomposes (NFD), strips combining diacritical marks, lowercases, and
/// maps final sigma (ς) to σ.
///
/// # Example
///
/// ```rust,ignore
/// use morphquery::matcher::normalize::fold_for_comparison;
///
/// assert_eq!(fold_for_comparison("λόγος"), "λογοσ");
/// assert_eq!(fold_for_comparison("Ἀγάπη"), "αγαπη");
/// ```
pub fn fold_for_comparison(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

/// Deterministic ordering for ranked candidates with equal rank.
///
/// Compares folded forms first so "ἀγάπη" and "αγαπη" order by their letters
/// rather than their accents, then falls back to raw string order so the
/// result is a total order even for forms that fold identically.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold_for_comparison(a)
        .cmp(&fold_for_comparison(b))
        .then_with(|| a.cmp(b))
}
