//! Output rendering for solved puzzles.
//!
//! One line per input word, in original input order: the start/end coordinate
//! pair `(r1,c1)(r2,c2)` for a found word, or the literal `NOT FOUND` marker.
//! Outcomes are keyed by word text, so duplicate input words each re-emit the
//! single recorded outcome.

use crate::solver::{Outcomes, SearchOutcome};
use std::io;

/// The fixed marker emitted for a word with no placement.
pub const NOT_FOUND: &str = "NOT FOUND";

/// Renders one output line for `word`.
///
/// A word missing from the map renders as [`NOT_FOUND`]; the solver always
/// produces an entry per word, but the writer does not panic on a gap.
#[must_use]
pub fn outcome_line(word: &str, outcomes: &Outcomes) -> String {
    match outcomes.get(word) {
        Some(SearchOutcome::Found { start, end }) => format!("{start}{end}"),
        Some(SearchOutcome::NotFound) | None => NOT_FOUND.to_string(),
    }
}

/// Renders the output lines for `words` in their original order.
#[must_use]
pub fn render_lines(words: &[String], outcomes: &Outcomes) -> Vec<String> {
    words
        .iter()
        .map(|word| outcome_line(word, outcomes))
        .collect()
}

/// Writes one line per word to `out`, in original order.
///
/// # Errors
///
/// Propagates any I/O error from `out`.
pub fn write_results<W: io::Write>(
    out: &mut W,
    words: &[String],
    outcomes: &Outcomes,
) -> io::Result<()> {
    for word in words {
        writeln!(out, "{}", outcome_line(word, outcomes))?;
    }
    Ok(())
}
