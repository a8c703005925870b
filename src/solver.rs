//! The search engine: finds every word's placement in a parsed puzzle.
//!
//! Solving cannot fail — any [`Puzzle`] that passed parsing is solvable,
//! possibly with every word reported as [`SearchOutcome::NotFound`]. The
//! engine is a pure function of the immutable puzzle plus its own scratch
//! state, so running it twice yields identical outcomes.
//!
//! # Determinism
//!
//! Results are bit-for-bit reproducible: start cells are scanned in row-major
//! order, directions in the fixed [`DIRECTIONS`] order, and candidate words
//! in ascending-length order. Letters are greedily claimed the first time
//! they complete a match, so a later-discovered word can never reuse a cell —
//! two words that could validly overlap may report one as not found purely
//! due to scan order. That scan-order dependency is part of the contract.
//!
//! # Examples
//!
//! ```
//! use gridseek::{parser, solver};
//! use gridseek::solver::SearchOutcome;
//!
//! let puzzle = parser::parse_str("2 2\nAB\nCD\nNO_WRAP\n1\nAB\n")?;
//! let outcomes = solver::solve(&puzzle);
//!
//! match outcomes["AB"] {
//!     SearchOutcome::Found { start, end } => println!("{start}{end}"),
//!     SearchOutcome::NotFound => println!("NOT FOUND"),
//! }
//! # Ok::<(), Box<gridseek::errors::ParseError>>(())
//! ```

use crate::puzzle::{Coord, Puzzle, DIRECTIONS};
use log::debug;
use std::collections::{HashMap, HashSet};

/// The per-word result of solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The word was placed; `start` is its first letter's cell, `end` its
    /// last letter's cell.
    Found { start: Coord, end: Coord },
    /// No straight line spells the word.
    NotFound,
}

/// Outcomes keyed by word text. Duplicate input words share one entry; the
/// writer re-emits the shared outcome for each occurrence.
pub type Outcomes = HashMap<String, SearchOutcome>;

/// A word still waiting to be found. Letters are kept pre-split so prefix
/// tests compare cells, not bytes.
struct WordTask {
    text: String,
    letters: Vec<char>,
}

/// Solves the puzzle, producing an outcome for every distinct word.
///
/// Scans every start cell in row-major order and grows one candidate path
/// per direction, bounded by the grid edge (or a wrap cycle), cells already
/// claimed by earlier matches, and the longest word's length. The
/// first not-yet-found word that is a prefix of a candidate claims the
/// candidate's cells; the scan terminates early once every word is found.
#[must_use]
pub fn solve(puzzle: &Puzzle) -> Outcomes {
    let mut outcomes = Outcomes::new();

    // Distinct tasks in first-occurrence order, then stably sorted by length
    // so shorter words always get first claim on a candidate.
    let mut seen = HashSet::new();
    let mut tasks: Vec<WordTask> = puzzle
        .words
        .iter()
        .filter(|word| seen.insert(word.as_str()))
        .map(|word| WordTask {
            text: word.clone(),
            letters: word.chars().collect(),
        })
        .collect();
    tasks.sort_by_key(|task| task.letters.len());

    let Some(min_len) = tasks.first().map(|task| task.letters.len()) else {
        // Zero words: nothing to search for.
        return outcomes;
    };
    let max_len = tasks
        .last()
        .map(|task| task.letters.len())
        .unwrap_or(min_len);

    // One owned row of flags per grid row; scratch state for this call only.
    let mut covered = vec![vec![false; puzzle.cols]; puzzle.rows];

    'scan: for row in 0..puzzle.rows {
        for col in 0..puzzle.cols {
            let start = Coord::new(row, col);
            for direction in DIRECTIONS {
                let path = grow_path(puzzle, start, direction, &covered, max_len);
                if path.len() < min_len {
                    // Too short for even the shortest word; never tested.
                    continue;
                }
                let candidate: Vec<char> =
                    path.iter().map(|&coord| puzzle.letter(coord)).collect();

                // First remaining word that prefixes the candidate wins it.
                let Some(matched) = tasks
                    .iter()
                    .position(|task| candidate.starts_with(&task.letters))
                else {
                    continue;
                };
                let task = tasks.remove(matched);
                let len = task.letters.len();
                for &coord in &path[..len] {
                    covered[coord.row][coord.col] = true;
                }
                debug!("found {} at {} -> {}", task.text, path[0], path[len - 1]);
                outcomes.insert(
                    task.text,
                    SearchOutcome::Found {
                        start: path[0],
                        end: path[len - 1],
                    },
                );
                if tasks.is_empty() {
                    break 'scan;
                }
            }
        }
    }

    for task in tasks {
        debug!("no placement for {}", task.text);
        outcomes.insert(task.text, SearchOutcome::NotFound);
    }
    outcomes
}

/// Grows the candidate path from `start` along `direction`.
///
/// Growth stops when the path would exceed `max_len`, when a step leaves the
/// grid (clipped addressing), when a wrapped step re-enters the path already
/// built (prevents an infinite loop on a toroidal cycle), or when the next
/// cell is already covered. The start cell itself is always taken.
fn grow_path(
    puzzle: &Puzzle,
    start: Coord,
    direction: (isize, isize),
    covered: &[Vec<bool>],
    max_len: usize,
) -> Vec<Coord> {
    let mut path = vec![start];
    let mut last = start;
    loop {
        let Some(next) = puzzle.step(last, direction) else {
            break; // ran off the end of the grid
        };
        if puzzle.wrap && path.contains(&next) {
            break; // don't include a letter twice
        }
        if covered[next.row][next.col] {
            break; // ran into a letter that's already used
        }
        if path.len() == max_len {
            break; // path as long as the longest word
        }
        path.push(next);
        last = next;
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    fn found(outcomes: &Outcomes, word: &str) -> (Coord, Coord) {
        match outcomes[word] {
            SearchOutcome::Found { start, end } => (start, end),
            SearchOutcome::NotFound => panic!("{word} should have been found"),
        }
    }

    #[test]
    fn test_finds_word_along_a_row() {
        let puzzle = parse_str("2 2\nAB\nCD\nNO_WRAP\n1\nAB\n").unwrap();
        let outcomes = solve(&puzzle);
        assert_eq!(found(&outcomes, "AB"), (Coord::new(0, 0), Coord::new(0, 1)));
    }

    #[test]
    fn test_finds_word_along_a_diagonal() {
        let puzzle = parse_str("2 2\nAB\nCD\nNO_WRAP\n1\nAD\n").unwrap();
        let outcomes = solve(&puzzle);
        assert_eq!(found(&outcomes, "AD"), (Coord::new(0, 0), Coord::new(1, 1)));
    }

    #[test]
    fn test_finds_word_read_backwards() {
        let puzzle = parse_str("3 3\nABC\nDEF\nGHI\nNO_WRAP\n1\nFED\n").unwrap();
        let outcomes = solve(&puzzle);
        assert_eq!(
            found(&outcomes, "FED"),
            (Coord::new(1, 2), Coord::new(1, 0))
        );
    }

    #[test]
    fn test_absent_word_is_not_found() {
        let puzzle = parse_str("2 2\nAB\nCD\nNO_WRAP\n1\nABD\n").unwrap();
        let outcomes = solve(&puzzle);
        assert_eq!(outcomes["ABD"], SearchOutcome::NotFound);
    }

    #[test]
    fn test_single_letter_word_has_start_equal_end() {
        let puzzle = parse_str("2 2\nAB\nCD\nNO_WRAP\n1\nD\n").unwrap();
        let outcomes = solve(&puzzle);
        let (start, end) = found(&outcomes, "D");
        assert_eq!(start, end);
        assert_eq!(start, Coord::new(1, 1));
    }

    #[test]
    fn test_single_cell_grid_with_wrap() {
        let puzzle = parse_str("1 1\nA\nWRAP\n1\nA\n").unwrap();
        let outcomes = solve(&puzzle);
        assert_eq!(found(&outcomes, "A"), (Coord::new(0, 0), Coord::new(0, 0)));
    }

    #[test]
    fn test_wrap_cannot_revisit_a_cell_within_one_path() {
        // the doubled letter exists only if the path could re-enter (0,0)
        let puzzle = parse_str("1 1\nA\nWRAP\n1\nAA\n").unwrap();
        let outcomes = solve(&puzzle);
        assert_eq!(outcomes["AA"], SearchOutcome::NotFound);
    }

    #[test]
    fn test_wrap_finds_word_across_the_edge() {
        let puzzle = parse_str("3 3\nABC\nDEF\nGHI\nWRAP\n1\nCAB\n").unwrap();
        let outcomes = solve(&puzzle);
        assert_eq!(
            found(&outcomes, "CAB"),
            (Coord::new(0, 2), Coord::new(0, 1))
        );
    }

    #[test]
    fn test_without_wrap_word_across_the_edge_is_not_found() {
        let puzzle = parse_str("3 3\nABC\nDEF\nGHI\nNO_WRAP\n1\nCAB\n").unwrap();
        let outcomes = solve(&puzzle);
        assert_eq!(outcomes["CAB"], SearchOutcome::NotFound);
    }

    #[test]
    fn test_claimed_cells_block_later_words() {
        // CAB is discovered first (start (0,2) precedes (2,0) in row-major
        // order) and claims the whole top row, so GAD loses its A at (0,0).
        let puzzle = parse_str("3 3\nABC\nDEF\nGHI\nWRAP\n2\nCAB\nGAD\n").unwrap();
        let outcomes = solve(&puzzle);
        assert_eq!(
            found(&outcomes, "CAB"),
            (Coord::new(0, 2), Coord::new(0, 1))
        );
        assert_eq!(outcomes["GAD"], SearchOutcome::NotFound);
    }

    #[test]
    fn test_without_the_competitor_the_blocked_word_is_found() {
        let puzzle = parse_str("3 3\nABC\nDEF\nGHI\nWRAP\n1\nGAD\n").unwrap();
        let outcomes = solve(&puzzle);
        assert_eq!(
            found(&outcomes, "GAD"),
            (Coord::new(2, 0), Coord::new(1, 0))
        );
    }

    #[test]
    fn test_zero_words_yields_empty_outcomes() {
        let puzzle = parse_str("2 2\nAB\nCD\nNO_WRAP\n0\n").unwrap();
        assert!(solve(&puzzle).is_empty());
    }

    #[test]
    fn test_duplicate_words_share_one_outcome() {
        let puzzle = parse_str("2 2\nAB\nCD\nNO_WRAP\n2\nAB\nAB\n").unwrap();
        let outcomes = solve(&puzzle);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(found(&outcomes, "AB"), (Coord::new(0, 0), Coord::new(0, 1)));
    }

    #[test]
    fn test_solve_is_idempotent() {
        let puzzle = parse_str("3 3\nABC\nDEF\nGHI\nWRAP\n3\nFED\nCAB\nGAD\n").unwrap();
        assert_eq!(solve(&puzzle), solve(&puzzle));
    }

    #[test]
    fn test_no_wrap_paths_stay_in_bounds() {
        let puzzle = parse_str("4 3\nABC\nDEF\nGHI\nJKL\nNO_WRAP\n3\nAEI\nLKJ\nJHF\n").unwrap();
        for outcome in solve(&puzzle).values() {
            if let SearchOutcome::Found { start, end } = outcome {
                assert!(start.row < puzzle.rows && start.col < puzzle.cols);
                assert!(end.row < puzzle.rows && end.col < puzzle.cols);
            }
        }
    }

    #[test]
    fn test_every_word_gets_an_outcome() {
        let puzzle =
            parse_str("3 3\nABC\nDEF\nGHI\nNO_WRAP\n4\nFED\nCAB\nGAD\nXYZ\n").unwrap();
        let outcomes = solve(&puzzle);
        for word in &puzzle.words {
            assert!(outcomes.contains_key(word), "missing outcome for {word}");
        }
    }
}
