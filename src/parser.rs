//! `parser` — incremental, line-oriented puzzle parser.
//!
//! The input format is one logical field per line, in fixed section order:
//!
//! ```text
//! <rows> <cols>
//! <row line 1>          (exactly cols characters)
//! ...
//! <row line rows>
//! WRAP | NO_WRAP
//! <word count n>
//! <word 1>
//! ...
//! <word n>
//! ```
//!
//! The parser is a finite state machine over an explicit [`Stage`] enum; each
//! call to [`PuzzleParser::feed`] consumes one line, validates it against the
//! current stage, and either advances or fails with a structured
//! [`ParseError`]. Blank (whitespace-only) lines are ignored in every stage —
//! they never advance state and are never counted.
//!
//! Validation failures are hard, propagated errors: a grid row of the wrong
//! width or a bad wrap token fails immediately rather than leaving the
//! machine stuck. Once the final word line has been read the parser reaches
//! [`Stage::Ready`] and any further non-blank line is rejected.

use crate::errors::ParseError;
use crate::puzzle::Puzzle;

/// The section of the input the parser is currently reading.
///
/// Transition order is fixed: `Shape → Grid → Wrap → WordCount → Words →
/// Ready`, with `WordCount` jumping straight to `Ready` when the declared
/// count is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Shape,
    Grid,
    Wrap,
    WordCount,
    Words,
    Ready,
}

impl Stage {
    /// Human-readable name used in incomplete-input errors.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Stage::Shape => "the shape line",
            Stage::Grid => "grid rows",
            Stage::Wrap => "the wrap token",
            Stage::WordCount => "the word count",
            Stage::Words => "word lines",
            Stage::Ready => "ready",
        }
    }
}

/// Stateful parser that accumulates a [`Puzzle`] one line at a time.
#[derive(Debug)]
pub struct PuzzleParser {
    stage: Stage,
    rows: usize,
    cols: usize,
    grid: Vec<Vec<char>>,
    wrap: bool,
    word_count: usize,
    words: Vec<String>,
}

impl Default for PuzzleParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Shape,
            rows: 0,
            cols: 0,
            grid: Vec::new(),
            wrap: false,
            word_count: 0,
            words: Vec::new(),
        }
    }

    /// The stage the parser is currently in.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// True once every section has been read; streaming callers can stop
    /// feeding lines at this point and call [`PuzzleParser::finish`].
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.stage == Stage::Ready
    }

    /// Consumes one input line (without its terminator).
    ///
    /// Whitespace-only lines are ignored in every stage. Anything else must
    /// be valid for the current stage.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] matching the stage whose validation failed,
    /// or [`ParseError::UnexpectedInput`] when the puzzle is already
    /// complete. All errors are fatal to the current puzzle.
    pub fn feed(&mut self, line: &str) -> Result<(), Box<ParseError>> {
        // Blank lines never advance state, in any stage.
        if line.trim().is_empty() {
            return Ok(());
        }

        match self.stage {
            Stage::Shape => self.read_shape(line),
            Stage::Grid => self.read_grid_row(line),
            Stage::Wrap => self.read_wrap(line),
            Stage::WordCount => self.read_word_count(line),
            Stage::Words => {
                // Words are taken raw; only the line terminator was stripped.
                self.words.push(line.to_string());
                if self.words.len() == self.word_count {
                    self.stage = Stage::Ready;
                }
                Ok(())
            }
            Stage::Ready => Err(Box::new(ParseError::UnexpectedInput {
                line: line.to_string(),
            })),
        }
    }

    /// Finalizes parsing and hands out the immutable [`Puzzle`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::IncompleteInput`] naming the stage reached if
    /// the input ended before every section was read.
    pub fn finish(self) -> Result<Puzzle, Box<ParseError>> {
        if self.stage != Stage::Ready {
            return Err(Box::new(ParseError::IncompleteInput {
                stage: self.stage.name(),
            }));
        }
        Ok(Puzzle {
            rows: self.rows,
            cols: self.cols,
            grid: self.grid,
            wrap: self.wrap,
            words: self.words,
        })
    }

    fn read_shape(&mut self, line: &str) -> Result<(), Box<ParseError>> {
        let malformed = || {
            Box::new(ParseError::MalformedShape {
                line: line.to_string(),
            })
        };

        let mut fields = line.split_whitespace();
        let (rows, cols) = match (fields.next(), fields.next(), fields.next()) {
            (Some(r), Some(c), None) => (
                parse_count(r).ok_or_else(malformed)?,
                parse_count(c).ok_or_else(malformed)?,
            ),
            _ => return Err(malformed()),
        };
        if rows == 0 || cols == 0 {
            return Err(malformed());
        }

        self.rows = rows;
        self.cols = cols;
        self.grid = Vec::with_capacity(rows);
        self.stage = Stage::Grid;
        Ok(())
    }

    fn read_grid_row(&mut self, line: &str) -> Result<(), Box<ParseError>> {
        // Rows are taken raw — no trimming of interior content.
        let row: Vec<char> = line.chars().collect();
        if row.len() != self.cols {
            return Err(Box::new(ParseError::MalformedRow {
                line: line.to_string(),
                expected: self.cols,
                actual: row.len(),
            }));
        }
        self.grid.push(row);
        if self.grid.len() == self.rows {
            self.stage = Stage::Wrap;
        }
        Ok(())
    }

    fn read_wrap(&mut self, line: &str) -> Result<(), Box<ParseError>> {
        self.wrap = match line {
            "WRAP" => true,
            "NO_WRAP" => false,
            _ => {
                return Err(Box::new(ParseError::MalformedWrapToken {
                    line: line.to_string(),
                }))
            }
        };
        self.stage = Stage::WordCount;
        Ok(())
    }

    fn read_word_count(&mut self, line: &str) -> Result<(), Box<ParseError>> {
        let count = parse_count(line.trim()).ok_or_else(|| {
            Box::new(ParseError::MalformedWordCount {
                line: line.to_string(),
            })
        })?;
        self.word_count = count;
        self.words = Vec::with_capacity(count);
        // Zero words is legal: the puzzle is complete right after the count.
        self.stage = if count == 0 { Stage::Ready } else { Stage::Words };
        Ok(())
    }
}

/// Parses a plain decimal count. `usize::from_str` would also accept a
/// leading `+`, which is not a literal non-negative integer, so the field
/// must be digits only.
fn parse_count(field: &str) -> Option<usize> {
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Parses a complete puzzle from an in-memory string.
///
/// Feeds every line to a fresh [`PuzzleParser`] and finalizes it, so trailing
/// non-blank content after the last word is rejected just like any other
/// out-of-place line.
///
/// # Errors
///
/// Returns the first [`ParseError`] raised by any line, or
/// [`ParseError::IncompleteInput`] if the text ends mid-puzzle.
pub fn parse_str(contents: &str) -> Result<Puzzle, Box<ParseError>> {
    let mut parser = PuzzleParser::new();
    for line in contents.lines() {
        parser.feed(line)?;
    }
    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = "2 2\nAB\nCD\nNO_WRAP\n1\nAB\n";

    #[test]
    fn test_parse_basic_puzzle() {
        let puzzle = parse_str(BASIC).unwrap();
        assert_eq!(puzzle.rows, 2);
        assert_eq!(puzzle.cols, 2);
        assert_eq!(puzzle.grid, vec![vec!['A', 'B'], vec!['C', 'D']]);
        assert!(!puzzle.wrap);
        assert_eq!(puzzle.words, vec!["AB"]);
    }

    #[test]
    fn test_stage_transitions_in_fixed_order() {
        let mut parser = PuzzleParser::new();
        assert_eq!(parser.stage(), Stage::Shape);
        parser.feed("2 2").unwrap();
        assert_eq!(parser.stage(), Stage::Grid);
        parser.feed("AB").unwrap();
        assert_eq!(parser.stage(), Stage::Grid);
        parser.feed("CD").unwrap();
        assert_eq!(parser.stage(), Stage::Wrap);
        parser.feed("WRAP").unwrap();
        assert_eq!(parser.stage(), Stage::WordCount);
        parser.feed("1").unwrap();
        assert_eq!(parser.stage(), Stage::Words);
        parser.feed("AB").unwrap();
        assert!(parser.is_ready());
    }

    #[test]
    fn test_blank_lines_ignored_in_every_stage() {
        let input = "\n2 2\n  \nAB\n\nCD\n\nNO_WRAP\n\n1\n\t\nAB\n\n";
        let puzzle = parse_str(input).unwrap();
        assert_eq!(puzzle.words, vec!["AB"]);
    }

    #[test]
    fn test_zero_word_count_goes_straight_to_ready() {
        let puzzle = parse_str("1 1\nA\nWRAP\n0\n").unwrap();
        assert!(puzzle.words.is_empty());
        assert!(puzzle.wrap);
    }

    #[test]
    fn test_malformed_shape() {
        for line in ["abc", "3", "3 4 5", "3 x", "0 4", "4 0", "-1 4", "+3 4"] {
            let mut parser = PuzzleParser::new();
            let err = parser.feed(line).unwrap_err();
            assert!(
                matches!(*err, ParseError::MalformedShape { .. }),
                "line {line:?} should be a malformed shape, got {err:?}"
            );
        }
    }

    #[test]
    fn test_malformed_row_is_a_hard_error() {
        // declared 3 columns, row of length 4
        let err = parse_str("3 4\nABC\n").unwrap_err();
        match *err {
            ParseError::MalformedRow { expected, actual, .. } => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_wrap_token_must_match_exactly() {
        for line in ["wrap", "WRAP ", "NOWRAP", "NO WRAP", "YES"] {
            let mut parser = PuzzleParser::new();
            parser.feed("1 1").unwrap();
            parser.feed("A").unwrap();
            let err = parser.feed(line).unwrap_err();
            assert!(matches!(*err, ParseError::MalformedWrapToken { .. }));
        }
    }

    #[test]
    fn test_malformed_word_count() {
        let mut parser = PuzzleParser::new();
        parser.feed("1 1").unwrap();
        parser.feed("A").unwrap();
        parser.feed("NO_WRAP").unwrap();
        let err = parser.feed("-1").unwrap_err();
        assert!(matches!(*err, ParseError::MalformedWordCount { .. }));
    }

    #[test]
    fn test_word_count_must_be_a_plain_decimal() {
        // usize::from_str tolerates a leading '+'; the format does not
        for line in ["+3", "+0", "3.0", " +1 "] {
            let mut parser = PuzzleParser::new();
            parser.feed("1 1").unwrap();
            parser.feed("A").unwrap();
            parser.feed("NO_WRAP").unwrap();
            let err = parser.feed(line).unwrap_err();
            assert!(
                matches!(*err, ParseError::MalformedWordCount { .. }),
                "count {line:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_input_after_ready_is_rejected() {
        let mut parser = PuzzleParser::new();
        for line in ["1 1", "A", "NO_WRAP", "1", "A"] {
            parser.feed(line).unwrap();
        }
        assert!(parser.is_ready());
        // blank lines are still fine
        parser.feed("   ").unwrap();
        let err = parser.feed("EXTRA").unwrap_err();
        assert!(matches!(*err, ParseError::UnexpectedInput { .. }));
    }

    #[test]
    fn test_incomplete_input_names_the_stage_reached() {
        let err = parse_str("2 2\nAB\n").unwrap_err();
        match *err {
            ParseError::IncompleteInput { stage } => assert_eq!(stage, "grid rows"),
            other => panic!("expected IncompleteInput, got {other:?}"),
        }

        let err = parse_str("2 2\nAB\nCD\nNO_WRAP\n2\nAB\n").unwrap_err();
        assert!(matches!(*err, ParseError::IncompleteInput { stage } if stage == "word lines"));
    }

    #[test]
    fn test_word_lines_are_taken_raw() {
        let puzzle = parse_str("1 2\nAB\nNO_WRAP\n1\nab c\n").unwrap();
        assert_eq!(puzzle.words, vec!["ab c"]);
    }

    #[test]
    fn test_duplicate_words_are_kept_in_input_order() {
        let puzzle = parse_str("2 2\nAB\nCD\nNO_WRAP\n3\nAB\nCD\nAB\n").unwrap();
        assert_eq!(puzzle.words, vec!["AB", "CD", "AB"]);
    }
}
