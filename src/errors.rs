//! Error types for puzzle parsing with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E006) for documentation lookup:
//!
//! - E001: `MalformedShape` (Shape line not two positive integers)
//! - E002: `MalformedRow` (Grid row length differs from declared column count)
//! - E003: `MalformedWrapToken` (Wrap line not `WRAP`/`NO_WRAP`)
//! - E004: `MalformedWordCount` (Word-count line not a non-negative integer)
//! - E005: `UnexpectedInput` (Line received after the puzzle was complete)
//! - E006: `IncompleteInput` (Input ended before the puzzle was complete)
//!
//! All errors are detected during parsing; the search phase cannot fail once
//! given a valid puzzle. Every error is fatal to the current puzzle — there is
//! no partial-puzzle recovery.
//!
//! # Examples
//!
//! ```
//! use gridseek::parser::PuzzleParser;
//!
//! let mut parser = PuzzleParser::new();
//! match parser.feed("not a shape") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(()) => println!("line accepted"),
//! }
//! ```

use std::io;

/// Custom error type for puzzle parsing.
///
/// Boxed (`Box<ParseError>`) in fallible APIs to keep the error type size
/// stable even though variants carry the offending line.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("shape line \"{line}\" is not two positive integers")]
    MalformedShape { line: String },

    #[error("grid row \"{line}\" has {actual} columns, expected {expected}")]
    MalformedRow {
        line: String,
        expected: usize,
        actual: usize,
    },

    #[error("wrap line \"{line}\" is not WRAP or NO_WRAP")]
    MalformedWrapToken { line: String },

    #[error("word-count line \"{line}\" is not a non-negative integer")]
    MalformedWordCount { line: String },

    #[error("unexpected input \"{line}\" after the puzzle was complete")]
    UnexpectedInput { line: String },

    #[error("input ended before the puzzle was complete (stopped while reading {stage})")]
    IncompleteInput { stage: &'static str },
}

impl From<ParseError> for io::Error {
    fn from(pe: ParseError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::MalformedShape { .. } => "E001",
            ParseError::MalformedRow { .. } => "E002",
            ParseError::MalformedWrapToken { .. } => "E003",
            ParseError::MalformedWordCount { .. } => "E004",
            ParseError::UnexpectedInput { .. } => "E005",
            ParseError::IncompleteInput { .. } => "E006",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::MalformedShape { .. } => "Shape line not two positive integers",
            ParseError::MalformedRow { .. } => "Grid row length differs from declared column count",
            ParseError::MalformedWrapToken { .. } => "Wrap line not WRAP/NO_WRAP",
            ParseError::MalformedWordCount { .. } => "Word-count line not a non-negative integer",
            ParseError::UnexpectedInput { .. } => "Line received after the puzzle was complete",
            ParseError::IncompleteInput { .. } => "Input ended before the puzzle was complete",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::MalformedShape { .. } => "The first non-blank line of a puzzle must be `<rows> <cols>`, two whitespace-separated positive integers giving the grid dimensions.",
            ParseError::MalformedRow { .. } => "Every grid row must contain exactly as many characters as the declared column count. The row is taken raw; only the line terminator is stripped.",
            ParseError::MalformedWrapToken { .. } => "The line after the grid must be exactly the literal token `WRAP` or `NO_WRAP`. It selects toroidal versus clipped addressing.",
            ParseError::MalformedWordCount { .. } => "The line after the wrap token must be a non-negative integer giving the number of word lines that follow. Zero is allowed.",
            ParseError::UnexpectedInput { .. } => "The puzzle was already complete when another non-blank line arrived. Blank lines are always ignored; anything else after the last word is rejected.",
            ParseError::IncompleteInput { .. } => "The input ended while the parser was still expecting more puzzle sections. This is distinct from the per-line malformed errors.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::MalformedShape { .. } => Some("Example: a 3-row, 4-column puzzle starts with the line '3 4'"),
            ParseError::MalformedRow { .. } => Some("Check for stray whitespace or a truncated row; every row needs exactly the declared number of characters"),
            ParseError::MalformedWrapToken { .. } => Some("Use exactly 'WRAP' or 'NO_WRAP' (uppercase, no extra characters)"),
            ParseError::MalformedWordCount { .. } => Some("Use a plain non-negative integer, e.g. '3' (or '0' for a puzzle with no words)"),
            ParseError::UnexpectedInput { .. } => Some("Remove trailing content after the last word line; only blank lines may follow a complete puzzle"),
            ParseError::IncompleteInput { .. } => Some("Supply every section: shape, grid rows, wrap token, word count, and the declared number of words"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
