//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `ParseError` implementation via its `code()`,
//! `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use gridseek::errors::ParseError;

/// Helper to create all `ParseError` variants for documentation
fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::MalformedShape { line: "3 x".to_string() },
        ParseError::MalformedRow {
            line: "ABCD".to_string(),
            expected: 3,
            actual: 4,
        },
        ParseError::MalformedWrapToken { line: "MAYBE_WRAP".to_string() },
        ParseError::MalformedWordCount { line: "-1".to_string() },
        ParseError::UnexpectedInput { line: "EXTRA".to_string() },
        ParseError::IncompleteInput { stage: "grid rows" },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Parse Errors\n");
    println!("All errors are raised while parsing the puzzle input; the search phase cannot fail.\n");

    for error in all_parse_error_variants() {
        let code = error.code();
        let description = error.description();
        let details = error.details();
        let help = error.help();

        println!("### {}: {}\n", code, description);
        println!("**Details:** {}\n", details);

        if let Some(help_text) = help {
            println!("**How to fix:**");
            println!("```");
            println!("{}", help_text);
            println!("```\n");
        }

        println!("**Example error message:**");
        println!("```");
        println!("{}", error);
        println!("```\n");

        println!("**Detailed format:**");
        println!("```");
        println!("{}", error.display_detailed());
        println!("```\n");

        println!("---\n");
    }

    println!("## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: wrap line \"wrap\" is not WRAP or NO_WRAP (E003)");
    println!("Use exactly 'WRAP' or 'NO_WRAP' (uppercase, no extra characters)");
    println!("```\n");
    println!("1. Note the error code (e.g., `E003`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps");
}
