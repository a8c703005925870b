use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use gridseek::errors::ParseError;
use gridseek::{parser, solver, writer};

/// Word search puzzle solver
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), "+", env!("GIT_HASH")),
    about,
    long_about = None
)]
struct Cli {
    /// Puzzle input file; reads standard input when omitted
    input: Option<PathBuf>,

    /// Run the bundled example puzzles against their golden outputs
    #[arg(long)]
    test: bool,
}

/// Entry point of the gridseek CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("GRIDSEEK_DEBUG").is_ok();
    gridseek::log::init_logger(debug_enabled);

    let cli = Cli::parse();

    if cli.test {
        return run_self_test();
    }

    if let Err(e) = try_main(&cli) {
        // Print the error message to stderr, with detailed formatting if it's a ParseError
        if let Some(parse_err) = e.downcast_ref::<ParseError>() {
            eprintln!("Error: {}", parse_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the gridseek CLI.
///
/// Steps:
/// 1. Read the puzzle text from the input file (or stdin).
/// 2. Parse it into an immutable puzzle.
/// 3. Solve, timing the search.
/// 4. Print one result line per word on stdout.
/// 5. Print diagnostics (grid size, word count, timing) on stderr.
fn try_main(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let contents = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let puzzle = match parser::parse_str(&contents) {
        Ok(puzzle) => puzzle,
        Err(e) => return Err(e),
    };
    log::info!(
        "parsed {}x{} grid, {} words, wrap={}",
        puzzle.rows,
        puzzle.cols,
        puzzle.words.len(),
        puzzle.wrap
    );

    let t_solve = Instant::now();
    let outcomes = solver::solve(&puzzle);
    let solve_secs = t_solve.elapsed().as_secs_f64();

    let stdout = std::io::stdout();
    writer::write_results(&mut stdout.lock(), &puzzle.words, &outcomes)?;

    eprintln!(
        "{}x{} grid, {} words; solved in {solve_secs:.3}s",
        puzzle.rows,
        puzzle.cols,
        puzzle.words.len()
    );

    Ok(())
}

/// One bundled self-test fixture: input text plus either the golden output
/// or the expectation that parsing fails.
struct Fixture {
    name: &'static str,
    input: &'static str,
    golden: Option<&'static str>,
}

const FIXTURES: [Fixture; 3] = [
    Fixture {
        name: "example1.txt",
        input: include_str!("../tests/fixtures/example1.txt"),
        golden: Some(include_str!("../tests/fixtures/example1.out")),
    },
    Fixture {
        name: "example2.txt",
        input: include_str!("../tests/fixtures/example2.txt"),
        golden: Some(include_str!("../tests/fixtures/example2.out")),
    },
    Fixture {
        name: "bad_input.txt",
        input: include_str!("../tests/fixtures/bad_input.txt"),
        golden: None,
    },
];

/// Runs every bundled fixture and reports pass/fail per puzzle.
fn run_self_test() -> ExitCode {
    let mut all_passed = true;
    for fixture in &FIXTURES {
        all_passed &= run_fixture(fixture);
    }
    if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_fixture(fixture: &Fixture) -> bool {
    let start = Instant::now();
    let parsed = parser::parse_str(fixture.input);

    match (parsed, fixture.golden) {
        (Ok(puzzle), Some(golden)) => {
            let outcomes = solver::solve(&puzzle);
            let rendered: String = writer::render_lines(&puzzle.words, &outcomes)
                .into_iter()
                .map(|line| line + "\n")
                .collect();
            let verdict = if rendered == golden { "pass" } else { "fail" };
            println!(
                "{}, {}x{} grid, {} words ... {verdict} {:.3} s",
                fixture.name,
                puzzle.rows,
                puzzle.cols,
                puzzle.words.len(),
                start.elapsed().as_secs_f64()
            );
            rendered == golden
        }
        (Err(e), None) => {
            println!("{}, expected parse error, ok ({})", fixture.name, e.code());
            true
        }
        (Ok(_), None) => {
            println!("{}, expected a parse error but parsing succeeded ... fail", fixture.name);
            false
        }
        (Err(e), Some(_)) => {
            println!("{}, unexpected parse error: {e} ... fail", fixture.name);
            false
        }
    }
}
