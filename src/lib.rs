// Reusable library API — visible to both the CLI and integration tests
pub mod errors;
pub mod log;
pub mod parser;
pub mod puzzle;
pub mod solver;
pub mod writer;
