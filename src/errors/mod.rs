//! Error types for the lexical analyzer.
//!
//! - `ErrorImpl`: lexical diagnostics, carried inside the token stream
//! - `ErrorTip`: optional suggestions shown next to a located diagnostic
//! - `CliError`: I/O failures of the command-line driver

pub mod errors;

#[cfg(test)]
mod tests;
