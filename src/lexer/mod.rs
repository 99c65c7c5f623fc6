//! Lexical analysis for the toy language.
//!
//! - `classifier`: maps one finished lexeme to a token kind
//! - `lexer`: the per-line scanner that cuts lexemes, handles strings and
//!   block comments, and checks bracket and delimiter placement
//! - `tokens`: token kinds, the fixed keyword/operator tables and their
//!   textual forms

pub mod classifier;
pub mod lexer;
pub mod tokens;
