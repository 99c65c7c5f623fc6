use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashSet, fmt::Display};

use crate::{errors::errors::ErrorImpl, Span};

pub const MAX_IDENTIFIER_LENGTH: usize = 10;
pub const MAX_INTEGER_LENGTH: usize = 8;

pub const DELIMITER: char = ',';
pub const END_OF_LINE: char = '.';
pub const LEFT_BRACKET: char = '{';
pub const RIGHT_BRACKET: char = '}';
pub const QUOTE: char = '"';
pub const ESCAPE: char = '\\';

lazy_static! {
    /// Keywords, stored lower-cased. Lookups lower-case the lexeme first, so
    /// `newLine`, `NEWLINE` and `newline` are all the same keyword.
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("text");
        set.insert("is");
        set.insert("loop");
        set.insert("times");
        set.insert("read");
        set.insert("write");
        set.insert("newline");
        set
    };

    pub static ref OPERATORS: HashSet<char> = ['+', '-', '*', '/'].into_iter().collect();

    pub static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z][a-zA-Z0-9_]*$").unwrap();
}

pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Token,
    Error,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenKind {
    Keyword(String),
    IntConst(String),
    Identifier(String),
    /// Raw text including both quotes. Escapes are kept as written.
    StringLit(String),
    Operator(char),
    Delimiter,
    EndOfLine,
    LeftBracket,
    RightBracket,
    LexError(ErrorImpl),
}

impl TokenKind {
    pub fn severity(&self) -> Severity {
        match self {
            TokenKind::LexError(_) => Severity::Error,
            _ => Severity::Token,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword(name) => write!(f, "Keyword({})", name),
            TokenKind::IntConst(digits) => write!(f, "IntConst({})", digits),
            TokenKind::Identifier(name) => write!(f, "Identifier({})", name),
            TokenKind::StringLit(raw) => write!(f, "String({})", raw),
            TokenKind::Operator(symbol) => write!(f, "Operator({})", symbol),
            TokenKind::Delimiter => write!(f, "Delimiter({})", DELIMITER),
            TokenKind::EndOfLine => write!(f, "EndOfLine"),
            TokenKind::LeftBracket => write!(f, "LeftCurlyBracket"),
            TokenKind::RightBracket => write!(f, "RightCurlyBracket"),
            // InvalidToken(..) is printed bare, every other diagnostic is prefixed
            TokenKind::LexError(error @ ErrorImpl::InvalidToken { .. }) => write!(f, "{}", error),
            TokenKind::LexError(error) => write!(f, "Error: {}", error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Token {
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }
}
