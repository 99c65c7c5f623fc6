use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

/// A lexical diagnostic. These never stop a scan; the lexer emits them in place
/// as `TokenKind::LexError` and keeps going from the next character.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Integer constant too long")]
    IntegerConstantTooLong,
    #[error("Identifier too long")]
    IdentifierTooLong,
    #[error("InvalidToken({token})")]
    InvalidToken { token: String },
    #[error("'.' should be at end of line or inside a string/comment")]
    MisplacedEndOfLine,
    #[error("Left bracket already exists")]
    LeftBracketAlreadyExists,
    #[error("Right bracket without left bracket")]
    RightBracketWithoutLeft,
    #[error("Left bracket without right bracket")]
    LeftBracketWithoutRight,
    #[error("Delimiter should be preceded by identifier")]
    DelimiterNotPreceded,
    #[error("Delimiter should be followed by identifier")]
    DelimiterNotFollowed,
}

impl ErrorImpl {
    pub fn get_error_name(&self) -> &str {
        match self {
            ErrorImpl::IntegerConstantTooLong => "IntegerConstantTooLong",
            ErrorImpl::IdentifierTooLong => "IdentifierTooLong",
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::MisplacedEndOfLine => "MisplacedEndOfLine",
            ErrorImpl::LeftBracketAlreadyExists => "LeftBracketAlreadyExists",
            ErrorImpl::RightBracketWithoutLeft => "RightBracketWithoutLeft",
            ErrorImpl::LeftBracketWithoutRight => "LeftBracketWithoutRight",
            ErrorImpl::DelimiterNotPreceded => "DelimiterNotPreceded",
            ErrorImpl::DelimiterNotFollowed => "DelimiterNotFollowed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            ErrorImpl::IntegerConstantTooLong => ErrorTip::Suggestion(String::from(
                "Integer constants are limited to 8 digits",
            )),
            ErrorImpl::IdentifierTooLong => ErrorTip::Suggestion(String::from(
                "Identifiers are limited to 10 characters",
            )),
            ErrorImpl::InvalidToken { token } => ErrorTip::Suggestion(format!(
                "`{}` is not a keyword, integer, identifier or operator",
                token
            )),
            ErrorImpl::MisplacedEndOfLine => ErrorTip::Suggestion(String::from(
                "Decimal numbers are not supported, did you mean to end the line?",
            )),
            ErrorImpl::LeftBracketAlreadyExists => ErrorTip::Suggestion(String::from(
                "Only one pair of curly brackets is allowed per line",
            )),
            ErrorImpl::RightBracketWithoutLeft => ErrorTip::None,
            ErrorImpl::LeftBracketWithoutRight => ErrorTip::Suggestion(String::from(
                "Brackets must be closed on the line they are opened",
            )),
            ErrorImpl::DelimiterNotPreceded => ErrorTip::None,
            ErrorImpl::DelimiterNotFollowed => {
                ErrorTip::Suggestion(String::from("Add a space after the comma"))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Failures of the command-line driver. Lexical errors are never reported here.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
