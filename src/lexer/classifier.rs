use tracing::trace;

use crate::errors::errors::ErrorImpl;

use super::tokens::{
    is_operator, TokenKind, DELIMITER, END_OF_LINE, IDENTIFIER_PATTERN, KEYWORDS, LEFT_BRACKET,
    MAX_IDENTIFIER_LENGTH, MAX_INTEGER_LENGTH, RIGHT_BRACKET,
};

/// The shape of a finished lexeme. Variants are listed in priority order: a
/// lexeme takes the first shape it fits, so an all-digit lexeme is never
/// looked at as an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexemeShape {
    Keyword,
    Digits,
    Word,
    Single(char),
    Unknown,
}

fn shape_of(lexeme: &str) -> LexemeShape {
    if KEYWORDS.contains(lexeme.to_lowercase().as_str()) {
        return LexemeShape::Keyword;
    }

    if lexeme.chars().all(|c| c.is_ascii_digit()) {
        return LexemeShape::Digits;
    }

    if IDENTIFIER_PATTERN.is_match(lexeme) {
        return LexemeShape::Word;
    }

    let mut chars = lexeme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => LexemeShape::Single(c),
        _ => LexemeShape::Unknown,
    }
}

/// Classifies one complete lexeme. Pure: the same lexeme always gives the
/// same token, whatever its position in the source.
///
/// The lexer intercepts commas, periods and brackets before they reach a
/// lexeme, but they are still recognised here when passed on their own.
pub fn classify(lexeme: &str) -> TokenKind {
    let length = lexeme.chars().count();

    let kind = match shape_of(lexeme) {
        LexemeShape::Keyword => TokenKind::Keyword(lexeme.to_lowercase()),
        LexemeShape::Digits if length > MAX_INTEGER_LENGTH => {
            TokenKind::LexError(ErrorImpl::IntegerConstantTooLong)
        }
        LexemeShape::Digits => TokenKind::IntConst(lexeme.to_string()),
        LexemeShape::Word if length > MAX_IDENTIFIER_LENGTH => {
            TokenKind::LexError(ErrorImpl::IdentifierTooLong)
        }
        LexemeShape::Word => TokenKind::Identifier(lexeme.to_string()),
        LexemeShape::Single(DELIMITER) => TokenKind::Delimiter,
        LexemeShape::Single(END_OF_LINE) => TokenKind::EndOfLine,
        LexemeShape::Single(c) if is_operator(c) => TokenKind::Operator(c),
        LexemeShape::Single(LEFT_BRACKET) => TokenKind::LeftBracket,
        LexemeShape::Single(RIGHT_BRACKET) => TokenKind::RightBracket,
        LexemeShape::Single(_) | LexemeShape::Unknown => {
            TokenKind::LexError(ErrorImpl::InvalidToken {
                token: lexeme.to_string(),
            })
        }
    };

    trace!(lexeme, %kind, "classified lexeme");
    kind
}
