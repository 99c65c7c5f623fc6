#![allow(clippy::module_inception)]

use std::path::Path;

use crate::{errors::errors::ErrorTip, lexer::tokens::{Token, TokenKind}};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Renders tokens in the listing format: one textual form per line.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

/// Returns the text of a 1-based line, without its terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    source.lines().nth(line.checked_sub(1)? as usize)
}

/// Formats a diagnostic with the line it came from and a caret under the
/// offending column. Returns `None` for tokens that are not errors.
pub fn display_error(token: &Token, file: &Path, source: &str) -> Option<String> {
    /*
        Error: IdentifierTooLong (Identifiers are limited to 10 characters)
        -> code.sta
           |
        20 | int abcdefghijkl.
           | ----^
    */

    let TokenKind::LexError(error) = &token.kind else {
        return None;
    };

    let position = token.span.start;
    let line_text = get_line(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file.display()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    Some(out)
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();
    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use crate::lexer::lexer::{tokenize, tokenize_lines};

    #[test]
    fn test_get_line() {
        let source = "int x.\n  write x.\n";

        assert_eq!(super::get_line(source, 1), Some("int x."));
        assert_eq!(super::get_line(source, 2), Some("  write x."));
        assert_eq!(super::get_line(source, 3), None);
        assert_eq!(super::get_line(source, 0), None);
    }

    #[test]
    fn test_render_tokens() {
        let tokens = tokenize("int x, y.");

        assert_eq!(
            super::render_tokens(&tokens),
            "Keyword(int)\nIdentifier(x)\nDelimiter(,)\nIdentifier(y)\nEndOfLine\n"
        );
    }

    #[test]
    fn test_display_error() {
        let source = "int x.\n  write abcdefghijk.\n";
        let tokens = tokenize_lines(source.lines());
        let error = tokens.iter().find(|t| t.is_error()).unwrap();

        let rendered = super::display_error(error, Path::new("code.sta"), source).unwrap();

        assert_eq!(
            rendered,
            "Error: IdentifierTooLong (Identifiers are limited to 10 characters)\n\
             -> code.sta\n  \
             |\n\
             2 | write abcdefghijk.\n  \
             | ------^\n"
        );
    }

    #[test]
    fn test_display_error_skips_tokens() {
        let tokens = tokenize("int");

        assert!(super::display_error(&tokens[0], Path::new("code.sta"), "int").is_none());
    }
}
