//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance spanning columns of one line

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$line` - The 1-based line the token was found on
/// * `$start` - First column covered by the token
/// * `$end` - Column just past the token
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::EndOfLine, 1, 8, 9);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $line:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            span: Span {
                start: Position {
                    line: $line,
                    column: $start as u32,
                },
                end: Position {
                    line: $line,
                    column: $end as u32,
                },
            },
        }
    };
}
