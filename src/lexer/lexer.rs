use tracing::debug;

use crate::{errors::errors::ErrorImpl, Position, Span, MK_TOKEN};

use super::{
    classifier::classify,
    tokens::{
        is_operator, Token, TokenKind, DELIMITER, END_OF_LINE, ESCAPE, LEFT_BRACKET, QUOTE,
        RIGHT_BRACKET,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Normal,
    InString,
    InComment,
}

/// Scans a single unit (one line) of source. All state lives here and dies with
/// the unit, so nothing carries over between lines.
#[derive(Clone)]
pub struct Lexer {
    chars: Vec<char>,
    tokens: Vec<Token>,
    pos: usize,
    line: u32,
    mode: ScanMode,
    open_brackets: u32,
    lexeme: String,
    lexeme_start: usize,
}

impl Lexer {
    pub fn new(source: &str, line: u32) -> Lexer {
        Lexer {
            chars: source.chars().collect(),
            tokens: vec![],
            pos: 0,
            line,
            mode: ScanMode::Normal,
            open_brackets: 0,
            lexeme: String::new(),
            lexeme_start: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> char {
        self.chars[self.pos]
    }

    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    pub fn previous(&self) -> Option<char> {
        self.pos.checked_sub(1).map(|i| self.chars[i])
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.tokens.push(MK_TOKEN!(kind, self.line, start, end));
    }

    /// Pushes a token for the character under the cursor.
    fn push_here(&mut self, kind: TokenKind) {
        self.push(kind, self.pos, self.pos + 1);
    }

    fn append(&mut self, c: char) {
        if self.lexeme.is_empty() {
            self.lexeme_start = self.pos;
        }
        self.lexeme.push(c);
    }

    /// Classifies and emits the pending lexeme, if there is one.
    fn flush(&mut self) {
        if self.lexeme.is_empty() {
            return;
        }

        let lexeme = std::mem::take(&mut self.lexeme);
        self.push(classify(&lexeme), self.lexeme_start, self.pos);
    }

    /// A period ends the line when at most one trailing whitespace character
    /// (or a CRLF pair) follows it.
    fn period_ends_line(&self) -> bool {
        match &self.chars[self.pos + 1..] {
            [] => true,
            [c] => c.is_whitespace(),
            ['\r', '\n'] => true,
            _ => false,
        }
    }

    fn scan_comment(&mut self, c: char) {
        if c == '/' && self.previous() == Some('*') {
            debug!(line = self.line, column = self.pos, "block comment closed");
            self.mode = ScanMode::Normal;
        }
        self.advance_n(1);
    }

    fn scan_string(&mut self, c: char) {
        self.lexeme.push(c);

        if c == QUOTE && self.previous() != Some(ESCAPE) {
            let raw = std::mem::take(&mut self.lexeme);
            self.push(TokenKind::StringLit(raw), self.lexeme_start, self.pos + 1);
            self.mode = ScanMode::Normal;
        }
        self.advance_n(1);
    }

    fn scan_normal(&mut self, c: char) {
        match c {
            c if c.is_whitespace() => {
                self.flush();
                self.advance_n(1);
            }
            '/' if self.peek(1) == Some('*') => {
                debug!(line = self.line, column = self.pos, "block comment opened");
                self.mode = ScanMode::InComment;
                self.advance_n(2);
            }
            QUOTE => {
                self.flush();
                self.mode = ScanMode::InString;
                self.append(c);
                self.advance_n(1);
            }
            END_OF_LINE => {
                self.flush();
                if self.period_ends_line() {
                    self.push_here(TokenKind::EndOfLine);
                } else {
                    self.push_here(TokenKind::LexError(ErrorImpl::MisplacedEndOfLine));
                }
                self.advance_n(1);
            }
            LEFT_BRACKET => {
                if self.open_brackets == 0 {
                    self.flush();
                    self.push_here(TokenKind::LeftBracket);
                    self.open_brackets += 1;
                } else {
                    self.push_here(TokenKind::LexError(ErrorImpl::LeftBracketAlreadyExists));
                }
                self.advance_n(1);
            }
            RIGHT_BRACKET => {
                if self.open_brackets > 0 {
                    self.flush();
                    self.push_here(TokenKind::RightBracket);
                    self.open_brackets -= 1;
                } else {
                    self.push_here(TokenKind::LexError(ErrorImpl::RightBracketWithoutLeft));
                }
                self.advance_n(1);
            }
            DELIMITER => self.scan_delimiter(),
            c if is_operator(c) => {
                self.flush();
                self.push_here(TokenKind::Operator(c));
                self.advance_n(1);
            }
            c => {
                self.append(c);
                self.advance_n(1);
            }
        }
    }

    fn scan_delimiter(&mut self) {
        if self.lexeme.is_empty() {
            self.push_here(TokenKind::LexError(ErrorImpl::DelimiterNotPreceded));
            self.advance_n(1);
            return;
        }

        self.flush();
        self.push_here(TokenKind::Delimiter);
        self.advance_n(1);

        if let Some(next) = self.peek(0) {
            if !next.is_whitespace() {
                self.push_here(TokenKind::LexError(ErrorImpl::DelimiterNotFollowed));
            }
        }
    }

    fn finish(&mut self) {
        if self.mode != ScanMode::Normal {
            debug!(line = self.line, mode = ?self.mode, "unit ended inside string or comment");
        }

        self.flush();

        if self.open_brackets > 0 {
            self.push(
                TokenKind::LexError(ErrorImpl::LeftBracketWithoutRight),
                self.pos,
                self.pos,
            );
        }
    }

    pub fn run(mut self) -> Vec<Token> {
        while !self.at_eof() {
            let c = self.at();

            match self.mode {
                ScanMode::InComment => self.scan_comment(c),
                ScanMode::InString => self.scan_string(c),
                ScanMode::Normal => self.scan_normal(c),
            }
        }

        self.finish();

        debug!(
            line = self.line,
            tokens = self.tokens.len(),
            errors = self.tokens.iter().filter(|t| t.is_error()).count(),
            "scanned unit"
        );
        self.tokens
    }
}

/// Scans one unit of source on line 1.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_line(source, 1)
}

pub fn tokenize_line(source: &str, line: u32) -> Vec<Token> {
    Lexer::new(source, line).run()
}

/// Scans each line as its own unit, numbering lines from 1. Results are
/// concatenated in source order.
pub fn tokenize_lines<I, S>(lines: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .zip(1..)
        .flat_map(|(line, number)| tokenize_line(line.as_ref(), number))
        .collect()
}
