//! Hand-written scanner producing `(kind, span)` tokens.
//!
//! Whitespace is skipped between tokens. Literal text is not copied; callers
//! slice it out of the source with [`Token::text`].
//!
//! Error conditions are encoded as [`TokenKind::Invalid`], not as
//! `Result::Err`; the parser decides how to report them.

use crate::span::Span;

/// Token category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `-?[0-9]+`
    Number,
    /// A run of symbol characters that does not start a number.
    Symbol,
    /// A byte no rule accepts.
    Invalid,
    /// End of input. Returned forever once reached.
    Eof,
}

/// A scanned token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// The literal text of this token within `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.span.to_range()).unwrap_or("")
    }
}

/// Characters accepted by the `symbol` rule.
#[inline]
fn is_symbol_byte(b: u8) -> bool {
    matches!(
        b,
        b'a'..=b'z'
            | b'A'..=b'Z'
            | b'0'..=b'9'
            | b'_'
            | b'+'
            | b'-'
            | b'*'
            | b'/'
            | b'%'
            | b'^'
            | b'\\'
            | b'='
            | b'<'
            | b'>'
            | b'!'
            | b'&'
    )
}

/// The arithmetic operator characters.
#[inline]
fn is_operator_byte(b: u8) -> bool {
    matches!(b, b'+' | b'-' | b'*' | b'/' | b'%' | b'^')
}

/// Single-pass scanner over one source string.
pub struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    /// The source being scanned.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.pos;
        let Some(&byte) = self.bytes.get(start) else {
            return self.token(TokenKind::Eof, start);
        };
        match byte {
            b'(' => self.single(TokenKind::LParen, start),
            b')' => self.single(TokenKind::RParen, start),
            b'{' => self.single(TokenKind::LBrace, start),
            b'}' => self.single(TokenKind::RBrace, start),
            b'0'..=b'9' => self.number(start),
            b'-' if self.peek_is_digit(1) => {
                self.pos += 1;
                self.number(start)
            }
            b if is_symbol_byte(b) => self.symbol(start),
            _ => self.invalid(start),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.bytes.get(self.pos) {
            self.pos += 1;
        }
    }

    fn peek_is_digit(&self, offset: usize) -> bool {
        self.bytes
            .get(self.pos + offset)
            .is_some_and(u8::is_ascii_digit)
    }

    fn single(&mut self, kind: TokenKind, start: usize) -> Token {
        self.pos += 1;
        self.token(kind, start)
    }

    fn number(&mut self, start: usize) -> Token {
        while self.peek_is_digit(0) {
            self.pos += 1;
        }
        self.token(TokenKind::Number, start)
    }

    /// Maximal munch, except that a run of operator characters ends before
    /// a digit: `+1` is `+` then `1`, while `a+1` stays one name.
    fn symbol(&mut self, start: usize) -> Token {
        let mut operators_only = true;
        while let Some(&byte) = self.bytes.get(self.pos) {
            if !is_symbol_byte(byte) || (operators_only && byte.is_ascii_digit()) {
                break;
            }
            operators_only &= is_operator_byte(byte);
            self.pos += 1;
        }
        self.token(TokenKind::Symbol, start)
    }

    /// Consume one whole character, which may be multi-byte UTF-8.
    fn invalid(&mut self, start: usize) -> Token {
        let width = self
            .source
            .get(start..)
            .and_then(|rest| rest.chars().next())
            .map_or(1, char::len_utf8);
        self.pos += width;
        self.token(TokenKind::Invalid, start)
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token {
            kind,
            span: Span::from_offsets(start, self.pos),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields every token up to, but not including, `Eof`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}
