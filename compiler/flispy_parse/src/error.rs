//! Parse error types.

use crate::span::Span;
use thiserror::Error;

/// A line the grammar does not accept.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid character '{ch}'")]
    InvalidCharacter { ch: char, span: Span },

    #[error("unexpected '{close}' with no matching opening bracket")]
    UnmatchedClose { close: char, span: Span },

    #[error("expected '{expected}' to close list, found '{found}'")]
    MismatchedClose {
        expected: char,
        found: char,
        span: Span,
    },

    #[error("unclosed '{open}', expected '{close}' before end of input")]
    UnclosedList { open: char, close: char, span: Span },

    #[error("unexpected end of input, expected an expression")]
    UnexpectedEnd { span: Span },

    #[error("source of {len} bytes is too large to parse")]
    SourceTooLarge { len: usize },
}

impl ParseError {
    /// Where the problem was detected.
    pub fn span(&self) -> Span {
        match self {
            ParseError::InvalidCharacter { span, .. }
            | ParseError::UnmatchedClose { span, .. }
            | ParseError::MismatchedClose { span, .. }
            | ParseError::UnclosedList { span, .. }
            | ParseError::UnexpectedEnd { span } => *span,
            ParseError::SourceTooLarge { .. } => Span::DUMMY,
        }
    }
}
