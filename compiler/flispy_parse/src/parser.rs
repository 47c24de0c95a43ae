//! Recursive-descent parser over the scanner's token stream.
//!
//! One token of lookahead is enough: every `expr` alternative is decided by
//! its first token.

use crate::error::ParseError;
use crate::scanner::{Scanner, Token, TokenKind};
use crate::span::Span;
use crate::syntax::{
    SyntaxNode, CHAR_TAG, NUMBER_TAG, QEXPR_TAG, REGEX_TAG, ROOT_TAG, SEXPR_TAG, SYMBOL_TAG,
};
use flispy_stack::ensure_sufficient_stack;
use tracing::trace;

/// The two bracketed list forms.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ListKind {
    /// `( ... )`
    Sexpr,
    /// `{ ... }`
    Qexpr,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Sexpr => SEXPR_TAG,
            ListKind::Qexpr => QEXPR_TAG,
        }
    }

    fn open(self) -> char {
        match self {
            ListKind::Sexpr => '(',
            ListKind::Qexpr => '{',
        }
    }

    fn close(self) -> char {
        match self {
            ListKind::Sexpr => ')',
            ListKind::Qexpr => '}',
        }
    }

    fn close_kind(self) -> TokenKind {
        match self {
            ListKind::Sexpr => TokenKind::RParen,
            ListKind::Qexpr => TokenKind::RBrace,
        }
    }
}

/// Parse one input line into a root node.
///
/// The root holds a start anchor, zero or more expressions, and an end
/// anchor. An empty or all-whitespace line parses to a root with only the
/// two anchors.
pub fn parse(source: &str) -> Result<SyntaxNode, ParseError> {
    let Ok(end) = u32::try_from(source.len()) else {
        return Err(ParseError::SourceTooLarge { len: source.len() });
    };
    let mut parser = Parser::new(source);
    let mut root = SyntaxNode::branch(ROOT_TAG, Span::point(0));
    root.push(SyntaxNode::leaf(REGEX_TAG, "", Span::point(0)));
    while parser.current.kind != TokenKind::Eof {
        let expr = parser.parse_expr()?;
        root.push(expr);
    }
    root.push(SyntaxNode::leaf(REGEX_TAG, "", Span::point(end)));
    trace!(expressions = root.children().len() - 2, "parsed line");
    Ok(root)
}

struct Parser<'src> {
    scanner: Scanner<'src>,
    current: Token,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Self {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token();
        Parser { scanner, current }
    }

    fn advance(&mut self) -> Token {
        let token = self.current;
        self.current = self.scanner.next_token();
        token
    }

    fn text(&self, token: Token) -> &'src str {
        token.text(self.scanner.source())
    }

    fn first_char(&self, token: Token) -> char {
        self.text(token).chars().next().unwrap_or('\u{fffd}')
    }

    /// `expr : <number> | <symbol> | <sexpr> | <qexpr> ;`
    fn parse_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        let token = self.current;
        match token.kind {
            TokenKind::Number => {
                self.advance();
                Ok(SyntaxNode::leaf(NUMBER_TAG, self.text(token), token.span))
            }
            TokenKind::Symbol => {
                self.advance();
                Ok(SyntaxNode::leaf(SYMBOL_TAG, self.text(token), token.span))
            }
            TokenKind::LParen => self.parse_list(ListKind::Sexpr),
            TokenKind::LBrace => self.parse_list(ListKind::Qexpr),
            TokenKind::RParen | TokenKind::RBrace => Err(ParseError::UnmatchedClose {
                close: self.first_char(token),
                span: token.span,
            }),
            TokenKind::Invalid => Err(ParseError::InvalidCharacter {
                ch: self.first_char(token),
                span: token.span,
            }),
            TokenKind::Eof => Err(ParseError::UnexpectedEnd { span: token.span }),
        }
    }

    /// `sexpr : '(' <expr>* ')' ;` and `qexpr : '{' <expr>* '}' ;`
    fn parse_list(&mut self, kind: ListKind) -> Result<SyntaxNode, ParseError> {
        ensure_sufficient_stack(|| {
            let open = self.advance();
            let mut node = SyntaxNode::branch(kind.tag(), open.span);
            node.push(SyntaxNode::leaf(CHAR_TAG, self.text(open), open.span));

            loop {
                let token = self.current;
                match token.kind {
                    k if k == kind.close_kind() => {
                        self.advance();
                        node.push(SyntaxNode::leaf(CHAR_TAG, self.text(token), token.span));
                        break;
                    }
                    TokenKind::RParen | TokenKind::RBrace => {
                        return Err(ParseError::MismatchedClose {
                            expected: kind.close(),
                            found: self.first_char(token),
                            span: token.span,
                        });
                    }
                    TokenKind::Eof => {
                        return Err(ParseError::UnclosedList {
                            open: kind.open(),
                            close: kind.close(),
                            span: open.span,
                        });
                    }
                    _ => {
                        let child = self.parse_expr()?;
                        node.push(child);
                    }
                }
            }

            trace!(tag = kind.tag(), children = node.children().len() - 2, "parsed list");
            Ok(node)
        })
    }
}
