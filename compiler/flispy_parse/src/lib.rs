//! Flispy Parse - grammar parser for the Flispy expression language.
//!
//! Turns one line of source text into a generic labeled tree. Every node
//! carries a tag naming its syntactic category, the literal text it
//! matched, and its ordered children:
//!
//! ```text
//! >
//!   regex
//!   expr|sexpr|>
//!     char:0 '('
//!     expr|symbol|regex:1 '+'
//!     expr|number|regex:3 '1'
//!     expr|number|regex:5 '2'
//!     char:6 ')'
//!   regex
//! ```
//!
//! Consumers dispatch on tag substrings (`number`, `symbol`, `sexpr`,
//! `qexpr`) and skip the bracket and anchor scaffolding.
//!
//! # Grammar
//!
//! ```text
//! number : /-?[0-9]+/ ;
//! symbol : /[a-zA-Z0-9_+\-*\/%^\\=<>!&]+/ ;
//! sexpr  : '(' <expr>* ')' ;
//! qexpr  : '{' <expr>* '}' ;
//! expr   : <number> | <symbol> | <sexpr> | <qexpr> ;
//! flispy : /^/ <expr>* /$/ ;
//! ```

mod error;
mod parser;
mod scanner;
mod span;
mod syntax;

pub use error::ParseError;
pub use parser::parse;
pub use scanner::{Scanner, Token, TokenKind};
pub use span::Span;
pub use syntax::{
    SyntaxNode, CHAR_TAG, NUMBER_TAG, QEXPR_TAG, REGEX_TAG, ROOT_TAG, SEXPR_TAG, SYMBOL_TAG,
};
