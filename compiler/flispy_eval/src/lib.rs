//! Flispy Eval - value model and evaluator for the Flispy expression language.
//!
//! # Architecture
//!
//! ```text
//! SyntaxNode ──read──► Value ──Evaluator::eval──► Value ──render──► text
//!                                   │
//!                                   ▼
//!                              BuiltinTable
//! ```
//!
//! - [`Value`]: numbers, error values, symbols, s-expressions and
//!   q-expressions, forming an owned tree
//! - [`read`]: converts a parsed syntax tree into a value
//! - [`Evaluator`]: recursive reduction, dispatching on the leading symbol
//! - [`BuiltinTable`]: arithmetic and q-expression builtins by name
//! - [`render`]: text form of a value
//!
//! Errors are values. Nothing in evaluation returns `Result::Err` or panics;
//! a failing expression produces a `Value::Error` which short-circuits its
//! enclosing expressions.

mod builtins;
pub mod errors;
mod evaluator;
mod printer;
mod reader;
mod value;

pub use builtins::{ArithOp, Builtin, BuiltinFn, BuiltinResult, BuiltinTable};
pub use errors::LispError;
pub use evaluator::Evaluator;
pub use printer::render;
pub use reader::{read, read_number};
pub use value::{ExprList, Value};

/// Parse, read and evaluate one line with the standard builtins.
pub fn eval_source(source: &str) -> Result<Value, flispy_parse::ParseError> {
    Evaluator::new().eval_line(source)
}
