//! Value rendering.
//!
//! Numbers print in decimal, symbols verbatim, errors with an `Error: `
//! prefix, and lists as their space-separated children inside `( )` or
//! `{ }`.

use crate::value::{ExprList, Value};
use flispy_stack::ensure_sufficient_stack;
use std::fmt;

/// Render a value to text.
pub fn render(value: &Value) -> String {
    value.to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(error) => write!(f, "Error: {error}"),
            Value::Symbol(name) => f.write_str(name),
            Value::SExpr(list) => write_list(f, list, '(', ')'),
            Value::QExpr(list) => write_list(f, list, '{', '}'),
        })
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, list: &ExprList, open: char, close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, child) in list.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{child}")?;
    }
    write!(f, "{close}")
}
