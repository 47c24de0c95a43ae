//! Syntax tree to value conversion.
//!
//! A single pass over the parser's tree. Tags are matched by substring, the
//! same way the grammar composes them, so `expr|number|regex` reads as a
//! number and `expr|qexpr|>` as a q-expression. Brackets and the anchors
//! around the root carry no meaning and are skipped.

use crate::errors::invalid_number;
use crate::value::{ExprList, Value};
use flispy_parse::{SyntaxNode, REGEX_TAG};
use flispy_stack::ensure_sufficient_stack;

/// Convert a parsed node into a value.
///
/// The root node and `sexpr` nodes become s-expressions, `qexpr` nodes
/// become q-expressions. Reading never fails; an out-of-range number
/// literal becomes an error value in place.
pub fn read(node: &SyntaxNode) -> Value {
    if node.tag_contains("number") {
        return read_number(node.contents());
    }
    if node.tag_contains("symbol") {
        return Value::symbol(node.contents());
    }

    ensure_sufficient_stack(|| {
        let children: ExprList = node
            .children()
            .iter()
            .filter(|child| is_meaningful(child))
            .map(read)
            .collect();

        if node.tag_contains("qexpr") {
            Value::QExpr(children)
        } else {
            Value::SExpr(children)
        }
    })
}

/// Parse a decimal integer literal.
pub fn read_number(text: &str) -> Value {
    text.parse::<i64>()
        .map_or_else(|_| invalid_number(text).into(), Value::Number)
}

/// Brackets and raw anchors are grammar scaffolding, not list elements.
fn is_meaningful(node: &SyntaxNode) -> bool {
    !matches!(node.contents(), "(" | ")" | "{" | "}") && node.tag() != REGEX_TAG
}
