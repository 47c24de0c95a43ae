//! Generic labeled syntax tree.
//!
//! The tree does not know Flispy's semantics. Each node is a tag naming the
//! grammar rules that matched (joined with `|`, outermost first), the literal
//! text for leaves, and ordered children for branches. Consumers test tags
//! by substring with [`SyntaxNode::tag_contains`].

use crate::span::Span;
use flispy_stack::ensure_sufficient_stack;
use std::fmt;

/// Tag of the root node wrapping a whole input line.
pub const ROOT_TAG: &str = ">";
/// Tag of a number leaf.
pub const NUMBER_TAG: &str = "expr|number|regex";
/// Tag of a symbol leaf.
pub const SYMBOL_TAG: &str = "expr|symbol|regex";
/// Tag of a parenthesized list.
pub const SEXPR_TAG: &str = "expr|sexpr|>";
/// Tag of a braced list.
pub const QEXPR_TAG: &str = "expr|qexpr|>";
/// Tag of a literal bracket leaf inside a list.
pub const CHAR_TAG: &str = "char";
/// Tag of the empty start/end anchors under the root.
pub const REGEX_TAG: &str = "regex";

/// One node of a parsed line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    tag: &'static str,
    contents: String,
    span: Span,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// A leaf carrying matched text.
    pub fn leaf(tag: &'static str, contents: impl Into<String>, span: Span) -> Self {
        SyntaxNode {
            tag,
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    /// A branch with no children yet.
    pub fn branch(tag: &'static str, span: Span) -> Self {
        SyntaxNode {
            tag,
            contents: String::new(),
            span,
            children: Vec::new(),
        }
    }

    /// Append a child, widening this node's span to cover it.
    pub fn push(&mut self, child: SyntaxNode) {
        self.span = self.span.merge(child.span);
        self.children.push(child);
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Substring match against the tag, e.g. `tag_contains("number")`.
    pub fn tag_contains(&self, needle: &str) -> bool {
        self.tag.contains(needle)
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        ensure_sufficient_stack(|| {
            write!(f, "{:indent$}", "", indent = depth * 2)?;
            if self.children.is_empty() && !self.contents.is_empty() {
                writeln!(f, "{}:{} '{}'", self.tag, self.span.start, self.contents)?;
            } else {
                writeln!(f, "{}", self.tag)?;
            }
            for child in &self.children {
                child.write_indented(f, depth + 1)?;
            }
            Ok(())
        })
    }
}

/// Indented tree dump, one node per line.
impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// Tears the tree down with a work list instead of recursive drop glue.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

#[cfg(test)]
mod tests;
