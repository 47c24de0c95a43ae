//! Runtime values.
//!
//! A value is a tree. List variants own their children outright, so there
//! is no sharing and no cycles; handing a value to a function moves it, and
//! whatever the callee does not return is dropped on every exit path.
//!
//! Both list variants share one representation, [`ExprList`]. Turning an
//! s-expression into a q-expression (or back) is re-wrapping the same list,
//! with no copying of children.

use crate::errors::LispError;

/// A Flispy runtime value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// Signed 64-bit integer.
    Number(i64),
    /// Terminal failure. Has no children and poisons any enclosing
    /// evaluation.
    Error(LispError),
    /// A name, resolved only as a builtin when it heads an s-expression.
    Symbol(String),
    /// `( ... )`: evaluated by applying the first element to the rest.
    SExpr(ExprList),
    /// `{ ... }`: never evaluated implicitly.
    QExpr(ExprList),
}

impl Value {
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    pub fn error(error: LispError) -> Self {
        Value::Error(error)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Empty s-expression.
    pub fn sexpr() -> Self {
        Value::SExpr(ExprList::new())
    }

    /// Empty q-expression.
    pub fn qexpr() -> Self {
        Value::QExpr(ExprList::new())
    }

    /// Name of the variant, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Error(_) => "error",
            Value::Symbol(_) => "symbol",
            Value::SExpr(_) => "s-expression",
            Value::QExpr(_) => "q-expression",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Children of either list variant.
    pub fn as_list(&self) -> Option<&ExprList> {
        match self {
            Value::SExpr(list) | Value::QExpr(list) => Some(list),
            _ => None,
        }
    }
}

impl From<LispError> for Value {
    fn from(error: LispError) -> Self {
        Value::Error(error)
    }
}

/// Ordered, owned children of a list value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprList {
    items: Vec<Value>,
}

impl ExprList {
    pub fn new() -> Self {
        ExprList { items: Vec::new() }
    }

    /// Append `child` at the end, taking ownership of it.
    pub fn push(&mut self, child: Value) {
        self.items.push(child);
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, child: Value) -> Self {
        self.push(child);
        self
    }

    /// Detach the child at `index`, shifting later children left.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn pop(&mut self, index: usize) -> Option<Value> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Detach the child at `index` and drop the rest of the list.
    pub fn take(mut self, index: usize) -> Option<Value> {
        self.pop(index)
    }

    /// Detach the first child, returning it with the remaining list.
    pub fn split_first(mut self) -> Option<(Value, ExprList)> {
        let first = self.pop(0)?;
        Some((first, self))
    }

    /// Drop every child past the first `len`.
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    /// Move every child of `other` onto the end of this list.
    pub fn append(&mut self, mut other: ExprList) {
        self.items.append(&mut other.items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl IntoIterator for ExprList {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(mut self) -> Self::IntoIter {
        std::mem::take(&mut self.items).into_iter()
    }
}

impl<'a> IntoIterator for &'a ExprList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Value> for ExprList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        ExprList {
            items: iter.into_iter().collect(),
        }
    }
}

/// Releases nested lists with a work list so that dropping a deeply nested
/// value cannot exhaust the stack.
impl Drop for ExprList {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.items);
        while let Some(value) = pending.pop() {
            if let Value::SExpr(mut list) | Value::QExpr(mut list) = value {
                pending.append(&mut list.items);
            }
        }
    }
}

#[cfg(test)]
mod tests;
