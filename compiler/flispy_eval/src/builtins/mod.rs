//! Builtin function table.
//!
//! Every symbol in function position is resolved here by name. A builtin
//! receives the already-evaluated argument list by value and returns one
//! result; anything it does not hand back is dropped, including on early
//! error returns. Adding a builtin means adding one table entry.

mod arithmetic;
mod list;

pub use arithmetic::ArithOp;

use crate::errors::LispError;
use crate::evaluator::Evaluator;
use crate::value::{ExprList, Value};
use rustc_hash::FxHashMap;
use std::fmt;

/// Result of a builtin before it is folded back into a [`Value`].
pub type BuiltinResult = Result<Value, LispError>;

/// Builtin signature. The evaluator is passed through for `eval`.
pub type BuiltinFn = fn(&Evaluator, ExprList) -> BuiltinResult;

/// Builtins registered by [`BuiltinTable::standard`].
const STANDARD: &[(&str, BuiltinFn)] = &[
    ("+", arithmetic::add),
    ("-", arithmetic::sub),
    ("*", arithmetic::mul),
    ("/", arithmetic::div),
    ("%", arithmetic::rem),
    ("^", arithmetic::pow),
    ("list", list::list),
    ("head", list::head),
    ("tail", list::tail),
    ("join", list::join),
    ("eval", list::eval),
];

/// A named builtin.
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply to an argument list. Failures come back as `Value::Error`.
    pub fn call(&self, evaluator: &Evaluator, args: ExprList) -> Value {
        (self.func)(evaluator, args).unwrap_or_else(Value::Error)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Builtin").field(&self.name).finish()
    }
}

/// Name to builtin mapping.
#[derive(Clone, Debug, Default)]
pub struct BuiltinTable {
    entries: FxHashMap<&'static str, Builtin>,
}

impl BuiltinTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The arithmetic operators and list functions.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for &(name, func) in STANDARD {
            table.register(name, func);
        }
        table
    }

    /// Add or replace an entry, returning the one it replaced.
    pub fn register(&mut self, name: &'static str, func: BuiltinFn) -> Option<Builtin> {
        self.entries.insert(name, Builtin { name, func })
    }

    pub fn get(&self, name: &str) -> Option<Builtin> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests;
