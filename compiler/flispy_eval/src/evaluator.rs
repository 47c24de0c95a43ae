//! Tree-walking evaluator.
//!
//! Numbers, errors, symbols and q-expressions are already in normal form.
//! An s-expression is reduced by evaluating its children left to right and
//! then:
//!
//! - the first child that evaluates to an error becomes the result, and the
//!   children after it are dropped unevaluated;
//! - `()` stays `()`;
//! - a single child is unwrapped, so `(((5)))` is `5`;
//! - otherwise the first child must be a symbol naming a builtin, which is
//!   applied to the rest.

use crate::builtins::BuiltinTable;
use crate::errors::{not_a_symbol, unknown_function};
use crate::reader::read;
use crate::value::{ExprList, Value};
use flispy_parse::{parse, ParseError};
use flispy_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

/// Evaluator over a fixed builtin table.
#[derive(Clone, Debug)]
pub struct Evaluator {
    builtins: BuiltinTable,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Evaluator with the standard builtins.
    pub fn new() -> Self {
        Self::with_builtins(BuiltinTable::standard())
    }

    pub fn with_builtins(builtins: BuiltinTable) -> Self {
        Evaluator { builtins }
    }

    pub fn builtins(&self) -> &BuiltinTable {
        &self.builtins
    }

    /// Reduce a value to normal form.
    pub fn eval(&self, value: Value) -> Value {
        match value {
            Value::SExpr(list) => self.eval_sexpr(list),
            other => other,
        }
    }

    /// Reduce the children of an s-expression and apply the result.
    pub fn eval_sexpr(&self, list: ExprList) -> Value {
        ensure_sufficient_stack(|| {
            let mut evaluated = ExprList::new();
            for child in list {
                match self.eval(child) {
                    error @ Value::Error(_) => return error,
                    value => evaluated.push(value),
                }
            }

            let Some((first, args)) = evaluated.split_first() else {
                return Value::sexpr();
            };
            if args.is_empty() {
                return first;
            }
            match first {
                Value::Symbol(name) => self.call(&name, args),
                other => not_a_symbol(other.type_name()).into(),
            }
        })
    }

    /// Apply the builtin called `name`.
    fn call(&self, name: &str, args: ExprList) -> Value {
        trace!(function = name, argc = args.len(), "dispatch");
        match self.builtins.get(name) {
            Some(builtin) => builtin.call(self, args),
            None => unknown_function(name).into(),
        }
    }

    /// Parse, read and evaluate one input line.
    ///
    /// The whole line is one s-expression, so `+ 1 2` and `(+ 1 2)` both
    /// give `3`.
    pub fn eval_line(&self, source: &str) -> Result<Value, ParseError> {
        let tree = parse(source)?;
        let result = self.eval(read(&tree));
        debug!(source, result = %result, "evaluated line");
        Ok(result)
    }
}
