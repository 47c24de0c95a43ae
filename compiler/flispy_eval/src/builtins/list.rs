//! Q-expression builtins: `list`, `head`, `tail`, `join`, `eval`.

use super::BuiltinResult;
use crate::errors::{empty_list, wrong_arg_count, wrong_type, LispError};
use crate::evaluator::Evaluator;
use crate::value::{ExprList, Value};

const QEXPR: &str = "q-expression";

/// The sole argument, or an arity error.
fn expect_single(function: &'static str, args: ExprList) -> Result<Value, LispError> {
    match args.len() {
        1 => args.take(0).ok_or_else(|| wrong_arg_count(function, 1, 0)),
        got => Err(wrong_arg_count(function, 1, got)),
    }
}

/// The sole argument's children, which must form a non-empty q-expression.
fn expect_nonempty_qexpr(function: &'static str, args: ExprList) -> Result<ExprList, LispError> {
    match expect_single(function, args)? {
        Value::QExpr(list) if list.is_empty() => Err(empty_list(function)),
        Value::QExpr(list) => Ok(list),
        other => Err(wrong_type(function, QEXPR, other.type_name())),
    }
}

/// `(list 1 2 3)` → `{1 2 3}`. The argument list itself becomes the result.
pub(super) fn list(_: &Evaluator, args: ExprList) -> BuiltinResult {
    Ok(Value::QExpr(args))
}

/// `(head {1 2 3})` → `{1}`.
pub(super) fn head(_: &Evaluator, args: ExprList) -> BuiltinResult {
    let mut list = expect_nonempty_qexpr("head", args)?;
    list.truncate(1);
    Ok(Value::QExpr(list))
}

/// `(tail {1 2 3})` → `{2 3}`.
pub(super) fn tail(_: &Evaluator, args: ExprList) -> BuiltinResult {
    let mut list = expect_nonempty_qexpr("tail", args)?;
    list.pop(0);
    Ok(Value::QExpr(list))
}

/// `(join {1} {2 3})` → `{1 2 3}`. Children are moved, not copied.
pub(super) fn join(_: &Evaluator, args: ExprList) -> BuiltinResult {
    let mut joined = ExprList::new();
    for arg in args {
        match arg {
            Value::QExpr(list) => joined.append(list),
            other => return Err(wrong_type("join", QEXPR, other.type_name())),
        }
    }
    Ok(Value::QExpr(joined))
}

/// `(eval {+ 1 2})` → `3`. The q-expression is re-wrapped as an
/// s-expression and evaluated.
pub(super) fn eval(evaluator: &Evaluator, args: ExprList) -> BuiltinResult {
    match expect_single("eval", args)? {
        Value::QExpr(body) => Ok(evaluator.eval(Value::SExpr(body))),
        other => Err(wrong_type("eval", QEXPR, other.type_name())),
    }
}
