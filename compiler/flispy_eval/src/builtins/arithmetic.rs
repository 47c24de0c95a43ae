//! Integer arithmetic builtins.
//!
//! Each operator folds its arguments left to right with the first argument
//! as the accumulator. All arithmetic is checked: overflow is an error
//! value, never a silent wrap.

use super::BuiltinResult;
use crate::errors::{
    division_by_zero, integer_overflow, negative_exponent, no_arguments, not_a_number, LispError,
};
use crate::evaluator::Evaluator;
use crate::value::{ExprList, Value};

/// The arithmetic operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl ArithOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(ArithOp::Add),
            "-" => Some(ArithOp::Sub),
            "*" => Some(ArithOp::Mul),
            "/" => Some(ArithOp::Div),
            "%" => Some(ArithOp::Rem),
            "^" => Some(ArithOp::Pow),
            _ => None,
        }
    }

    pub fn as_symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
            ArithOp::Pow => "^",
        }
    }

    /// Operation name used in overflow messages.
    fn operation(self) -> &'static str {
        match self {
            ArithOp::Add => "addition",
            ArithOp::Sub => "subtraction",
            ArithOp::Mul => "multiplication",
            ArithOp::Div => "division",
            ArithOp::Rem => "remainder",
            ArithOp::Pow => "exponentiation",
        }
    }

    /// Apply to one pair of operands.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, LispError> {
        let result = match self {
            ArithOp::Add => lhs.checked_add(rhs),
            ArithOp::Sub => lhs.checked_sub(rhs),
            ArithOp::Mul => lhs.checked_mul(rhs),
            ArithOp::Div | ArithOp::Rem if rhs == 0 => return Err(division_by_zero()),
            ArithOp::Div => lhs.checked_div(rhs),
            ArithOp::Rem => lhs.checked_rem(rhs),
            ArithOp::Pow => return checked_power(lhs, rhs),
        };
        result.ok_or_else(|| integer_overflow(self.operation()))
    }
}

/// Exact integer power.
///
/// Exponents past `u32::MAX` only fit for bases `0`, `1` and `-1`.
fn checked_power(base: i64, exponent: i64) -> Result<i64, LispError> {
    if exponent < 0 {
        return Err(negative_exponent());
    }
    let overflow = || integer_overflow(ArithOp::Pow.operation());
    match u32::try_from(exponent) {
        Ok(exp) => base.checked_pow(exp).ok_or_else(overflow),
        Err(_) => match base {
            0 | 1 => Ok(base),
            -1 if exponent % 2 == 0 => Ok(1),
            -1 => Ok(-1),
            _ => Err(overflow()),
        },
    }
}

/// Fold `op` over `args`.
///
/// Every argument must be a number. A lone argument to `-` is negated. A
/// failing step aborts the fold and the remaining operands are discarded.
pub fn fold(op: ArithOp, args: ExprList) -> BuiltinResult {
    let function = op.as_symbol();
    let mut numbers = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::Number(n) => numbers.push(n),
            other => return Err(not_a_number(function, other.type_name())),
        }
    }

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(no_arguments(function));
    };

    if op == ArithOp::Sub && rest.is_empty() {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or_else(|| integer_overflow("negation"));
    }

    rest.iter()
        .try_fold(first, |acc, &operand| op.apply(acc, operand))
        .map(Value::Number)
}

pub(super) fn add(_: &Evaluator, args: ExprList) -> BuiltinResult {
    fold(ArithOp::Add, args)
}

pub(super) fn sub(_: &Evaluator, args: ExprList) -> BuiltinResult {
    fold(ArithOp::Sub, args)
}

pub(super) fn mul(_: &Evaluator, args: ExprList) -> BuiltinResult {
    fold(ArithOp::Mul, args)
}

pub(super) fn div(_: &Evaluator, args: ExprList) -> BuiltinResult {
    fold(ArithOp::Div, args)
}

pub(super) fn rem(_: &Evaluator, args: ExprList) -> BuiltinResult {
    fold(ArithOp::Rem, args)
}

pub(super) fn pow(_: &Evaluator, args: ExprList) -> BuiltinResult {
    fold(ArithOp::Pow, args)
}
