//! Error kinds carried by `Value::Error`.
//!
//! Evaluation never fails out-of-band. Every failure becomes a
//! [`LispError`] wrapped in a value, flows upward like any other result and
//! is printed at the end of the cycle. Factory functions below are the
//! public way to build each kind; their `Display` text is what the user sees
//! after the `Error: ` prefix.

use thiserror::Error;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LispError {
    // Reading
    #[error("invalid number")]
    InvalidNumber { literal: String },

    // Arithmetic
    #[error("cannot operate on a non-number")]
    NotANumber {
        function: &'static str,
        got: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("negative exponent")]
    NegativeExponent,

    // Arity and shape
    #[error("function '{function}' passed no arguments")]
    NoArguments { function: &'static str },
    #[error("function '{function}' passed too {} arguments", too_many_or_few(.expected, .got))]
    WrongArgCount {
        function: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("function '{function}' passed incorrect type: expected {expected}, got {got}")]
    WrongType {
        function: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    #[error("function '{function}' passed {{}}")]
    EmptyList { function: &'static str },

    // Dispatch
    #[error("expression does not start with a symbol")]
    NotASymbol { got: &'static str },
    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },
}

fn too_many_or_few(expected: &usize, got: &usize) -> &'static str {
    if got > expected {
        "many"
    } else {
        "few"
    }
}

/// Numeric literal that does not fit a signed 64-bit integer.
#[cold]
pub fn invalid_number(literal: &str) -> LispError {
    LispError::InvalidNumber {
        literal: literal.to_string(),
    }
}

/// Arithmetic applied to something other than a number.
///
/// The message is fixed; the operator and operand type go to the debug log.
#[cold]
pub fn not_a_number(function: &'static str, got: &'static str) -> LispError {
    tracing::debug!(function, got, "non-number operand");
    LispError::NotANumber { function, got }
}

/// Zero right-hand operand to `/` or `%`.
#[cold]
pub fn division_by_zero() -> LispError {
    LispError::DivisionByZero
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> LispError {
    LispError::IntegerOverflow { operation }
}

#[cold]
pub fn negative_exponent() -> LispError {
    LispError::NegativeExponent
}

#[cold]
pub fn no_arguments(function: &'static str) -> LispError {
    LispError::NoArguments { function }
}

#[cold]
pub fn wrong_arg_count(function: &'static str, expected: usize, got: usize) -> LispError {
    LispError::WrongArgCount {
        function,
        expected,
        got,
    }
}

#[cold]
pub fn wrong_type(function: &'static str, expected: &'static str, got: &'static str) -> LispError {
    LispError::WrongType {
        function,
        expected,
        got,
    }
}

/// `head` or `tail` of `{}`.
#[cold]
pub fn empty_list(function: &'static str) -> LispError {
    LispError::EmptyList { function }
}

/// Multi-element s-expression whose first element is not a symbol.
#[cold]
pub fn not_a_symbol(got: &'static str) -> LispError {
    LispError::NotASymbol { got }
}

#[cold]
pub fn unknown_function(name: &str) -> LispError {
    LispError::UnknownFunction {
        name: name.to_string(),
    }
}
