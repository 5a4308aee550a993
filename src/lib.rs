//! # rpncalc
//!
//! rpncalc evaluates reverse Polish notation (RPN) expressions written in Rust.
//! An expression is given either as delimited text, such as `"3 3 2 * + sqrt"`,
//! or as a sequence of tokens, and evaluates to a single number.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::any::Any;

/// Provides the error type for evaluation.
///
/// This module defines every error an evaluation can end in. Each error
/// carries the offending token or the leftover stack so the caller can report
/// what went wrong.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes.
/// - Attaches token positions for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Turns input into tokens and evaluates them.
///
/// This module ties together input normalization, token classification,
/// operator definitions, values and the stack machine.
///
/// # Responsibilities
/// - Coordinates the source, lexer, operator, value and evaluator modules.
/// - Manages the flow of data and errors between them.
pub mod interpreter;
/// General numeric helpers.
///
/// This module provides conversions, floor division and remainder routines
/// and number formatting used by the operators and by [`Value`]'s `Display`.
pub mod util;

pub use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        source::{Code, DEFAULT_DELIMITER, Item},
        value::Value,
    },
};
use crate::interpreter::evaluator::core::Context;

/// Evaluates an RPN expression and returns its result.
///
/// Text is lower-cased, `pi` is replaced by π, and the text is split on
/// `delimiter`; empty pieces are ignored. Token sequences are evaluated
/// as given. Integer results stay integers.
///
/// # Errors
/// Returns an error if a token is neither an operator nor a number, an
/// operator lacks operands, a numeric operation fails, or the expression does
/// not reduce to exactly one value.
///
/// # Examples
/// ```
/// use rpncalc::{Value, evaluate};
///
/// assert_eq!(evaluate("2 2 +", " ").unwrap(), Value::Integer(4));
/// assert_eq!(evaluate("3 3 2 * + sqrt", " ").unwrap(), Value::Real(3.0));
/// assert_eq!(evaluate("2,2,+", ",").unwrap(), Value::Integer(4));
/// assert_eq!(evaluate(vec!["2", "2", "+"], " ").unwrap(), Value::Integer(4));
///
/// // Two values are left on the stack.
/// assert!(evaluate("2 2 2", " ").is_err());
/// ```
pub fn evaluate(code: impl Into<Code>, delimiter: &str) -> EvalResult<Value> {
    let tokens = code.into().into_tokens(delimiter);

    Context::new().run(&tokens)
}

/// Evaluates an RPN expression split on the default delimiter, a single space.
///
/// # Examples
/// ```
/// use rpncalc::{Value, evaluate_with_default};
///
/// assert_eq!(evaluate_with_default("10 4 //").unwrap(), Value::Integer(2));
/// ```
pub fn evaluate_with_default(code: impl Into<Code>) -> EvalResult<Value> {
    evaluate(code, DEFAULT_DELIMITER)
}

/// Evaluates input whose type is only known at runtime.
///
/// # Errors
/// Returns `EvalError::InvalidInputKind` if `code` is neither a string nor a
/// sequence of strings, and otherwise behaves like [`evaluate`].
///
/// # Examples
/// ```
/// use rpncalc::{EvalError, Value, evaluate_any};
///
/// assert_eq!(evaluate_any(&"2 2 +", " ").unwrap(), Value::Integer(4));
/// assert!(matches!(evaluate_any(&42, " "), Err(EvalError::InvalidInputKind { .. })));
/// ```
pub fn evaluate_any<T: Any>(code: &T, delimiter: &str) -> EvalResult<Value> {
    evaluate(Code::from_any(code)?, delimiter)
}
