/// Addition, subtraction and multiplication.
pub mod arithmetic;
/// True division, floor division and modulo.
///
/// All three reject a zero divisor.
pub mod division;
/// Exponentiation.
pub mod power;

use crate::interpreter::{
    evaluator::{core::{Context, EvalResult}, utils::Site},
    operator::BinaryOperator,
    value::Value,
};

impl Context {
    /// Evaluates a binary operator as `op(left, right)`.
    ///
    /// `left` is the operand that was pushed first. Dispatches to the
    /// arithmetic, division or power evaluation.
    ///
    /// # Errors
    /// Returns the numeric error raised by the operator, such as
    /// `DivisionByZero`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     Value,
    ///     interpreter::{
    ///         evaluator::{core::Context, utils::Site},
    ///         operator::BinaryOperator,
    ///     },
    /// };
    ///
    /// let site = Site { symbol:   "-",
    ///                   position: 2, };
    ///
    /// let result =
    ///     Context::eval_binary(BinaryOperator::Sub, Value::Integer(10), Value::Integer(4), &site);
    /// assert_eq!(result.unwrap(), Value::Integer(6));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       site: &Site<'_>)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

        match op {
            Add => Ok(Self::eval_arithmetic(left, right, i64::checked_add, |a, b| a + b)),
            Sub => Ok(Self::eval_arithmetic(left, right, i64::checked_sub, |a, b| a - b)),
            Mul => Ok(Self::eval_arithmetic(left, right, i64::checked_mul, |a, b| a * b)),
            Div => Self::eval_true_div(left, right, site),
            FloorDiv => Self::eval_floor_div(left, right, site),
            Mod => Self::eval_mod(left, right, site),
            Pow => Self::eval_pow(left, right, site),
        }
    }
}
