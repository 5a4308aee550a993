use crate::{
    interpreter::{
        evaluator::{core::{Context, EvalResult}, utils::Site},
        value::Value,
    },
    util::num::{checked_floor_div, checked_floor_mod, floor_div_f64, floor_mod_f64},
};

impl Context {
    /// Evaluates `/`; the quotient is always real, even for two integers.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `right` is zero.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     Value,
    ///     interpreter::evaluator::{core::Context, utils::Site},
    /// };
    ///
    /// let site = Site { symbol:   "/",
    ///                   position: 2, };
    ///
    /// let result = Context::eval_true_div(Value::Integer(4), Value::Integer(2), &site).unwrap();
    /// assert_eq!(result, Value::Real(2.0));
    /// ```
    pub fn eval_true_div(left: Value, right: Value, site: &Site<'_>) -> EvalResult<Value> {
        if right.is_zero() {
            return Err(site.division_by_zero());
        }

        Ok(Value::Real(left.as_real() / right.as_real()))
    }
    /// Evaluates `//`, rounding the quotient toward negative infinity.
    ///
    /// Two integers produce an integer; `i64::MIN // -1` falls back to a real.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `right` is zero.
    pub fn eval_floor_div(left: Value, right: Value, site: &Site<'_>) -> EvalResult<Value> {
        if right.is_zero() {
            return Err(site.division_by_zero());
        }

        if let (Value::Integer(a), Value::Integer(b)) = (left, right)
           && let Some(n) = checked_floor_div(a, b)
        {
            return Ok(Value::Integer(n));
        }

        Ok(Value::Real(floor_div_f64(left.as_real(), right.as_real())))
    }
    /// Evaluates `%`; the remainder takes the sign of `right`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `right` is zero.
    pub fn eval_mod(left: Value, right: Value, site: &Site<'_>) -> EvalResult<Value> {
        if right.is_zero() {
            return Err(site.division_by_zero());
        }

        if let (Value::Integer(a), Value::Integer(b)) = (left, right)
           && let Some(n) = checked_floor_mod(a, b)
        {
            return Ok(Value::Integer(n));
        }

        Ok(Value::Real(floor_mod_f64(left.as_real(), right.as_real())))
    }
}
