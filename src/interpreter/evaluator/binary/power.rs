use crate::interpreter::{
    evaluator::{core::{Context, EvalResult}, utils::Site},
    value::Value,
};

impl Context {
    /// Evaluates `pow` as `left ** right`.
    ///
    /// An integer raised to a non-negative integer stays an integer unless it
    /// overflows `i64`. A negative integer exponent, or any real operand,
    /// produces a real.
    ///
    /// # Errors
    /// - `DivisionByZero` if zero is raised to a negative power.
    /// - `DomainError` if a negative base is raised to a fractional power.
    /// - `Overflow` if finite operands produce an infinite result.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     Value,
    ///     interpreter::evaluator::{core::Context, utils::Site},
    /// };
    ///
    /// let site = Site { symbol:   "pow",
    ///                   position: 2, };
    ///
    /// let power = Context::eval_pow(Value::Integer(2), Value::Integer(10), &site);
    /// assert_eq!(power.unwrap(), Value::Integer(1024));
    ///
    /// let power = Context::eval_pow(Value::Integer(2), Value::Integer(-1), &site);
    /// assert_eq!(power.unwrap(), Value::Real(0.5));
    /// ```
    pub fn eval_pow(left: Value, right: Value, site: &Site<'_>) -> EvalResult<Value> {
        if let (Value::Integer(base), Value::Integer(exponent)) = (left, right)
           && let Ok(exponent) = u32::try_from(exponent)
           && let Some(n) = base.checked_pow(exponent)
        {
            return Ok(Value::Integer(n));
        }

        let (base, exponent) = (left.as_real(), right.as_real());

        if base == 0.0 && exponent < 0.0 {
            return Err(site.division_by_zero());
        }

        let result = base.powf(exponent);

        if result.is_nan() && !base.is_nan() && !exponent.is_nan() {
            return Err(site.domain_error(left));
        }
        if result.is_infinite() && base.is_finite() && exponent.is_finite() {
            return Err(site.overflow());
        }

        Ok(Value::Real(result))
    }
}
