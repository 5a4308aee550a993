use crate::interpreter::{evaluator::core::Context, value::Value};

impl Context {
    /// Evaluates an arithmetic operation such as `+`, `-` or `*`.
    ///
    /// Two integers are combined with `exact`; if it reports overflow, or if
    /// either operand is real, both operands are promoted and combined with
    /// `real`.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `exact`: Checked integer operation, `None` on overflow.
    /// - `real`: The same operation on reals.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{Value, interpreter::evaluator::core::Context};
    ///
    /// let sum =
    ///     Context::eval_arithmetic(Value::Integer(2), Value::Real(0.5), i64::checked_add, |a, b| a + b);
    /// assert_eq!(sum, Value::Real(2.5));
    ///
    /// let product = Context::eval_arithmetic(Value::Integer(i64::MAX),
    ///                                        Value::Integer(2),
    ///                                        i64::checked_mul,
    ///                                        |a, b| a * b);
    /// assert!(matches!(product, Value::Real(_)));
    /// ```
    #[must_use]
    pub fn eval_arithmetic(left: Value,
                           right: Value,
                           exact: fn(i64, i64) -> Option<i64>,
                           real: fn(f64, f64) -> f64)
                           -> Value {
        if let (Value::Integer(a), Value::Integer(b)) = (left, right)
           && let Some(n) = exact(a, b)
        {
            return Value::Integer(n);
        }

        Value::Real(real(left.as_real(), right.as_real()))
    }
}
