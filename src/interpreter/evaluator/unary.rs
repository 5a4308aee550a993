use crate::{
    interpreter::{
        evaluator::{core::{Context, EvalResult}, utils::Site},
        operator::UnaryOperator,
        value::Value,
    },
    util::num::i64_to_f64,
};

impl Context {
    /// Evaluates a unary operator.
    ///
    /// `sqr` and `abs` keep integers integral, falling back to a real only when
    /// the integer result would overflow. All other operators convert their
    /// argument to a real.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `arg`: The popped operand.
    /// - `site`: The operator's position, for error reporting.
    ///
    /// # Errors
    /// - `DomainError` for `sqrt` of a negative, `asin`/`acos` outside
    ///   `[-1, 1]`, and trigonometric functions of an infinite value.
    /// - `Overflow` if `exp` of a finite value is infinite.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     Value,
    ///     interpreter::{
    ///         evaluator::{core::Context, utils::Site},
    ///         operator::UnaryOperator,
    ///     },
    /// };
    ///
    /// let site = Site { symbol:   "sqr",
    ///                   position: 1, };
    ///
    /// let result = Context::eval_unary(UnaryOperator::Sqr, Value::Integer(-3), &site).unwrap();
    /// assert_eq!(result, Value::Integer(9));
    /// ```
    pub fn eval_unary(op: UnaryOperator, arg: Value, site: &Site<'_>) -> EvalResult<Value> {
        use UnaryOperator::{Abs, Acos, Asin, Atan, Cos, Exp, Sin, Sqr, Sqrt, Tan};

        match op {
            Sqr => Ok(match arg {
                          Value::Integer(n) => n.checked_mul(n)
                                                .map_or_else(|| Value::Real(i64_to_f64(n).powi(2)),
                                                             Value::Integer),
                          Value::Real(x) => Value::Real(x * x),
                      }),
            Abs => Ok(match arg {
                          Value::Integer(n) => n.checked_abs()
                                                .map_or_else(|| Value::Real(i64_to_f64(n).abs()),
                                                             Value::Integer),
                          Value::Real(x) => Value::Real(x.abs()),
                      }),
            Sqrt => {
                let x = arg.as_real();
                if x < 0.0 {
                    return Err(site.domain_error(arg));
                }
                Ok(Value::Real(x.sqrt()))
            },
            Asin | Acos => {
                let x = arg.as_real();
                if x.abs() > 1.0 {
                    return Err(site.domain_error(arg));
                }
                Ok(Value::Real(if op == Asin { x.asin() } else { x.acos() }))
            },
            Sin | Cos | Tan => {
                let x = arg.as_real();
                if x.is_infinite() {
                    return Err(site.domain_error(arg));
                }
                Ok(Value::Real(match op {
                                   Sin => x.sin(),
                                   Cos => x.cos(),
                                   _ => x.tan(),
                               }))
            },
            Atan => Ok(Value::Real(arg.as_real().atan())),
            Exp => {
                let x = arg.as_real();
                let result = x.exp();
                if result.is_infinite() && x.is_finite() {
                    return Err(site.overflow());
                }
                Ok(Value::Real(result))
            },
        }
    }
}
