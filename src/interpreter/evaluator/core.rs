use crate::{
    error::EvalError,
    interpreter::{
        evaluator::utils::Site,
        lexer::{Token, parse_literal},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the state of a single evaluation.
///
/// ## Usage
///
/// A `Context` is created for one token sequence and consumed by
/// [`Context::run`]. It owns the operand stack, so independent evaluations
/// never share state.
#[derive(Debug, Default)]
pub struct Context {
    /// Operand stack, bottom first.
    pub stack: Vec<Value>,
}

impl Context {
    /// Creates a context with an empty operand stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }
    /// Evaluates a whole token sequence and returns its single result.
    ///
    /// Tokens are processed left to right. Evaluation stops at the first
    /// failing token.
    ///
    /// # Errors
    /// Returns the error raised by the first failing token, or
    /// `EvalError::IncompleteExpression` if the stack does not end up holding
    /// exactly one value.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{Value, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::new().run(&["3", "4", "*"]).unwrap();
    /// assert_eq!(result, Value::Integer(12));
    /// ```
    pub fn run<S: AsRef<str>>(mut self, tokens: &[S]) -> EvalResult<Value> {
        for (position, token) in tokens.iter().enumerate() {
            self.step(token.as_ref(), position)?;
        }

        self.finish()
    }
    /// Processes a single token.
    ///
    /// Operators pop their operands and push the result; anything else must
    /// be a numeric literal and is pushed as is.
    ///
    /// # Parameters
    /// - `text`: The token.
    /// - `position`: Index of the token in the sequence, for error reporting.
    ///
    /// # Errors
    /// Returns `EvalError::StackUnderflow` if an operator lacks operands,
    /// `EvalError::InvalidToken` if the token is neither an operator nor a
    /// number, or the numeric error raised by the operator itself.
    pub fn step(&mut self, text: &str, position: usize) -> EvalResult<()> {
        let site = Site { symbol: text,
                          position };

        let value = match Token::recognize(text) {
            Some(Token::Unary(op)) => {
                let [arg] = self.pop_operands(&site)?;
                Self::eval_unary(op, arg, &site)?
            },
            Some(Token::Binary(op)) => {
                let [left, right] = self.pop_operands(&site)?;
                Self::eval_binary(op, left, right, &site)?
            },
            None => parse_literal(text).ok_or_else(|| EvalError::InvalidToken { token: text.to_string(),
                                                                                  position, })?,
        };

        self.stack.push(value);
        Ok(())
    }
    /// Ends the evaluation.
    ///
    /// # Errors
    /// Returns `EvalError::IncompleteExpression` carrying the whole stack if it
    /// holds zero or several values.
    pub fn finish(self) -> EvalResult<Value> {
        match self.stack.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::IncompleteExpression { leftover: self.stack }),
        }
    }
    /// Pops the top `N` values, returned in the order they were pushed.
    fn pop_operands<const N: usize>(&mut self, site: &Site<'_>) -> EvalResult<[Value; N]> {
        let available = self.stack.len();
        if available < N {
            return Err(site.stack_underflow(N, available));
        }

        let mut operands = [Value::Integer(0); N];
        operands.copy_from_slice(&self.stack[available - N..]);
        self.stack.truncate(available - N);

        Ok(operands)
    }
}
