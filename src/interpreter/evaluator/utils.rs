use crate::{error::EvalError, interpreter::value::Value};

/// Where an operator appeared in the token sequence.
///
/// Operator implementations build their errors through a `Site` so every
/// error names the symbol as written and its position.
#[derive(Debug, Clone, Copy)]
pub struct Site<'a> {
    /// The operator symbol as it appeared in the input.
    pub symbol:   &'a str,
    /// Index of the operator in the token sequence.
    pub position: usize,
}

impl Site<'_> {
    #[must_use]
    pub fn stack_underflow(&self, required: usize, available: usize) -> EvalError {
        EvalError::StackUnderflow { operator: self.symbol.to_string(),
                                    required,
                                    available,
                                    position: self.position, }
    }

    #[must_use]
    pub fn division_by_zero(&self) -> EvalError {
        EvalError::DivisionByZero { operator: self.symbol.to_string(),
                                    position: self.position, }
    }

    #[must_use]
    pub fn domain_error(&self, value: Value) -> EvalError {
        EvalError::DomainError { operator: self.symbol.to_string(),
                                 value,
                                 position: self.position, }
    }

    #[must_use]
    pub fn overflow(&self) -> EvalError {
        EvalError::Overflow { operator: self.symbol.to_string(),
                              position: self.position, }
    }
}
