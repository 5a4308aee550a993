use crate::interpreter::value::Value;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an RPN expression.
///
/// Every variant aborts the evaluation; no partial result is produced.
pub enum EvalError {
    /// The input was neither a string nor an ordered sequence of strings.
    InvalidInputKind {
        /// A description of the type that was supplied.
        found: String,
    },
    /// A token is neither an operator symbol nor a numeric literal.
    InvalidToken {
        /// The offending token.
        token:    String,
        /// Index of the token in the normalized token sequence.
        position: usize,
    },
    /// An operator needed more operands than the stack held.
    StackUnderflow {
        /// The operator symbol as it appeared in the input.
        operator:  String,
        /// The number of operands the operator consumes.
        required:  usize,
        /// The number of operands that were on the stack.
        available: usize,
        /// Index of the operator in the normalized token sequence.
        position:  usize,
    },
    /// The token stream ended with zero or more than one value on the stack.
    IncompleteExpression {
        /// Everything left on the stack, bottom first.
        leftover: Vec<Value>,
    },
    /// A division, floor division or modulo had a zero divisor, or zero was
    /// raised to a negative power.
    DivisionByZero {
        /// The operator symbol as it appeared in the input.
        operator: String,
        /// Index of the operator in the normalized token sequence.
        position: usize,
    },
    /// The argument lies outside the domain of the function.
    DomainError {
        /// The operator symbol as it appeared in the input.
        operator: String,
        /// The rejected argument.
        value:    Value,
        /// Index of the operator in the normalized token sequence.
        position: usize,
    },
    /// A finite computation produced an infinite result.
    Overflow {
        /// The operator symbol as it appeared in the input.
        operator: String,
        /// Index of the operator in the normalized token sequence.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInputKind { found } => write!(f,
                                                       "Code must be either a string or a sequence of numbers and operators, found {found}."),

            Self::InvalidToken { token, position } => write!(f,
                                                              "Error at token {position}: '{token}' is neither an operator nor a number."),

            Self::StackUnderflow { operator,
                                   required,
                                   available,
                                   position, } => write!(f,
                                                         "Error at token {position}: '{operator}' needs {required} operand(s) but the stack holds {available}."),

            Self::IncompleteExpression { leftover } => {
                write!(f,
                       "The code must be a valid RPN code. The calculation stopped with these elements: ")?;

                for (index, value) in leftover.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{value}")?;
                }

                Ok(())
            },

            Self::DivisionByZero { operator, position } => {
                write!(f, "Error at token {position}: Division by zero in '{operator}'.")
            },

            Self::DomainError { operator,
                                value,
                                position, } => {
                write!(f, "Error at token {position}: {value} is outside the domain of '{operator}'.")
            },

            Self::Overflow { operator, position } => {
                write!(f, "Error at token {position}: Result of '{operator}' is out of range.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
