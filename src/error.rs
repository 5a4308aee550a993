/// Evaluation errors.
///
/// Defines every failure an evaluation can end in: malformed input, unknown
/// tokens, stack underflow, leftover stack values, and numeric failures such as
/// division by zero or domain violations.
pub mod eval_error;

pub use eval_error::EvalError;
