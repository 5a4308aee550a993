/// Binary operator evaluation logic.
///
/// Handles arithmetic, division, floor division, modulo and exponentiation,
/// including integer/real promotion.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the trigonometric functions, square root, square, absolute value
/// and the exponential function.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the stack machine that consumes tokens, dispatches operators and
/// checks the final stack.
pub mod core;

/// Utility types for evaluation.
///
/// Provides the operator position used to build errors.
pub mod utils;
