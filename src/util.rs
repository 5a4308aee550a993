/// Numeric helpers shared by the parser and the evaluator.
///
/// This module provides integer-to-real conversion, floor division and modulo
/// for both integers and reals, and the textual form of real values. It holds
/// the arithmetic that is not specific to a single operator.
///
/// # Responsibilities
/// - Convert integers to reals where operands are mixed.
/// - Provide floor division and divisor-signed remainders.
/// - Render reals so they stay distinguishable from integers.
pub mod num;
