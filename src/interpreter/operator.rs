/// Operators that pop one value and push one result.
///
/// Trigonometric functions work in radians. Every variant except `Sqr` and
/// `Abs` produces a real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `asin`
    Asin,
    /// `acos`
    Acos,
    /// `atan`
    Atan,
    /// `sqrt`
    Sqrt,
    /// `sqr`, the value multiplied by itself.
    Sqr,
    /// `abs`
    Abs,
    /// `exp`, e raised to the value.
    Exp,
}

/// Operators that pop two values and push one result.
///
/// The value pushed first is the left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*` or `mult`
    Mul,
    /// `/` or `div`, always producing a real.
    Div,
    /// `//` or `idiv`, rounding toward negative infinity.
    FloorDiv,
    /// `pow`
    Pow,
    /// `%` or `mod`, taking the sign of the divisor.
    Mod,
}
