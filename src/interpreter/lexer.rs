use std::borrow::Cow;

use logos::Logos;

use crate::interpreter::{
    operator::{BinaryOperator, UnaryOperator},
    value::Value,
};

/// Represents an operator symbol recognized in a token.
///
/// Each variant carries the operator it dispatches to; aliases such as `mult`
/// and `*` map to the same operator. Symbols are matched exactly, without
/// surrounding whitespace.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Single operand symbols, such as `sqrt` or `sin`.
    #[token("sin", |_| UnaryOperator::Sin)]
    #[token("cos", |_| UnaryOperator::Cos)]
    #[token("tan", |_| UnaryOperator::Tan)]
    #[token("asin", |_| UnaryOperator::Asin)]
    #[token("acos", |_| UnaryOperator::Acos)]
    #[token("atan", |_| UnaryOperator::Atan)]
    #[token("sqrt", |_| UnaryOperator::Sqrt)]
    #[token("sqr", |_| UnaryOperator::Sqr)]
    #[token("abs", |_| UnaryOperator::Abs)]
    #[token("exp", |_| UnaryOperator::Exp)]
    Unary(UnaryOperator),
    /// Two operand symbols, such as `+` or `pow`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("mult", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("div", |_| BinaryOperator::Div)]
    #[token("//", |_| BinaryOperator::FloorDiv)]
    #[token("idiv", |_| BinaryOperator::FloorDiv)]
    #[token("pow", |_| BinaryOperator::Pow)]
    #[token("%", |_| BinaryOperator::Mod)]
    #[token("mod", |_| BinaryOperator::Mod)]
    Binary(BinaryOperator),
}

impl Token {
    /// Matches a whole token against the operator symbols.
    ///
    /// # Returns
    /// - `Some(Token)`: If `text` is exactly one operator symbol.
    /// - `None`: Otherwise, including symbols with trailing or leading text
    ///   such as `sinx` or ` +`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::{
    ///     lexer::Token,
    ///     operator::{BinaryOperator, UnaryOperator},
    /// };
    ///
    /// assert_eq!(Token::recognize("//"), Some(Token::Binary(BinaryOperator::FloorDiv)));
    /// assert_eq!(Token::recognize("sqr"), Some(Token::Unary(UnaryOperator::Sqr)));
    /// assert_eq!(Token::recognize("sqrt2"), None);
    /// ```
    #[must_use]
    pub fn recognize(text: &str) -> Option<Self> {
        let mut lexer = Self::lexer(text);
        let token = lexer.next()?.ok()?;

        (lexer.span() == (0..text.len())).then_some(token)
    }
}

/// Parses a numeric literal.
///
/// Surrounding whitespace is ignored and `_` is accepted between digits. The
/// text is tried as an integer first and as a real second, so `42` yields an
/// integer while `42.0`, `4e1`, `inf` and integers too large for `i64` yield
/// reals.
///
/// # Returns
/// - `Some(Value)`: The parsed literal.
/// - `None`: If the text is not a number.
///
/// # Example
/// ```
/// use rpncalc::{Value, interpreter::lexer::parse_literal};
///
/// assert_eq!(parse_literal("42"), Some(Value::Integer(42)));
/// assert_eq!(parse_literal("-0.5"), Some(Value::Real(-0.5)));
/// assert_eq!(parse_literal("1_000"), Some(Value::Integer(1000)));
/// assert_eq!(parse_literal("foo"), None);
/// ```
#[must_use]
pub fn parse_literal(text: &str) -> Option<Value> {
    let digits = strip_digit_separators(text.trim())?;

    if let Ok(n) = digits.parse::<i64>() {
        return Some(Value::Integer(n));
    }

    digits.parse::<f64>().ok().map(Value::Real)
}

/// Removes `_` separators, rejecting any that is not between two digits.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    let between_digits = |index: usize| {
        index > 0
        && bytes[index - 1].is_ascii_digit()
        && bytes.get(index + 1).is_some_and(u8::is_ascii_digit)
    };
    let well_placed = bytes.iter()
                           .enumerate()
                           .all(|(index, &byte)| byte != b'_' || between_digits(index));

    well_placed.then(|| Cow::Owned(text.replace('_', "")))
}
