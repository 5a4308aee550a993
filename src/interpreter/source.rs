use std::any::{Any, type_name};

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Delimiter used when none is given: a single space.
pub const DEFAULT_DELIMITER: &str = " ";

/// Represents the input handed to the evaluator.
///
/// Text is normalized and split before evaluation; tokens are evaluated as
/// given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    /// A whole expression such as `"3 3 2 * + sqrt"`.
    Text(String),
    /// An expression that is already split, one number or operator per item.
    Tokens(Vec<String>),
}

/// One element of a pre-split expression: a number or an operator symbol.
///
/// Numbers are turned back into literal text that parses to the same value,
/// so `Item::Number(Value::Real(0.1))` and the token `"0.1"` evaluate alike.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// A numeric operand.
    Number(Value),
    /// An operator symbol or numeric literal text.
    Symbol(String),
}

impl From<Value> for Item {
    fn from(v: Value) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for Item {
    fn from(v: i64) -> Self {
        Self::Number(Value::Integer(v))
    }
}

impl From<f64> for Item {
    fn from(v: f64) -> Self {
        Self::Number(Value::Real(v))
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Self::Symbol(s.to_string())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Self::Symbol(s)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Symbol(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Code {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Code {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for Code {
    fn from(tokens: Vec<String>) -> Self {
        Self::Tokens(tokens)
    }
}

impl From<Vec<&str>> for Code {
    fn from(tokens: Vec<&str>) -> Self {
        Self::from(tokens.as_slice())
    }
}

impl From<&[&str]> for Code {
    fn from(tokens: &[&str]) -> Self {
        Self::Tokens(tokens.iter().map(|t| (*t).to_string()).collect())
    }
}

impl From<&[String]> for Code {
    fn from(tokens: &[String]) -> Self {
        Self::Tokens(tokens.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Code {
    fn from(tokens: [&str; N]) -> Self {
        Self::from(tokens.as_slice())
    }
}

impl From<&[Item]> for Code {
    fn from(items: &[Item]) -> Self {
        Self::Tokens(items.iter().map(Item::to_string).collect())
    }
}

impl From<Vec<Item>> for Code {
    fn from(items: Vec<Item>) -> Self {
        Self::from(items.as_slice())
    }
}

impl From<&[Value]> for Code {
    fn from(values: &[Value]) -> Self {
        Self::Tokens(values.iter().map(Value::to_string).collect())
    }
}

impl From<Vec<Value>> for Code {
    fn from(values: Vec<Value>) -> Self {
        Self::from(values.as_slice())
    }
}

/// Tries fixed-size arrays of string types for each listed length.
macro_rules! downcast_arrays {
    ($input:ident, $($n:literal)*) => {
        $(
            if let Some(tokens) = $input.downcast_ref::<[&str; $n]>() {
                return Some(Self::from(tokens.as_slice()));
            }
            if let Some(tokens) = $input.downcast_ref::<[String; $n]>() {
                return Some(Self::from(tokens.as_slice()));
            }
            if let Some(items) = $input.downcast_ref::<[Item; $n]>() {
                return Some(Self::from(items.as_slice()));
            }
        )*
    };
}

impl Code {
    /// Builds a `Code` from a value whose type is only known at runtime.
    ///
    /// Accepts `String` and `&str` as text. Accepts as tokens any `Vec`,
    /// slice reference or boxed slice of `String`, `&str`, [`Item`] or
    /// [`Value`], vectors of `i64` and `f64`, and arrays of up to 32 `String`,
    /// `&str` or [`Item`] elements.
    ///
    /// # Errors
    /// Returns `EvalError::InvalidInputKind` for any other type.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{Code, EvalError};
    ///
    /// assert_eq!(Code::from_any(&"2 2 +").unwrap(), Code::Text("2 2 +".to_string()));
    /// assert_eq!(Code::from_any(&["2", "+"]).unwrap(), Code::from(vec!["2", "+"]));
    /// assert!(matches!(Code::from_any(&42), Err(EvalError::InvalidInputKind { .. })));
    /// ```
    pub fn from_any<T: Any>(input: &T) -> EvalResult<Self> {
        Self::downcast(input).ok_or_else(|| {
                                 EvalError::InvalidInputKind { found: type_name::<T>().to_string() }
                             })
    }
    fn downcast(input: &dyn Any) -> Option<Self> {
        if let Some(s) = input.downcast_ref::<String>() {
            return Some(Self::Text(s.clone()));
        }
        if let Some(s) = input.downcast_ref::<&str>() {
            return Some(Self::from(*s));
        }

        if let Some(tokens) = input.downcast_ref::<Vec<String>>() {
            return Some(Self::Tokens(tokens.clone()));
        }
        if let Some(tokens) = input.downcast_ref::<&[String]>() {
            return Some(Self::from(*tokens));
        }
        if let Some(tokens) = input.downcast_ref::<Box<[String]>>() {
            return Some(Self::from(&tokens[..]));
        }

        if let Some(tokens) = input.downcast_ref::<Vec<&str>>() {
            return Some(Self::from(tokens.as_slice()));
        }
        if let Some(tokens) = input.downcast_ref::<&[&str]>() {
            return Some(Self::from(*tokens));
        }
        if let Some(tokens) = input.downcast_ref::<Box<[&str]>>() {
            return Some(Self::from(&tokens[..]));
        }

        if let Some(items) = input.downcast_ref::<Vec<Item>>() {
            return Some(Self::from(items.as_slice()));
        }
        if let Some(items) = input.downcast_ref::<&[Item]>() {
            return Some(Self::from(*items));
        }
        if let Some(items) = input.downcast_ref::<Box<[Item]>>() {
            return Some(Self::from(&items[..]));
        }

        if let Some(values) = input.downcast_ref::<Vec<Value>>() {
            return Some(Self::from(values.as_slice()));
        }
        if let Some(values) = input.downcast_ref::<&[Value]>() {
            return Some(Self::from(*values));
        }
        if let Some(values) = input.downcast_ref::<Box<[Value]>>() {
            return Some(Self::from(&values[..]));
        }
        if let Some(numbers) = input.downcast_ref::<Vec<i64>>() {
            return Some(Self::Tokens(numbers.iter().map(i64::to_string).collect()));
        }
        if let Some(numbers) = input.downcast_ref::<Vec<f64>>() {
            let tokens = numbers.iter().map(|r| Value::Real(*r).to_string()).collect();
            return Some(Self::Tokens(tokens));
        }

        downcast_arrays!(input, 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
                                17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32);

        None
    }
    /// Produces the ordered token sequence to evaluate.
    ///
    /// Text is lower-cased, every `pi` is replaced by the decimal expansion of
    /// π, and the result is split on `delimiter` with empty pieces dropped. An
    /// empty delimiter splits on runs of whitespace. Tokens pass through
    /// untouched.
    ///
    /// The `pi` replacement is a plain substring substitution made before
    /// splitting, so it also rewrites `pi` inside longer tokens.
    ///
    /// # Example
    /// ```
    /// use rpncalc::Code;
    ///
    /// let tokens = Code::from("2,,PI,+").into_tokens(",");
    /// assert_eq!(tokens, ["2", "3.141592653589793", "+"]);
    ///
    /// let tokens = Code::from(vec!["2", "", "+"]).into_tokens(",");
    /// assert_eq!(tokens, ["2", "", "+"]);
    /// ```
    #[must_use]
    pub fn into_tokens(self, delimiter: &str) -> Vec<String> {
        match self {
            Self::Text(text) => {
                let text = text.to_lowercase()
                               .replace("pi", &std::f64::consts::PI.to_string());

                if delimiter.is_empty() {
                    text.split_whitespace().map(str::to_string).collect()
                } else {
                    text.split(delimiter)
                        .filter(|token| !token.is_empty())
                        .map(str::to_string)
                        .collect()
                }
            },
            Self::Tokens(tokens) => tokens,
        }
    }
}
