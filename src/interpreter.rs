/// The evaluator module runs the stack machine over a token sequence.
///
/// The evaluator consumes tokens left to right: numbers are pushed onto the
/// operand stack, operators pop their operands and push the result. Once the
/// tokens are exhausted the single remaining value is the result.
///
/// # Responsibilities
/// - Dispatches unary and binary operators.
/// - Enforces stack discipline, reporting underflow and leftover values.
/// - Reports numeric errors such as division by zero or domain violations.
pub mod evaluator;
/// The lexer module classifies individual tokens.
///
/// Each token produced by splitting the input is either an operator symbol,
/// recognized by a `logos` lexer, or a numeric literal.
///
/// # Responsibilities
/// - Maps every operator spelling, including aliases, to its operator.
/// - Parses integer and real literals, preferring integers.
pub mod lexer;
/// Unary and binary operator definitions.
///
/// These two enums are the fixed operator tables; the lexer maps symbols to
/// them and the evaluator implements them.
pub mod operator;
/// Input handling.
///
/// Defines the `Code` type accepted by the evaluator and turns it into the
/// ordered token sequence, normalizing text input on the way.
///
/// # Responsibilities
/// - Accepts text or pre-split tokens, and rejects other input kinds.
/// - Lower-cases text, substitutes `pi` and splits on the delimiter.
pub mod source;
/// The value module defines the numbers held on the operand stack.
///
/// # Responsibilities
/// - Defines the `Value` enum with integer and real variants.
/// - Provides conversion to real for mixed arithmetic.
/// - Renders values the way results and diagnostics print them.
pub mod value;
