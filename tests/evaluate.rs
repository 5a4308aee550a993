use rpncalc::{EvalError, Item, Value, evaluate, evaluate_any, evaluate_with_default};

fn assert_value(src: &str, expected: Value) {
    match evaluate(src, " ") {
        Ok(value) => assert_eq!(value, expected, "Unexpected result for '{src}'"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_real(src: &str, expected: f64) {
    match evaluate(src, " ") {
        Ok(Value::Real(r)) => assert!((r - expected).abs() < 1e-12,
                                      "Expression '{src}' gave {r}, expected {expected}"),
        other => panic!("Expression '{src}' did not produce a real: {other:?}"),
    }
}

fn assert_failure(src: &str) -> EvalError {
    match evaluate(src, " ") {
        Ok(value) => panic!("Expression '{src}' succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round() / scale
}

#[test]
fn readme_examples() {
    assert_value("2 2 +", Value::Integer(4));
    assert_value("3 3 2 * + sqrt", Value::Real(3.0));
    assert_eq!(evaluate("2,2,+", ",").unwrap(), Value::Integer(4));
}

#[test]
fn trigonometry_in_radians() {
    assert_eq!(evaluate("1 2 + 3 * sin", " ").unwrap(), Value::Real(9_f64.sin()));
    assert_real("1 2 + 3 * sin", 0.412_118_485_241_756_6);
    assert_real("1 2 + 3 * cos", -0.911_130_261_884_676_9);

    let Value::Real(tan) = evaluate("10,3,1,2,/,*,-,tan", ",").unwrap() else {
        panic!("tan did not produce a real");
    };
    assert_eq!(round_to(tan, 5), -1.32636);
}

#[test]
fn inverse_trigonometry_and_exponential() {
    assert_value("0.5 asin", Value::Real(0.5_f64.asin()));
    assert_real("0.5 asin", std::f64::consts::FRAC_PI_6);
    assert_value("0 acos", Value::Real(std::f64::consts::FRAC_PI_2));
    assert_value("1 acos", Value::Real(0.0));
    assert_value("1 atan", Value::Real(std::f64::consts::FRAC_PI_4));
    assert_value("1 exp", Value::Real(std::f64::consts::E));
    assert_value("0 exp", Value::Real(1.0));
}

#[test]
fn pi_is_substituted() {
    let Value::Real(ratio) =
        evaluate("0.2 10.24 pi * 180 / * 10.24 pi * 180 / sin /", " ").unwrap()
    else {
        panic!("ratio did not produce a real");
    };
    assert_eq!(round_to(ratio, 9), 0.201_068_696);

    assert_value("pi", Value::Real(std::f64::consts::PI));
    assert_value("PI 2 /  sin", Value::Real(1.0));
}

#[test]
fn operators_are_case_insensitive_in_text() {
    assert_value("9 SQRT", Value::Real(3.0));
    assert_value("2 3 POW", Value::Integer(8));
    assert_value("7 2 Mod", Value::Integer(1));
}

#[test]
fn aliases_match_their_symbols() {
    assert_eq!(evaluate_with_default("6 7 mult"), evaluate_with_default("6 7 *"));
    assert_eq!(evaluate_with_default("7 2 div"), evaluate_with_default("7 2 /"));
    assert_eq!(evaluate_with_default("7 2 idiv"), evaluate_with_default("7 2 //"));
    assert_eq!(evaluate_with_default("7 2 mod"), evaluate_with_default("7 2 %"));
}

#[test]
fn integers_stay_integral() {
    assert_value("2 3 *", Value::Integer(6));
    assert_value("2 5 -", Value::Integer(-3));
    assert_value("-4 abs", Value::Integer(4));
    assert_value("-4 sqr", Value::Integer(16));
    assert_value("2 10 pow", Value::Integer(1024));
    assert_value("2 0.5 +", Value::Real(2.5));
    assert_value("1.5 sqr", Value::Real(2.25));
}

#[test]
fn true_division_is_real() {
    assert_value("4 2 /", Value::Real(2.0));
    assert_value("10 4 /", Value::Real(2.5));
}

#[test]
fn floor_division_and_modulo_round_down() {
    assert_value("7 2 //", Value::Integer(3));
    assert_value("-7 2 //", Value::Integer(-4));
    assert_value("7 -2 //", Value::Integer(-4));
    assert_value("7.5 2 //", Value::Real(3.0));
    assert_value("-7 3 %", Value::Integer(2));
    assert_value("7 -3 %", Value::Integer(-2));
    assert_value("-7.5 2 %", Value::Real(0.5));
}

#[test]
fn negative_exponent_gives_real() {
    assert_value("2 -1 pow", Value::Real(0.5));
    assert_value("4 0.5 pow", Value::Real(2.0));
}

#[test]
fn integer_overflow_falls_back_to_real() {
    let src = format!("{} 1 +", i64::MAX);
    assert!(matches!(evaluate(src.as_str(), " "), Ok(Value::Real(_))));
}

#[test]
fn repeated_delimiters_are_ignored() {
    assert_value("  2   2  + ", Value::Integer(4));
    assert_eq!(evaluate("2,,,3,,*,", ",").unwrap(), Value::Integer(6));
}

#[test]
fn multi_character_delimiter() {
    assert_eq!(evaluate("2 | 3 | +", " | ").unwrap(), Value::Integer(5));
}

#[test]
fn tokens_match_text() {
    assert_eq!(evaluate(vec!["2", "2", "+"], " "), evaluate("2 2 +", " "));
    assert_eq!(evaluate(["3", "3", "2", "*", "+", "sqrt"], " ").unwrap(), Value::Real(3.0));

    let owned = vec!["1".to_string(), "2".to_string(), "-".to_string()];
    assert_eq!(evaluate(owned, ",").unwrap(), Value::Integer(-1));
}

#[test]
fn tokens_are_not_normalized() {
    let e = evaluate(vec!["9", "SQRT"], " ").unwrap_err();
    assert!(matches!(e, EvalError::InvalidToken { position: 1, .. }));

    let e = evaluate(vec!["2", "", "+"], " ").unwrap_err();
    assert!(matches!(e, EvalError::InvalidToken { position: 1, .. }));
}

#[test]
fn leftover_values_are_incomplete() {
    let e = assert_failure("2 2 2");
    assert_eq!(e, EvalError::IncompleteExpression { leftover: vec![Value::Integer(2); 3] });
    assert!(e.to_string().ends_with("2 2 2"));

    let e = assert_failure("1.0 2");
    assert!(e.to_string().ends_with("1.0 2"));
}

#[test]
fn empty_input_is_incomplete() {
    assert_eq!(assert_failure(""), EvalError::IncompleteExpression { leftover: vec![] });
    assert_eq!(assert_failure("   "), EvalError::IncompleteExpression { leftover: vec![] });
    assert_eq!(evaluate(Vec::<String>::new(), " ").unwrap_err(),
               EvalError::IncompleteExpression { leftover: vec![] });
}

#[test]
fn unknown_token_is_invalid() {
    assert_eq!(assert_failure("2 foo +"),
               EvalError::InvalidToken { token:    "foo".to_string(),
                                         position: 1, });
    assert!(matches!(assert_failure("2 3 sinh"), EvalError::InvalidToken { .. }));
}

#[test]
fn pi_inside_longer_tokens_is_rewritten() {
    let e = assert_failure("pin");
    assert_eq!(e,
               EvalError::InvalidToken { token:    "3.141592653589793n".to_string(),
                                         position: 0, });
}

#[test]
fn missing_operands_underflow() {
    assert_eq!(assert_failure("+"),
               EvalError::StackUnderflow { operator:  "+".to_string(),
                                           required:  2,
                                           available: 0,
                                           position:  0, });
    assert!(matches!(assert_failure("5 +"),
                     EvalError::StackUnderflow { available: 1, .. }));
    assert!(matches!(assert_failure("sqrt"),
                     EvalError::StackUnderflow { required: 1, .. }));
}

#[test]
fn non_string_input_is_rejected() {
    assert!(matches!(evaluate_any(&42, " "), Err(EvalError::InvalidInputKind { .. })));
    assert!(matches!(evaluate_any(&4.2_f64, " "), Err(EvalError::InvalidInputKind { .. })));
    assert_eq!(evaluate_any(&"2 2 +", " ").unwrap(), Value::Integer(4));
    assert_eq!(evaluate_any(&String::from("2 2 +"), " ").unwrap(), Value::Integer(4));
    assert_eq!(evaluate_any(&vec!["2", "2", "+"], " ").unwrap(), Value::Integer(4));
}

#[test]
fn every_sequence_shape_is_accepted() {
    let four = Ok(Value::Integer(4));
    let owned = vec!["2".to_string(), "2".to_string(), "+".to_string()];
    let borrowed: &'static [String] = Box::leak(owned.clone().into_boxed_slice());
    let slice: &'static [&str] = &["2", "2", "+"];

    assert_eq!(evaluate_any(&["2", "2", "+"], " "), four);
    assert_eq!(evaluate_any(&["2".to_string(), "2".to_string(), "+".to_string()], " "), four);
    assert_eq!(evaluate_any(&owned, " "), four);
    assert_eq!(evaluate_any(&borrowed, " "), four);
    assert_eq!(evaluate_any(&owned.clone().into_boxed_slice(), " "), four);
    assert_eq!(evaluate_any(&slice, " "), four);
    assert_eq!(evaluate_any(&Box::<[&str]>::from(slice), " "), four);
}

#[test]
fn numeric_sequences_are_accepted() {
    let mixed = vec![Item::from(2_i64), Item::from(2.5_f64), Item::from("+")];
    assert_eq!(evaluate(mixed.clone(), " ").unwrap(), Value::Real(4.5));
    assert_eq!(evaluate_any(&mixed, " ").unwrap(), Value::Real(4.5));
    assert_eq!(evaluate_any(&[Item::from(9_i64), Item::from("sqrt")], " ").unwrap(), Value::Real(3.0));

    assert_eq!(evaluate_any(&vec![42_i64], " ").unwrap(), Value::Integer(42));
    assert_eq!(evaluate_any(&vec![0.1_f64], " ").unwrap(), Value::Real(0.1));
    assert_eq!(evaluate_any(&vec![Value::Real(-2.0)], " ").unwrap(), Value::Real(-2.0));
    assert_eq!(evaluate(vec![Value::Integer(i64::MIN)], " ").unwrap(), Value::Integer(i64::MIN));

    assert_eq!(evaluate_any(&vec![1_i64, 2], " ").unwrap_err(),
               EvalError::IncompleteExpression { leftover: vec![Value::Integer(1), Value::Integer(2)] });
}

#[test]
fn unsupported_sequences_are_rejected() {
    assert!(matches!(evaluate_any(&vec![1_u8, 2], " "), Err(EvalError::InvalidInputKind { .. })));
    assert!(matches!(evaluate_any(&('2', '+'), " "), Err(EvalError::InvalidInputKind { .. })));
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(assert_failure("1 0 /"), EvalError::DivisionByZero { .. }));
    assert!(matches!(assert_failure("1 0.0 //"), EvalError::DivisionByZero { .. }));
    assert!(matches!(assert_failure("1 0 mod"), EvalError::DivisionByZero { .. }));
    assert!(matches!(assert_failure("0 -1 pow"), EvalError::DivisionByZero { .. }));
}

#[test]
fn domain_errors() {
    assert!(matches!(assert_failure("-1 sqrt"), EvalError::DomainError { .. }));
    assert!(matches!(assert_failure("2 asin"), EvalError::DomainError { .. }));
    assert!(matches!(assert_failure("-8 0.5 pow"), EvalError::DomainError { .. }));
    assert!(matches!(assert_failure("inf sin"), EvalError::DomainError { .. }));
}

#[test]
fn overflow_is_error() {
    assert!(matches!(assert_failure("1000 exp"), EvalError::Overflow { .. }));
    assert!(matches!(assert_failure("10.0 400 pow"), EvalError::Overflow { .. }));
}

#[test]
fn errors_stop_evaluation() {
    let e = assert_failure("1 0 / foo");
    assert!(matches!(e, EvalError::DivisionByZero { position: 2, .. }));
}
