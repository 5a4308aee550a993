/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` are rounded to the closest representable value, the
/// same rounding an integer operand undergoes whenever it meets a real one.
///
/// ## Example
/// ```
/// use rpncalc::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Integer division rounded toward negative infinity.
///
/// ## Returns
/// - `Some(i64)`: The floored quotient.
/// - `None`: If `rhs` is zero or the quotient overflows (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use rpncalc::util::num::checked_floor_div;
///
/// assert_eq!(checked_floor_div(7, 2), Some(3));
/// assert_eq!(checked_floor_div(-7, 2), Some(-4));
/// assert_eq!(checked_floor_div(7, -2), Some(-4));
/// assert_eq!(checked_floor_div(1, 0), None);
/// ```
#[must_use]
pub const fn checked_floor_div(lhs: i64, rhs: i64) -> Option<i64> {
    let Some(quotient) = lhs.checked_div(rhs) else {
        return None;
    };

    if lhs % rhs != 0 && ((lhs < 0) != (rhs < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

/// Integer remainder whose sign follows the divisor.
///
/// ## Returns
/// - `Some(i64)`: The remainder, in `[0, rhs)` for positive `rhs` and in
///   `(rhs, 0]` for negative `rhs`.
/// - `None`: If `rhs` is zero.
///
/// ## Example
/// ```
/// use rpncalc::util::num::checked_floor_mod;
///
/// assert_eq!(checked_floor_mod(7, 3), Some(1));
/// assert_eq!(checked_floor_mod(-7, 3), Some(2));
/// assert_eq!(checked_floor_mod(7, -3), Some(-2));
/// assert_eq!(checked_floor_mod(i64::MIN, -1), Some(0));
/// ```
#[must_use]
pub const fn checked_floor_mod(lhs: i64, rhs: i64) -> Option<i64> {
    if rhs == 0 {
        return None;
    }
    if rhs == -1 {
        return Some(0);
    }

    let remainder = lhs % rhs;
    if remainder != 0 && ((remainder < 0) != (rhs < 0)) {
        Some(remainder + rhs)
    } else {
        Some(remainder)
    }
}

/// Real division rounded toward negative infinity.
///
/// The quotient is derived from the floating-point remainder rather than from
/// `lhs / rhs`, so the result is consistent with [`floor_mod_f64`]:
/// `lhs == floor_div_f64(lhs, rhs) * rhs + floor_mod_f64(lhs, rhs)` up to
/// rounding. `rhs` must be non-zero.
///
/// ## Example
/// ```
/// use rpncalc::util::num::floor_div_f64;
///
/// assert_eq!(floor_div_f64(7.5, 2.0), 3.0);
/// assert_eq!(floor_div_f64(-7.5, 2.0), -4.0);
/// assert_eq!(floor_div_f64(1.0, 0.1), 9.0);
/// ```
#[must_use]
pub fn floor_div_f64(lhs: f64, rhs: f64) -> f64 {
    let remainder = lhs % rhs;
    let mut quotient = (lhs - remainder) / rhs;

    if remainder != 0.0 && ((rhs < 0.0) != (remainder < 0.0)) {
        quotient -= 1.0;
    }

    if quotient == 0.0 {
        return 0.0_f64.copysign(lhs / rhs);
    }

    let floored = quotient.floor();
    if quotient - floored > 0.5 { floored + 1.0 } else { floored }
}

/// Real remainder whose sign follows the divisor. `rhs` must be non-zero.
///
/// ## Example
/// ```
/// use rpncalc::util::num::floor_mod_f64;
///
/// assert_eq!(floor_mod_f64(7.5, 2.0), 1.5);
/// assert_eq!(floor_mod_f64(-7.5, 2.0), 0.5);
/// assert_eq!(floor_mod_f64(7.5, -2.0), -0.5);
/// ```
#[must_use]
pub fn floor_mod_f64(lhs: f64, rhs: f64) -> f64 {
    let remainder = lhs % rhs;

    if remainder == 0.0 {
        0.0_f64.copysign(rhs)
    } else if (rhs < 0.0) != (remainder < 0.0) {
        remainder + rhs
    } else {
        remainder
    }
}

/// Formats a real so that it never reads as an integer.
///
/// Integral values keep a trailing `.0`, large and small magnitudes use
/// exponent notation, and non-finite values print as `inf`, `-inf` or `nan`.
///
/// ## Example
/// ```
/// use rpncalc::util::num::format_real;
///
/// assert_eq!(format_real(4.0), "4.0");
/// assert_eq!(format_real(0.25), "0.25");
/// assert_eq!(format_real(f64::NEG_INFINITY), "-inf");
/// assert_eq!(format_real(f64::NAN), "nan");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else {
        format!("{value:?}")
    }
}
