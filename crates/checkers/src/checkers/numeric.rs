//! Numeric checkers.
//!
//! A value is numeric when it is an integer, a finite float, a decimal, a
//! fraction, or text that parses as one of those. Booleans are not numbers.
//!
//! Bounds are [`Value`]s of the same kinds and are compared in the
//! representation the checker targets.

use std::cmp::Ordering;

use num_rational::Rational64;
use rust_decimal::Decimal;

use crate::error::{CheckResult, CheckerError};
use crate::foundation::within;
use crate::value::Value;
use crate::value::number::Number;

/// Converts an optional bound, rejecting bounds the target cannot represent.
fn bound<T>(
    check: &'static str,
    name: &'static str,
    bound: Option<&Value>,
    convert: impl Fn(Number) -> Option<T>,
) -> Result<Option<T>, CheckerError> {
    let Some(bound) = bound.filter(|b| !b.is_none()) else {
        return Ok(None);
    };
    Number::from_value(bound)
        .and_then(convert)
        .map(Some)
        .ok_or_else(|| {
            CheckerError::invalid_bound(
                check,
                name,
                format!("a {} value is not a usable number", bound.kind()),
            )
        })
}

fn number_within(value: Number, minimum: Option<Number>, maximum: Option<Number>) -> bool {
    minimum.is_none_or(|min| matches!(value.compare(min), Some(Ordering::Greater | Ordering::Equal)))
        && maximum
            .is_none_or(|max| matches!(value.compare(max), Some(Ordering::Less | Ordering::Equal)))
}

/// Shared shape of the representation-specific checkers.
fn check_as<T: PartialOrd>(
    check: &'static str,
    value: &Value,
    minimum: Option<&Value>,
    maximum: Option<&Value>,
    convert: impl Fn(Number) -> Option<T> + Copy,
) -> CheckResult {
    let minimum = bound(check, "minimum", minimum, convert)?;
    let maximum = bound(check, "maximum", maximum, convert)?;
    let Some(value) = Number::from_value(value).and_then(convert) else {
        return Ok(false);
    };
    Ok(within(&value, minimum.as_ref(), maximum.as_ref()))
}

/// Returns true for any numeric value inside the inclusive bounds.
///
/// # Errors
///
/// [`CheckerError::InvalidBound`] when a bound is not numeric.
pub fn is_numeric(value: &Value, minimum: Option<&Value>, maximum: Option<&Value>) -> CheckResult {
    const CHECK: &str = "is_numeric";

    let minimum = bound(CHECK, "minimum", minimum, Some)?;
    let maximum = bound(CHECK, "maximum", maximum, Some)?;
    Ok(Number::from_value(value).is_some_and(|n| number_within(n, minimum, maximum)))
}

/// Returns true for whole numbers inside the inclusive bounds.
///
/// With `coerce_value`, the value is first rounded half to even, so `1.5`
/// and `2.5` both become `2`. Without it, a value with a fractional part is
/// rejected.
///
/// # Errors
///
/// [`CheckerError::InvalidBound`] when a bound is not numeric.
///
/// # Examples
///
/// ```
/// use sieve_checkers::checkers::is_integer;
/// use sieve_checkers::Value;
///
/// assert!(!is_integer(&Value::from(1.5), false, None, None).unwrap());
/// assert!(is_integer(&Value::from(1.5), true, None, None).unwrap());
/// ```
pub fn is_integer(
    value: &Value,
    coerce_value: bool,
    minimum: Option<&Value>,
    maximum: Option<&Value>,
) -> CheckResult {
    const CHECK: &str = "is_integer";

    let minimum = bound(CHECK, "minimum", minimum, Some)?;
    let maximum = bound(CHECK, "maximum", maximum, Some)?;
    let Some(number) = Number::from_value(value) else {
        return Ok(false);
    };
    let number = if coerce_value {
        number.round_half_even()
    } else if number.is_whole() {
        number
    } else {
        return Ok(false);
    };
    Ok(number_within(number, minimum, maximum))
}

/// Returns true for values convertible to a finite `f64` inside the bounds.
///
/// # Errors
///
/// [`CheckerError::InvalidBound`] when a bound is not numeric.
pub fn is_float(value: &Value, minimum: Option<&Value>, maximum: Option<&Value>) -> CheckResult {
    check_as("is_float", value, minimum, maximum, Number::to_f64)
}

/// Returns true for values convertible to an exact [`Rational64`] inside the
/// bounds.
///
/// # Errors
///
/// [`CheckerError::InvalidBound`] when a bound is not numeric.
pub fn is_fraction(value: &Value, minimum: Option<&Value>, maximum: Option<&Value>) -> CheckResult {
    check_as::<Rational64>("is_fraction", value, minimum, maximum, Number::to_fraction)
}

/// Returns true for values convertible to a [`Decimal`] inside the bounds.
///
/// # Errors
///
/// [`CheckerError::InvalidBound`] when a bound is not numeric.
pub fn is_decimal(value: &Value, minimum: Option<&Value>, maximum: Option<&Value>) -> CheckResult {
    check_as::<Decimal>("is_decimal", value, minimum, maximum, Number::to_decimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(i: i64) -> Value {
        Value::from(i)
    }

    #[test]
    fn numeric_accepts_numbers_and_numeric_text() {
        assert!(is_numeric(&int(1), None, None).unwrap());
        assert!(is_numeric(&Value::from(1.5), None, None).unwrap());
        assert!(is_numeric(&Value::from("1.5"), None, None).unwrap());
        assert!(is_numeric(&Value::from("3/4"), None, None).unwrap());
        assert!(!is_numeric(&Value::from("one"), None, None).unwrap());
        assert!(!is_numeric(&Value::Bool(true), None, None).unwrap());
        assert!(!is_numeric(&Value::from(f64::NAN), None, None).unwrap());
        assert!(!is_numeric(&Value::None, None, None).unwrap());
    }

    #[test]
    fn numeric_bounds() {
        assert!(is_numeric(&int(5), Some(&int(1)), Some(&int(10))).unwrap());
        assert!(!is_numeric(&int(5), Some(&int(10)), None).unwrap());
        assert!(!is_numeric(&int(5), None, Some(&Value::from(4.5))).unwrap());
    }

    #[test]
    fn non_numeric_bound_is_a_usage_error() {
        let err = is_numeric(&int(5), Some(&Value::from("low")), None).unwrap_err();
        assert_eq!(err.code(), "CHECK_INVALID_BOUND");
        assert_eq!(err.check(), "is_numeric");
    }

    #[test]
    fn integer_coercion_rounds_half_even() {
        assert!(!is_integer(&Value::from(1.5), false, None, None).unwrap());
        assert!(is_integer(&Value::from(1.5), true, None, None).unwrap());
        assert!(is_integer(&Value::from(2.0), false, None, None).unwrap());
        // 2.5 rounds down to 2.
        assert!(is_integer(&Value::from(2.5), true, None, Some(&int(2))).unwrap());
        assert!(!is_integer(&Value::from(3.5), true, None, Some(&int(3))).unwrap());
    }

    #[test]
    fn float_accepts_any_convertible_number() {
        assert!(is_float(&int(1), None, None).unwrap());
        assert!(is_float(&Value::Decimal(Decimal::new(15, 1)), None, None).unwrap());
        assert!(!is_float(&Value::from("x"), None, None).unwrap());
        assert!(!is_float(&Value::from(1.5), Some(&int(2)), None).unwrap());
    }

    #[test]
    fn fraction_and_decimal() {
        assert!(is_fraction(&int(1), None, None).unwrap());
        assert!(is_fraction(&Value::from(Rational64::new(1, 3)), Some(&int(0)), Some(&int(1))).unwrap());
        assert!(is_decimal(&Value::from("1.25"), None, Some(&Value::from(2))).unwrap());
        assert!(!is_decimal(&Value::from(3), None, Some(&Value::from(2))).unwrap());
    }

    #[test]
    fn fraction_text_at_integer_limits() {
        let overflowing = Value::from("-9223372036854775808/-1");
        assert!(!is_numeric(&overflowing, None, None).unwrap());
        assert!(!is_fraction(&overflowing, None, None).unwrap());

        let tiny = Value::from("1/-9223372036854775808");
        assert!(!is_integer(&tiny, false, None, None).unwrap());
        assert!(!is_integer(&tiny, true, None, None).unwrap());

        let negated = Value::from("9223372036854775807/-1");
        assert!(is_integer(&negated, false, None, Some(&int(0))).unwrap());
    }
}
