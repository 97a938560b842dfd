//! Numeric normalisation shared by the numeric, between and equivalence checks.

use std::cmp::Ordering;
use std::str::FromStr;

use num_rational::Rational64;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::Value;

/// A real number in one of the four supported representations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
    Fraction(Rational64),
}

impl Number {
    /// Extracts a number from a numeric value or from numeric text.
    ///
    /// Booleans are not numbers. Non-finite floats are rejected.
    pub(crate) fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(i) => Some(Self::Integer(*i)),
            Value::Float(f) if f.is_finite() => Some(Self::Float(*f)),
            Value::Decimal(d) => Some(Self::Decimal(*d)),
            Value::Fraction(r) => Some(Self::Fraction(*r)),
            Value::Text(s) => Self::parse(s),
            _ => None,
        }
    }

    /// Parses integer, decimal, scientific or `p/q` text.
    pub(crate) fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let Ok(i) = text.parse::<i64>() {
            return Some(Self::Integer(i));
        }
        if let Some((numer, denom)) = text.split_once('/') {
            let numer = numer.trim().parse::<i64>().ok()?;
            let denom = denom.trim().parse::<i64>().ok()?;
            return fraction(numer, denom).map(Self::Fraction);
        }
        if let Ok(d) = Decimal::from_str(text) {
            return Some(Self::Decimal(d));
        }
        // `f64::from_str` also accepts "inf" and "NaN", which are not numbers here.
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Some(Self::Float(f)),
            _ => None,
        }
    }

    pub(crate) fn to_f64(self) -> Option<f64> {
        let f = match self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
            Self::Decimal(d) => d.to_f64()?,
            Self::Fraction(r) => *r.numer() as f64 / *r.denom() as f64,
        };
        f.is_finite().then_some(f)
    }

    pub(crate) fn to_decimal(self) -> Option<Decimal> {
        match self {
            Self::Integer(i) => Some(Decimal::from(i)),
            Self::Float(f) => Decimal::try_from(f).ok(),
            Self::Decimal(d) => Some(d),
            Self::Fraction(r) => Decimal::from(*r.numer()).checked_div(Decimal::from(*r.denom())),
        }
    }

    pub(crate) fn to_fraction(self) -> Option<Rational64> {
        match self {
            Self::Integer(i) => Some(Rational64::from_integer(i)),
            Self::Float(f) => Rational64::approximate_float(f),
            Self::Decimal(d) => {
                let numer = i64::try_from(d.mantissa()).ok()?;
                let denom = 10_i64.checked_pow(d.scale())?;
                Some(Rational64::new(numer, denom))
            }
            Self::Fraction(r) => Some(r),
        }
    }

    /// Returns true when the number has no fractional part.
    pub(crate) fn is_whole(self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Float(f) => f.fract() == 0.0,
            Self::Decimal(d) => d.fract().is_zero(),
            Self::Fraction(r) => r.is_integer(),
        }
    }

    /// Rounds to the nearest whole number, ties to even.
    pub(crate) fn round_half_even(self) -> Self {
        match self {
            Self::Integer(_) => self,
            Self::Float(f) => Self::Float(f.round_ties_even()),
            Self::Decimal(d) => Self::Decimal(d.round()),
            Self::Fraction(r) => match self.to_decimal() {
                Some(d) => Self::Decimal(d.round()),
                None => Self::Fraction(r.round()),
            },
        }
    }

    /// Compares two numbers across representations.
    ///
    /// Exact comparison through `Decimal` when both sides fit, `f64` otherwise.
    pub(crate) fn compare(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(&b)),
            (Self::Fraction(a), Self::Fraction(b)) => Some(a.cmp(&b)),
            _ => match (self.to_decimal(), other.to_decimal()) {
                (Some(a), Some(b)) => Some(a.cmp(&b)),
                _ => self.to_f64()?.partial_cmp(&other.to_f64()?),
            },
        }
    }
}

/// Builds a reduced fraction, or `None` when the sign cannot be moved onto the
/// numerator without overflowing.
fn fraction(numer: i64, denom: i64) -> Option<Rational64> {
    let (numer, denom) = match denom.signum() {
        0 => return None,
        -1 => (numer.checked_neg()?, denom.checked_neg()?),
        _ => (numer, denom),
    };
    Some(Rational64::new(numer, denom))
}
