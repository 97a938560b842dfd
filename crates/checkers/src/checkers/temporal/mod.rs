//! Date and time checkers.
//!
//! Native temporal values are used as they are. Text must match one of these
//! layouts:
//!
//! - `YYYY-MM-DD` or `YYYY/MM/DD`
//! - a date, then `T` or a space, then a time
//! - `HH:MM`, `HH:MM:SS` or `HH:MM:SS.f` with up to nine fraction digits
//! - any time may end in `Z`, `±H:MM`, `±HH:MM`, `±HHMM` or `±HH`
//! - a bare offset such as `+06:00`, under 24 hours
//!
//! Integers, floats and decimals are POSIX timestamps in UTC.
//!
//! Bounds accept the same inputs as the value. A value that cannot be read
//! is `Ok(false)` regardless of the bounds; a bound that cannot be read is a
//! [`CheckerError::InvalidBound`].

mod layout;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::prelude::ToPrimitive;

use crate::error::{CheckResult, CheckerError};
use crate::foundation::within;
use crate::value::Value;

use self::layout::Moment;

/// Reads any temporal input as a [`Moment`].
fn moment(value: &Value) -> Option<Moment> {
    match value {
        Value::Date(date) => Some(Moment::Date(*date)),
        Value::DateTime(local) => Some(Moment::DateTime {
            local: *local,
            offset: None,
        }),
        Value::ZonedDateTime(zoned) => Some(Moment::DateTime {
            local: zoned.naive_local(),
            offset: Some(zoned.offset().local_minus_utc()),
        }),
        Value::Time(local) => Some(Moment::Time {
            local: *local,
            offset: None,
        }),
        Value::Timezone(offset) => Some(Moment::Offset(offset.local_minus_utc())),
        Value::Integer(seconds) => timestamp(*seconds, 0),
        Value::Float(seconds) => fractional_timestamp(*seconds),
        Value::Decimal(seconds) => fractional_timestamp(seconds.to_f64()?),
        Value::Text(text) => layout::parse(text),
        _ => None,
    }
}

fn timestamp(seconds: i64, nanos: u32) -> Option<Moment> {
    let utc = DateTime::from_timestamp(seconds, nanos)?;
    Some(Moment::DateTime {
        local: utc.naive_utc(),
        offset: Some(0),
    })
}

fn fractional_timestamp(seconds: f64) -> Option<Moment> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    // Out-of-range casts saturate, and saturated values fail the range check.
    let nanos = (((seconds - whole) * 1e9).round() as u32).min(999_999_999);
    timestamp(whole as i64, nanos)
}

fn date_of(value: &Value) -> Option<NaiveDate> {
    moment(value)?.date()
}

fn instant_of(value: &Value) -> Option<NaiveDateTime> {
    moment(value)?.instant()
}

fn time_of(value: &Value) -> Option<NaiveTime> {
    // A native date has no time component.
    if matches!(value, Value::Date(_)) {
        return None;
    }
    moment(value)?.time_of_day()
}

fn temporal_check<T: PartialOrd>(
    check: &'static str,
    value: &Value,
    minimum: Option<&Value>,
    maximum: Option<&Value>,
    project: fn(&Value) -> Option<T>,
) -> CheckResult {
    let Some(value) = project(value) else {
        return Ok(false);
    };
    let minimum = bound(check, "minimum", minimum, project)?;
    let maximum = bound(check, "maximum", maximum, project)?;
    Ok(within(&value, minimum.as_ref(), maximum.as_ref()))
}

fn bound<T>(
    check: &'static str,
    name: &'static str,
    bound: Option<&Value>,
    project: fn(&Value) -> Option<T>,
) -> Result<Option<T>, CheckerError> {
    let Some(bound) = bound.filter(|b| !b.is_none()) else {
        return Ok(None);
    };
    project(bound).map(Some).ok_or_else(|| {
        CheckerError::invalid_bound(
            check,
            name,
            format!("a {} value cannot be read as a {check} bound", bound.kind()),
        )
    })
}

/// Returns true for dates, and for datetimes and timestamps by their date.
///
/// Bounds are compared on the calendar date. Bare times are rejected.
///
/// # Errors
///
/// [`CheckerError::InvalidBound`] when a bound carries no date.
///
/// # Examples
///
/// ```
/// use sieve_checkers::checkers::is_date;
/// use sieve_checkers::Value;
///
/// assert!(is_date(&Value::from("2018/01/01"), Some(&Value::from("2018-01-01")), None).unwrap());
/// assert!(!is_date(&Value::from("01/01/2018"), None, None).unwrap());
/// ```
pub fn is_date(value: &Value, minimum: Option<&Value>, maximum: Option<&Value>) -> CheckResult {
    temporal_check("is_date", value, minimum, maximum, date_of)
}

/// Returns true for datetimes, dates (at midnight) and timestamps.
///
/// Bounds are compared as UTC instants; values without an offset are taken
/// as UTC.
///
/// # Errors
///
/// [`CheckerError::InvalidBound`] when a bound carries no date.
pub fn is_datetime(value: &Value, minimum: Option<&Value>, maximum: Option<&Value>) -> CheckResult {
    temporal_check("is_datetime", value, minimum, maximum, instant_of)
}

/// Returns true for anything with a time of day.
///
/// Date text reads as midnight, but a native date is rejected. Bounds are
/// compared on the local time of day.
///
/// # Errors
///
/// [`CheckerError::InvalidBound`] when a bound has no time of day.
pub fn is_time(value: &Value, minimum: Option<&Value>, maximum: Option<&Value>) -> CheckResult {
    temporal_check("is_time", value, minimum, maximum, time_of)
}

/// Returns true for UTC offsets and for anything that can carry one.
///
/// Values without an explicit offset are implicitly UTC.
pub fn is_timezone(value: &Value) -> bool {
    moment(value).is_some()
}
