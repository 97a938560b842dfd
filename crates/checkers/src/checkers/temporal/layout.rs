//! Textual date/time layouts.
//!
//! Accepted forms:
//! - `YYYY-MM-DD` / `YYYY/MM/DD`
//! - a date, then `T` or a space, then a time
//! - `HH:MM`, `HH:MM:SS`, `HH:MM:SS.fffffffff`
//! - an optional offset after any time: `Z`, `±H:MM`, `±HH:MM`, `±HHMM`, `±HH`
//! - a bare offset on its own
//!
//! Offsets attached to a time may reach 48 hours. A bare offset must be a
//! civil one, under 24 hours.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

const ATTACHED_OFFSET_MAX_HOURS: u32 = 48;
const BARE_OFFSET_MAX_HOURS: u32 = 23;

/// A parsed point in time, as precise as its source.
///
/// Offsets are seconds east of UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Moment {
    Date(NaiveDate),
    DateTime {
        local: NaiveDateTime,
        offset: Option<i32>,
    },
    Time {
        local: NaiveTime,
        offset: Option<i32>,
    },
    Offset(i32),
}

impl Moment {
    /// Calendar date, for moments that carry one.
    pub(crate) fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(date),
            Self::DateTime { local, .. } => Some(local.date()),
            Self::Time { .. } | Self::Offset(_) => None,
        }
    }

    /// UTC instant. Dates are taken at midnight, naive values as UTC.
    pub(crate) fn instant(self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(date) => Some(date.and_time(NaiveTime::MIN)),
            Self::DateTime { local, offset } => {
                local.checked_sub_signed(TimeDelta::try_seconds(offset.unwrap_or(0).into())?)
            }
            Self::Time { .. } | Self::Offset(_) => None,
        }
    }

    /// Local time of day. Dates and bare offsets are at midnight.
    pub(crate) fn time_of_day(self) -> Option<NaiveTime> {
        match self {
            Self::Date(_) | Self::Offset(_) => Some(NaiveTime::MIN),
            Self::DateTime { local, .. } => Some(local.time()),
            Self::Time { local, .. } => Some(local),
        }
    }
}

/// Parses `text` with the first layout that consumes all of it.
pub(crate) fn parse(text: &str) -> Option<Moment> {
    let moment = parse_layouts(text.as_bytes());
    if moment.is_none() {
        tracing::trace!(text, "text matches no date/time layout");
    }
    moment
}

fn parse_layouts(bytes: &[u8]) -> Option<Moment> {
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        return parse_offset(bytes, BARE_OFFSET_MAX_HOURS).map(Moment::Offset);
    }

    if let Some(date) = parse_date(bytes) {
        return match bytes[10..].split_first() {
            None => Some(Moment::Date(date)),
            Some((b'T' | b' ', time)) => {
                let (time, offset) = parse_time(time)?;
                Some(Moment::DateTime {
                    local: date.and_time(time),
                    offset,
                })
            }
            Some(_) => None,
        };
    }

    let (local, offset) = parse_time(bytes)?;
    Some(Moment::Time { local, offset })
}

/// Parses a run of ASCII digits. Empty input is not a number.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    bytes
        .iter()
        .try_fold(0_u32, |acc, b| acc.checked_mul(10)?.checked_add(u32::from(b - b'0')))
}

/// `YYYY-MM-DD` or `YYYY/MM/DD` at the start of `bytes`.
fn parse_date(bytes: &[u8]) -> Option<NaiveDate> {
    let separator = *bytes.get(4)?;
    if !matches!(separator, b'-' | b'/') || bytes.get(7) != Some(&separator) {
        return None;
    }
    let year = parse_digits(bytes.get(0..4)?)?;
    let month = parse_digits(bytes.get(5..7)?)?;
    let day = parse_digits(bytes.get(8..10)?)?;
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// A time of day with an optional attached offset, consuming all of `bytes`.
fn parse_time(bytes: &[u8]) -> Option<(NaiveTime, Option<i32>)> {
    let hour = parse_digits(bytes.get(0..2)?)?;
    if bytes.get(2) != Some(&b':') {
        return None;
    }
    let minute = parse_digits(bytes.get(3..5)?)?;

    let mut rest = &bytes[5..];
    let mut second = 0;
    let mut nano = 0;
    if let Some((b':', tail)) = rest.split_first() {
        second = parse_digits(tail.get(0..2)?)?;
        rest = &tail[2..];
        if let Some((b'.', tail)) = rest.split_first() {
            let digits = tail.iter().take_while(|b| b.is_ascii_digit()).count();
            if !(1..=9).contains(&digits) {
                return None;
            }
            let scale = 10_u32.pow(9 - u32::try_from(digits).ok()?);
            nano = parse_digits(&tail[..digits])? * scale;
            rest = &tail[digits..];
        }
    }

    let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nano)?;
    let offset = if rest.is_empty() {
        None
    } else {
        Some(parse_offset(rest, ATTACHED_OFFSET_MAX_HOURS)?)
    };
    Some((time, offset))
}

/// `Z`, `±H:MM`, `±HH:MM`, `±HHMM` or `±HH`, in seconds east of UTC.
fn parse_offset(bytes: &[u8], max_hours: u32) -> Option<i32> {
    if bytes == b"Z" {
        return Some(0);
    }
    let (sign, digits) = match bytes.split_first()? {
        (b'+', digits) => (1, digits),
        (b'-', digits) => (-1, digits),
        _ => return None,
    };
    let (hours, minutes) = match digits {
        [h, b':', m @ ..] if m.len() == 2 => (parse_digits(&[*h])?, parse_digits(m)?),
        [h1, h2, b':', m @ ..] if m.len() == 2 => (parse_digits(&[*h1, *h2])?, parse_digits(m)?),
        [_, _, _, _] => (parse_digits(&digits[..2])?, parse_digits(&digits[2..])?),
        [_, _] => (parse_digits(digits)?, 0),
        _ => return None,
    };
    if minutes >= 60 || hours > max_hours {
        return None;
    }
    Some(sign * i32::try_from(hours * 3600 + minutes * 60).ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn dates_with_either_separator() {
        assert_eq!(parse("2018-01-01"), Some(Moment::Date(date(2018, 1, 1))));
        assert_eq!(parse("2018/01/01"), Some(Moment::Date(date(2018, 1, 1))));
        assert_eq!(parse("2018-01/01"), None);
    }

    #[test]
    fn rejects_other_date_orders() {
        for text in ["01/01/2018", "1/1/2018", "1/1/18", "1/46/2018", "2018-01-46", "2018-1-1"] {
            assert_eq!(parse(text), None, "{text}");
        }
    }

    #[test]
    fn datetimes_with_fractions() {
        let Some(Moment::DateTime { local, offset }) = parse("2018-01-01 00:00:00.00000") else {
            panic!("expected a datetime");
        };
        assert_eq!(local, date(2018, 1, 1).and_time(NaiveTime::MIN));
        assert_eq!(offset, None);
        assert!(parse("2018-01-01T10:30").is_some());
        assert_eq!(parse("2018-01-01T10:30:00.1234567891"), None);
    }

    #[test]
    fn attached_offsets_reach_48_hours() {
        let Some(Moment::DateTime { offset, .. }) = parse("2018-01-01T00:00:00.00000-48:00") else {
            panic!("expected a datetime");
        };
        assert_eq!(offset, Some(-48 * 3600));
        assert!(parse("2018-01-01T00:00:00+49:00").is_none());
        assert!(parse("2018-01-01T00:00:00+05:60").is_none());
        assert!(parse("10:00Z").is_some());
        assert!(parse("10:00:00+0530").is_some());
    }

    #[test]
    fn bare_offsets_are_civil() {
        assert_eq!(parse("+06:00"), Some(Moment::Offset(6 * 3600)));
        assert_eq!(parse("-6:00"), Some(Moment::Offset(-6 * 3600)));
        assert_eq!(parse("+1:00"), Some(Moment::Offset(3600)));
        assert_eq!(parse("+23:59"), Some(Moment::Offset(23 * 3600 + 59 * 60)));
        assert_eq!(parse("+48:00"), None);
        assert_eq!(parse("+24:00"), None);
    }

    #[test]
    fn instant_applies_the_offset() {
        let moment = parse("2018-01-01T05:00:00+05:00").unwrap();
        assert_eq!(moment.instant(), Some(date(2018, 1, 1).and_time(NaiveTime::MIN)));
    }

    #[test]
    fn garbage_is_rejected() {
        for text in ["", "not-a-date", "25:00", "12:5", "T10:00"] {
            assert_eq!(parse(text), None, "{text}");
        }
    }
}
