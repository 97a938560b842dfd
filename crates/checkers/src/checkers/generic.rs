//! Generic and structural checkers.
//!
//! Type inspection, length and range tests that apply to any [`Value`].

use std::cmp::Ordering;
use std::sync::LazyLock;

use crate::error::{CheckResult, CheckerError};
use crate::foundation::{Check, within};
use crate::value::number::Number;
use crate::value::{TypeSpec, Value};

static VARIABLE_NAME_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("variable name pattern is valid")
});

/// A bound of `Some(Value::None)` means the same as no bound.
fn present(bound: Option<&Value>) -> Option<&Value> {
    bound.filter(|b| !b.is_none())
}

// ============================================================================
// ITERABLE
// ============================================================================

/// Checks that a value can be iterated over element by element.
///
/// Text and byte strings are literals, not iterables, unless
/// [`allow_literals`](Self::allow_literals) is set. Mappings are excluded
/// unless [`allow_mapping`](Self::allow_mapping) is set.
///
/// # Examples
///
/// ```
/// use sieve_checkers::checkers::Iterable;
/// use sieve_checkers::{Check, Value};
///
/// let pairs = Iterable::new().min_length(2).max_length(2);
/// assert!(pairs.check(&Value::from(vec!["a", "b"])));
/// assert!(!pairs.check(&Value::from("ab")));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iterable {
    minimum_length: Option<usize>,
    maximum_length: Option<usize>,
    allow_mapping: bool,
    allow_literals: bool,
}

impl Iterable {
    /// Creates an iterable checker with no length bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum number of elements (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, minimum: usize) -> Self {
        self.minimum_length = Some(minimum);
        self
    }

    /// Maximum number of elements (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, maximum: usize) -> Self {
        self.maximum_length = Some(maximum);
        self
    }

    /// Treat mappings as iterables over their keys.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_mapping(mut self) -> Self {
        self.allow_mapping = true;
        self
    }

    /// Treat text and byte strings as iterables over their elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_literals(mut self) -> Self {
        self.allow_literals = true;
        self
    }
}

impl Check for Iterable {
    fn check(&self, value: &Value) -> bool {
        let length = match value {
            Value::Sequence(items) => items.len(),
            Value::Mapping(m) if self.allow_mapping => m.len(),
            Value::Text(_) | Value::Bytes(_) if self.allow_literals => {
                value.length().unwrap_or_default()
            }
            _ => return false,
        };
        within(
            &length,
            self.minimum_length.as_ref(),
            self.maximum_length.as_ref(),
        )
    }
}

/// Returns true if `value` is a sequence whose length lies in the bounds.
pub fn is_iterable(
    value: &Value,
    minimum_length: Option<usize>,
    maximum_length: Option<usize>,
) -> bool {
    Iterable {
        minimum_length,
        maximum_length,
        ..Iterable::default()
    }
    .check(value)
}

// ============================================================================
// STRING
// ============================================================================

/// Checks that a value is text of an acceptable length.
///
/// Length is counted in Unicode scalar values. With
/// [`whitespace_padding`](Self::whitespace_padding), text shorter than the
/// minimum passes because it would be right-padded up to the minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Text {
    minimum_length: Option<usize>,
    maximum_length: Option<usize>,
    whitespace_padding: bool,
}

impl Text {
    /// Creates a text checker with no length bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum length (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, minimum: usize) -> Self {
        self.minimum_length = Some(minimum);
        self
    }

    /// Maximum length (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, maximum: usize) -> Self {
        self.maximum_length = Some(maximum);
        self
    }

    /// Pad short text with whitespace before measuring.
    #[must_use = "builder methods must be chained or built"]
    pub fn whitespace_padding(mut self) -> Self {
        self.whitespace_padding = true;
        self
    }
}

impl Check for Text {
    fn check(&self, value: &Value) -> bool {
        let Value::Text(text) = value else {
            return false;
        };
        let mut length = text.chars().count();
        if self.whitespace_padding {
            length = length.max(self.minimum_length.unwrap_or(0));
        }
        within(
            &length,
            self.minimum_length.as_ref(),
            self.maximum_length.as_ref(),
        )
    }
}

/// Returns true if `value` is text whose length lies in the bounds.
pub fn is_string(
    value: &Value,
    minimum_length: Option<usize>,
    maximum_length: Option<usize>,
    whitespace_padding: bool,
) -> bool {
    Text {
        minimum_length,
        maximum_length,
        whitespace_padding,
    }
    .check(value)
}

// ============================================================================
// STRUCTURED TEXT
// ============================================================================

/// Returns true for mappings and for text holding a JSON object.
///
/// JSON arrays, even arrays of objects, are not dicts.
pub fn is_dict(value: &Value) -> bool {
    match value {
        Value::Mapping(_) => true,
        Value::Text(text) => matches!(
            serde_json::from_str::<serde_json::Value>(text),
            Ok(serde_json::Value::Object(_))
        ),
        _ => false,
    }
}

/// Returns true for text holding any JSON document, and for values that are
/// already structured (mappings and sequences).
pub fn is_json(value: &Value) -> bool {
    match value {
        Value::Mapping(_) | Value::Sequence(_) => true,
        Value::Text(text) => serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok(),
        _ => false,
    }
}

// ============================================================================
// TYPE
// ============================================================================

/// Returns true if the kind of `value` matches any of `types`.
///
/// Descriptors may be [`ValueKind`](crate::ValueKind)s or type names; names
/// that designate no kind never match.
///
/// # Examples
///
/// ```
/// use sieve_checkers::checkers::is_type;
/// use sieve_checkers::{TypeSpec, Value, ValueKind};
///
/// let value = Value::from("test-string");
/// assert!(is_type(&value, ["str"]));
/// assert!(is_type(&value, [TypeSpec::from("str"), ValueKind::Integer.into()]));
/// assert!(!is_type(&value, [ValueKind::Integer]));
/// ```
pub fn is_type<I>(value: &Value, types: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<TypeSpec>,
{
    let kind = value.kind();
    types
        .into_iter()
        .any(|spec| spec.into().resolve() == Some(kind))
}

// ============================================================================
// EMPTINESS
// ============================================================================

/// Returns true unless `value` is `None` or has zero length.
///
/// Scalars such as numbers, booleans and dates always have content.
pub fn is_not_empty(value: &Value) -> bool {
    match value {
        Value::None => false,
        _ => value.length() != Some(0),
    }
}

/// Returns true if `value` is `None`.
///
/// With `allow_empty`, zero-length values count as `None` too.
pub fn is_none(value: &Value, allow_empty: bool) -> bool {
    match value {
        Value::None => true,
        _ => allow_empty && value.length() == Some(0),
    }
}

// ============================================================================
// IDENTIFIERS
// ============================================================================

/// Returns true for identifier-shaped text: a letter or underscore followed
/// by letters, digits or underscores.
pub fn is_variable_name(value: &Value) -> bool {
    value
        .as_text()
        .is_some_and(|text| VARIABLE_NAME_REGEX.is_match(text))
}

/// Returns true for UUID values and canonical hyphenated UUID text.
pub fn is_uuid(value: &Value) -> bool {
    match value {
        Value::Uuid(_) => true,
        // 36 characters pins the hyphenated form; `try_parse` also takes
        // simple, braced and URN forms.
        Value::Text(text) => text.len() == 36 && uuid::Uuid::try_parse(text).is_ok(),
        _ => false,
    }
}

// ============================================================================
// RANGE & LENGTH
// ============================================================================

/// Orders two values of comparable kinds.
///
/// Numbers compare across numeric kinds, naive datetimes compare with zoned
/// ones as UTC, sequences compare lexicographically. Anything else is
/// incomparable.
pub(crate) fn compare_values(lhs: &Value, rhs: &Value) -> Option<Ordering> {
    if lhs.kind().is_numeric() && rhs.kind().is_numeric() {
        return Number::from_value(lhs)?.compare(Number::from_value(rhs)?);
    }
    match (lhs, rhs) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Bytes(a), Value::Bytes(b)) => Some(a.cmp(b)),
        (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
        (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
        (Value::ZonedDateTime(a), Value::ZonedDateTime(b)) => Some(a.cmp(b)),
        (Value::DateTime(a), Value::ZonedDateTime(b)) => Some(a.cmp(&b.naive_utc())),
        (Value::ZonedDateTime(a), Value::DateTime(b)) => Some(a.naive_utc().cmp(b)),
        (Value::Time(a), Value::Time(b)) => Some(a.cmp(b)),
        (Value::Timezone(a), Value::Timezone(b)) => {
            Some(a.local_minus_utc().cmp(&b.local_minus_utc()))
        }
        (Value::Uuid(a), Value::Uuid(b)) => Some(a.cmp(b)),
        (Value::Path(a), Value::Path(b)) => Some(a.cmp(b)),
        (Value::Sequence(a), Value::Sequence(b)) => {
            for (x, y) in a.iter().zip(b) {
                match compare_values(x, y)? {
                    Ordering::Equal => {}
                    unequal => return Some(unequal),
                }
            }
            Some(a.len().cmp(&b.len()))
        }
        _ => None,
    }
}

/// Returns true if `value` lies between the inclusive bounds.
///
/// A value that cannot be compared with a bound is `Ok(false)`.
///
/// # Errors
///
/// [`CheckerError::MissingBounds`] when neither bound is supplied, and
/// [`CheckerError::InvalidBound`] when the two bounds cannot be compared with
/// each other.
///
/// # Examples
///
/// ```
/// use sieve_checkers::checkers::is_between;
/// use sieve_checkers::Value;
///
/// let five = Value::from(5);
/// assert!(is_between(&five, Some(&Value::from(1)), Some(&Value::from(10))).unwrap());
/// assert!(!is_between(&five, Some(&Value::from(10)), None).unwrap());
/// assert!(is_between(&five, None, None).is_err());
/// ```
pub fn is_between(value: &Value, minimum: Option<&Value>, maximum: Option<&Value>) -> CheckResult {
    const CHECK: &str = "is_between";

    let (minimum, maximum) = (present(minimum), present(maximum));
    if minimum.is_none() && maximum.is_none() {
        return Err(CheckerError::missing_bounds(CHECK));
    }
    let incomparable = minimum
        .zip(maximum)
        .filter(|(min, max)| compare_values(min, max).is_none());
    if let Some((min, max)) = incomparable {
        return Err(CheckerError::invalid_bound(
            CHECK,
            "maximum",
            format!(
                "a {} maximum cannot be compared with a {} minimum",
                max.kind(),
                min.kind()
            ),
        ));
    }

    let above_minimum = minimum.is_none_or(|min| {
        matches!(
            compare_values(value, min),
            Some(Ordering::Greater | Ordering::Equal)
        )
    });
    let below_maximum = maximum.is_none_or(|max| {
        matches!(
            compare_values(value, max),
            Some(Ordering::Less | Ordering::Equal)
        )
    });
    Ok(above_minimum && below_maximum)
}

/// Returns true if the length of `value` lies between the inclusive bounds.
///
/// # Errors
///
/// [`CheckerError::MissingBounds`] when neither bound is supplied, and
/// [`CheckerError::NoLength`] when `value` has no length at all (`None`,
/// numbers, dates, ...).
pub fn has_length(value: &Value, minimum: Option<usize>, maximum: Option<usize>) -> CheckResult {
    const CHECK: &str = "has_length";

    if minimum.is_none() && maximum.is_none() {
        return Err(CheckerError::missing_bounds(CHECK));
    }
    let length = value
        .length()
        .ok_or_else(|| CheckerError::no_length(CHECK, value.kind()))?;
    Ok(within(&length, minimum.as_ref(), maximum.as_ref()))
}

// ============================================================================
// TESTS
// ============================================================================
