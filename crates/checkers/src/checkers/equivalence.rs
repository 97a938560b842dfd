//! Deep structural equality.

use crate::value::Value;
use crate::value::number::Number;

static MISSING: Value = Value::None;

/// Options for deep equivalence.
///
/// By default the comparison is strictly typed (`1` and `1.0` differ) and a
/// key missing from one mapping makes the mappings unequal.
///
/// # Examples
///
/// ```
/// use sieve_checkers::checkers::Equivalence;
/// use sieve_checkers::Value;
///
/// let values = [Value::from(1), Value::from(1.0)];
/// assert!(!Equivalence::new().all(&values));
/// assert!(Equivalence::new().loose_typing().all(&values));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Equivalence {
    loose_typing: bool,
    missing_as_none: bool,
}

impl Equivalence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare numbers across numeric kinds by value.
    #[must_use = "builder methods must be chained or built"]
    pub fn loose_typing(mut self) -> Self {
        self.loose_typing = true;
        self
    }

    /// Treat a key missing from one mapping as if it held `None`.
    #[must_use = "builder methods must be chained or built"]
    pub fn missing_as_none(mut self) -> Self {
        self.missing_as_none = true;
        self
    }

    /// Returns true if every value is equivalent to the first.
    pub fn all(&self, values: &[Value]) -> bool {
        values
            .split_first()
            .is_none_or(|(first, rest)| rest.iter().all(|v| self.pair(first, v)))
    }

    /// Like [`all`](Self::all), but every value must be a mapping.
    pub fn all_mappings(&self, values: &[Value]) -> bool {
        values.iter().all(|v| matches!(v, Value::Mapping(_))) && self.all(values)
    }

    fn pair(&self, lhs: &Value, rhs: &Value) -> bool {
        match (lhs, rhs) {
            (Value::Mapping(a), Value::Mapping(b)) => {
                if self.missing_as_none {
                    a.keys().chain(b.keys()).all(|key| {
                        self.pair(
                            a.get(key).unwrap_or(&MISSING),
                            b.get(key).unwrap_or(&MISSING),
                        )
                    })
                } else {
                    a.len() == b.len()
                        && a.iter()
                            .all(|(key, v)| b.get(key).is_some_and(|w| self.pair(v, w)))
                }
            }
            (Value::Sequence(a), Value::Sequence(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(v, w)| self.pair(v, w))
            }
            _ if self.loose_typing && lhs.kind().is_numeric() && rhs.kind().is_numeric() => {
                match (Number::from_value(lhs), Number::from_value(rhs)) {
                    (Some(a), Some(b)) => a.compare(b).is_some_and(std::cmp::Ordering::is_eq),
                    _ => false,
                }
            }
            _ => lhs == rhs,
        }
    }
}

/// Returns true if all `values` are deeply equivalent.
///
/// Mappings compare key by key regardless of order, sequences element by
/// element in order. Zero or one value is trivially equivalent.
pub fn are_equivalent(values: &[Value]) -> bool {
    Equivalence::new().all(values)
}

/// Returns true if all `values` are mappings and are deeply equivalent.
pub fn are_dicts_equivalent(values: &[Value]) -> bool {
    Equivalence::new().all_mappings(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn nested_mappings_ignore_key_order() {
        let a = v(json!({"key": ["a", "b"], "other": {"x": 1, "y": 2}}));
        let b = v(json!({"other": {"y": 2, "x": 1}, "key": ["a", "b"]}));
        assert!(are_equivalent(&[a.clone(), b.clone()]));
        assert!(are_dicts_equivalent(&[a, b]));
    }

    #[test]
    fn sequences_respect_order() {
        let a = v(json!(["a", "b"]));
        let b = v(json!(["b", "a"]));
        assert!(!are_equivalent(&[a, b]));
    }

    #[test]
    fn different_keys_differ() {
        let a = v(json!({"key": "value"}));
        let b = v(json!({"other": "value"}));
        assert!(!are_dicts_equivalent(&[a, b]));
    }

    #[test]
    fn trivial_cases() {
        assert!(are_equivalent(&[]));
        assert!(are_equivalent(&[Value::from(1)]));
        assert!(are_dicts_equivalent(&[]));
    }

    #[test]
    fn dicts_require_mappings() {
        assert!(!are_dicts_equivalent(&[Value::from("a"), Value::from("a")]));
        assert!(!are_dicts_equivalent(&[Value::from("a")]));
    }

    #[test]
    fn missing_keys_as_none() {
        let a = v(json!({"key": "value", "empty": null}));
        let b = v(json!({"key": "value"}));
        assert!(!are_equivalent(&[a.clone(), b.clone()]));
        assert!(Equivalence::new().missing_as_none().all(&[a, b]));
    }

    #[test]
    fn strict_typing_separates_numeric_kinds() {
        let values = [v(json!({"n": 1})), v(json!({"n": 1.0}))];
        assert!(!are_equivalent(&values));
        assert!(Equivalence::new().loose_typing().all(&values));
    }
}
