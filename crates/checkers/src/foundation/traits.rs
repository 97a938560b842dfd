//! The `Check` trait.

use crate::value::Value;

/// A configured predicate over [`Value`].
///
/// Implemented by the builder-style checkers ([`Iterable`](crate::checkers::Iterable),
/// [`Text`](crate::checkers::Text), `Url`, `IpAddress`, `MacAddress`, ...)
/// so a validators layer can hold any of them behind one interface.
///
/// # Examples
///
/// ```
/// use sieve_checkers::checkers::Iterable;
/// use sieve_checkers::{Check, Value};
///
/// let non_empty_list = Iterable::new().min_length(1);
/// assert!(non_empty_list.check(&Value::from(vec![1, 2])));
/// assert!(!non_empty_list.check(&Value::Sequence(vec![])));
/// ```
pub trait Check {
    /// Returns true if `value` satisfies this checker.
    fn check(&self, value: &Value) -> bool;

    /// Short name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
            .rsplit("::")
            .next()
            .unwrap_or("check")
    }
}

impl<F> Check for F
where
    F: Fn(&Value) -> bool,
{
    fn check(&self, value: &Value) -> bool {
        self(value)
    }

    fn name(&self) -> &'static str {
        "fn"
    }
}

/// Checks `value` against every checker; true only if all pass.
pub fn check_all(value: &Value, checks: &[&dyn Check]) -> bool {
    checks.iter().all(|c| c.check(value))
}

/// Checks `value` against the checkers; true if any passes.
pub fn check_any(value: &Value, checks: &[&dyn Check]) -> bool {
    checks.iter().any(|c| c.check(value))
}
