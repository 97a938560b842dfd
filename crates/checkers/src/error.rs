//! Usage errors.
//!
//! A checker never fails because the *value* is bad; that is a `false`.
//! [`CheckerError`] is reserved for mistakes in the caller's own parameters.

use crate::value::ValueKind;

/// Error returned when a checker is called with incoherent parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckerError {
    /// A range check was called without any bound.
    #[error("`{check}` requires at least one of `minimum` or `maximum`")]
    MissingBounds { check: &'static str },

    /// A length check was called on a value that has no length.
    #[error("`{check}` cannot measure the length of a value of kind `{kind}`")]
    NoLength {
        check: &'static str,
        kind: ValueKind,
    },

    /// A bound could not be interpreted in the checker's domain.
    #[error("`{check}` received an unusable `{bound}` bound: {reason}")]
    InvalidBound {
        check: &'static str,
        bound: &'static str,
        reason: String,
    },
}

impl CheckerError {
    pub(crate) fn missing_bounds(check: &'static str) -> Self {
        tracing::debug!(check, "checker called without bounds");
        Self::MissingBounds { check }
    }

    pub(crate) fn no_length(check: &'static str, kind: ValueKind) -> Self {
        tracing::debug!(check, %kind, "length requested for a value without length");
        Self::NoLength { check, kind }
    }

    pub(crate) fn invalid_bound(
        check: &'static str,
        bound: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        let reason = reason.into();
        tracing::debug!(check, bound, %reason, "unusable bound");
        Self::InvalidBound {
            check,
            bound,
            reason,
        }
    }

    /// Name of the checker that reported the error.
    #[must_use]
    pub fn check(&self) -> &'static str {
        match self {
            Self::MissingBounds { check }
            | Self::NoLength { check, .. }
            | Self::InvalidBound { check, .. } => check,
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingBounds { .. } => "CHECK_MISSING_BOUNDS",
            Self::NoLength { .. } => "CHECK_NO_LENGTH",
            Self::InvalidBound { .. } => "CHECK_INVALID_BOUND",
        }
    }
}

/// Outcome of a checker that accepts bounds.
pub type CheckResult = Result<bool, CheckerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            CheckerError::missing_bounds("is_between").code(),
            "CHECK_MISSING_BOUNDS"
        );
        assert_eq!(
            CheckerError::no_length("has_length", ValueKind::None).code(),
            "CHECK_NO_LENGTH"
        );
        assert_eq!(
            CheckerError::invalid_bound("is_date", "minimum", "not a date").code(),
            "CHECK_INVALID_BOUND"
        );
    }

    #[test]
    fn display_names_the_checker() {
        let err = CheckerError::no_length("has_length", ValueKind::Integer);
        assert_eq!(err.check(), "has_length");
        assert_eq!(
            err.to_string(),
            "`has_length` cannot measure the length of a value of kind `integer`"
        );
    }
}
