//! Shared building blocks for checkers.
//!
//! - [`Check`]: the trait implemented by configurable checkers
//! - [`within`]: inclusive bound test used by every bounded checker

pub mod traits;

pub use traits::{Check, check_all, check_any};

/// Returns true when `value` lies inside the inclusive bounds.
///
/// An absent bound is unbounded on that side.
#[inline]
pub(crate) fn within<T: PartialOrd>(value: &T, minimum: Option<&T>, maximum: Option<&T>) -> bool {
    minimum.is_none_or(|min| value >= min) && maximum.is_none_or(|max| value <= max)
}
