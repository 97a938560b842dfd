//! Prelude module for convenient imports.
//!
//! `use sieve_checkers::prelude::*;` brings in the value model, the error
//! type, the [`Check`] trait and every checker.
//!
//! # Examples
//!
//! ```
//! use sieve_checkers::prelude::*;
//!
//! let tags = Value::from(vec!["rust", "checkers"]);
//! assert!(is_iterable(&tags, Some(1), Some(10)));
//! assert!(check_all(&tags, &[&Iterable::new().min_length(2), &is_not_empty]));
//! ```

// ============================================================================
// FOUNDATION: Value model, errors, traits
// ============================================================================

pub use crate::error::{CheckResult, CheckerError};
pub use crate::foundation::{Check, check_all, check_any};
pub use crate::value::{Mapping, TypeSpec, Value, ValueKind};

// ============================================================================
// CHECKERS: Every built-in checker
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::checkers::*;
