//! # sieve-checkers
//!
//! Type- and format-checking predicates for untrusted input.
//!
//! Every checker takes a [`Value`] and answers `true` or `false`. Malformed
//! input is a `false`, never an error. The only errors are usage errors: a
//! checker called with incoherent bounds returns [`CheckerError`].
//!
//! ## Quick Start
//!
//! ```
//! use sieve_checkers::prelude::*;
//!
//! assert!(is_string(&Value::from("alice"), Some(3), Some(20), false));
//! assert!(is_between(&Value::from(5), Some(&Value::from(1)), Some(&Value::from(10))).unwrap());
//! assert!(is_between(&Value::from(5), None, None).is_err());
//! ```
//!
//! ## Checker groups
//!
//! - **Generic**: [`is_iterable`](checkers::is_iterable), [`is_string`](checkers::is_string),
//!   [`is_dict`](checkers::is_dict), [`is_type`](checkers::is_type),
//!   [`are_equivalent`](checkers::are_equivalent), [`is_between`](checkers::is_between),
//!   [`has_length`](checkers::has_length), [`is_uuid`](checkers::is_uuid)
//! - **Temporal** (`temporal` feature): `is_date`, `is_datetime`, `is_time`, `is_timezone`
//! - **Numeric**: [`is_numeric`](checkers::is_numeric), [`is_integer`](checkers::is_integer),
//!   [`is_float`](checkers::is_float), [`is_fraction`](checkers::is_fraction),
//!   [`is_decimal`](checkers::is_decimal)
//! - **File system** (`filesystem` feature): `is_pathlike`, `is_file`, `is_directory`, ...
//! - **Network** (`network` feature): `is_email`, `is_url`, `is_ip_address`, `is_mac_address`, ...

pub mod checkers;
pub mod error;
pub mod foundation;
pub mod prelude;
pub mod value;

pub use error::{CheckResult, CheckerError};
pub use foundation::Check;
pub use value::{TypeSpec, Value, ValueKind};
