//! MAC address checks.
//!
//! Six two-digit hex octets, separated throughout by `:` or throughout by `-`.

use crate::foundation::Check;
use crate::value::Value;

const MAC_TEXT_LEN: usize = 17;

// ============================================================================
// MAC ADDRESS CHECKER
// ============================================================================

/// Checks for MAC address text.
///
/// Hex digits are case-insensitive.
///
/// # Examples
///
/// ```
/// use sieve_checkers::checkers::MacAddress;
/// use sieve_checkers::{Check, Value};
///
/// let checker = MacAddress::new();
/// assert!(checker.check(&Value::from("01:23:45:67:ab:CD")));
/// assert!(checker.check(&Value::from("01-23-45-67-ab-CD")));
/// assert!(!checker.check(&Value::from("01:23-45:67:ab:CD")));
///
/// assert!(!MacAddress::new().colon_only().check(&Value::from("01-23-45-67-ab-CD")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacAddress {
    allow_colon: bool,
    allow_hyphen: bool,
}

impl MacAddress {
    /// Creates a checker accepting both separators.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_colon: true,
            allow_hyphen: true,
        }
    }

    /// Only accept `AA:BB:CC:DD:EE:FF`.
    #[must_use = "builder methods must be chained or built"]
    pub fn colon_only(mut self) -> Self {
        self.allow_colon = true;
        self.allow_hyphen = false;
        self
    }

    /// Only accept `AA-BB-CC-DD-EE-FF`.
    #[must_use = "builder methods must be chained or built"]
    pub fn hyphen_only(mut self) -> Self {
        self.allow_colon = false;
        self.allow_hyphen = true;
        self
    }

    fn accepts(&self, text: &str) -> bool {
        let bytes = text.as_bytes();
        if bytes.len() != MAC_TEXT_LEN {
            return false;
        }
        let separator = bytes[2];
        let allowed = match separator {
            b':' => self.allow_colon,
            b'-' => self.allow_hyphen,
            _ => false,
        };
        allowed
            && bytes.chunks(3).all(|group| match group {
                [hi, lo, sep] => hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() && *sep == separator,
                [hi, lo] => hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit(),
                _ => false,
            })
    }
}

impl Default for MacAddress {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for MacAddress {
    fn check(&self, value: &Value) -> bool {
        value.as_text().is_some_and(|text| self.accepts(text))
    }
}

/// Returns true for MAC address text with `:` or `-` separators.
pub fn is_mac_address(value: &Value) -> bool {
    MacAddress::new().check(value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_separators() {
        for s in ["C0:8E:80:0E:30:54", "36:5d:44:50:36:ae", "C0-8E-80-0E-30-54", "6c-ee-1b-41-d9-ea"] {
            assert!(is_mac_address(&Value::from(s)), "{s}");
        }
    }

    #[test]
    fn rejects_other_shapes() {
        for s in [
            "0.0.0",
            "0",
            "abc0.0.0.0",
            "not-a-valid-value",
            "GG:HH:II:JJ:KK:LL",
            "AABB.CCDD.EEFF",
            "AABBCCDDEEFF",
            "AA:BB:CC:DD:EE:FF:",
            "",
        ] {
            assert!(!is_mac_address(&Value::from(s)), "{s}");
        }
        assert!(!is_mac_address(&Value::from(123)));
    }

    #[test]
    fn separator_restrictions() {
        let value = Value::from("AA:BB:CC:DD:EE:FF");
        assert!(MacAddress::new().colon_only().check(&value));
        assert!(!MacAddress::new().hyphen_only().check(&value));
    }
}
