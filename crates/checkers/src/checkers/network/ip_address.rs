//! IP address checks for IPv4 and IPv6.
//!
//! Parsing is delegated to `std::net`. Octets are 0-255 without leading
//! zeros, hextets are 1-4 hex digits, `::` appears at most once, and an
//! embedded dotted quad counts for two hextets.

use std::net::IpAddr;

use crate::foundation::Check;
use crate::value::Value;

// ============================================================================
// IP ADDRESS CHECKER
// ============================================================================

/// Checks for IP address text.
///
/// # Examples
///
/// ```
/// use sieve_checkers::checkers::IpAddress;
/// use sieve_checkers::{Check, Value};
///
/// let any = IpAddress::new();
/// assert!(any.check(&Value::from("192.168.1.1")));
/// assert!(any.check(&Value::from("::1")));
///
/// let v4 = IpAddress::new().v4_only();
/// assert!(!v4.check(&Value::from("::1")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpAddress {
    allow_v4: bool,
    allow_v6: bool,
}

impl IpAddress {
    /// Creates a checker accepting both families.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_v4: true,
            allow_v6: true,
        }
    }

    /// Only accept IPv4 addresses.
    #[must_use = "builder methods must be chained or built"]
    pub fn v4_only(mut self) -> Self {
        self.allow_v4 = true;
        self.allow_v6 = false;
        self
    }

    /// Only accept IPv6 addresses.
    #[must_use = "builder methods must be chained or built"]
    pub fn v6_only(mut self) -> Self {
        self.allow_v4 = false;
        self.allow_v6 = true;
        self
    }

    /// Parses `text` as an address of an accepted family.
    pub fn parse(&self, text: &str) -> Option<IpAddr> {
        let addr = text.parse::<IpAddr>().ok()?;
        let accepted = match addr {
            IpAddr::V4(_) => self.allow_v4,
            IpAddr::V6(_) => self.allow_v6,
        };
        accepted.then_some(addr)
    }
}

impl Default for IpAddress {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for IpAddress {
    fn check(&self, value: &Value) -> bool {
        value.as_text().is_some_and(|text| self.parse(text).is_some())
    }
}

/// Returns true for IPv4 or IPv6 address text.
pub fn is_ip_address(value: &Value) -> bool {
    IpAddress::new().check(value)
}

/// Returns true for dotted-quad IPv4 text.
pub fn is_ipv4(value: &Value) -> bool {
    IpAddress::new().v4_only().check(value)
}

/// Returns true for IPv6 text, including forms with an embedded IPv4 tail.
pub fn is_ipv6(value: &Value) -> bool {
    IpAddress::new().v6_only().check(value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::from(s)
    }

    #[test]
    fn ipv4() {
        for s in ["0.0.0.0", "10.10.10.10", "192.168.1.1", "255.255.255.255"] {
            assert!(is_ipv4(&text(s)), "{s}");
            assert!(!is_ipv6(&text(s)), "{s}");
        }
        for s in ["0.0.0", "0", "abc0.0.0.0", "a.b.c.d", "275.276.278.279", ""] {
            assert!(!is_ipv4(&text(s)), "{s}");
        }
    }

    #[test]
    fn ipv6() {
        for s in [
            "::1",
            "abcd:ffff:0:0:0:0:41:2",
            "abcd:abcd::1:2",
            "0:0:0:0:0:ffff:1.2.3.4",
            "::255.255.255.255",
            "abcd:123::123:1",
        ] {
            assert!(is_ipv6(&text(s)), "{s}");
            assert!(is_ip_address(&text(s)), "{s}");
        }
        for s in [
            "0:0:0:0:ffff:1.2.3.4",
            "1:2:3:4:5:6:7:8:9",
            "abcd:1abcd",
            "::0.0.0",
            "::275.276.278.279",
        ] {
            assert!(!is_ipv6(&text(s)), "{s}");
        }
    }

    #[test]
    fn non_text_is_not_an_address() {
        assert!(!is_ip_address(&Value::from(123)));
        assert!(!is_ip_address(&Value::None));
    }

    #[test]
    fn parse_respects_family() {
        assert!(IpAddress::new().v6_only().parse("127.0.0.1").is_none());
        assert!(IpAddress::new().v4_only().parse("127.0.0.1").is_some());
    }
}
