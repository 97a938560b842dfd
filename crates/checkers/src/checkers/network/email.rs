//! Email address checks.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use super::domain::is_domain_name;
use crate::value::Value;

/// RFC 5322 dot-atom: no leading, trailing or doubled dots.
static LOCAL_PART_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("local part pattern is valid")
});

const MAX_LOCAL_PART: usize = 64;

/// `[192.0.2.1]` or `[IPv6:2001:db8::1]`.
fn is_address_literal(domain: &str) -> bool {
    let Some(inner) = domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) else {
        return false;
    };
    match inner.strip_prefix("IPv6:") {
        Some(v6) => v6.parse::<Ipv6Addr>().is_ok(),
        None => inner.parse::<Ipv4Addr>().is_ok(),
    }
}

/// Returns true for `local@domain` text.
///
/// # Examples
///
/// ```
/// use sieve_checkers::checkers::is_email;
/// use sieve_checkers::Value;
///
/// assert!(is_email(&Value::from("test@domain.dev")));
/// assert!(is_email(&Value::from("admin@[192.0.2.1]")));
/// assert!(!is_email(&Value::from("@domain.dev")));
/// ```
pub fn is_email(value: &Value) -> bool {
    let Some((local, domain)) = value.as_text().and_then(|text| text.rsplit_once('@')) else {
        return false;
    };
    local.len() <= MAX_LOCAL_PART
        && LOCAL_PART_REGEX.is_match(local)
        && (is_domain_name(domain) || is_address_literal(domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_addresses() {
        for text in [
            "test@domain.dev",
            "first.last@example.com",
            "user+tag@sub.example.co",
            "x@例子.测试",
            "root@[IPv6:2001:db8::1]",
        ] {
            assert!(is_email(&Value::from(text)), "{text}");
        }
    }

    #[test]
    fn invalid_addresses() {
        for text in [
            "",
            "@domain.dev",
            "domain.dev",
            "not-an-email",
            ".test@domain.dev",
            "test.@domain.dev",
            "te..st@domain.dev",
            "te st@domain.dev",
            "test@localhost",
            "test@[300.1.1.1]",
        ] {
            assert!(!is_email(&Value::from(text)), "{text}");
        }
        assert!(!is_email(&Value::None));
    }

    #[test]
    fn local_part_length_limit() {
        let local = "a".repeat(MAX_LOCAL_PART + 1);
        assert!(!is_email(&Value::from(format!("{local}@example.com"))));
    }
}
