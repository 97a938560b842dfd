//! Domain name checks.
//!
//! Labels follow RFC 1123 with internationalised characters admitted:
//! - 1..=63 characters each, ASCII alphanumerics, `-`, or U+00A1..U+FFFF
//! - no leading or trailing hyphen
//! - at least two labels, no empty label, no leading or trailing dot
//! - the top-level label is alphabetic and at least two characters, or an
//!   `xn--` punycode label

use crate::value::Value;

const MAX_LABEL_CHARS: usize = 63;
const MAX_DOMAIN_CHARS: usize = 253;

fn is_international(c: char) -> bool {
    ('\u{a1}'..='\u{ffff}').contains(&c)
}

fn is_label(label: &str) -> bool {
    let length = label.chars().count();
    (1..=MAX_LABEL_CHARS).contains(&length)
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c == '-' || c.is_ascii_alphanumeric() || is_international(c))
}

fn is_top_level(label: &str) -> bool {
    if label.len() > 4 && label.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("xn--")) {
        return true;
    }
    label.chars().count() >= 2
        && label
            .chars()
            .all(|c| c.is_ascii_alphabetic() || is_international(c))
}

/// Returns true for a syntactically valid domain name.
pub(crate) fn is_domain_name(host: &str) -> bool {
    if host.chars().count() > MAX_DOMAIN_CHARS {
        return false;
    }
    let mut labels = 0;
    for label in host.split('.') {
        if !is_label(label) {
            return false;
        }
        labels += 1;
    }
    labels >= 2 && host.rsplit('.').next().is_some_and(is_top_level)
}

/// Returns true for domain-name text such as `example.com` or `例子.测试`.
///
/// Single-label names like `localhost` are not domains.
pub fn is_domain(value: &Value) -> bool {
    value.as_text().is_some_and(is_domain_name)
}
