//! MIME type checks (RFC 6838).

use crate::value::Value;

/// IANA-registered top-level media types.
const TOP_LEVEL_TYPES: [&str; 11] = [
    "application",
    "audio",
    "example",
    "font",
    "haptics",
    "image",
    "message",
    "model",
    "multipart",
    "text",
    "video",
];

/// RFC 6838 `restricted-name`.
fn is_restricted_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    name.len() <= 127
        && bytes.next().is_some_and(|b| b.is_ascii_alphanumeric())
        && bytes.all(|b| b.is_ascii_alphanumeric() || b"!#$&-^_.+".contains(&b))
}

/// RFC 2045 `token`: visible ASCII except the tspecials.
fn is_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?=".contains(&b))
}

fn is_quoted(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('"') && value.ends_with('"')
}

fn is_parameter(parameter: &str) -> bool {
    parameter
        .trim()
        .split_once('=')
        .is_some_and(|(name, value)| is_restricted_name(name) && (is_token(value) || is_quoted(value)))
}

/// Returns true for `type/subtype` text with optional `; name=value`
/// parameters.
///
/// # Examples
///
/// ```
/// use sieve_checkers::checkers::is_mimetype;
/// use sieve_checkers::Value;
///
/// assert!(is_mimetype(&Value::from("text/html; charset=utf-8")));
/// assert!(is_mimetype(&Value::from("application/vnd.api+json")));
/// assert!(!is_mimetype(&Value::from("html")));
/// ```
pub fn is_mimetype(value: &Value) -> bool {
    let Some(text) = value.as_text() else {
        return false;
    };
    let mut parts = text.split(';');
    let essence = parts.next().unwrap_or_default().trim_end();
    let Some((top_level, subtype)) = essence.split_once('/') else {
        return false;
    };
    TOP_LEVEL_TYPES
        .iter()
        .any(|t| t.eq_ignore_ascii_case(top_level))
        && is_restricted_name(subtype)
        && parts.all(is_parameter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_types() {
        for s in [
            "text/plain",
            "IMAGE/PNG",
            "application/json",
            "application/vnd.ms-excel",
            "multipart/form-data; boundary=something",
            "text/plain;charset=\"us-ascii\"",
            "font/woff2",
        ] {
            assert!(is_mimetype(&Value::from(s)), "{s}");
        }
    }

    #[test]
    fn invalid_types() {
        for s in [
            "",
            "text",
            "text/",
            "/plain",
            "unknown/plain",
            "text/pl ain",
            "text/plain; charset",
            "text/plain; =utf-8",
            "text/plain/extra",
        ] {
            assert!(!is_mimetype(&Value::from(s)), "{s}");
        }
        assert!(!is_mimetype(&Value::None));
    }
}
