//! Internet-format checkers.
//!
//! - [`is_email`]: `local@domain` addresses
//! - [`is_url`] / [`Url`]: absolute URLs on public hosts
//! - [`is_domain`]: dotted domain names, internationalised labels included
//! - [`is_ip_address`] / [`IpAddress`]: IPv4 and IPv6 text
//! - [`is_mac_address`] / [`MacAddress`]: hardware addresses
//! - [`is_mimetype`]: media types

mod domain;
mod email;
mod ip_address;
mod mac_address;
mod mimetype;
mod url;

pub use domain::is_domain;
pub use email::is_email;
pub use ip_address::{IpAddress, is_ip_address, is_ipv4, is_ipv6};
pub use mac_address::{MacAddress, is_mac_address};
pub use mimetype::is_mimetype;
pub use url::{Url, is_url};
