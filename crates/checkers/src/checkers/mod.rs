//! All checkers, grouped by domain.
//!
//! Every function here is re-exported at this level, so callers write
//! `checkers::is_url` rather than `checkers::network::is_url`.

pub mod equivalence;
pub mod generic;
pub mod numeric;

#[cfg(feature = "filesystem")]
pub mod filesystem;
#[cfg(feature = "network")]
pub mod network;
#[cfg(feature = "temporal")]
pub mod temporal;

pub use equivalence::{Equivalence, are_dicts_equivalent, are_equivalent};
pub use generic::{
    Iterable, Text, has_length, is_between, is_dict, is_iterable, is_json, is_none,
    is_not_empty, is_string, is_type, is_uuid, is_variable_name,
};
pub use numeric::{is_decimal, is_float, is_fraction, is_integer, is_numeric};

#[cfg(feature = "filesystem")]
pub use filesystem::{
    is_bytes_io, is_directory, is_executable, is_file, is_on_filesystem, is_pathlike,
    is_readable, is_string_io, is_writeable,
};
#[cfg(feature = "network")]
pub use network::{
    IpAddress, MacAddress, Url, is_domain, is_email, is_ip_address, is_ipv4, is_ipv6,
    is_mac_address, is_mimetype, is_url,
};
#[cfg(feature = "temporal")]
pub use temporal::{is_date, is_datetime, is_time, is_timezone};
