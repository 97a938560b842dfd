//! The dynamic value model checked by every predicate.
//!
//! Checkers never inspect open-ended runtime types. Every input is one of the
//! closed set of variants of [`Value`], and dispatch happens on its
//! [`ValueKind`].

mod convert;
pub(crate) mod number;

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::io::Cursor;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use num_rational::Rational64;
use rust_decimal::Decimal;

/// Mapping type used by [`Value::Mapping`].
pub type Mapping = IndexMap<String, Value>;

/// Any value a checker can be asked about.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    None,

    /// Boolean value.
    Bool(bool),

    /// Integer number.
    Integer(i64),

    /// Floating point number.
    Float(f64),

    /// Arbitrary precision decimal.
    Decimal(Decimal),

    /// Exact rational number.
    Fraction(Rational64),

    /// UTF-8 text.
    Text(String),

    /// Raw byte string. Like text, it is a literal rather than an iterable.
    Bytes(Vec<u8>),

    /// Ordered sequence (list, tuple or set).
    Sequence(Vec<Value>),

    /// String-keyed mapping. Insertion order is kept but never compared.
    Mapping(Mapping),

    /// Calendar date.
    Date(NaiveDate),

    /// Date and time without an offset.
    DateTime(NaiveDateTime),

    /// Date and time qualified by a UTC offset.
    ZonedDateTime(DateTime<FixedOffset>),

    /// Time of day.
    Time(NaiveTime),

    /// UTC offset.
    Timezone(FixedOffset),

    /// UUID.
    Uuid(uuid::Uuid),

    /// Native path handle.
    Path(PathBuf),

    /// In-memory binary stream.
    BytesBuffer(Cursor<Vec<u8>>),

    /// In-memory text stream.
    StringBuffer(Cursor<String>),
}

impl Value {
    // ==================== Constructors ====================

    /// Creates a byte string value.
    pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(v.into())
    }

    /// Creates an in-memory binary stream holding `v`.
    pub fn bytes_buffer(v: impl Into<Vec<u8>>) -> Self {
        Self::BytesBuffer(Cursor::new(v.into()))
    }

    /// Creates an in-memory text stream holding `v`.
    pub fn string_buffer(v: impl Into<String>) -> Self {
        Self::StringBuffer(Cursor::new(v.into()))
    }

    /// Creates an empty mapping.
    pub fn mapping() -> Self {
        Self::Mapping(Mapping::new())
    }

    // ==================== Type queries ====================

    /// Returns the kind of this value.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::None => ValueKind::None,
            Self::Bool(_) => ValueKind::Bool,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Fraction(_) => ValueKind::Fraction,
            Self::Text(_) => ValueKind::Text,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
            Self::Date(_) => ValueKind::Date,
            Self::DateTime(_) | Self::ZonedDateTime(_) => ValueKind::DateTime,
            Self::Time(_) => ValueKind::Time,
            Self::Timezone(_) => ValueKind::Timezone,
            Self::Uuid(_) => ValueKind::Uuid,
            Self::Path(_) => ValueKind::Path,
            Self::BytesBuffer(_) => ValueKind::BytesBuffer,
            Self::StringBuffer(_) => ValueKind::StringBuffer,
        }
    }

    /// Returns true for [`Value::None`].
    #[inline]
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the text content, if this is a text value.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the mapping, if this is a mapping value.
    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Number of elements for values that have a length.
    ///
    /// Text is measured in Unicode scalar values, buffers in the size of
    /// their backing storage. Scalars have no length.
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::Text(s) => Some(s.chars().count()),
            Self::Bytes(b) => Some(b.len()),
            Self::Sequence(items) => Some(items.len()),
            Self::Mapping(m) => Some(m.len()),
            Self::BytesBuffer(c) => Some(c.get_ref().len()),
            Self::StringBuffer(c) => Some(c.get_ref().chars().count()),
            _ => None,
        }
    }
}

// ============================================================================
// VALUE KIND
// ============================================================================

/// Field-less mirror of the [`Value`] variants.
///
/// Offset-qualified and naive datetimes share [`ValueKind::DateTime`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    None,
    Bool,
    Integer,
    Float,
    Decimal,
    Fraction,
    Text,
    Bytes,
    Sequence,
    Mapping,
    Date,
    DateTime,
    Time,
    Timezone,
    Uuid,
    Path,
    BytesBuffer,
    StringBuffer,
}

impl ValueKind {
    /// Returns true for the numeric kinds.
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Float | Self::Decimal | Self::Fraction
        )
    }

    /// Returns true for the date/time kinds.
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::DateTime | Self::Time | Self::Timezone)
    }

    /// Resolves a type name, case-insensitively.
    ///
    /// Common aliases are understood (`str`, `int`, `dict`, `list`, `tuple`,
    /// `tzinfo`, `BytesIO`, ...). Unknown names resolve to `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name.trim().to_ascii_lowercase().as_str() {
            "none" | "nonetype" | "null" => Self::None,
            "bool" | "boolean" => Self::Bool,
            "int" | "integer" | "i64" => Self::Integer,
            "float" | "f64" | "real" => Self::Float,
            "decimal" => Self::Decimal,
            "fraction" | "rational" => Self::Fraction,
            "str" | "string" | "text" => Self::Text,
            "bytes" => Self::Bytes,
            "list" | "tuple" | "set" | "sequence" | "array" | "vec" => Self::Sequence,
            "dict" | "mapping" | "map" | "object" => Self::Mapping,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "time" => Self::Time,
            "tzinfo" | "timezone" | "offset" => Self::Timezone,
            "uuid" => Self::Uuid,
            "path" | "pathlike" | "pathbuf" => Self::Path,
            "bytesio" => Self::BytesBuffer,
            "stringio" => Self::StringBuffer,
            _ => return None,
        };
        Some(kind)
    }

    /// Canonical lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Fraction => "fraction",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
            Self::Timezone => "timezone",
            Self::Uuid => "uuid",
            Self::Path => "path",
            Self::BytesBuffer => "bytesio",
            Self::StringBuffer => "stringio",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// TYPE SPEC
// ============================================================================

/// A type descriptor accepted by [`is_type`](crate::checkers::is_type).
///
/// Either a live [`ValueKind`] or a type name resolved with
/// [`ValueKind::from_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpec {
    Kind(ValueKind),
    Name(Cow<'static, str>),
}

impl TypeSpec {
    /// The kind this descriptor designates, if it designates one.
    pub fn resolve(&self) -> Option<ValueKind> {
        match self {
            Self::Kind(kind) => Some(*kind),
            Self::Name(name) => ValueKind::from_name(name),
        }
    }
}

impl From<ValueKind> for TypeSpec {
    fn from(kind: ValueKind) -> Self {
        Self::Kind(kind)
    }
}

impl From<&'static str> for TypeSpec {
    fn from(name: &'static str) -> Self {
        Self::Name(Cow::Borrowed(name))
    }
}

impl From<String> for TypeSpec {
    fn from(name: String) -> Self {
        Self::Name(Cow::Owned(name))
    }
}
