//! Value and kind types for the settings store.
//!
//! [`Value`] is a closed sum over the six supported primitive kinds; the
//! matching [`Kind`] tag identifies which kind a value or a stored entry
//! holds. Reads are directed by the [`Primitive`] trait, which is sealed so
//! that only the six supported Rust types can be requested.

use std::collections::BTreeSet;
use std::fmt;

/// Tag identifying which primitive kind a [`Value`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    StringSet,
    I32,
    I64,
    F32,
    Bool,
}

impl Kind {
    /// Stable one-byte tag used by binary entry encodings.
    pub const fn tag(self) -> u8 {
        match self {
            Kind::String => 0,
            Kind::StringSet => 1,
            Kind::I32 => 2,
            Kind::I64 => 3,
            Kind::F32 => 4,
            Kind::Bool => 5,
        }
    }

    /// Inverse of [`Kind::tag`]. Returns `None` for unknown tags.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Kind::String),
            1 => Some(Kind::StringSet),
            2 => Some(Kind::I32),
            3 => Some(Kind::I64),
            4 => Some(Kind::F32),
            5 => Some(Kind::Bool),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::String => "string",
            Kind::StringSet => "string-set",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::F32 => "f32",
            Kind::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// A settings value: one of the six supported primitive kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    StringSet(BTreeSet<String>),
    I32(i32),
    I64(i64),
    F32(f32),
    Bool(bool),
}

impl Value {
    /// The kind tag of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::StringSet(_) => Kind::StringSet,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::F32(_) => Kind::F32,
            Value::Bool(_) => Kind::Bool,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::StringSet(set) => {
                f.write_str("{")?;
                for (i, item) in set.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(item)?;
                }
                f.write_str("}")
            }
            Value::I32(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<BTreeSet<String>> for Value {
    fn from(value: BTreeSet<String>) -> Self {
        Value::StringSet(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::F32(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for std::collections::BTreeSet<String> {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for bool {}
}

/// A Rust type corresponding to one of the six supported kinds.
///
/// The trait is sealed: exactly `String`, `BTreeSet<String>`, `i32`, `i64`,
/// `f32`, and `bool` implement it, so a read requested for any other type is
/// a compile error rather than a silent fallback.
pub trait Primitive: sealed::Sealed + Into<Value> + Sized {
    /// The kind tag for this type.
    const KIND: Kind;

    /// Extract a value of this type. Returns `None` when the variant does
    /// not match.
    fn from_value(value: Value) -> Option<Self>;
}

impl Primitive for String {
    const KIND: Kind = Kind::String;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for BTreeSet<String> {
    const KIND: Kind = Kind::StringSet;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::StringSet(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for i32 {
    const KIND: Kind = Kind::I32;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::I32(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for i64 {
    const KIND: Kind = Kind::I64;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::I64(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for f32 {
    const KIND: Kind = Kind::F32;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::F32(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for bool {
    const KIND: Kind = Kind::Bool;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }
}
