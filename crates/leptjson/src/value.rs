//! JSON value types and accessors.
//!
//! This module defines the [`Value`] enum, which owns a parsed document tree,
//! and [`Member`], one key/value pair of an object. Strings and keys are byte
//! strings: they may contain embedded NUL bytes, and their length is always
//! the length of the byte buffer.

use alloc::vec::Vec;

use bstr::{BStr, BString, ByteSlice};

/// The discriminant of a [`Value`], as reported by [`Value::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `null`
    Null,
    /// `false`
    False,
    /// `true`
    True,
    /// A number.
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

/// A JSON value as defined by [RFC 8259].
///
/// Arrays and objects own their children, so dropping a `Value` releases the
/// whole tree. Object members keep their source order and duplicate keys are
/// kept as separate members.
///
/// # Examples
///
/// ```
/// use leptjson::{Value, ValueKind};
///
/// let v: Value = r#"{"a": [1, true], "a": null}"#.parse().unwrap();
/// assert_eq!(v.kind(), ValueKind::Object);
/// assert_eq!(v.get_object_size(), 2);
/// assert_eq!(v.get_object_key(0), "a");
/// assert_eq!(v.get_object_value(0).get_array_size(), 2);
/// assert!(v.get_object_value(1).is_null());
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`, also the state of a value after a failed parse.
    #[default]
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A finite 64-bit float.
    Number(f64),
    /// Decoded string bytes.
    String(BString),
    /// Elements in source order.
    Array(Vec<Value>),
    /// Members in source order.
    Object(Vec<Member>),
}

/// A key/value pair inside an object.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    /// Decoded key bytes.
    pub key: BString,
    /// The member's value.
    pub value: Value,
}

impl Member {
    /// Creates a member from a key and a value.
    pub fn new(key: impl Into<BString>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<alloc::string::String> for Value {
    fn from(v: alloc::string::String) -> Self {
        Self::String(v.into())
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Vec<Member>> for Value {
    fn from(v: Vec<Member>) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns the tag of the active variant.
    ///
    /// Booleans report [`ValueKind::True`] or [`ValueKind::False`].
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(false) => ValueKind::False,
            Self::Boolean(true) => ValueKind::True,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns the boolean payload, if any.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the numeric payload, if any.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string bytes, if any.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&BStr> {
        match self {
            Self::String(s) => Some(s.as_bstr()),
            _ => None,
        }
    }

    /// Returns the array elements, if any.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the object members, if any.
    #[must_use]
    pub fn as_object(&self) -> Option<&[Member]> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Replaces any payload with an owned copy of `bytes`, tagged as a string.
    ///
    /// ```
    /// use leptjson::Value;
    ///
    /// let mut v = Value::Array(vec![Value::Null]);
    /// v.set_string(b"a\0b");
    /// assert_eq!(v.get_string(), b"a\0b".as_slice());
    /// assert_eq!(v.get_string_length(), 3);
    /// ```
    pub fn set_string(&mut self, bytes: impl AsRef<[u8]>) {
        *self = Self::String(BString::from(bytes.as_ref()));
    }

    /// Releases any owned payload and leaves the value as [`Null`].
    ///
    /// Calling it on a value that is already `Null` does nothing.
    ///
    /// [`Null`]: Value::Null
    pub fn clear(&mut self) {
        *self = Self::Null;
    }

    /// Returns the boolean payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a boolean.
    #[must_use]
    pub fn get_boolean(&self) -> bool {
        self.as_bool()
            .unwrap_or_else(|| wrong_kind("boolean", self.kind()))
    }

    /// Returns the numeric payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a number.
    #[must_use]
    pub fn get_number(&self) -> f64 {
        self.as_number()
            .unwrap_or_else(|| wrong_kind("number", self.kind()))
    }

    /// Returns the string bytes.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a string.
    #[must_use]
    pub fn get_string(&self) -> &BStr {
        self.as_bytes()
            .unwrap_or_else(|| wrong_kind("string", self.kind()))
    }

    /// Returns the length of the string in bytes.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a string.
    #[must_use]
    pub fn get_string_length(&self) -> usize {
        self.get_string().len()
    }

    /// Returns the number of array elements.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array.
    #[must_use]
    pub fn get_array_size(&self) -> usize {
        self.elements().len()
    }

    /// Returns the array element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array or `index` is out of range.
    #[must_use]
    pub fn get_array_element(&self, index: usize) -> &Value {
        &self.elements()[index]
    }

    /// Returns the number of object members.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[must_use]
    pub fn get_object_size(&self) -> usize {
        self.members().len()
    }

    /// Returns the key of the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object or `index` is out of range.
    #[must_use]
    pub fn get_object_key(&self, index: usize) -> &BStr {
        self.members()[index].key.as_bstr()
    }

    /// Returns the key length, in bytes, of the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object or `index` is out of range.
    #[must_use]
    pub fn get_object_key_length(&self, index: usize) -> usize {
        self.members()[index].key.len()
    }

    /// Returns the value of the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object or `index` is out of range.
    #[must_use]
    pub fn get_object_value(&self, index: usize) -> &Value {
        &self.members()[index].value
    }

    fn elements(&self) -> &[Value] {
        self.as_array()
            .unwrap_or_else(|| wrong_kind("array", self.kind()))
    }

    fn members(&self) -> &[Member] {
        self.as_object()
            .unwrap_or_else(|| wrong_kind("object", self.kind()))
    }
}

#[cold]
#[track_caller]
fn wrong_kind(expected: &str, actual: ValueKind) -> ! {
    panic!("expected a JSON {expected}, found {actual:?}")
}
