//! Matching of the keyword literals `null`, `true` and `false`.
//!
//! The first byte picks the literal; the remaining bytes must follow exactly.
//! Whatever comes after the keyword is left for the caller to judge.

use crate::Value;

/// One of the three keyword literals, selected by its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExpectedLiteral {
    Null,
    True,
    False,
}

impl ExpectedLiteral {
    /// Picks the literal that starts with `first` (`n`, `t` or `f`).
    pub fn new(first: u8) -> Option<Self> {
        match first {
            b'n' => Some(Self::Null),
            b't' => Some(Self::True),
            b'f' => Some(Self::False),
            _ => None,
        }
    }

    /// The bytes that must follow the first one.
    pub fn rest(self) -> &'static [u8] {
        match self {
            Self::Null => b"ull",
            Self::True => b"rue",
            Self::False => b"alse",
        }
    }

    /// Number of input bytes consumed by a successful match.
    pub fn consumed(self) -> usize {
        1 + self.rest().len()
    }

    /// Checks `input`, which starts just after the first byte, and yields the
    /// literal's value on an exact match.
    pub fn matches(self, input: &[u8]) -> Option<Value> {
        input.starts_with(self.rest()).then(|| match self {
            Self::Null => Value::Null,
            Self::True => Value::Boolean(true),
            Self::False => Value::Boolean(false),
        })
    }
}
