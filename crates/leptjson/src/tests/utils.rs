use alloc::string::String;
use core::fmt::Write;

use bstr::ByteSlice;

use crate::{ParseError, Value, parse};

/// Parses `json`, panicking with the error on failure.
pub fn parse_ok(json: impl AsRef<[u8]>) -> Value {
    let json: &[u8] = json.as_ref();
    let mut v = Value::Boolean(false);
    match parse(&mut v, json) {
        Ok(()) => v,
        Err(err) => panic!("{:?} failed to parse: {err}", json.as_bstr()),
    }
}

/// Parses `json`, expecting failure, and checks the output was reset to
/// `Null`.
pub fn parse_err(json: impl AsRef<[u8]>) -> ParseError {
    let mut v = Value::Boolean(false);
    let err = parse(&mut v, json.as_ref()).expect_err("parse unexpectedly succeeded");
    assert_eq!(v, Value::Null, "failed parse must leave Null");
    err
}

/// Renders `value` as JSON text.
///
/// Characters outside the BMP are written as surrogate pair escapes so the
/// round trip exercises the pair decoder; other non-ASCII text is written raw.
pub fn write_json<W: Write>(value: &Value, f: &mut W) -> core::fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Boolean(b) => write!(f, "{b}"),
        Value::Number(n) => write!(f, "{n}"),
        Value::String(s) => write_json_string(s.to_str().expect("generated strings are UTF-8"), f),
        Value::Array(elements) => {
            f.write_char('[')?;
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_json(element, f)?;
            }
            f.write_char(']')
        }
        Value::Object(members) => {
            f.write_char('{')?;
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    f.write_str(",\n")?;
                }
                write_json_string(member.key.to_str().expect("generated keys are UTF-8"), f)?;
                f.write_str(" : ")?;
                write_json(&member.value, f)?;
            }
            f.write_char('}')
        }
    }
}

fn write_json_string<W: Write>(s: &str, f: &mut W) -> core::fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c if (c as u32) > 0xFFFF => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(f, "\\u{unit:04X}")?;
                }
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

pub fn to_json(value: &Value) -> String {
    let mut out = String::new();
    write_json(value, &mut out).expect("writing to a String cannot fail");
    out
}
