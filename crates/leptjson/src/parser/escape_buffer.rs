//! Decoding of `\uXXXX` escapes and re-encoding of code points as UTF-8.
//!
//! [`decode_hex4`] reads exactly four ASCII hexadecimal digits (`0-9`, `A-F`,
//! `a-f`) into a UTF-16 code unit. Unlike a `char` decoder it hands surrogates
//! back unchanged: pairing them is the string scanner's job.
//!
//! [`encode_utf8`] packs a code point into one to four bytes. It accepts lone
//! surrogates, which come out in their three-byte form.

use super::scratch::Stack;
use crate::ParseError;

#[inline]
fn hex_val(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'a'..=b'f' => Some(u32::from(b - b'a') + 10),
        b'A'..=b'F' => Some(u32::from(b - b'A') + 10),
        _ => None,
    }
}

/// Decodes the four hex digits at the start of `input` into a code unit.
///
/// Fewer than four bytes, or any byte that is not a hex digit (including the
/// end-of-input NUL), is [`ParseError::InvalidUnicodeHex`].
pub(crate) fn decode_hex4(input: &[u8]) -> Result<u32, ParseError> {
    let digits = input.get(..4).ok_or(ParseError::InvalidUnicodeHex)?;
    digits.iter().try_fold(0, |acc, &b| {
        hex_val(b)
            .map(|d| (acc << 4) | d)
            .ok_or(ParseError::InvalidUnicodeHex)
    })
}

pub(crate) fn is_high_surrogate(code: u32) -> bool {
    (0xD800..=0xDBFF).contains(&code)
}

pub(crate) fn is_low_surrogate(code: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&code)
}

/// Combines a surrogate pair into the code point it encodes.
pub(crate) fn combine_surrogates(high: u32, low: u32) -> u32 {
    debug_assert!(is_high_surrogate(high) && is_low_surrogate(low));
    (((high - 0xD800) << 10) | (low - 0xDC00)) + 0x10000
}

/// Appends the UTF-8 form of `code` to `out`.
#[expect(clippy::cast_possible_truncation)]
pub(crate) fn encode_utf8(code: u32, out: &mut Stack<u8>) {
    debug_assert!(code <= 0x10_FFFF, "code point out of range");
    if code <= 0x7F {
        out.push(code as u8);
    } else if code <= 0x7FF {
        out.extend_from_slice(&[
            0xC0 | (code >> 6) as u8,
            0x80 | (code & 0x3F) as u8,
        ]);
    } else if code <= 0xFFFF {
        out.extend_from_slice(&[
            0xE0 | (code >> 12) as u8,
            0x80 | ((code >> 6) & 0x3F) as u8,
            0x80 | (code & 0x3F) as u8,
        ]);
    } else {
        out.extend_from_slice(&[
            0xF0 | (code >> 18) as u8,
            0x80 | ((code >> 12) & 0x3F) as u8,
            0x80 | ((code >> 6) & 0x3F) as u8,
            0x80 | (code & 0x3F) as u8,
        ]);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rstest::rstest;

    use super::*;

    fn encoded(code: u32) -> Vec<u8> {
        let mut out = Stack::new();
        let mark = out.mark();
        encode_utf8(code, &mut out);
        out.pop_frame(mark)
    }

    #[rstest]
    #[case(b"0041", 0x41)]
    #[case(b"AbCd", 0xABCD)]
    #[case(b"D834", 0xD834)]
    #[case(b"dd1e", 0xDD1E)]
    #[case(b"0024\"", 0x24)]
    fn decodes_four_digits(#[case] input: &[u8], #[case] expected: u32) {
        assert_eq!(decode_hex4(input), Ok(expected));
    }

    #[rstest]
    #[case(b"")]
    #[case(b"12")]
    #[case(b"123")]
    #[case(b"1G34")]
    #[case(b"12\x003")]
    #[case(b"/000")]
    #[case(b" 123")]
    fn rejects_short_or_non_hex(#[case] input: &[u8]) {
        assert_eq!(decode_hex4(input), Err(ParseError::InvalidUnicodeHex));
    }

    #[test]
    fn pairs_combine() {
        assert_eq!(combine_surrogates(0xD834, 0xDD1E), 0x1D11E);
        assert_eq!(combine_surrogates(0xD800, 0xDC00), 0x10000);
        assert_eq!(combine_surrogates(0xDBFF, 0xDFFF), 0x10_FFFF);
    }

    #[test]
    fn utf8_boundaries_match_core() {
        for code in [0x0, 0x24, 0x7F, 0x80, 0xA2, 0x7FF, 0x800, 0x20AC, 0xFFFF, 0x10000, 0x1D11E, 0x10_FFFF] {
            let ch = char::from_u32(code).unwrap();
            let mut expected = [0u8; 4];
            assert_eq!(encoded(code), ch.encode_utf8(&mut expected).as_bytes(), "U+{code:X}");
        }
    }

    #[test]
    fn lone_surrogate_uses_three_bytes() {
        assert_eq!(encoded(0xDC00), [0xED, 0xB0, 0x80]);
    }
}
