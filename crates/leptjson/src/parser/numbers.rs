//! Number literal scanning.
//!
//! The grammar is checked by hand before the lexeme is handed to `f64`'s
//! `FromStr`, which on its own would accept forms JSON forbids (`+1`, `.5`,
//! `1.`, `inf`, `NaN`).

use crate::ParseError;

#[inline]
fn digit_run(input: &[u8], mut p: usize) -> usize {
    while input.get(p).is_some_and(u8::is_ascii_digit) {
        p += 1;
    }
    p
}

#[inline]
fn at(input: &[u8], p: usize) -> u8 {
    input.get(p).copied().unwrap_or(0)
}

/// Returns the length of the number literal at the start of `input`.
///
/// Scanning stops at the first byte that cannot extend the literal, so a
/// leading zero ends the integer part: `0123` yields a one-byte literal and
/// leaves `123` for the caller to reject.
pub(crate) fn scan_number_lexeme(input: &[u8]) -> Result<usize, ParseError> {
    let mut p = 0;

    if at(input, p) == b'-' {
        p += 1;
    }

    match at(input, p) {
        b'0' => p += 1,
        b'1'..=b'9' => p = digit_run(input, p + 1),
        _ => return Err(ParseError::InvalidValue),
    }

    if at(input, p) == b'.' {
        p += 1;
        if !at(input, p).is_ascii_digit() {
            return Err(ParseError::InvalidValue);
        }
        p = digit_run(input, p);
    }

    if matches!(at(input, p), b'e' | b'E') {
        p += 1;
        if matches!(at(input, p), b'+' | b'-') {
            p += 1;
        }
        if !at(input, p).is_ascii_digit() {
            return Err(ParseError::InvalidValue);
        }
        p = digit_run(input, p);
    }

    Ok(p)
}

/// Scans and converts the number literal at the start of `input`, returning
/// the value and the number of bytes consumed.
///
/// Overflow to either infinity is [`ParseError::NumberTooBig`]; underflow
/// quietly yields zero.
pub(crate) fn parse_number(input: &[u8]) -> Result<(f64, usize), ParseError> {
    let len = scan_number_lexeme(input)?;
    let lexeme = core::str::from_utf8(&input[..len]).map_err(|_| ParseError::InvalidValue)?;
    let n: f64 = lexeme.parse().map_err(|_| ParseError::InvalidValue)?;
    if n.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    Ok((n, len))
}
