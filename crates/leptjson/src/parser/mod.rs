//! Recursive-descent JSON parser.
//!
//! Overview
//! - One method per grammar production (`value`, `array`, `object`,
//!   `string`), dispatched on the first non-whitespace byte. Every production
//!   returns `Result` and errors travel up unchanged with `?`.
//! - The input is a byte slice read through [`Parser::peek`], which yields `0`
//!   past the end. A NUL byte in the slice therefore ends the document just as
//!   the end of the slice does.
//!
//! Staging
//! - Decoded string bytes, pending array elements and pending object members
//!   are staged on three [`Stack`]s owned by the parser. A production marks its
//!   stack on entry and leaves through [`Parser::with_frame`], which freezes the
//!   frame on success and rewinds it on failure. Rewinding drops the staged
//!   children, so a failed parse releases everything it built.
//! - The stacks live exactly as long as one top-level parse and are empty
//!   again when it returns, whatever the outcome.
//!
//! Depth
//! - Each open array or object costs one level of recursion. Opening one more
//!   than [`ParserOptions::max_depth`] fails with
//!   [`ParseError::DepthLimitExceeded`].

#![expect(clippy::inline_always)]

mod escape_buffer;
mod literal_buffer;
mod numbers;
mod scratch;


use alloc::vec::Vec;
use core::str::FromStr;

use bstr::BString;
use escape_buffer::{combine_surrogates, decode_hex4, encode_utf8, is_high_surrogate, is_low_surrogate};
use literal_buffer::ExpectedLiteral;
use log::{debug, trace};
use scratch::Stack;

use crate::{Member, ParseError, ParserOptions, Value};

/// Parses `json` into `value` with the default [`ParserOptions`].
///
/// `value` is reset to [`Value::Null`] first. On success it holds the parsed
/// document; on failure it is left `Null` and the first error is returned.
///
/// # Errors
///
/// Returns the [`ParseError`] for the left-most grammar violation.
///
/// # Examples
///
/// ```
/// use leptjson::{parse, ParseError, Value};
///
/// let mut v = Value::Boolean(false);
/// parse(&mut v, "[ null , false , true , 123 , \"abc\" ]").unwrap();
/// assert_eq!(v.get_array_size(), 5);
///
/// assert_eq!(parse(&mut v, "null x"), Err(ParseError::RootNotSingular));
/// assert!(v.is_null());
/// ```
pub fn parse(value: &mut Value, json: impl AsRef<[u8]>) -> Result<(), ParseError> {
    parse_with_options(value, json, ParserOptions::default())
}

/// Parses `json` into `value` with explicit options.
///
/// Behaves like [`parse`] otherwise.
///
/// # Errors
///
/// Returns the [`ParseError`] for the left-most grammar violation, or
/// [`ParseError::DepthLimitExceeded`] when nesting goes deeper than
/// `options.max_depth`.
pub fn parse_with_options(
    value: &mut Value,
    json: impl AsRef<[u8]>,
    options: ParserOptions,
) -> Result<(), ParseError> {
    let json = json.as_ref();
    value.clear();
    trace!("parsing {} bytes of JSON", json.len());

    let mut parser = Parser::new(json, options);
    let result = parser.parse_document();
    debug_assert!(parser.is_drained(), "scratch stacks not drained after parse");

    match result {
        Ok(parsed) => {
            trace!("parsed a JSON {:?} from {} bytes", parsed.kind(), parser.offset());
            *value = parsed;
            Ok(())
        }
        Err(err) => {
            debug!("rejected JSON at byte {}: {err}", parser.offset());
            Err(err)
        }
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut value = Value::Null;
        parse(&mut value, s)?;
        Ok(value)
    }
}

/// State of one top-level parse.
#[derive(Debug)]
pub(crate) struct Parser<'src> {
    input: &'src [u8],
    pos: usize,
    max_depth: usize,
    bytes: Stack<u8>,
    values: Stack<Value>,
    members: Stack<Member>,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(input: &'src [u8], options: ParserOptions) -> Self {
        Self {
            input,
            pos: 0,
            max_depth: options.max_depth,
            bytes: Stack::new(),
            values: Stack::new(),
            members: Stack::new(),
        }
    }

    /// Byte offset of the cursor.
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    /// Total number of entries staged across all stacks.
    pub(crate) fn staged(&self) -> usize {
        self.bytes.len() + self.values.len() + self.members.len()
    }

    pub(crate) fn is_drained(&self) -> bool {
        self.staged() == 0
    }

    /// Parses one value surrounded by optional whitespace and requires the
    /// input to end after it.
    pub(crate) fn parse_document(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        let value = self.parse_value(0)?;
        self.skip_whitespace();
        if self.peek() != 0 {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    // --------------------------------------------------------------------------------------------
    // Cursor
    // --------------------------------------------------------------------------------------------

    #[inline(always)]
    fn peek(&self) -> u8 {
        self.input.get(self.pos).copied().unwrap_or(0)
    }

    /// Returns the current byte and moves past it. The cursor never moves
    /// beyond the end of the input.
    #[inline(always)]
    fn bump(&mut self) -> u8 {
        let b = self.peek();
        if self.pos < self.input.len() {
            self.pos += 1;
        }
        b
    }

    #[inline(always)]
    fn rest(&self) -> &'src [u8] {
        self.input.get(self.pos..).unwrap_or_default()
    }

    #[inline(always)]
    fn expect(&mut self, b: u8) {
        debug_assert_eq!(self.peek(), b);
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), b' ' | b'\t' | b'\n' | b'\r') {
            self.pos += 1;
        }
    }

    // --------------------------------------------------------------------------------------------
    // Staging
    // --------------------------------------------------------------------------------------------

    /// Runs `stage` with a fresh frame on the stack selected by `stack`, and
    /// returns the frame's contents if it succeeds. On failure the frame is
    /// rewound before the error is returned.
    fn with_frame<T>(
        &mut self,
        stack: impl Fn(&mut Self) -> &mut Stack<T>,
        stage: impl FnOnce(&mut Self) -> Result<(), ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mark = stack(self).mark();
        match stage(self) {
            Ok(()) => Ok(stack(self).pop_frame(mark)),
            Err(err) => {
                stack(self).rewind(mark);
                Err(err)
            }
        }
    }

    fn enter(&self, depth: usize) -> Result<usize, ParseError> {
        if depth >= self.max_depth {
            return Err(ParseError::DepthLimitExceeded(self.max_depth));
        }
        Ok(depth + 1)
    }

    // --------------------------------------------------------------------------------------------
    // Productions
    // --------------------------------------------------------------------------------------------

    /// `depth` is the number of arrays and objects currently open.
    fn parse_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        match self.peek() {
            b'n' | b't' | b'f' => self.parse_literal(),
            b'[' => self.parse_array(depth),
            b'{' => self.parse_object(depth),
            b'"' => self.parse_string().map(Value::String),
            0 => Err(ParseError::ExpectValue),
            _ => self.parse_number(),
        }
    }

    fn parse_literal(&mut self) -> Result<Value, ParseError> {
        let literal = ExpectedLiteral::new(self.peek()).ok_or(ParseError::InvalidValue)?;
        let value = literal
            .matches(&self.rest()[1..])
            .ok_or(ParseError::InvalidValue)?;
        self.pos += literal.consumed();
        Ok(value)
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let (n, len) = numbers::parse_number(self.rest())?;
        self.pos += len;
        Ok(Value::Number(n))
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value, ParseError> {
        let depth = self.enter(depth)?;
        self.expect(b'[');
        self.skip_whitespace();
        if self.peek() == b']' {
            self.pos += 1;
            return Ok(Value::Array(Vec::new()));
        }

        let elements = self.with_frame(|p| &mut p.values, |p| p.stage_elements(depth))?;
        Ok(Value::Array(elements))
    }

    fn stage_elements(&mut self, depth: usize) -> Result<(), ParseError> {
        loop {
            self.skip_whitespace();
            let element = self.parse_value(depth)?;
            self.values.push(element);
            self.skip_whitespace();
            match self.peek() {
                b',' => self.pos += 1,
                b']' => {
                    self.pos += 1;
                    return Ok(());
                }
                _ => return Err(ParseError::MissCommaOrSquareBracket),
            }
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value, ParseError> {
        let depth = self.enter(depth)?;
        self.expect(b'{');
        self.skip_whitespace();
        if self.peek() == b'}' {
            self.pos += 1;
            return Ok(Value::Object(Vec::new()));
        }

        let members = self.with_frame(|p| &mut p.members, |p| p.stage_members(depth))?;
        Ok(Value::Object(members))
    }

    fn stage_members(&mut self, depth: usize) -> Result<(), ParseError> {
        loop {
            if self.peek() != b'"' {
                return Err(ParseError::MissKey);
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            if self.peek() != b':' {
                return Err(ParseError::MissColon);
            }
            self.pos += 1;
            self.skip_whitespace();

            let value = self.parse_value(depth)?;
            self.members.push(Member { key, value });

            self.skip_whitespace();
            match self.peek() {
                b',' => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                b'}' => {
                    self.pos += 1;
                    return Ok(());
                }
                _ => return Err(ParseError::MissCommaOrCurlyBracket),
            }
        }
    }

    fn parse_string(&mut self) -> Result<BString, ParseError> {
        let bytes = self.with_frame(|p| &mut p.bytes, Self::stage_string)?;
        Ok(BString::from(bytes))
    }

    fn stage_string(&mut self) -> Result<(), ParseError> {
        self.expect(b'"');
        loop {
            self.copy_unescaped();
            match self.bump() {
                b'"' => return Ok(()),
                b'\\' => self.stage_escape()?,
                0 => return Err(ParseError::MissingQuotationMark),
                _ => unreachable!("copy_unescaped stops only at a quote, backslash or NUL"),
            }
        }
    }

    /// Copies the run of bytes that need no decoding straight onto the byte
    /// stack.
    fn copy_unescaped(&mut self) {
        let rest = self.rest();
        let run = rest
            .iter()
            .position(|&b| matches!(b, b'"' | b'\\' | 0))
            .unwrap_or(rest.len());
        self.bytes.extend_from_slice(&rest[..run]);
        self.pos += run;
    }

    fn stage_escape(&mut self) -> Result<(), ParseError> {
        let decoded = match self.bump() {
            b'"' => b'"',
            b'\\' => b'\\',
            b'/' => b'/',
            b'b' => 0x08,
            b'f' => 0x0C,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => {
                let code = self.parse_unicode_escape()?;
                encode_utf8(code, &mut self.bytes);
                return Ok(());
            }
            _ => return Err(ParseError::InvalidStringEscape),
        };
        self.bytes.push(decoded);
        Ok(())
    }

    /// Decodes the digits after `\u`, pairing a high surrogate with the
    /// `\uXXXX` low surrogate that must follow it.
    fn parse_unicode_escape(&mut self) -> Result<u32, ParseError> {
        let high = self.parse_hex4()?;
        if !is_high_surrogate(high) {
            return Ok(high);
        }

        if self.bump() != b'\\' || self.bump() != b'u' {
            return Err(ParseError::InvalidUnicodeSurrogate);
        }
        let low = self.parse_hex4()?;
        if !is_low_surrogate(low) {
            return Err(ParseError::InvalidUnicodeSurrogate);
        }
        Ok(combine_surrogates(high, low))
    }

    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let code = decode_hex4(self.rest())?;
        self.pos += 4;
        Ok(code)
    }
}
