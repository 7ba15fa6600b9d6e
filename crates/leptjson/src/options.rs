/// Default value of [`ParserOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration options for the JSON parser.
///
/// # Examples
///
/// ```rust
/// use leptjson::{parse_with_options, ParseError, ParserOptions, Value};
///
/// let options = ParserOptions { max_depth: 1 };
/// let mut value = Value::Null;
/// assert!(parse_with_options(&mut value, "[1, 2]", options).is_ok());
/// assert_eq!(
///     parse_with_options(&mut value, "[[1], 2]", options),
///     Err(ParseError::DepthLimitExceeded(1))
/// );
/// assert!(value.is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of arrays and objects that may be open at once.
    ///
    /// Each nesting level costs one recursive call, so this bounds the stack
    /// space a single parse can use. A document exceeding it fails with
    /// [`ParseError::DepthLimitExceeded`](crate::ParseError::DepthLimitExceeded).
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_DEPTH`]
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
