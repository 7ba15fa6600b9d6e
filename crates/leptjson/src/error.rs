use thiserror::Error;

/// The first grammar violation found while parsing a document.
///
/// Exactly one error is reported per failed parse: the left-most one. Errors
/// raised deep inside nested arrays or objects reach the caller unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended (or held only whitespace) where a value was required.
    #[error("expected a value")]
    ExpectValue,
    /// A literal or number did not match the JSON grammar.
    #[error("invalid value")]
    InvalidValue,
    /// Non-whitespace input follows the top-level value.
    #[error("root is not singular")]
    RootNotSingular,
    /// A number literal overflows a 64-bit float.
    #[error("number too big")]
    NumberTooBig,
    /// A string literal is missing its closing quotation mark.
    #[error("missing quotation mark")]
    MissingQuotationMark,
    /// A backslash is followed by a character that is not a valid escape.
    #[error("invalid string escape")]
    InvalidStringEscape,
    /// A `\u` escape is not followed by four hexadecimal digits.
    #[error("invalid unicode hex")]
    InvalidUnicodeHex,
    /// A high surrogate is not followed by a valid low surrogate escape.
    #[error("invalid unicode surrogate")]
    InvalidUnicodeSurrogate,
    /// An array element is followed by something other than `,` or `]`.
    #[error("missing comma or square bracket")]
    MissCommaOrSquareBracket,
    /// An object member does not start with a string key.
    #[error("missing key")]
    MissKey,
    /// An object key is not followed by `:`.
    #[error("missing colon")]
    MissColon,
    /// An object member is followed by something other than `,` or `}`.
    #[error("missing comma or curly bracket")]
    MissCommaOrCurlyBracket,
    /// Arrays and objects are nested deeper than the configured maximum.
    #[error("nesting exceeds the maximum depth of {0}")]
    DepthLimitExceeded(usize),
}
