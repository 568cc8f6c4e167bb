use std::fmt;

use thiserror::Error;

/// What the path expected to find at a given point of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Object,
    Array,
    /// Either an object or an array.
    Container,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Object => f.write_str("object"),
            Expected::Array => f.write_str("array"),
            Expected::Container => f.write_str("object or array"),
        }
    }
}

/// Grammar violations found while compiling a path expression.
///
/// `pos` is a byte offset into the full path expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,

    #[error("path must start with `$`")]
    MissingRoot,

    #[error("empty key at offset {pos}")]
    EmptyKey { pos: usize },

    #[error("unknown function {name}()")]
    UnknownFunction { name: String, pos: usize },

    #[error("function {name}() must be the last segment")]
    FunctionNotTerminal { name: String, pos: usize },

    #[error("index bound missing or malformed at {key}, offset {pos}")]
    MalformedIndex { key: String, pos: usize },

    // Literal `0` is indistinguishable from an omitted upper bound.
    #[error("0 as a second bound does not make sense at {key}, offset {pos}")]
    ZeroUpperBound { key: String, pos: usize },

    #[error("indefinite references are not supported mid-path at {key}, offset {pos}")]
    UnsupportedIndefiniteReference { key: String, pos: usize },

    #[error("invalid element reference at offset {pos}: `.` expected, found `{found}`")]
    ExpectedDot { found: char, pos: usize },

    #[error("path has more than {limit} segments")]
    TooManySegments { limit: usize },
}

/// Every way an extraction can fail. There is never a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid path: {0}")]
    InvalidPath(#[from] PathError),

    #[error("unexpected end of input while scanning {context}")]
    UnexpectedEnd { context: &'static str },

    #[error("object or array expected at {key}")]
    ExpectedContainer { key: String },

    #[error("object expected while looking up {key}")]
    ExpectedObject { key: String },

    #[error("`:` expected after a key while looking up {key}")]
    ExpectedColon { key: String },

    #[error("{expected} expected at {key}")]
    TypeMismatch { key: String, expected: Expected },

    #[error("field {key} not found")]
    KeyNotFound { key: String },

    #[error("{key}[{bounds}] does not exist (array has {count} elements)", bounds = fmt_bounds(.left, .right))]
    IndexOutOfRange {
        key: String,
        left: i64,
        right: Option<i64>,
        count: usize,
    },

    #[error("{function}() is only applicable to array or string, found {found}")]
    FunctionNotApplicable {
        function: &'static str,
        found: &'static str,
    },

    #[error("unexpected byte `{found}` while scanning {context}")]
    UnexpectedByte { found: char, context: &'static str },
}

fn fmt_bounds(left: &i64, right: &Option<i64>) -> String {
    match *right {
        None => left.to_string(),
        Some(0) => format!("{left}:"),
        Some(right) => format!("{left}:{right}"),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
