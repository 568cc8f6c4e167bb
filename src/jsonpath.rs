use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::engine;
use crate::errors::{PathError, Result};
use crate::functions::Function;
use crate::options::Options;
use crate::parser::Parser;

pub(crate) const ROOT: &str = "$";

/// How a segment selects from the value under its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// `.name`: the member value itself.
    Member,
    /// `name[n]`: one array element, negative counts from the end.
    Index(i64),
    /// `name[a:b]`: `right` is exclusive, `0` means through the end.
    Range { left: i64, right: i64 },
    /// `name()`: applied to the value selected by the previous segment.
    Function(Function),
}

/// One segment of a compiled path. Each token owns the rest of the chain.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Token {
    key: String,
    selector: Selector,
    #[serde(skip)]
    next: Option<Box<Token>>,
}

impl Token {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn selector(&self) -> Selector {
        self.selector
    }

    pub fn next(&self) -> Option<&Token> {
        self.next.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.key == ROOT
    }

    pub fn is_array(&self) -> bool {
        matches!(self.selector, Selector::Index(_) | Selector::Range { .. })
    }

    pub fn is_range(&self) -> bool {
        matches!(self.selector, Selector::Range { .. })
    }

    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }

    pub fn is_function(&self) -> bool {
        matches!(self.selector, Selector::Function(_))
    }

    /// The value this token resolves to is handed to the next token's function.
    pub fn is_function_subject(&self) -> bool {
        self.next().is_some_and(Token::is_function)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.selector {
            Selector::Member => write!(f, "{}", self.key),
            Selector::Index(index) => write!(f, "{}[{index}]", self.key),
            Selector::Range { left, right: 0 } => write!(f, "{}[{left}:]", self.key),
            Selector::Range { left, right } => write!(f, "{}[{left}:{right}]", self.key),
            Selector::Function(function) => write!(f, "{}()", function.name()),
        }
    }
}

/// A compiled path expression, reusable across many documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    head: Token,
}

impl JsonPath {
    pub fn compile(path: &str) -> Result<Self> {
        Self::compile_with(path, &Options::default())
    }

    pub fn compile_with(path: &str, options: &Options) -> Result<Self> {
        if path.is_empty() {
            return Err(PathError::Empty.into());
        }
        if !path.starts_with('$') {
            return Err(PathError::MissingRoot.into());
        }
        let head = compile_segment(path, 0, 0, options.max_segments)?;
        let compiled = Self { head };
        debug!(path, segments = compiled.len(), "compiled path");
        Ok(compiled)
    }

    pub fn head(&self) -> &Token {
        &self.head
    }

    /// Tokens from the root to the terminal one.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        std::iter::successors(Some(&self.head), |token| token.next())
    }

    pub fn len(&self) -> usize {
        self.tokens().count()
    }

    /// Always false: a compiled path has at least the root token.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Slice the selected value out of `input`.
    pub fn get<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        engine::get_value(input, &self.head)
    }
}

impl FromStr for JsonPath {
    type Err = crate::errors::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::compile(s)
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().join("."))
    }
}

impl Serialize for JsonPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.tokens())
    }
}

/// Compile one segment and, recursively, everything after its dot.
/// `offset` is where `path` starts within the full expression.
fn compile_segment(
    path: &str,
    offset: usize,
    depth: usize,
    limit: usize,
) -> std::result::Result<Token, PathError> {
    if depth >= limit {
        return Err(PathError::TooManySegments { limit });
    }
    let mut p = Parser::new(path);
    let key = p.take_until(b".[(");
    if key.is_empty() {
        return Err(PathError::EmptyKey { pos: offset });
    }
    let token = |selector| Token {
        key: key.to_string(),
        selector,
        next: None,
    };
    if p.eof() {
        return Ok(token(Selector::Member));
    }

    if p.peek_str("()") {
        let function = Function::from_name(key).ok_or_else(|| PathError::UnknownFunction {
            name: key.to_string(),
            pos: offset,
        })?;
        p.consume(b'(');
        p.consume(b')');
        if !p.eof() {
            return Err(PathError::FunctionNotTerminal {
                name: key.to_string(),
                pos: offset + p.pos(),
            });
        }
        return Ok(token(Selector::Function(function)));
    }

    // Array selector: `[n]`, `[a:b]`, `[a:]`, `[:b]`.
    let mut selector = Selector::Member;
    if p.consume(b'[') {
        let left = read_bound(&mut p, key, offset)?.unwrap_or(0);
        selector = Selector::Index(left);
        if p.consume(b':') {
            let pos = offset + p.pos();
            let right = match read_bound(&mut p, key, offset)? {
                Some(0) => {
                    return Err(PathError::ZeroUpperBound {
                        key: key.to_string(),
                        pos,
                    })
                }
                Some(right) => right,
                None => 0,
            };
            selector = Selector::Range { left, right };
        }
        if !p.consume(b']') {
            return Err(PathError::MalformedIndex {
                key: key.to_string(),
                pos: offset + p.pos(),
            });
        }
        if p.eof() {
            return Ok(token(selector));
        }
        // Only the last segment may select more than one element.
        if matches!(selector, Selector::Range { .. }) {
            return Err(PathError::UnsupportedIndefiniteReference {
                key: key.to_string(),
                pos: offset + p.pos(),
            });
        }
    }

    if !p.consume(b'.') {
        return Err(PathError::ExpectedDot {
            found: p.peek_char().unwrap_or('\0'),
            pos: offset + p.pos(),
        });
    }
    let next = compile_segment(p.rest(), offset + p.pos(), depth + 1, limit)?;
    Ok(Token {
        next: Some(Box::new(next)),
        ..token(selector)
    })
}

fn read_bound(
    p: &mut Parser<'_>,
    key: &str,
    offset: usize,
) -> std::result::Result<Option<i64>, PathError> {
    let pos = offset + p.pos();
    match p.read_int() {
        None => Ok(None),
        Some(Ok(bound)) => Ok(Some(bound)),
        Some(Err(_)) => Err(PathError::MalformedIndex {
            key: key.to_string(),
            pos,
        }),
    }
}
