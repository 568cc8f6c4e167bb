//! Element scanning and index/range selection over a raw JSON array.

use std::borrow::Cow;

use tracing::trace;

use crate::errors::{Error, Expected, Result};
use crate::jsonpath::{Selector, Token};
use crate::scanner::{skip_spaces, skip_value};

/// Byte range `[start, end)` of one array element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

/// Iterator over the element spans of the array at the front of a buffer.
pub(crate) struct Elements<'a> {
    input: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> Elements<'a> {
    /// `input` must start with `[`.
    pub fn new(input: &'a [u8], key: &str) -> Result<Self> {
        if input.first() != Some(&b'[') {
            return Err(Error::TypeMismatch {
                key: key.to_string(),
                expected: Expected::Array,
            });
        }
        Ok(Self {
            input,
            pos: 1,
            done: false,
        })
    }

    fn advance(&mut self) -> Result<Option<Span>> {
        let start = skip_spaces(self.input, self.pos)?;
        if self.input[start] == b']' {
            return Ok(None);
        }
        let end = skip_value(self.input, start)?;
        self.pos = end;
        Ok(Some(Span { start, end }))
    }
}

impl Iterator for Elements<'_> {
    type Item = Result<Span>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.advance().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}

/// Number of elements in the array at the front of `input`.
pub(crate) fn count(input: &[u8], key: &str) -> Result<usize> {
    Elements::new(input, key)?.try_fold(0, |n, span| span.map(|_| n + 1))
}

/// Resolve a possibly negative index against `count` elements.
fn resolve(index: i64, count: usize) -> Option<usize> {
    let count = i64::try_from(count).ok()?;
    let index = if index < 0 { index.checked_add(count)? } else { index };
    if (0..count).contains(&index) {
        usize::try_from(index).ok()
    } else {
        None
    }
}

/// The single element `index` of the array at the front of `input`.
pub(crate) fn element<'a>(input: &'a [u8], key: &str, index: i64) -> Result<&'a [u8]> {
    let spans = Elements::new(input, key)?.collect::<Result<Vec<_>>>()?;
    trace!(key, index, count = spans.len(), "selecting array element");
    let span = resolve(index, spans.len())
        .map(|i| spans[i])
        .ok_or_else(|| Error::IndexOutOfRange {
            key: key.to_string(),
            left: index,
            right: None,
            count: spans.len(),
        })?;
    Ok(&input[span.start..span.end])
}

/// A fresh array literal holding elements `left` up to (excluding) `right`.
///
/// `right == 0` means through the last element. Separators between the
/// selected elements are kept verbatim; the brackets are synthesized.
pub(crate) fn range(input: &[u8], key: &str, left: i64, right: i64) -> Result<Vec<u8>> {
    let spans = Elements::new(input, key)?.collect::<Result<Vec<_>>>()?;
    let count = spans.len();
    trace!(key, left, right, count, "selecting array range");
    let out_of_range = || Error::IndexOutOfRange {
        key: key.to_string(),
        left,
        right: Some(right),
        count,
    };
    // `right` is exclusive; 0 stands for one past the last element.
    let exclusive = if right == 0 {
        i64::try_from(count).map_err(|_| out_of_range())?
    } else {
        right
    };
    let first = resolve(left, count).ok_or_else(out_of_range)?;
    let last = exclusive
        .checked_sub(1)
        .and_then(|inclusive| resolve(inclusive, count))
        .ok_or_else(out_of_range)?;
    // Empty and inverted windows have nothing to wrap.
    if first > last {
        return Err(out_of_range());
    }

    // Keep the bytes between the selected elements, drop the outer separators.
    let body = &input[spans[first].start..spans[last].end];
    let mut out = Vec::with_capacity(body.len() + 2);
    out.push(b'[');
    out.extend_from_slice(body);
    out.push(b']');
    Ok(out)
}

/// Apply an index or range token to the array at the front of `input`.
pub(crate) fn select<'a>(input: &'a [u8], token: &Token) -> Result<Cow<'a, [u8]>> {
    match token.selector() {
        Selector::Index(index) => element(input, token.key(), index).map(Cow::Borrowed),
        Selector::Range { left, right } => range(input, token.key(), left, right).map(Cow::Owned),
        _ => Err(Error::TypeMismatch {
            key: token.key().to_string(),
            expected: Expected::Object,
        }),
    }
}
