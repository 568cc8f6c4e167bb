use std::borrow::Cow;

use tracing::trace;

use crate::array;
use crate::errors::{Error, Expected, Result};
use crate::jsonpath::{Selector, Token};
use crate::scanner::{find_key, skip_spaces, skip_value};

/// Walk `input` along the chain starting at `token`, one segment per call.
///
/// Plain values come back borrowed from `input`; only range selections and
/// function results are allocated.
pub(crate) fn get_value<'a>(input: &'a [u8], token: &Token) -> Result<Cow<'a, [u8]>> {
    // Leading separators left over from the parent value.
    let start = skip_spaces(input, 0)?;
    let mut input = &input[start..];
    if !matches!(input[0], b'{' | b'[') {
        return Err(Error::ExpectedContainer {
            key: token.key().to_string(),
        });
    }
    // The root token stays where it is; every other key is looked up.
    if !token.is_root() {
        input = find_key(input, token.key())?;
    }
    trace!(key = token.key(), selector = ?token.selector(), "resolving segment");
    check_value_type(input, token)?;

    let Some(next) = token.next() else {
        return terminal_value(input, token);
    };

    // Mid-path array tokens are always single indexes, never ranges.
    if let Selector::Index(index) = token.selector() {
        input = array::element(input, token.key(), index)?;
    }
    // A function consumes the current value instead of descending into it.
    match next.selector() {
        Selector::Function(function) => function.call(input, token.key()).map(Cow::Owned),
        _ => get_value(input, next),
    }
}

fn terminal_value<'a>(input: &'a [u8], token: &Token) -> Result<Cow<'a, [u8]>> {
    if token.is_array() {
        return array::select(input, token);
    }
    let end = skip_value(input, 0)?;
    Ok(Cow::Borrowed(&input[..end]))
}

/// Make sure the value under the token has the shape the rest of the path needs.
fn check_value_type(input: &[u8], token: &Token) -> Result<()> {
    let first = input[0];
    let expected = if token.is_array() {
        Some(Expected::Array).filter(|_| first != b'[')
    } else if token.is_terminal() || token.is_function_subject() {
        None
    } else if first == b'[' {
        Some(Expected::Object)
    } else if first != b'{' {
        Some(Expected::Container)
    } else {
        None
    };
    match expected {
        Some(expected) => Err(Error::TypeMismatch {
            key: token.key().to_string(),
            expected,
        }),
        None => Ok(()),
    }
}
