//! Forward-only lexical primitives over raw JSON bytes.
//!
//! Every function takes a position and returns the position just past what
//! it consumed. Nothing is decoded and nothing is allocated.

use crate::errors::{Error, Result};

fn is_separator(b: u8) -> bool {
    matches!(b, b',' | b' ' | b'\t' | b'\r' | b'\n')
}

fn is_scalar_end(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | b',' | b'}' | b']')
}

/// Describe the JSON type starting with `b`, for error messages.
pub(crate) fn kind_of(b: u8) -> &'static str {
    match b {
        b'{' => "object",
        b'[' => "array",
        b'"' => "string",
        b't' | b'f' => "boolean",
        b'n' => "null",
        _ => "number",
    }
}

/// Skip separators (`,` and whitespace). Running out of input is an error:
/// a separator is always followed by something.
pub(crate) fn skip_spaces(input: &[u8], mut i: usize) -> Result<usize> {
    while i < input.len() && is_separator(input[i]) {
        i += 1;
    }
    if i >= input.len() {
        return Err(Error::UnexpectedEnd { context: "input" });
    }
    Ok(i)
}

/// `i` is on an opening quote. Returns one past the matching closing quote.
pub(crate) fn skip_string(input: &[u8], i: usize) -> Result<usize> {
    let mut j = i + 1;
    while j < input.len() {
        match input[j] {
            b'\\' => j += 2,
            b'"' => return Ok(j + 1),
            _ => j += 1,
        }
    }
    Err(Error::UnexpectedEnd { context: "string" })
}

/// Skip exactly one value (leading separators allowed) and return the
/// offset one past its end.
pub(crate) fn skip_value(input: &[u8], i: usize) -> Result<usize> {
    let i = skip_spaces(input, i)?;
    match input[i] {
        b'"' => skip_string(input, i),
        open @ (b'{' | b'[') => skip_container(input, i, open),
        found => {
            let mut j = i;
            while j < input.len() && !is_scalar_end(input[j]) {
                j += 1;
            }
            if j == i {
                return Err(Error::UnexpectedByte {
                    found: found as char,
                    context: "value",
                });
            }
            Ok(j)
        }
    }
}

fn skip_container(input: &[u8], i: usize, open: u8) -> Result<usize> {
    // `[` + 2 == `]`, `{` + 2 == `}`
    let close = open + 2;
    let mut depth = 0usize;
    let mut j = i + 1;
    while j < input.len() {
        let b = input[j];
        if b == b'"' {
            j = skip_string(input, j).map_err(|_| Error::UnexpectedEnd {
                context: kind_of(open),
            })?;
            continue;
        }
        if b == open {
            depth += 1;
        } else if b == close {
            if depth == 0 {
                return Ok(j + 1);
            }
            depth -= 1;
        }
        j += 1;
    }
    Err(Error::UnexpectedEnd {
        context: kind_of(open),
    })
}

/// `i` is just past a key's closing quote. Returns the position of its value.
pub(crate) fn seek_to_value(input: &[u8], i: usize, key: &str) -> Result<usize> {
    let i = skip_spaces(input, i)?;
    if input[i] != b':' {
        return Err(Error::ExpectedColon {
            key: key.to_string(),
        });
    }
    skip_spaces(input, i + 1)
}

/// `input` starts at `{`. Returns `input` narrowed to the start of the value
/// stored under `key`. Keys are compared byte for byte, escapes included.
pub(crate) fn find_key<'a>(input: &'a [u8], key: &str) -> Result<&'a [u8]> {
    if input.first() != Some(&b'{') {
        return Err(Error::ExpectedObject {
            key: key.to_string(),
        });
    }
    let mut i = 1;
    loop {
        i = skip_spaces(input, i)?;
        match input[i] {
            b'}' => {
                return Err(Error::KeyNotFound {
                    key: key.to_string(),
                })
            }
            b'"' => {
                let end = skip_string(input, i)?;
                let found = &input[i + 1..end - 1];
                let value = seek_to_value(input, end, key)?;
                if found == key.as_bytes() {
                    return Ok(&input[value..]);
                }
                i = skip_value(input, value)?;
            }
            other => {
                return Err(Error::UnexpectedByte {
                    found: other as char,
                    context: "object key",
                })
            }
        }
    }
}
