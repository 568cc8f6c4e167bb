use serde::Serialize;

use crate::array;
use crate::errors::{Error, Result};
use crate::scanner::{kind_of, skip_string, skip_value};

/// Functions callable as the last path segment, e.g. `$.items.length()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Function {
    /// Quote-inclusive byte length of a string, or element count of an array.
    Length,
    /// Serialized size in bytes of any value.
    Size,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "length" => Some(Function::Length),
            "size" => Some(Function::Size),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::Length => "length",
            Function::Size => "size",
        }
    }

    /// Apply to the value starting at `input[0]`. The result is always a
    /// freshly rendered decimal number.
    pub fn call(&self, input: &[u8], key: &str) -> Result<Vec<u8>> {
        let n = match self {
            Function::Size => skip_value(input, 0)?,
            Function::Length => match input.first().copied() {
                Some(b'"') => skip_string(input, 0)?,
                Some(b'[') => array::count(input, key)?,
                Some(other) => {
                    return Err(Error::FunctionNotApplicable {
                        function: self.name(),
                        found: kind_of(other),
                    })
                }
                None => return Err(Error::UnexpectedEnd { context: "input" }),
            },
        };
        Ok(n.to_string().into_bytes())
    }
}
