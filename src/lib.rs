//! Slice a sub-document out of a raw JSON buffer by path, without
//! deserializing it.
//!
//! The result is the exact byte range of the selected value, so formatting,
//! number representation and key order survive untouched.
//!
//! ```
//! let doc = br#"{"store": {"book": [{"title": "Sayings"}, {"title": "Sword"}]}}"#;
//! let title = jsonslice::extract(doc, "$.store.book[-1].title").unwrap();
//! assert_eq!(&*title, br#""Sword""#);
//! ```

pub mod errors;
pub mod functions;
pub mod jsonpath;
pub mod options;
mod array;
mod engine;
mod parser;
mod scanner;

use std::borrow::Cow;

pub use errors::{Error, Expected, PathError, Result};
pub use functions::Function;
pub use jsonpath::{JsonPath, Selector, Token};
pub use options::Options;

/// Compiles paths under a fixed set of [`Options`] and evaluates them.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: Options,
}

impl Extractor {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn compile(&self, path: &str) -> Result<JsonPath> {
        JsonPath::compile_with(path, &self.options)
    }

    /// Compile `path` and slice its value out of `input`.
    pub fn extract<'a>(&self, input: &'a [u8], path: &str) -> Result<Cow<'a, [u8]>> {
        self.compile(path)?.get(input)
    }
}

/// Extract the value at `path` from `input` with default options.
pub fn extract<'a>(input: &'a [u8], path: &str) -> Result<Cow<'a, [u8]>> {
    Extractor::default().extract(input, path)
}
