use serde::{Deserialize, Serialize};

/// Limits applied when compiling and evaluating a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Upper bound on path segments. Evaluation recurses once per segment,
    /// so this also caps recursion depth for untrusted paths.
    pub max_segments: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_segments: 128 }
    }
}

impl Options {
    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }

    /// Load options from a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
