//! Parser configuration

/// Knobs for a single parse
///
/// The defaults are what [`parse`](super::parse) uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Cache rule results per offset. Turning this off changes performance,
    /// never the result.
    pub memoize: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { memoize: true }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether rule results are memoized
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}
