/// Default bound on element nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of simultaneously open elements. Deeper input fails
    /// with `TooDeeplyNested` instead of growing the native stack.
    pub max_depth: usize,
    /// Reject input with more than one top-level element.
    pub single_root: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            single_root: false,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_single_root(mut self, single_root: bool) -> Self {
        self.single_root = single_root;
        self
    }
}
