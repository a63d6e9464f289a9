use std::fmt;

/// Source position of a grammar token, kept on every AST node for
/// diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeLocation {
    pub line: u32,
    pub column: u32,
}

impl NodeLocation {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for NodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Debug for NodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeLocation({})", self)
    }
}
