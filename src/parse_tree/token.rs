use crate::ast::NodeLocation;

/// A terminal of the grammar tree: the matched text plus where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub location: NodeLocation,
}

impl Token {
    pub fn new(text: impl Into<String>, location: NodeLocation) -> Self {
        Self { text: text.into(), location }
    }
}

/// An identifier terminal. `quoted` marks delimited identifiers, whose case
/// the dialect preserves.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierTree {
    pub text: String,
    pub quoted: bool,
    pub location: NodeLocation,
}

impl IdentifierTree {
    pub fn new(text: impl Into<String>, location: NodeLocation) -> Self {
        Self { text: text.into(), quoted: false, location }
    }

    pub fn quoted(text: impl Into<String>, location: NodeLocation) -> Self {
        Self { text: text.into(), quoted: true, location }
    }
}

/// A dotted name production: one or more identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedNameTree {
    pub parts: Vec<IdentifierTree>,
}

impl QualifiedNameTree {
    pub fn new(parts: Vec<IdentifierTree>) -> Self {
        Self { parts }
    }

    pub fn location(&self) -> Option<NodeLocation> {
        self.parts.first().map(|p| p.location)
    }
}
