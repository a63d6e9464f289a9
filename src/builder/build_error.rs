use std::fmt;

use crate::ast::NodeLocation;

/// Failure while lowering a grammar tree. Always fatal to the current
/// statement; the builder never recovers or returns a partial AST.
#[derive(Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A construct is syntactically present but semantically invalid for
    /// this dialect (wrong arity, disallowed clause, unknown token).
    Parsing {
        message: String,
        line: u32,
        column: u32,
    },
    /// Column-name resolution failure. Unknown fields are reported with the
    /// same text as ambiguous ones; the dialect has always done so and
    /// downstream consumers match on the message.
    Naming { message: String },
    /// A grammar production this dialect defines no AST shape for. A
    /// coverage gap, not a user error.
    Unsupported { message: String },
}

impl BuildError {
    pub fn parsing(message: impl Into<String>, location: NodeLocation) -> Self {
        BuildError::Parsing {
            message: message.into(),
            line: location.line,
            column: location.column,
        }
    }

    pub fn ambiguous_field(name: &str) -> Self {
        BuildError::Naming { message: format!("Field {} is ambiguous.", name) }
    }

    pub fn unknown_source(name: &str) -> Self {
        BuildError::Naming { message: format!("Source {} does not exist.", name) }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        BuildError::Unsupported { message: message.into() }
    }

    pub fn err<T>(self) -> Result<T, BuildError> {
        Err(self)
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Parsing { message, line, column } => {
                write!(f, "{} at [{}:{}]", message, line, column)
            }
            BuildError::Naming { message } => write!(f, "{}", message),
            BuildError::Unsupported { message } => write!(f, "{}", message),
        }
    }
}

impl fmt::Debug for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Parsing { .. } => write!(f, "Parsing({})", self),
            BuildError::Naming { .. } => write!(f, "Naming({})", self),
            BuildError::Unsupported { .. } => write!(f, "Unsupported({})", self),
        }
    }
}

impl std::error::Error for BuildError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_parsing_error_carries_position() {
        let err = BuildError::parsing("Invalid number of arguments for 'if' function",
                                      NodeLocation::new(3, 12));
        assert_eq!(
            err.to_string(),
            "Invalid number of arguments for 'if' function at [3:12]"
        );
    }

    #[test]
    pub fn test_unknown_field_reuses_ambiguity_message() {
        // Preserved dialect behavior: both cases surface the same text.
        let err = BuildError::ambiguous_field("ID");
        assert_eq!(err.to_string(), "Field ID is ambiguous.");
    }
}
