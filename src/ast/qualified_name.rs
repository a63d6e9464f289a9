use std::fmt;

/// An ordered, non-empty sequence of identifier parts
/// (`schema.table.column`).
///
/// Column and table references in this dialect compare case-insensitively,
/// so `of` folds every part to upper case at construction. The builder uses
/// `verbatim` only for the builtin function names it synthesizes itself
/// (`concat`, `substr`, `strpos`), whose canonical spelling is lower case.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    parts: Vec<String>,
}

impl QualifiedName {
    pub fn of(parts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let parts: Vec<String> = parts
            .into_iter()
            .map(|p| p.into().to_uppercase())
            .collect();
        debug_assert!(!parts.is_empty(), "QualifiedName requires at least one part");
        Self { parts }
    }

    pub fn single(part: impl Into<String>) -> Self {
        Self::of([part])
    }

    /// Keeps the parts exactly as given. Reserved for names whose case the
    /// dialect preserves.
    pub fn verbatim(parts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let parts: Vec<String> = parts.into_iter().map(Into::into).collect();
        debug_assert!(!parts.is_empty(), "QualifiedName requires at least one part");
        Self { parts }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// The last part: the column of `table.column`, the bare name otherwise.
    pub fn suffix(&self) -> &str {
        self.parts.last().map(String::as_str).unwrap_or("")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.join("."))
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QualifiedName({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_parts_are_upper_cased_at_construction() {
        let name = QualifiedName::of(["orders", "Amount"]);
        assert_eq!(name.parts(), &["ORDERS".to_string(), "AMOUNT".to_string()]);
        assert_eq!(name.suffix(), "AMOUNT");
        assert_eq!(name.to_string(), "ORDERS.AMOUNT");
    }

    #[test]
    pub fn test_equality_is_case_normalized() {
        assert_eq!(QualifiedName::single("users"), QualifiedName::single("USERS"));
    }

    #[test]
    pub fn test_verbatim_preserves_case() {
        let name = QualifiedName::verbatim(["concat"]);
        assert_eq!(name.suffix(), "concat");
        assert_ne!(name, QualifiedName::single("concat"));
    }
}
