use indexmap::IndexSet;

use crate::builder::BuildError;
use crate::catalog::MetaStore;
use crate::parse_tree::RelationTree;

/// Per-query-specification name resolution state.
///
/// Built once from the FROM clause before any identifier-bearing construct
/// of the specification is visited, consulted for every unqualified column
/// reference, and discarded when the specification's visit returns. Nested
/// query specifications get a fresh context; contexts never stack.
pub enum ResolutionContext {
    /// No source in scope (expressions outside a query specification).
    Unbound,
    Single {
        alias: String,
    },
    Join {
        left_alias: String,
        right_alias: String,
        left_fields: IndexSet<String>,
        right_fields: IndexSet<String>,
        /// Field names present on both sides. Fixed at construction;
        /// schemas do not change mid-statement.
        common_fields: IndexSet<String>,
    },
}

impl ResolutionContext {
    pub fn single(alias: impl Into<String>) -> Self {
        ResolutionContext::Single { alias: alias.into().to_uppercase() }
    }

    pub fn join(
        left_alias: impl Into<String>,
        left_fields: impl IntoIterator<Item = impl Into<String>>,
        right_alias: impl Into<String>,
        right_fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let left_fields: IndexSet<String> =
            left_fields.into_iter().map(|f| f.into().to_uppercase()).collect();
        let right_fields: IndexSet<String> =
            right_fields.into_iter().map(|f| f.into().to_uppercase()).collect();
        let common_fields = left_fields.intersection(&right_fields).cloned().collect();

        ResolutionContext::Join {
            left_alias: left_alias.into().to_uppercase(),
            right_alias: right_alias.into().to_uppercase(),
            left_fields,
            right_fields,
            common_fields,
        }
    }

    /// Derive the context from a FROM-clause grammar tree: a plain scan
    /// binds a single alias, a two-way join binds both sides' aliases and
    /// field sets (fetched from the metastore).
    pub fn from_relation_tree(
        tree: &RelationTree,
        metastore: &dyn MetaStore,
    ) -> Result<Self, BuildError> {
        match unwrap_parens(tree) {
            RelationTree::Join { left, right, .. } => {
                let (left_alias, left_source) = source_binding(left)?;
                let (right_alias, right_source) = source_binding(right)?;
                let left_schema = metastore
                    .get_source(&left_source)
                    .ok_or_else(|| BuildError::unknown_source(&left_source))?;
                let right_schema = metastore
                    .get_source(&right_source)
                    .ok_or_else(|| BuildError::unknown_source(&right_source))?;
                Ok(Self::join(
                    left_alias,
                    left_schema.field_names().map(str::to_string),
                    right_alias,
                    right_schema.field_names().map(str::to_string),
                ))
            }
            other => {
                let (alias, _source) = source_binding(other)?;
                Ok(Self::single(alias))
            }
        }
    }

    pub fn is_join(&self) -> bool {
        matches!(self, ResolutionContext::Join { .. })
    }

    pub fn is_common_field(&self, name: &str) -> bool {
        match self {
            ResolutionContext::Join { common_fields, .. } => {
                common_fields.contains(&name.to_uppercase())
            }
            _ => false,
        }
    }

    /// Resolve an unqualified column name to the alias that owns it.
    ///
    /// For a join the name must fall in exactly one side's field set; a name
    /// common to both sides is ambiguous, and an unknown name is reported
    /// with the same message (preserved dialect behavior).
    pub fn resolve(&self, column_name: &str) -> Result<&str, BuildError> {
        let column_name = column_name.to_uppercase();
        match self {
            ResolutionContext::Single { alias } => Ok(alias),
            ResolutionContext::Join {
                left_alias,
                right_alias,
                left_fields,
                right_fields,
                common_fields,
            } => {
                if common_fields.contains(&column_name) {
                    BuildError::ambiguous_field(&column_name).err()
                } else if left_fields.contains(&column_name) {
                    Ok(left_alias)
                } else if right_fields.contains(&column_name) {
                    Ok(right_alias)
                } else {
                    BuildError::ambiguous_field(&column_name).err()
                }
            }
            ResolutionContext::Unbound => BuildError::ambiguous_field(&column_name).err(),
        }
    }
}

fn unwrap_parens(tree: &RelationTree) -> &RelationTree {
    match tree {
        RelationTree::Parenthesized(inner) => unwrap_parens(inner),
        other => other,
    }
}

/// Extract `(visible alias, source name)` from one side of the FROM clause.
fn source_binding(tree: &RelationTree) -> Result<(String, String), BuildError> {
    match unwrap_parens(tree) {
        RelationTree::Aliased { relation, alias, .. } => {
            let (self_alias, source) = source_binding(relation)?;
            let alias = alias.as_ref().map(|a| a.text.clone()).unwrap_or(self_alias);
            Ok((alias, source))
        }
        RelationTree::Table { name, .. } => {
            let source: Vec<&str> = name.parts.iter().map(|p| p.text.as_str()).collect();
            let suffix = source.last().map(|s| s.to_string()).unwrap_or_default();
            Ok((suffix, source.join(".").to_uppercase()))
        }
        RelationTree::Join { .. } => {
            BuildError::unsupported("Joins of more than two sources are not supported").err()
        }
        RelationTree::Subquery { .. } | RelationTree::Values { .. } => {
            BuildError::unsupported("Derived-table sources are not supported in the FROM clause")
                .err()
        }
        RelationTree::Parenthesized(_) => unreachable!("parens unwrapped above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join_ctx() -> ResolutionContext {
        ResolutionContext::join("l", ["ID", "NAME"], "r", ["ID", "AMT"])
    }

    #[test]
    pub fn test_single_source_always_resolves() {
        let ctx = ResolutionContext::single("orders");
        assert_eq!(ctx.resolve("anything").unwrap(), "ORDERS");
        assert_eq!(ctx.resolve("AMT").unwrap(), "ORDERS");
    }

    #[test]
    pub fn test_join_resolves_side_unique_fields() {
        let ctx = join_ctx();
        assert_eq!(ctx.resolve("name").unwrap(), "L");
        assert_eq!(ctx.resolve("AMT").unwrap(), "R");
    }

    #[test]
    pub fn test_common_field_is_ambiguous() {
        let err = join_ctx().resolve("id").unwrap_err();
        assert_eq!(err.to_string(), "Field ID is ambiguous.");
    }

    #[test]
    pub fn test_unknown_field_reports_same_message() {
        let err = join_ctx().resolve("missing").unwrap_err();
        assert_eq!(err.to_string(), "Field MISSING is ambiguous.");
    }

    #[test]
    pub fn test_common_fields_fixed_at_construction() {
        let ctx = join_ctx();
        assert!(ctx.is_common_field("ID"));
        assert!(!ctx.is_common_field("NAME"));
        assert!(!ctx.is_common_field("AMT"));
    }
}
