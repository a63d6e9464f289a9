use crate::ast::{Expression, NodeLocation, QualifiedName};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub location: Option<NodeLocation>,
    pub distinct: bool,
    pub items: Vec<SelectItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
    /// `*` or `prefix.*`. Never survives query-specification construction:
    /// the wildcard expander rewrites it into `SingleColumn` items.
    AllColumns {
        location: Option<NodeLocation>,
        prefix: Option<QualifiedName>,
    },
    SingleColumn {
        location: Option<NodeLocation>,
        expression: Expression,
        alias: Option<String>,
    },
}

impl SelectItem {
    pub fn alias(&self) -> Option<&str> {
        match self {
            SelectItem::SingleColumn { alias, .. } => alias.as_deref(),
            SelectItem::AllColumns { .. } => None,
        }
    }
}
