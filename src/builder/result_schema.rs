use serde::{Deserialize, Serialize};

use crate::ast::{Select, SelectItem, Table};
use crate::catalog::SourceKind;

/// Placeholder signature assigned to every derived field. True type
/// inference over the projected expressions is a known gap in this dialect;
/// the planner replaces these, and we flag rather than fix it here.
pub const PLACEHOLDER_FIELD_TYPE: &str = "BOOLEAN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultField {
    pub name: String,
    pub type_signature: String,
}

/// The sink descriptor handed to the planner once a query specification is
/// finalized. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSchema {
    pub name: String,
    pub fields: Vec<ResultField>,
    /// The primary/key field: the first projected column.
    pub key_field: Option<String>,
    pub kind: SourceKind,
    /// Serialization descriptor for the sink; defaulted until the embedding
    /// system assigns one.
    pub encoding: String,
}

impl ResultSchema {
    /// Derive the output schema from a finalized (wildcard-free) projection
    /// and its destination.
    pub fn derive(select: &Select, into: &Table) -> ResultSchema {
        let mut fields = Vec::with_capacity(select.items.len());
        for item in &select.items {
            if let SelectItem::SingleColumn { alias: Some(alias), .. } = item {
                fields.push(ResultField {
                    name: alias.clone(),
                    type_signature: PLACEHOLDER_FIELD_TYPE.to_string(),
                });
            }
        }

        let key_field = fields.first().map(|f| f.name.clone());
        ResultSchema {
            name: into.name.to_string(),
            fields,
            key_field,
            kind: SourceKind::Stream,
            encoding: String::new(),
        }
    }
}
