//! The metastore collaborator boundary. The builder only ever reads from
//! it: source schemas drive wildcard expansion and column resolution.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    Stream,
    Table,
}

/// An ordered field list for one named source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSchema {
    pub name: String,
    pub kind: SourceKind,
    /// Field name -> type signature, in declaration order.
    pub fields: IndexMap<String, String>,
}

impl SourceSchema {
    pub fn new(name: impl Into<String>, kind: SourceKind) -> Self {
        Self { name: name.into(), kind, fields: IndexMap::new() }
    }

    pub fn with_field(mut self, name: impl Into<String>, type_signature: impl Into<String>) -> Self {
        self.fields.insert(name.into(), type_signature.into());
        self
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

pub trait MetaStore {
    /// Look up a source by name. Names compare case-insensitively.
    fn get_source(&self, name: &str) -> Option<SourceSchema>;
}

/// A flat name -> schema map, enough for tests and embedders that manage
/// their catalog elsewhere.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMetaStore {
    sources: HashMap<String, SourceSchema>,
}

impl InMemoryMetaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_source(&mut self, schema: SourceSchema) {
        self.sources.insert(schema.name.to_uppercase(), schema);
    }
}

impl MetaStore for InMemoryMetaStore {
    fn get_source(&self, name: &str) -> Option<SourceSchema> {
        self.sources.get(&name.to_uppercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_lookup_is_case_insensitive() {
        let mut store = InMemoryMetaStore::new();
        store.put_source(
            SourceSchema::new("Orders", SourceKind::Stream)
                .with_field("ID", "BIGINT")
                .with_field("AMT", "DOUBLE"),
        );

        let schema = store.get_source("orders").expect("source not found");
        assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["ID", "AMT"]);
        assert!(store.get_source("missing").is_none());
    }
}
