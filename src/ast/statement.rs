use indexmap::IndexMap;

use crate::ast::{NodeLocation, QualifiedName, Query};

/// An ordered list of independently built top-level statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Statements {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub location: Option<NodeLocation>,
    pub kind: StatementKind,
}

impl Statement {
    pub fn new(location: Option<NodeLocation>, kind: StatementKind) -> Self {
        Self { location, kind }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    Query(Box<Query>),
    CreateTable {
        name: QualifiedName,
        elements: Vec<TableElement>,
        if_not_exists: bool,
        /// WITH (...) properties in declaration order; keys keep their
        /// original case.
        properties: IndexMap<String, crate::ast::Expression>,
    },
    DropTable {
        name: QualifiedName,
        if_exists: bool,
    },
    ShowTables {
        schema: Option<QualifiedName>,
        like_pattern: Option<String>,
    },
    ShowTopics,
    ShowQueries,
    ShowColumns {
        table: QualifiedName,
    },
    TerminateQuery {
        query_name: QualifiedName,
    },
    PrintTopic {
        topic: QualifiedName,
        interval: Option<i64>,
    },
}

/// One column declaration of a CREATE TABLE: name plus serialized type
/// signature.
#[derive(Debug, Clone, PartialEq)]
pub struct TableElement {
    pub location: Option<NodeLocation>,
    pub name: String,
    pub type_signature: String,
}
