use crate::ast::NodeLocation;
use crate::parse_tree::{
    ExpressionTree, IdentifierTree, LiteralTree, QualifiedNameTree, QueryTree, Token, TypeTree,
};

#[derive(Debug, Clone, PartialEq)]
pub struct StatementsTree {
    pub statements: Vec<StatementTree>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementTree {
    Query(Box<QueryTree>),
    CreateTable {
        location: NodeLocation,
        name: QualifiedNameTree,
        elements: Vec<TableElementTree>,
        if_not_exists: bool,
        properties: Vec<TablePropertyTree>,
    },
    DropTable {
        location: NodeLocation,
        name: QualifiedNameTree,
        if_exists: bool,
    },
    ShowTables {
        location: NodeLocation,
        schema: Option<QualifiedNameTree>,
        /// Raw (still quoted) LIKE pattern token.
        like_pattern: Option<Token>,
    },
    ShowTopics {
        location: NodeLocation,
    },
    ShowQueries {
        location: NodeLocation,
    },
    ShowColumns {
        location: NodeLocation,
        table: QualifiedNameTree,
    },
    TerminateQuery {
        location: NodeLocation,
        query_name: QualifiedNameTree,
    },
    PrintTopic {
        location: NodeLocation,
        topic: QualifiedNameTree,
        /// Sampling interval; the dialect only accepts an integer literal.
        interval: Option<LiteralTree>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableElementTree {
    pub location: NodeLocation,
    pub name: IdentifierTree,
    pub type_signature: TypeTree,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TablePropertyTree {
    pub name: IdentifierTree,
    pub value: ExpressionTree,
}
