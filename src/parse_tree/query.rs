use crate::ast::NodeLocation;
use crate::parse_tree::{
    ExpressionTree, IdentifierTree, QualifiedNameTree, RelationTree, SortItemTree, Token,
};

/// `query: with? queryTerm (ORDER BY ...)? (LIMIT ...)? (WITH CONFIDENCE ...)?`
#[derive(Debug, Clone, PartialEq)]
pub struct QueryTree {
    pub location: NodeLocation,
    pub with: Option<WithTree>,
    pub body: QueryTermTree,
    pub order_by: Vec<SortItemTree>,
    pub limit: Option<Token>,
    pub confidence: Option<Token>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryTermTree {
    Specification(QuerySpecificationTree),
    SetOperation {
        location: NodeLocation,
        operator: Token,
        /// DISTINCT/ALL quantifier keyword, when written.
        quantifier: Option<Token>,
        left: Box<QueryTermTree>,
        right: Box<QueryTermTree>,
    },
    /// `TABLE name` shorthand.
    Table {
        location: NodeLocation,
        name: QualifiedNameTree,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpecificationTree {
    pub location: NodeLocation,
    /// DISTINCT/ALL keyword after SELECT.
    pub quantifier: Option<Token>,
    pub select_location: NodeLocation,
    pub select_items: Vec<SelectItemTree>,
    pub into: Option<QualifiedNameTree>,
    pub from: RelationTree,
    pub where_clause: Option<ExpressionTree>,
    pub group_by: Option<GroupByTree>,
    pub having: Option<ExpressionTree>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectItemTree {
    All {
        location: NodeLocation,
        prefix: Option<QualifiedNameTree>,
    },
    Single {
        location: NodeLocation,
        expression: ExpressionTree,
        alias: Option<IdentifierTree>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupByTree {
    pub location: NodeLocation,
    pub quantifier: Option<Token>,
    pub elements: Vec<GroupingElementTree>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupingElementTree {
    Single {
        location: NodeLocation,
        expressions: Vec<ExpressionTree>,
    },
    Rollup {
        location: NodeLocation,
        columns: Vec<QualifiedNameTree>,
    },
    Cube {
        location: NodeLocation,
        columns: Vec<QualifiedNameTree>,
    },
    MultipleSets {
        location: NodeLocation,
        sets: Vec<Vec<QualifiedNameTree>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithTree {
    pub location: NodeLocation,
    pub recursive: bool,
    pub queries: Vec<NamedQueryTree>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedQueryTree {
    pub location: NodeLocation,
    pub name: IdentifierTree,
    pub column_aliases: Vec<IdentifierTree>,
    pub query: Box<QueryTree>,
}
