use crate::ast::{
    Expression, GroupBy, NodeLocation, QualifiedName, Relation, Select, SortItem, Table,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub location: Option<NodeLocation>,
    pub with: Option<With>,
    pub body: QueryBody,
    /// Outer-level ordering. Empty when the body is a query specification:
    /// the builder folds trailing clauses into the specification so that
    /// ORDER BY references resolve against its own projection list.
    pub order_by: Vec<SortItem>,
    pub limit: Option<String>,
    pub approximate: Option<Approximate>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryBody {
    Specification(Box<QuerySpecification>),
    Union {
        location: Option<NodeLocation>,
        left: Box<QueryBody>,
        right: Box<QueryBody>,
        distinct: bool,
    },
    Intersect {
        location: Option<NodeLocation>,
        left: Box<QueryBody>,
        right: Box<QueryBody>,
        distinct: bool,
    },
    Except {
        location: Option<NodeLocation>,
        left: Box<QueryBody>,
        right: Box<QueryBody>,
        distinct: bool,
    },
    /// `TABLE name` shorthand body.
    Table(QualifiedName),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpecification {
    pub location: Option<NodeLocation>,
    pub select: Select,
    /// The sink. Always present after building; synthesized when the query
    /// has no INTO clause.
    pub into: Table,
    pub from: Relation,
    pub where_clause: Option<Expression>,
    pub group_by: Option<GroupBy>,
    pub having: Option<Expression>,
    pub order_by: Vec<SortItem>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct With {
    pub location: Option<NodeLocation>,
    pub recursive: bool,
    pub queries: Vec<WithQuery>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithQuery {
    pub location: Option<NodeLocation>,
    pub name: String,
    pub query: Query,
    pub column_aliases: Vec<String>,
}

/// `WITH CONFIDENCE <level>` approximate-query marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Approximate {
    pub location: Option<NodeLocation>,
    pub confidence: String,
}
