use crate::ast::NodeLocation;
use crate::parse_tree::{ExpressionTree, IdentifierTree, QualifiedNameTree, QueryTree, Token};

#[derive(Debug, Clone, PartialEq)]
pub enum RelationTree {
    Table {
        location: NodeLocation,
        name: QualifiedNameTree,
    },
    /// A relation primary with an optional alias child. With no alias the
    /// builder self-aliases from the underlying table name.
    Aliased {
        location: NodeLocation,
        relation: Box<RelationTree>,
        alias: Option<IdentifierTree>,
        column_aliases: Vec<IdentifierTree>,
    },
    Join {
        location: NodeLocation,
        left: Box<RelationTree>,
        right: Box<RelationTree>,
        variant: JoinVariantTree,
    },
    Subquery {
        location: NodeLocation,
        query: Box<QueryTree>,
    },
    Values {
        location: NodeLocation,
        rows: Vec<ExpressionTree>,
    },
    Parenthesized(Box<RelationTree>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum JoinVariantTree {
    Cross,
    Natural {
        join_type: Option<Token>,
    },
    /// LEFT/RIGHT/FULL/absent join-type keyword plus ON or USING criteria.
    /// The grammar permits a criteria-less qualified join; the builder
    /// rejects it.
    Qualified {
        join_type: Option<Token>,
        criteria: Option<JoinCriteriaTree>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum JoinCriteriaTree {
    On(ExpressionTree),
    Using(Vec<IdentifierTree>),
}
