use crate::ast::{Expression, JoinType, NodeLocation, QualifiedName, Query};

/// A named source. Doubles as the sink descriptor of the INTO clause, where
/// `ephemeral` marks a synthesized destination whose results go to the
/// console instead of a durable stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub location: Option<NodeLocation>,
    pub name: QualifiedName,
    pub ephemeral: bool,
}

impl Table {
    pub fn new(location: Option<NodeLocation>, name: QualifiedName) -> Self {
        Self { location, name, ephemeral: false }
    }

    pub fn ephemeral(name: QualifiedName) -> Self {
        Self { location: None, name, ephemeral: true }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub location: Option<NodeLocation>,
    pub kind: RelationKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RelationKind {
    Table(Table),
    /// A relation bound to a visible name. The alias is always stored
    /// upper-cased.
    Aliased {
        relation: Box<Relation>,
        alias: String,
        column_aliases: Vec<String>,
    },
    Join {
        join_type: JoinType,
        left: Box<Relation>,
        right: Box<Relation>,
        criteria: Option<JoinCriteria>,
    },
    /// A derived-table source. The grammar produces it, but resolution
    /// rejects derived tables in the FROM clause before relation building,
    /// so the builder never emits this variant today. Kept for the planner,
    /// which accepts the full relation shape.
    Subquery(Box<Query>),
    /// Inline `VALUES (...)` rows. Same status as `Subquery`: modeled,
    /// currently unreachable through the builder.
    Values(Vec<Expression>),
}

impl Relation {
    pub fn new(location: Option<NodeLocation>, kind: RelationKind) -> Self {
        Self { location, kind }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JoinCriteria {
    On(Expression),
    Using(Vec<String>),
    /// Common columns are resolved downstream, not here.
    Natural,
}
