use crate::ast::{Expression, NodeLocation, QualifiedName};

#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    pub location: Option<NodeLocation>,
    pub distinct: bool,
    pub elements: Vec<GroupingElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupingElement {
    /// Plain `GROUP BY a, b + 1`.
    Simple {
        location: Option<NodeLocation>,
        expressions: Vec<Expression>,
    },
    Rollup {
        location: Option<NodeLocation>,
        columns: Vec<QualifiedName>,
    },
    Cube {
        location: Option<NodeLocation>,
        columns: Vec<QualifiedName>,
    },
    GroupingSets {
        location: Option<NodeLocation>,
        sets: Vec<Vec<QualifiedName>>,
    },
}
