use crate::ast::{
    ArithmeticOp, ComparisonOp, CurrentTimeFunction, IntervalField, Literal, LogicalOp,
    NodeLocation, QualifiedName, Query, Window,
};

/// A resolved scalar or boolean expression. Nodes own their children
/// exclusively and are never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub location: Option<NodeLocation>,
    pub kind: ExpressionKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionKind {
    Literal(Literal),
    /// A reference to a source or column by qualified name.
    QualifiedNameReference(QualifiedName),
    /// `base.field` — field access on a named source.
    Dereference {
        base: Box<Expression>,
        field: String,
    },
    FunctionCall {
        name: QualifiedName,
        window: Option<Box<Window>>,
        distinct: bool,
        arguments: Vec<Expression>,
    },
    /// `IF(condition, then [, otherwise])`.
    If {
        condition: Box<Expression>,
        then: Box<Expression>,
        otherwise: Option<Box<Expression>>,
    },
    NullIf {
        first: Box<Expression>,
        second: Box<Expression>,
    },
    Coalesce(Vec<Expression>),
    /// Best-effort evaluation: yields NULL instead of failing.
    Try(Box<Expression>),
    Cast {
        expression: Box<Expression>,
        /// Serialized type signature, e.g. `ARRAY(INTEGER)`.
        target_type: String,
        best_effort: bool,
    },
    ArithmeticBinary {
        operator: ArithmeticOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Negative(Box<Expression>),
    Positive(Box<Expression>),
    Comparison {
        operator: ComparisonOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    LogicalBinary {
        operator: LogicalOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Not(Box<Expression>),
    Between {
        value: Box<Expression>,
        min: Box<Expression>,
        max: Box<Expression>,
    },
    InList {
        value: Box<Expression>,
        list: Vec<Expression>,
    },
    InSubquery {
        value: Box<Expression>,
        subquery: Box<Query>,
    },
    Exists(Box<Query>),
    Subquery(Box<Query>),
    IsNull(Box<Expression>),
    IsNotNull(Box<Expression>),
    Like {
        value: Box<Expression>,
        pattern: Box<Expression>,
        escape: Option<Box<Expression>>,
    },
    SimpleCase {
        operand: Box<Expression>,
        when_clauses: Vec<WhenClause>,
        default: Option<Box<Expression>>,
    },
    SearchedCase {
        when_clauses: Vec<WhenClause>,
        default: Option<Box<Expression>>,
    },
    Subscript {
        base: Box<Expression>,
        index: Box<Expression>,
    },
    Row(Vec<Expression>),
    Array(Vec<Expression>),
    Extract {
        expression: Box<Expression>,
        field: IntervalField,
    },
    CurrentTime {
        function: CurrentTimeFunction,
        precision: Option<u32>,
    },
}

impl Expression {
    pub fn new(location: Option<NodeLocation>, kind: ExpressionKind) -> Self {
        Self { location, kind }
    }

    /// Unary minus. Dedicated constructor so downstream evaluation never
    /// sees a generic unary node.
    pub fn negative(location: Option<NodeLocation>, value: Expression) -> Self {
        Self::new(location, ExpressionKind::Negative(Box::new(value)))
    }

    /// Unary plus.
    pub fn positive(location: Option<NodeLocation>, value: Expression) -> Self {
        Self::new(location, ExpressionKind::Positive(Box::new(value)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhenClause {
    pub location: Option<NodeLocation>,
    pub condition: Expression,
    pub result: Expression,
}
