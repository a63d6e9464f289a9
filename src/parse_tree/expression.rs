use crate::ast::NodeLocation;
use crate::parse_tree::{QualifiedNameTree, QueryTree, Token, TypeTree};

/// One variant per expression production of the grammar. Operator terminals
/// stay raw tokens; the builder maps them through the operator tables.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionTree {
    Literal(LiteralTree),
    /// An unqualified column name, resolved against the statement's sources.
    ColumnReference {
        name: Token,
    },
    /// `base.field` where `base` names a source.
    Dereference {
        location: NodeLocation,
        base: Token,
        field: Token,
    },
    FunctionCall {
        location: NodeLocation,
        name: QualifiedNameTree,
        distinct: bool,
        over: Option<WindowTree>,
        arguments: Vec<ExpressionTree>,
    },
    ArithmeticBinary {
        operator: Token,
        left: Box<ExpressionTree>,
        right: Box<ExpressionTree>,
    },
    ArithmeticUnary {
        sign: Token,
        value: Box<ExpressionTree>,
    },
    /// The `||` operator.
    Concatenation {
        location: NodeLocation,
        left: Box<ExpressionTree>,
        right: Box<ExpressionTree>,
    },
    Comparison {
        operator: Token,
        left: Box<ExpressionTree>,
        right: Box<ExpressionTree>,
    },
    LogicalBinary {
        operator: Token,
        left: Box<ExpressionTree>,
        right: Box<ExpressionTree>,
    },
    Not {
        location: NodeLocation,
        value: Box<ExpressionTree>,
    },
    Between {
        location: NodeLocation,
        negated: bool,
        value: Box<ExpressionTree>,
        lower: Box<ExpressionTree>,
        upper: Box<ExpressionTree>,
    },
    InList {
        location: NodeLocation,
        negated: bool,
        value: Box<ExpressionTree>,
        list: Vec<ExpressionTree>,
    },
    InSubquery {
        location: NodeLocation,
        negated: bool,
        value: Box<ExpressionTree>,
        query: Box<QueryTree>,
    },
    Exists {
        location: NodeLocation,
        query: Box<QueryTree>,
    },
    IsNull {
        location: NodeLocation,
        negated: bool,
        value: Box<ExpressionTree>,
    },
    IsDistinctFrom {
        location: NodeLocation,
        negated: bool,
        left: Box<ExpressionTree>,
        right: Box<ExpressionTree>,
    },
    Like {
        location: NodeLocation,
        negated: bool,
        value: Box<ExpressionTree>,
        pattern: Box<ExpressionTree>,
        escape: Option<Box<ExpressionTree>>,
    },
    SimpleCase {
        location: NodeLocation,
        operand: Box<ExpressionTree>,
        when_clauses: Vec<WhenClauseTree>,
        default: Option<Box<ExpressionTree>>,
    },
    SearchedCase {
        location: NodeLocation,
        when_clauses: Vec<WhenClauseTree>,
        default: Option<Box<ExpressionTree>>,
    },
    Cast {
        location: NodeLocation,
        expression: Box<ExpressionTree>,
        target_type: TypeTree,
        /// TRY_CAST instead of CAST.
        best_effort: bool,
    },
    Extract {
        location: NodeLocation,
        field: Token,
        expression: Box<ExpressionTree>,
    },
    /// SUBSTRING(value FROM start [FOR length]).
    Substring {
        location: NodeLocation,
        arguments: Vec<ExpressionTree>,
    },
    /// POSITION(needle IN haystack).
    Position {
        location: NodeLocation,
        arguments: Vec<ExpressionTree>,
    },
    Subscript {
        location: NodeLocation,
        base: Box<ExpressionTree>,
        index: Box<ExpressionTree>,
    },
    Row {
        location: NodeLocation,
        items: Vec<ExpressionTree>,
    },
    Array {
        location: NodeLocation,
        items: Vec<ExpressionTree>,
    },
    SubqueryExpression {
        location: NodeLocation,
        query: Box<QueryTree>,
    },
    /// CURRENT_DATE, CURRENT_TIME(p), LOCALTIMESTAMP, ...
    SpecialDateTimeFunction {
        location: NodeLocation,
        name: Token,
        precision: Option<Token>,
    },
    Parenthesized(Box<ExpressionTree>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralTree {
    Null {
        location: NodeLocation,
    },
    /// Raw token text, still quoted; the builder unquotes.
    String(Token),
    Integer(Token),
    Decimal(Token),
    Boolean(Token),
    Interval {
        location: NodeLocation,
        /// Quoted literal text.
        value: Token,
        sign: Option<Token>,
        from: Token,
        to: Option<Token>,
    },
    /// `TYPE 'value'` constructor, e.g. `TIMESTAMP '2020-01-01'`.
    TypeConstructor {
        location: NodeLocation,
        type_name: Token,
        value: Token,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhenClauseTree {
    pub location: NodeLocation,
    pub condition: ExpressionTree,
    pub result: ExpressionTree,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowTree {
    pub location: NodeLocation,
    pub partition_by: Vec<ExpressionTree>,
    pub order_by: Vec<SortItemTree>,
    pub frame: Option<WindowFrameTree>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowFrameTree {
    pub location: NodeLocation,
    pub frame_type: Token,
    pub start: FrameBoundTree,
    pub end: Option<FrameBoundTree>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBoundTree {
    Unbounded {
        location: NodeLocation,
        bound: Token,
    },
    Bounded {
        location: NodeLocation,
        bound: Token,
        value: Box<ExpressionTree>,
    },
    CurrentRow {
        location: NodeLocation,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortItemTree {
    pub location: NodeLocation,
    pub sort_key: ExpressionTree,
    pub ordering: Option<Token>,
    pub null_ordering: Option<Token>,
}
