use crate::ast::{Expression, FrameBoundType, FrameType, NodeLocation, NullOrdering, Ordering};

#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub location: Option<NodeLocation>,
    pub partition_by: Vec<Expression>,
    pub order_by: Vec<SortItem>,
    pub frame: Option<WindowFrame>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowFrame {
    pub location: Option<NodeLocation>,
    pub frame_type: FrameType,
    pub start: FrameBound,
    pub end: Option<FrameBound>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameBound {
    pub location: Option<NodeLocation>,
    pub bound_type: FrameBoundType,
    /// Offset expression of a bounded `<n> PRECEDING` / `<n> FOLLOWING`.
    pub value: Option<Box<Expression>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortItem {
    pub location: Option<NodeLocation>,
    pub sort_key: Expression,
    pub ordering: Ordering,
    pub null_ordering: NullOrdering,
}
