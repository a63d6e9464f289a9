//! Token-to-variant mapping tables.
//!
//! Each function is total on the tokens the grammar can produce and fails
//! with a parsing error naming the offending text otherwise, so a
//! grammar/builder mismatch surfaces instead of being guessed around.

use crate::ast::{
    ArithmeticOp, ComparisonOp, CurrentTimeFunction, FrameBoundType, FrameType, IntervalField,
    IntervalSign, JoinType, LogicalOp, NullOrdering, Ordering,
};
use crate::builder::BuildError;
use crate::parse_tree::Token;

pub fn arithmetic_binary_operator(token: &Token) -> Result<ArithmeticOp, BuildError> {
    match token.text.as_str() {
        "+" => Ok(ArithmeticOp::Add),
        "-" => Ok(ArithmeticOp::Subtract),
        "*" => Ok(ArithmeticOp::Multiply),
        "/" => Ok(ArithmeticOp::Divide),
        "%" => Ok(ArithmeticOp::Modulus),
        other => BuildError::parsing(format!("Unsupported operator: {}", other), token.location).err(),
    }
}

pub fn comparison_operator(token: &Token) -> Result<ComparisonOp, BuildError> {
    match token.text.as_str() {
        "=" => Ok(ComparisonOp::Equal),
        "<>" | "!=" => Ok(ComparisonOp::NotEqual),
        "<" => Ok(ComparisonOp::LessThan),
        "<=" => Ok(ComparisonOp::LessThanOrEqual),
        ">" => Ok(ComparisonOp::GreaterThan),
        ">=" => Ok(ComparisonOp::GreaterThanOrEqual),
        other => BuildError::parsing(format!("Unsupported operator: {}", other), token.location).err(),
    }
}

pub fn logical_binary_operator(token: &Token) -> Result<LogicalOp, BuildError> {
    match token.text.to_uppercase().as_str() {
        "AND" => Ok(LogicalOp::And),
        "OR" => Ok(LogicalOp::Or),
        other => BuildError::parsing(format!("Unsupported operator: {}", other), token.location).err(),
    }
}

pub fn interval_field(token: &Token) -> Result<IntervalField, BuildError> {
    match token.text.to_uppercase().as_str() {
        "YEAR" => Ok(IntervalField::Year),
        "MONTH" => Ok(IntervalField::Month),
        "DAY" => Ok(IntervalField::Day),
        "HOUR" => Ok(IntervalField::Hour),
        "MINUTE" => Ok(IntervalField::Minute),
        "SECOND" => Ok(IntervalField::Second),
        other => {
            BuildError::parsing(format!("Unsupported interval field: {}", other), token.location).err()
        }
    }
}

pub fn interval_sign(token: &Token) -> Result<IntervalSign, BuildError> {
    match token.text.as_str() {
        "+" => Ok(IntervalSign::Positive),
        "-" => Ok(IntervalSign::Negative),
        other => BuildError::parsing(format!("Unsupported sign: {}", other), token.location).err(),
    }
}

pub fn frame_type(token: &Token) -> Result<FrameType, BuildError> {
    match token.text.to_uppercase().as_str() {
        "RANGE" => Ok(FrameType::Range),
        "ROWS" => Ok(FrameType::Rows),
        other => {
            BuildError::parsing(format!("Unsupported frame type: {}", other), token.location).err()
        }
    }
}

pub fn bounded_frame_bound(token: &Token) -> Result<FrameBoundType, BuildError> {
    match token.text.to_uppercase().as_str() {
        "PRECEDING" => Ok(FrameBoundType::Preceding),
        "FOLLOWING" => Ok(FrameBoundType::Following),
        other => {
            BuildError::parsing(format!("Unsupported bound type: {}", other), token.location).err()
        }
    }
}

pub fn unbounded_frame_bound(token: &Token) -> Result<FrameBoundType, BuildError> {
    match token.text.to_uppercase().as_str() {
        "PRECEDING" => Ok(FrameBoundType::UnboundedPreceding),
        "FOLLOWING" => Ok(FrameBoundType::UnboundedFollowing),
        other => {
            BuildError::parsing(format!("Unsupported bound type: {}", other), token.location).err()
        }
    }
}

pub fn sort_ordering(token: &Token) -> Result<Ordering, BuildError> {
    match token.text.to_uppercase().as_str() {
        "ASC" => Ok(Ordering::Ascending),
        "DESC" => Ok(Ordering::Descending),
        other => BuildError::parsing(format!("Unsupported ordering: {}", other), token.location).err(),
    }
}

pub fn null_ordering(token: &Token) -> Result<NullOrdering, BuildError> {
    match token.text.to_uppercase().as_str() {
        "FIRST" => Ok(NullOrdering::First),
        "LAST" => Ok(NullOrdering::Last),
        other => BuildError::parsing(format!("Unsupported ordering: {}", other), token.location).err(),
    }
}

pub fn join_type(token: &Token) -> Result<JoinType, BuildError> {
    match token.text.to_uppercase().as_str() {
        "INNER" => Ok(JoinType::Inner),
        "LEFT" => Ok(JoinType::Left),
        "RIGHT" => Ok(JoinType::Right),
        "FULL" => Ok(JoinType::Full),
        other => {
            BuildError::parsing(format!("Unsupported join type: {}", other), token.location).err()
        }
    }
}

pub fn date_time_function(token: &Token) -> Result<CurrentTimeFunction, BuildError> {
    match token.text.to_uppercase().as_str() {
        "CURRENT_DATE" => Ok(CurrentTimeFunction::Date),
        "CURRENT_TIME" => Ok(CurrentTimeFunction::Time),
        "CURRENT_TIMESTAMP" => Ok(CurrentTimeFunction::Timestamp),
        "LOCALTIME" => Ok(CurrentTimeFunction::LocalTime),
        "LOCALTIMESTAMP" => Ok(CurrentTimeFunction::LocalTimestamp),
        other => {
            BuildError::parsing(format!("Unsupported special function: {}", other), token.location)
                .err()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeLocation;

    fn tok(text: &str) -> Token {
        Token::new(text, NodeLocation::new(1, 5))
    }

    #[test]
    pub fn test_arithmetic_operators() {
        assert_eq!(arithmetic_binary_operator(&tok("+")).unwrap(), ArithmeticOp::Add);
        assert_eq!(arithmetic_binary_operator(&tok("%")).unwrap(), ArithmeticOp::Modulus);
    }

    #[test]
    pub fn test_comparison_operators_accept_both_not_equal_spellings() {
        assert_eq!(comparison_operator(&tok("<>")).unwrap(), ComparisonOp::NotEqual);
        assert_eq!(comparison_operator(&tok("!=")).unwrap(), ComparisonOp::NotEqual);
        assert_eq!(comparison_operator(&tok(">=")).unwrap(), ComparisonOp::GreaterThanOrEqual);
    }

    #[test]
    pub fn test_unknown_token_carries_text_and_position() {
        let err = arithmetic_binary_operator(&tok("**")).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported operator: ** at [1:5]");

        let err = interval_field(&tok("FORTNIGHT")).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported interval field: FORTNIGHT at [1:5]");
    }

    #[test]
    pub fn test_keyword_tables_are_case_insensitive() {
        assert_eq!(logical_binary_operator(&tok("and")).unwrap(), LogicalOp::And);
        assert_eq!(sort_ordering(&tok("desc")).unwrap(), Ordering::Descending);
        assert_eq!(join_type(&tok("left")).unwrap(), JoinType::Left);
        assert_eq!(unbounded_frame_bound(&tok("preceding")).unwrap(),
                   FrameBoundType::UnboundedPreceding);
    }
}
