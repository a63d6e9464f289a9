use ordered_float::NotNan;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalSign {
    Positive,
    Negative,
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Null,
    Boolean(bool),
    Long(i64),
    Double(NotNan<f64>),
    String(String),
    /// `TIME '...'`, `TIMESTAMP '...'`, `DECIMAL '...'` and the generic
    /// `TYPE 'value'` constructor form all keep the literal text untouched.
    Time(String),
    Timestamp(String),
    Decimal(String),
    Generic {
        type_name: String,
        value: String,
    },
    Interval {
        value: String,
        sign: IntervalSign,
        start_field: IntervalField,
        end_field: Option<IntervalField>,
    },
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => write!(f, "NULL"),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Long(v) => write!(f, "{}", v),
            Literal::Double(v) => write!(f, "{}", v.into_inner()),
            Literal::String(s) => write!(f, "'{}'", s),
            Literal::Time(s) => write!(f, "TIME '{}'", s),
            Literal::Timestamp(s) => write!(f, "TIMESTAMP '{}'", s),
            Literal::Decimal(s) => write!(f, "DECIMAL '{}'", s),
            Literal::Generic { type_name, value } => write!(f, "{} '{}'", type_name, value),
            Literal::Interval { value, sign, start_field, end_field } => {
                let sign = match sign {
                    IntervalSign::Positive => "",
                    IntervalSign::Negative => "- ",
                };
                write!(f, "INTERVAL {}'{}' {:?}", sign, value, start_field)?;
                if let Some(end) = end_field {
                    write!(f, " TO {:?}", end)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Literal({})", self)
    }
}
