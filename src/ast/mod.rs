pub mod location;
pub use location::*;

pub mod qualified_name;
pub use qualified_name::*;

pub mod literal;
pub use literal::*;

pub mod operator;
pub use operator::*;

pub mod expression;
pub use expression::*;

pub mod window;
pub use window::*;

pub mod group_by;
pub use group_by::*;

pub mod select;
pub use select::*;

pub mod relation;
pub use relation::*;

pub mod query;
pub use query::*;

pub mod statement;
pub use statement::*;
