//! The grammar-tree input interface.
//!
//! An external grammar/lexer component produces these values, one node per
//! grammar production, each carrying its child nodes, token payloads and
//! source positions. This crate only consumes them; it does not define or
//! validate the grammar itself.

pub mod token;
pub use token::*;

pub mod type_tree;
pub use type_tree::*;

pub mod expression;
pub use expression::*;

pub mod relation;
pub use relation::*;

pub mod query;
pub use query::*;

pub mod statement;
pub use statement::*;
