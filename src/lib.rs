//! Streaming-SQL front end: lowers grammar trees into a fully resolved,
//! typed AST ready for planning.

pub mod ast;

pub mod parse_tree;

pub mod builder;
pub use builder::{AstBuilder, BuildError, ResultSchema, ResultField};

pub mod catalog;
pub use catalog::{InMemoryMetaStore, MetaStore, SourceKind, SourceSchema};
