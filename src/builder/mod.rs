pub mod ast_builder;
pub mod build_error;
pub mod operators;
pub mod resolution_context;
pub mod result_schema;
pub mod type_signature;
pub mod wildcard;

pub use ast_builder::*;
pub use build_error::*;
pub use resolution_context::*;
pub use result_schema::*;
pub use wildcard::*;

#[cfg(test)]
mod _tests;
