//! Canonical type-signature serialization.
//!
//! The signature string is the type representation the planner consumes:
//! `BASE(params)`, `ARRAY(T)`, `MAP(K,V)`, `ROW(name1 type1,...)` —
//! comma-joined, no whitespace around separators, recursive.

use crate::builder::BuildError;
use crate::parse_tree::{TypeParameterTree, TypeTree};

pub fn serialize_type(tree: &TypeTree) -> Result<String, BuildError> {
    match tree {
        TypeTree::Base { name, parameters } => {
            let mut signature = name.text.clone();
            if !parameters.is_empty() {
                let params = parameters
                    .iter()
                    .map(serialize_parameter)
                    .collect::<Result<Vec<_>, _>>()?
                    .join(",");
                signature.push('(');
                signature.push_str(&params);
                signature.push(')');
            }
            Ok(signature)
        }
        TypeTree::Array(element) => Ok(format!("ARRAY({})", serialize_type(element)?)),
        TypeTree::Map(key, value) => {
            Ok(format!("MAP({},{})", serialize_type(key)?, serialize_type(value)?))
        }
        TypeTree::Row { fields } => {
            let mut signature = String::from("ROW(");
            for (i, (name, field_type)) in fields.iter().enumerate() {
                if i != 0 {
                    signature.push(',');
                }
                signature.push_str(&name.text);
                signature.push(' ');
                signature.push_str(&serialize_type(field_type)?);
            }
            signature.push(')');
            Ok(signature)
        }
    }
}

fn serialize_parameter(parameter: &TypeParameterTree) -> Result<String, BuildError> {
    match parameter {
        TypeParameterTree::Integer(token) => Ok(token.text.clone()),
        TypeParameterTree::Type(tree) => serialize_type(tree),
    }
}
