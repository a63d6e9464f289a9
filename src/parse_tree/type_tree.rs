use crate::parse_tree::{IdentifierTree, Token};

/// A parsed type expression, serialized by the builder into a canonical
/// signature string.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeTree {
    /// `VARCHAR`, `DECIMAL(10,2)`, ... — base name plus optional parameters.
    Base {
        name: Token,
        parameters: Vec<TypeParameterTree>,
    },
    Array(Box<TypeTree>),
    Map(Box<TypeTree>, Box<TypeTree>),
    Row {
        fields: Vec<(IdentifierTree, TypeTree)>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeParameterTree {
    Integer(Token),
    Type(Box<TypeTree>),
}
