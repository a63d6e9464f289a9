use crate::ast::{
    Expression, ExpressionKind, QualifiedName, Relation, RelationKind, SelectItem, Table,
};
use crate::builder::BuildError;
use crate::catalog::{MetaStore, SourceSchema};

/// Rewrites `*` / `alias.*` items into explicit per-field columns.
///
/// Expansion resolves purely against the FROM relation: a `alias.*` prefix
/// is not consulted (preserved dialect behavior). On a join every produced
/// alias carries its side prefix, colliding or not, so the naming scheme
/// downstream sees is uniform.
pub struct WildcardExpander;

impl WildcardExpander {
    pub fn expand(
        items: Vec<SelectItem>,
        from: &Relation,
        metastore: &dyn MetaStore,
    ) -> Result<Vec<SelectItem>, BuildError> {
        let mut expanded = Vec::with_capacity(items.len());
        for item in items {
            match item {
                SelectItem::AllColumns { location, .. } => match &from.kind {
                    RelationKind::Join { left, right, .. } => {
                        let (left_alias, left_schema) = side_schema(left, metastore)?;
                        let (right_alias, right_schema) = side_schema(right, metastore)?;
                        push_join_side(&mut expanded, location, &left_alias, &left_schema);
                        push_join_side(&mut expanded, location, &right_alias, &right_schema);
                    }
                    _ => {
                        let (_alias, schema) = side_schema(from, metastore)?;
                        for field in schema.field_names() {
                            let field = field.to_uppercase();
                            let reference = Expression::new(
                                location,
                                ExpressionKind::QualifiedNameReference(QualifiedName::of([
                                    schema.name.as_str(),
                                    field.as_str(),
                                ])),
                            );
                            expanded.push(SelectItem::SingleColumn {
                                location,
                                expression: reference,
                                alias: Some(field),
                            });
                        }
                    }
                },
                single @ SelectItem::SingleColumn { .. } => expanded.push(single),
            }
        }
        Ok(expanded)
    }
}

fn push_join_side(
    expanded: &mut Vec<SelectItem>,
    location: Option<crate::ast::NodeLocation>,
    alias: &str,
    schema: &SourceSchema,
) {
    for field in schema.field_names() {
        let reference = Expression::new(
            location,
            ExpressionKind::QualifiedNameReference(QualifiedName::of([alias, field])),
        );
        expanded.push(SelectItem::SingleColumn {
            location,
            expression: reference,
            alias: Some(format!("{}_{}", alias, field.to_uppercase())),
        });
    }
}

/// Unwrap one aliased scan down to `(alias, schema)`.
fn side_schema(
    relation: &Relation,
    metastore: &dyn MetaStore,
) -> Result<(String, SourceSchema), BuildError> {
    match &relation.kind {
        RelationKind::Aliased { relation: inner, alias, .. } => match &inner.kind {
            RelationKind::Table(Table { name, .. }) => {
                let schema = metastore
                    .get_source(name.suffix())
                    .ok_or_else(|| BuildError::unknown_source(name.suffix()))?;
                Ok((alias.clone(), schema))
            }
            _ => BuildError::unsupported(
                "Wildcard expansion requires a named source on each side of the FROM clause",
            )
            .err(),
        },
        _ => BuildError::unsupported(
            "Wildcard expansion requires a named source on each side of the FROM clause",
        )
        .err(),
    }
}
