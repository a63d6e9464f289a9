use regex::Regex;

use crate::ast::{
    Expression, ExpressionKind, NodeLocation, Query, QueryBody, QuerySpecification, SelectItem,
    StatementKind,
};
use crate::builder::{combine_results, AstBuilder, BuildError};
use crate::catalog::{InMemoryMetaStore, SourceKind, SourceSchema};
use crate::parse_tree::{
    ExpressionTree, IdentifierTree, JoinCriteriaTree, JoinVariantTree, LiteralTree,
    QualifiedNameTree, QuerySpecificationTree, QueryTermTree, QueryTree, RelationTree,
    SelectItemTree, SortItemTree, StatementTree, Token, TypeTree, WindowTree,
};

fn loc() -> NodeLocation {
    NodeLocation::new(1, 1)
}

fn tok(text: &str) -> Token {
    Token::new(text, loc())
}

fn id(text: &str) -> IdentifierTree {
    IdentifierTree::new(text, loc())
}

fn qn(parts: &[&str]) -> QualifiedNameTree {
    QualifiedNameTree::new(parts.iter().map(|p| id(p)).collect())
}

fn column(name: &str) -> ExpressionTree {
    ExpressionTree::ColumnReference { name: tok(name) }
}

fn deref(base: &str, field: &str) -> ExpressionTree {
    ExpressionTree::Dereference { location: loc(), base: tok(base), field: tok(field) }
}

fn item(expression: ExpressionTree) -> SelectItemTree {
    SelectItemTree::Single { location: loc(), expression, alias: None }
}

fn aliased_item(expression: ExpressionTree, alias: IdentifierTree) -> SelectItemTree {
    SelectItemTree::Single { location: loc(), expression, alias: Some(alias) }
}

fn scan(table: &str) -> RelationTree {
    RelationTree::Aliased {
        location: loc(),
        relation: Box::new(RelationTree::Table { location: loc(), name: qn(&[table]) }),
        alias: None,
        column_aliases: vec![],
    }
}

fn join_on_id() -> RelationTree {
    RelationTree::Join {
        location: loc(),
        left: Box::new(scan("L")),
        right: Box::new(scan("R")),
        variant: JoinVariantTree::Qualified {
            join_type: None,
            criteria: Some(JoinCriteriaTree::On(ExpressionTree::Comparison {
                operator: tok("="),
                left: Box::new(deref("L", "ID")),
                right: Box::new(deref("R", "ID")),
            })),
        },
    }
}

fn spec(select_items: Vec<SelectItemTree>, from: RelationTree) -> QuerySpecificationTree {
    QuerySpecificationTree {
        location: loc(),
        quantifier: None,
        select_location: loc(),
        select_items,
        into: None,
        from,
        where_clause: None,
        group_by: None,
        having: None,
    }
}

fn query(specification: QuerySpecificationTree) -> QueryTree {
    QueryTree {
        location: loc(),
        with: None,
        body: QueryTermTree::Specification(specification),
        order_by: vec![],
        limit: None,
        confidence: None,
    }
}

fn store() -> InMemoryMetaStore {
    let mut store = InMemoryMetaStore::new();
    store.put_source(
        SourceSchema::new("ORDERS", SourceKind::Stream)
            .with_field("ID", "BIGINT")
            .with_field("AMT", "DOUBLE")
            .with_field("TS", "BIGINT"),
    );
    store.put_source(
        SourceSchema::new("L", SourceKind::Stream)
            .with_field("ID", "BIGINT")
            .with_field("NAME", "VARCHAR"),
    );
    store.put_source(
        SourceSchema::new("R", SourceKind::Stream)
            .with_field("ID", "BIGINT")
            .with_field("AMT", "DOUBLE"),
    );
    store
}

fn build(tree: QueryTree) -> Result<Query, BuildError> {
    let store = store();
    let mut builder = AstBuilder::new(&store);
    builder.build_query(&tree)
}

fn built_spec(query: Query) -> QuerySpecification {
    match query.body {
        QueryBody::Specification(specification) => *specification,
        other => panic!("expected query specification, got {:?}", other),
    }
}

fn aliases(specification: &QuerySpecification) -> Vec<&str> {
    specification.select.items.iter().map(|i| i.alias().unwrap()).collect()
}

/// The alias owning a resolved column reference.
fn owner(expression: &Expression) -> String {
    match &expression.kind {
        ExpressionKind::Dereference { base, .. } => match &base.kind {
            ExpressionKind::QualifiedNameReference(name) => name.to_string(),
            other => panic!("expected name reference, got {:?}", other),
        },
        other => panic!("expected dereference, got {:?}", other),
    }
}

#[test]
pub fn test_projection_preserves_item_order_and_explicit_aliases() {
    let tree = query(spec(
        vec![item(column("id")), aliased_item(column("amt"), id("total"))],
        scan("ORDERS"),
    ));
    let specification = built_spec(build(tree).unwrap());

    assert_eq!(aliases(&specification), vec!["ID", "TOTAL"]);
    match &specification.select.items[0] {
        SelectItem::SingleColumn { expression, .. } => match &expression.kind {
            ExpressionKind::Dereference { base, field } => {
                assert_eq!(field, "ID");
                match &base.kind {
                    ExpressionKind::QualifiedNameReference(name) => {
                        assert_eq!(name.to_string(), "ORDERS");
                    }
                    other => panic!("expected name reference, got {:?}", other),
                }
            }
            other => panic!("expected dereference, got {:?}", other),
        },
        other => panic!("expected single column, got {:?}", other),
    }
}

#[test]
pub fn test_quoted_alias_keeps_its_case() {
    let tree = query(spec(
        vec![aliased_item(column("id"), IdentifierTree::quoted("myId", loc()))],
        scan("ORDERS"),
    ));
    let specification = built_spec(build(tree).unwrap());
    assert_eq!(aliases(&specification), vec!["myId"]);
}

#[test]
pub fn test_computed_items_get_positional_aliases() {
    let tree = query(spec(
        vec![
            item(column("id")),
            item(ExpressionTree::ArithmeticBinary {
                operator: tok("+"),
                left: Box::new(column("amt")),
                right: Box::new(ExpressionTree::Literal(LiteralTree::Integer(tok("1")))),
            }),
        ],
        scan("ORDERS"),
    ));
    let specification = built_spec(build(tree).unwrap());
    assert_eq!(aliases(&specification), vec!["ID", "KSQL_COL_1"]);
}

#[test]
pub fn test_join_wildcard_expands_left_side_first_with_prefixed_aliases() {
    let tree = query(spec(
        vec![SelectItemTree::All { location: loc(), prefix: None }],
        join_on_id(),
    ));
    let specification = built_spec(build(tree).unwrap());
    assert_eq!(aliases(&specification), vec!["L_ID", "L_NAME", "R_ID", "R_AMT"]);
}

#[test]
pub fn test_unqualified_column_resolves_against_owning_join_side() {
    let tree = query(spec(vec![item(column("name")), item(column("amt"))], join_on_id()));
    let specification = built_spec(build(tree).unwrap());

    let owners: Vec<String> = specification
        .select
        .items
        .iter()
        .map(|i| match i {
            SelectItem::SingleColumn { expression, .. } => match &expression.kind {
                ExpressionKind::Dereference { base, .. } => match &base.kind {
                    ExpressionKind::QualifiedNameReference(name) => name.to_string(),
                    other => panic!("expected name reference, got {:?}", other),
                },
                other => panic!("expected dereference, got {:?}", other),
            },
            other => panic!("expected single column, got {:?}", other),
        })
        .collect();
    assert_eq!(owners, vec!["L", "R"]);
}

#[test]
pub fn test_column_common_to_both_join_sides_is_ambiguous() {
    let tree = query(spec(vec![item(column("id"))], join_on_id()));
    let err = build(tree).unwrap_err();
    assert_eq!(err.to_string(), "Field ID is ambiguous.");
}

#[test]
pub fn test_column_known_to_neither_side_reports_same_message() {
    let tree = query(spec(vec![item(column("missing"))], join_on_id()));
    let err = build(tree).unwrap_err();
    assert_eq!(err.to_string(), "Field MISSING is ambiguous.");
}

#[test]
pub fn test_common_field_dereference_gets_side_prefixed_alias() {
    let tree = query(spec(vec![item(deref("L", "id")), item(deref("L", "name"))], join_on_id()));
    let specification = built_spec(build(tree).unwrap());
    assert_eq!(aliases(&specification), vec!["L_ID", "NAME"]);
}

#[test]
pub fn test_missing_into_synthesizes_console_sink_and_one_notice() {
    let store = store();
    let mut builder = AstBuilder::new(&store);
    let built = builder.build_query(&query(spec(vec![item(column("id"))], scan("ORDERS"))));
    let specification = built_spec(built.unwrap());

    assert!(specification.into.ephemeral);
    let pattern = Regex::new(r"^KSQL_Stream_\d+$").unwrap();
    assert!(
        pattern.is_match(&specification.into.name.to_string()),
        "unexpected sink name: {}",
        specification.into.name
    );
    assert_eq!(builder.notices.len(), 1);
    assert_eq!(
        builder.notices[0],
        "No INTO clause was specified in the query. Writing the results into the console!"
    );
}

#[test]
pub fn test_explicit_into_is_kept_verbatim_and_emits_no_notice() {
    let store = store();
    let mut builder = AstBuilder::new(&store);
    let mut tree = spec(vec![item(column("id"))], scan("ORDERS"));
    tree.into = Some(qn(&["out_stream"]));
    let specification = built_spec(builder.build_query(&query(tree)).unwrap());

    assert!(!specification.into.ephemeral);
    assert_eq!(specification.into.name.to_string(), "OUT_STREAM");
    assert!(builder.notices.is_empty());
}

#[test]
pub fn test_trailing_order_by_and_limit_fold_into_the_specification() {
    let mut tree = query(spec(vec![item(column("id"))], scan("ORDERS")));
    tree.order_by = vec![SortItemTree {
        location: loc(),
        sort_key: column("amt"),
        ordering: None,
        null_ordering: None,
    }];
    tree.limit = Some(tok("10"));

    let built = build(tree).unwrap();
    assert!(built.order_by.is_empty());
    assert_eq!(built.limit, None);

    let specification = built_spec(built);
    assert_eq!(specification.order_by.len(), 1);
    assert_eq!(specification.limit.as_deref(), Some("10"));
    assert_eq!(specification.order_by[0].ordering, crate::ast::Ordering::Ascending);
    assert_eq!(specification.order_by[0].null_ordering, crate::ast::NullOrdering::Undefined);
}

fn set_operation(operator: &str, quantifier: Option<Token>) -> QueryTree {
    QueryTree {
        location: loc(),
        with: None,
        body: QueryTermTree::SetOperation {
            location: loc(),
            operator: tok(operator),
            quantifier,
            left: Box::new(QueryTermTree::Specification(spec(
                vec![item(column("id"))],
                scan("L"),
            ))),
            right: Box::new(QueryTermTree::Specification(spec(
                vec![item(column("id"))],
                scan("ORDERS"),
            ))),
        },
        order_by: vec![],
        limit: Some(tok("5")),
        confidence: None,
    }
}

#[test]
pub fn test_union_defaults_to_distinct_and_keeps_outer_limit() {
    let built = build(set_operation("UNION", None)).unwrap();
    assert_eq!(built.limit.as_deref(), Some("5"));
    match built.body {
        QueryBody::Union { distinct, .. } => assert!(distinct),
        other => panic!("expected union, got {:?}", other),
    }
}

#[test]
pub fn test_intersect_all_clears_the_distinct_flag() {
    let built = build(set_operation("INTERSECT", Some(tok("ALL")))).unwrap();
    match built.body {
        QueryBody::Intersect { distinct, .. } => assert!(!distinct),
        other => panic!("expected intersect, got {:?}", other),
    }
}

#[test]
pub fn test_except_is_built_with_both_sides() {
    let built = build(set_operation("EXCEPT", Some(tok("DISTINCT")))).unwrap();
    match built.body {
        QueryBody::Except { left, right, distinct, .. } => {
            assert!(distinct);
            assert!(matches!(*left, QueryBody::Specification(_)));
            assert!(matches!(*right, QueryBody::Specification(_)));
        }
        other => panic!("expected except, got {:?}", other),
    }
}

#[test]
pub fn test_unknown_set_operator_is_rejected_with_its_text() {
    let err = build(set_operation("MERGE", None)).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported set operation: MERGE at [1:1]");
}

#[test]
pub fn test_concatenation_desugars_to_concat_call() {
    let tree = query(spec(
        vec![item(ExpressionTree::Concatenation {
            location: loc(),
            left: Box::new(column("name")),
            right: Box::new(ExpressionTree::Literal(LiteralTree::String(tok("'!'")))),
        })],
        scan("L"),
    ));
    let specification = built_spec(build(tree).unwrap());
    match &specification.select.items[0] {
        SelectItem::SingleColumn { expression, .. } => match &expression.kind {
            ExpressionKind::FunctionCall { name, arguments, .. } => {
                assert_eq!(name.suffix(), "concat");
                assert_eq!(arguments.len(), 2);
            }
            other => panic!("expected function call, got {:?}", other),
        },
        other => panic!("expected single column, got {:?}", other),
    }
}

#[test]
pub fn test_position_reverses_arguments_into_strpos() {
    let tree = query(spec(
        vec![item(ExpressionTree::Position {
            location: loc(),
            arguments: vec![
                ExpressionTree::Literal(LiteralTree::String(tok("'a'"))),
                column("name"),
            ],
        })],
        scan("L"),
    ));
    let specification = built_spec(build(tree).unwrap());
    match &specification.select.items[0] {
        SelectItem::SingleColumn { expression, .. } => match &expression.kind {
            ExpressionKind::FunctionCall { name, arguments, .. } => {
                assert_eq!(name.suffix(), "strpos");
                // haystack first, needle second
                assert!(matches!(arguments[0].kind, ExpressionKind::Dereference { .. }));
                assert!(matches!(
                    arguments[1].kind,
                    ExpressionKind::Literal(crate::ast::Literal::String(_))
                ));
            }
            other => panic!("expected function call, got {:?}", other),
        },
        other => panic!("expected single column, got {:?}", other),
    }
}

fn call(name: &str, arguments: Vec<ExpressionTree>) -> ExpressionTree {
    ExpressionTree::FunctionCall {
        location: loc(),
        name: qn(&[name]),
        distinct: false,
        over: None,
        arguments,
    }
}

#[test]
pub fn test_if_requires_two_or_three_arguments() {
    let err = build(query(spec(vec![item(call("IF", vec![column("id")]))], scan("ORDERS"))))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid number of arguments for 'if' function at [1:1]"
    );

    let ok = build(query(spec(
        vec![item(call(
            "IF",
            vec![
                ExpressionTree::Literal(LiteralTree::Boolean(tok("true"))),
                column("id"),
                column("amt"),
            ],
        ))],
        scan("ORDERS"),
    )));
    let specification = built_spec(ok.unwrap());
    match &specification.select.items[0] {
        SelectItem::SingleColumn { expression, .. } => {
            assert!(matches!(expression.kind, ExpressionKind::If { .. }));
        }
        other => panic!("expected single column, got {:?}", other),
    }
}

#[test]
pub fn test_nullif_requires_exactly_two_arguments() {
    let err = build(query(spec(
        vec![item(call("NULLIF", vec![column("id"), column("amt"), column("id")]))],
        scan("ORDERS"),
    )))
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid number of arguments for 'nullif' function at [1:1]"
    );
}

#[test]
pub fn test_try_rejects_distinct() {
    let tree = query(spec(
        vec![item(ExpressionTree::FunctionCall {
            location: loc(),
            name: qn(&["TRY"]),
            distinct: true,
            over: None,
            arguments: vec![column("id")],
        })],
        scan("ORDERS"),
    ));
    let err = build(tree).unwrap_err();
    assert_eq!(err.to_string(), "DISTINCT not valid for 'try' function at [1:1]");
}

#[test]
pub fn test_cast_serializes_the_target_type() {
    let tree = query(spec(
        vec![item(ExpressionTree::Cast {
            location: loc(),
            expression: Box::new(column("id")),
            target_type: TypeTree::Array(Box::new(TypeTree::Base {
                name: tok("INTEGER"),
                parameters: vec![],
            })),
            best_effort: false,
        })],
        scan("ORDERS"),
    ));
    let specification = built_spec(build(tree).unwrap());
    match &specification.select.items[0] {
        SelectItem::SingleColumn { expression, .. } => match &expression.kind {
            ExpressionKind::Cast { target_type, best_effort, .. } => {
                assert_eq!(target_type, "ARRAY(INTEGER)");
                assert!(!best_effort);
            }
            other => panic!("expected cast, got {:?}", other),
        },
        other => panic!("expected single column, got {:?}", other),
    }
}

#[test]
pub fn test_qualified_join_without_criteria_is_rejected() {
    let tree = query(spec(
        vec![item(column("name"))],
        RelationTree::Join {
            location: loc(),
            left: Box::new(scan("L")),
            right: Box::new(scan("R")),
            variant: JoinVariantTree::Qualified { join_type: None, criteria: None },
        },
    ));
    let err = build(tree).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported join criteria");
}

#[test]
pub fn test_result_schema_mirrors_the_finalized_projection() {
    let store = store();
    let mut builder = AstBuilder::new(&store);
    let mut tree = spec(
        vec![item(column("id")), aliased_item(column("amt"), id("total"))],
        scan("ORDERS"),
    );
    tree.into = Some(qn(&["OUT"]));
    builder.build_query(&query(tree)).unwrap();

    let schema = builder.result_schema.expect("result schema not derived");
    assert_eq!(schema.name, "OUT");
    let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["ID", "TOTAL"]);
    assert_eq!(schema.key_field.as_deref(), Some("ID"));
}

#[test]
pub fn test_print_interval_must_be_an_integer() {
    let store = store();
    let mut builder = AstBuilder::new(&store);
    let tree = StatementTree::PrintTopic {
        location: NodeLocation::new(2, 4),
        topic: qn(&["pageviews"]),
        interval: Some(LiteralTree::Decimal(tok("1.5"))),
    };
    let err = builder.build_statement(&tree).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Interval value should be integer in 'PRINT' command! at [2:4]"
    );
}

#[test]
pub fn test_create_table_keeps_property_order_and_case() {
    let store = store();
    let mut builder = AstBuilder::new(&store);
    let tree = StatementTree::CreateTable {
        location: loc(),
        name: qn(&["pageviews"]),
        elements: vec![crate::parse_tree::TableElementTree {
            location: loc(),
            name: id("viewtime"),
            type_signature: TypeTree::Base { name: tok("BIGINT"), parameters: vec![] },
        }],
        if_not_exists: false,
        properties: vec![
            crate::parse_tree::TablePropertyTree {
                name: id("kafka_topic"),
                value: ExpressionTree::Literal(LiteralTree::String(tok("'pageviews'"))),
            },
            crate::parse_tree::TablePropertyTree {
                name: id("value_format"),
                value: ExpressionTree::Literal(LiteralTree::String(tok("'JSON'"))),
            },
        ],
    };

    let statement = builder.build_statement(&tree).unwrap();
    match statement.kind {
        StatementKind::CreateTable { name, elements, properties, .. } => {
            assert_eq!(name.to_string(), "PAGEVIEWS");
            assert_eq!(elements[0].name, "viewtime");
            assert_eq!(elements[0].type_signature, "BIGINT");
            let keys: Vec<&str> = properties.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["kafka_topic", "value_format"]);
        }
        other => panic!("expected create table, got {:?}", other),
    }
}

#[test]
pub fn test_combine_results_passes_one_through_and_rejects_several() {
    assert_eq!(combine_results::<i32>(vec![]).unwrap(), None);
    assert_eq!(combine_results(vec![7]).unwrap(), Some(7));
    let err = combine_results(vec![1, 2]).unwrap_err();
    assert!(matches!(err, BuildError::Unsupported { .. }));
}

#[test]
pub fn test_nested_query_resolves_in_its_own_scope() {
    let inner = query(spec(vec![item(column("name"))], join_on_id()));
    let mut outer = spec(vec![item(column("ts"))], scan("ORDERS"));
    outer.where_clause = Some(ExpressionTree::InSubquery {
        location: loc(),
        negated: false,
        value: Box::new(column("id")),
        query: Box::new(inner),
    });

    let specification = built_spec(build(query(outer)).unwrap());
    match &specification.select.items[0] {
        SelectItem::SingleColumn { expression, .. } => assert_eq!(owner(expression), "ORDERS"),
        other => panic!("expected single column, got {:?}", other),
    }
    match &specification.where_clause.as_ref().unwrap().kind {
        ExpressionKind::InSubquery { value, subquery } => {
            assert_eq!(owner(value), "ORDERS");
            let inner_spec = match &subquery.body {
                QueryBody::Specification(inner_spec) => inner_spec,
                other => panic!("expected query specification, got {:?}", other),
            };
            match &inner_spec.select.items[0] {
                SelectItem::SingleColumn { expression, .. } => {
                    assert_eq!(owner(expression), "L");
                }
                other => panic!("expected single column, got {:?}", other),
            }
        }
        other => panic!("expected in-subquery, got {:?}", other),
    }
}

#[test]
pub fn test_nested_query_cannot_see_the_outer_source() {
    // TS exists only on ORDERS; the nested join scope does not inherit it.
    let inner = query(spec(vec![item(column("ts"))], join_on_id()));
    let mut outer = spec(vec![item(column("id"))], scan("ORDERS"));
    outer.where_clause = Some(ExpressionTree::InSubquery {
        location: loc(),
        negated: false,
        value: Box::new(column("id")),
        query: Box::new(inner),
    });

    let err = build(query(outer)).unwrap_err();
    assert_eq!(err.to_string(), "Field TS is ambiguous.");
}

#[test]
pub fn test_special_forms_reject_an_over_clause() {
    let tree = query(spec(
        vec![item(ExpressionTree::FunctionCall {
            location: loc(),
            name: qn(&["COALESCE"]),
            distinct: false,
            over: Some(WindowTree {
                location: loc(),
                partition_by: vec![],
                order_by: vec![],
                frame: None,
            }),
            arguments: vec![column("id"), column("amt")],
        })],
        scan("ORDERS"),
    ));
    let err = build(tree).unwrap_err();
    assert_eq!(err.to_string(), "OVER clause not valid for 'coalesce' function at [1:1]");
}

#[test]
pub fn test_ordinary_calls_keep_window_and_distinct() {
    let tree = query(spec(
        vec![item(ExpressionTree::FunctionCall {
            location: loc(),
            name: qn(&["count"]),
            distinct: true,
            over: Some(WindowTree {
                location: loc(),
                partition_by: vec![column("id")],
                order_by: vec![],
                frame: None,
            }),
            arguments: vec![column("amt")],
        })],
        scan("ORDERS"),
    ));
    let specification = built_spec(build(tree).unwrap());
    match &specification.select.items[0] {
        SelectItem::SingleColumn { expression, .. } => match &expression.kind {
            ExpressionKind::FunctionCall { name, window, distinct, arguments } => {
                assert_eq!(name.to_string(), "COUNT");
                assert!(window.is_some());
                assert!(*distinct);
                assert_eq!(arguments.len(), 1);
            }
            other => panic!("expected function call, got {:?}", other),
        },
        other => panic!("expected single column, got {:?}", other),
    }
}

#[test]
pub fn test_derived_table_in_the_from_clause_is_rejected() {
    let inner = query(spec(vec![item(column("id"))], scan("L")));
    let tree = query(spec(
        vec![item(column("id"))],
        RelationTree::Aliased {
            location: loc(),
            relation: Box::new(RelationTree::Subquery {
                location: loc(),
                query: Box::new(inner),
            }),
            alias: Some(id("S")),
            column_aliases: vec![],
        },
    ));
    let err = build(tree).unwrap_err();
    assert_eq!(err.to_string(), "Derived-table sources are not supported in the FROM clause");
}

#[test]
pub fn test_string_literals_are_unquoted_with_doubled_quotes_collapsed() {
    let tree = query(spec(
        vec![item(ExpressionTree::Literal(LiteralTree::String(tok("'it''s'"))))],
        scan("ORDERS"),
    ));
    let specification = built_spec(build(tree).unwrap());
    match &specification.select.items[0] {
        SelectItem::SingleColumn { expression, .. } => match &expression.kind {
            ExpressionKind::Literal(crate::ast::Literal::String(value)) => {
                assert_eq!(value, "it's");
            }
            other => panic!("expected string literal, got {:?}", other),
        },
        other => panic!("expected single column, got {:?}", other),
    }
}
