use std::collections::HashSet;

use chrono::Utc;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use ordered_float::NotNan;
use tracing::info;

use crate::ast::{
    Approximate, ComparisonOp, Expression, ExpressionKind, FrameBound, GroupBy, GroupingElement,
    IntervalSign, JoinCriteria, JoinType, Literal, NodeLocation, NullOrdering, Ordering,
    QualifiedName, Query, QueryBody, QuerySpecification, Relation, RelationKind, Select,
    SelectItem, SortItem, Statement, StatementKind, Statements, Table, TableElement, WhenClause,
    Window, WindowFrame, With, WithQuery,
};
use crate::builder::type_signature::serialize_type;
use crate::builder::{operators, BuildError, ResolutionContext, ResultSchema, WildcardExpander};
use crate::catalog::MetaStore;
use crate::parse_tree::{
    ExpressionTree, FrameBoundTree, GroupByTree, GroupingElementTree, JoinCriteriaTree,
    JoinVariantTree, LiteralTree, NamedQueryTree, QualifiedNameTree, QuerySpecificationTree,
    QueryTermTree, QueryTree, RelationTree, SelectItemTree, SortItemTree, StatementTree,
    StatementsTree, Token, WhenClauseTree, WindowFrameTree, WindowTree, WithTree,
};

static SPECIAL_FORMS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["if", "nullif", "coalesce", "try"]));

/// Lowers grammar trees into resolved AST nodes, one visit per production,
/// composed bottom-up.
///
/// One builder instance serves one statement (or statement list) at a time;
/// the select-item counter and the derived result schema are per-instance
/// state and must not be shared across concurrently running builds. Any
/// failure aborts the whole statement; no partial AST is ever returned.
pub struct AstBuilder<'a> {
    metastore: &'a dyn MetaStore,
    select_item_index: usize,
    /// Output schema of the most recently finalized query specification.
    pub result_schema: Option<ResultSchema>,
    /// Advisory notices emitted while building (also logged via `tracing`).
    pub notices: Vec<String>,
}

impl<'a> AstBuilder<'a> {
    pub fn new(metastore: &'a dyn MetaStore) -> Self {
        Self {
            metastore,
            select_item_index: 0,
            result_schema: None,
            notices: Vec::new(),
        }
    }

    // ******************* statements **********************

    pub fn build_statements(&mut self, tree: &StatementsTree) -> Result<Statements, BuildError> {
        let mut statements = Vec::with_capacity(tree.statements.len());
        for statement in &tree.statements {
            statements.push(self.build_statement(statement)?);
        }
        Ok(Statements { statements })
    }

    pub fn build_statement(&mut self, tree: &StatementTree) -> Result<Statement, BuildError> {
        match tree {
            StatementTree::Query(query) => {
                let location = Some(query.location);
                let query = self.build_query(query)?;
                Ok(Statement::new(location, StatementKind::Query(Box::new(query))))
            }
            StatementTree::CreateTable { location, name, elements, if_not_exists, properties } => {
                let mut built_elements = Vec::with_capacity(elements.len());
                for element in elements {
                    built_elements.push(TableElement {
                        location: Some(element.location),
                        name: element.name.text.clone(),
                        type_signature: serialize_type(&element.type_signature)?,
                    });
                }
                let mut built_properties = IndexMap::new();
                for property in properties {
                    let value =
                        self.build_expression(&property.value, &ResolutionContext::Unbound)?;
                    built_properties.insert(property.name.text.clone(), value);
                }
                Ok(Statement::new(
                    Some(*location),
                    StatementKind::CreateTable {
                        name: qualified_name(name),
                        elements: built_elements,
                        if_not_exists: *if_not_exists,
                        properties: built_properties,
                    },
                ))
            }
            StatementTree::DropTable { location, name, if_exists } => Ok(Statement::new(
                Some(*location),
                StatementKind::DropTable { name: qualified_name(name), if_exists: *if_exists },
            )),
            StatementTree::ShowTables { location, schema, like_pattern } => Ok(Statement::new(
                Some(*location),
                StatementKind::ShowTables {
                    schema: schema.as_ref().map(qualified_name),
                    like_pattern: like_pattern.as_ref().map(|t| unquote(&t.text)),
                },
            )),
            StatementTree::ShowTopics { location } => {
                Ok(Statement::new(Some(*location), StatementKind::ShowTopics))
            }
            StatementTree::ShowQueries { location } => {
                Ok(Statement::new(Some(*location), StatementKind::ShowQueries))
            }
            StatementTree::ShowColumns { location, table } => Ok(Statement::new(
                Some(*location),
                StatementKind::ShowColumns { table: qualified_name(table) },
            )),
            StatementTree::TerminateQuery { location, query_name } => Ok(Statement::new(
                Some(*location),
                StatementKind::TerminateQuery { query_name: qualified_name(query_name) },
            )),
            StatementTree::PrintTopic { location, topic, interval } => {
                let interval = match interval {
                    None => None,
                    Some(LiteralTree::Integer(token)) => Some(parse_long(token)?),
                    Some(_) => {
                        return BuildError::parsing(
                            "Interval value should be integer in 'PRINT' command!",
                            *location,
                        )
                        .err();
                    }
                };
                Ok(Statement::new(
                    Some(*location),
                    StatementKind::PrintTopic { topic: qualified_name(topic), interval },
                ))
            }
        }
    }

    // ********************** query expressions ********************

    pub fn build_query(&mut self, tree: &QueryTree) -> Result<Query, BuildError> {
        let location = Some(tree.location);
        let with = tree.with.as_ref().map(|w| self.build_with(w)).transpose()?;
        let approximate = tree
            .confidence
            .as_ref()
            .map(|confidence| Approximate { location, confidence: confidence.text.clone() });

        match &tree.body {
            QueryTermTree::Specification(spec_tree) => {
                // A bare query specification absorbs the trailing ORDER BY
                // and LIMIT: later phases resolve ordering references
                // against the specification's own projection list.
                let ctx = ResolutionContext::from_relation_tree(&spec_tree.from, self.metastore)?;
                let mut specification = self.build_query_specification(spec_tree, &ctx)?;
                specification.order_by = self.build_sort_items(&tree.order_by, &ctx)?;
                specification.limit = tree.limit.as_ref().map(|t| t.text.clone());

                Ok(Query {
                    location,
                    with,
                    body: QueryBody::Specification(Box::new(specification)),
                    order_by: Vec::new(),
                    limit: None,
                    approximate,
                })
            }
            body => {
                let body = self.build_query_term(body)?;
                let order_by = self.build_sort_items(&tree.order_by, &ResolutionContext::Unbound)?;
                Ok(Query {
                    location,
                    with,
                    body,
                    order_by,
                    limit: tree.limit.as_ref().map(|t| t.text.clone()),
                    approximate,
                })
            }
        }
    }

    fn build_query_term(&mut self, tree: &QueryTermTree) -> Result<QueryBody, BuildError> {
        match tree {
            QueryTermTree::Specification(spec_tree) => {
                let ctx = ResolutionContext::from_relation_tree(&spec_tree.from, self.metastore)?;
                let specification = self.build_query_specification(spec_tree, &ctx)?;
                Ok(QueryBody::Specification(Box::new(specification)))
            }
            QueryTermTree::SetOperation { location, operator, quantifier, left, right } => {
                let left = Box::new(self.build_query_term(left)?);
                let right = Box::new(self.build_query_term(right)?);
                // A missing quantifier means DISTINCT.
                let distinct = quantifier
                    .as_ref()
                    .map(|q| q.text.eq_ignore_ascii_case("DISTINCT"))
                    .unwrap_or(true);
                let location = Some(*location);
                match operator.text.to_uppercase().as_str() {
                    "UNION" => Ok(QueryBody::Union { location, left, right, distinct }),
                    "INTERSECT" => Ok(QueryBody::Intersect { location, left, right, distinct }),
                    "EXCEPT" => Ok(QueryBody::Except { location, left, right, distinct }),
                    other => BuildError::parsing(
                        format!("Unsupported set operation: {}", other),
                        operator.location,
                    )
                    .err(),
                }
            }
            QueryTermTree::Table { name, .. } => Ok(QueryBody::Table(qualified_name(name))),
        }
    }

    fn build_query_specification(
        &mut self,
        tree: &QuerySpecificationTree,
        ctx: &ResolutionContext,
    ) -> Result<QuerySpecification, BuildError> {
        let into = match &tree.into {
            Some(name) => Table::new(name.location(), qualified_name(name)),
            None => {
                let name = format!("KSQL_Stream_{}", Utc::now().timestamp_millis());
                let notice =
                    "No INTO clause was specified in the query. Writing the results into the console!";
                info!("{}", notice);
                self.notices.push(notice.to_string());
                // Sink names keep their synthesized casing.
                Table::ephemeral(QualifiedName::verbatim([name]))
            }
        };

        let from = self.build_relation(&tree.from, ctx)?;

        let mut items = Vec::with_capacity(tree.select_items.len());
        for item in &tree.select_items {
            items.push(self.build_select_item(item, ctx)?);
        }
        // Expand * and T.* before the Select node is finalized; no wildcard
        // item survives past this point.
        let items = WildcardExpander::expand(items, &from, self.metastore)?;
        let select = Select {
            location: Some(tree.select_location),
            distinct: is_distinct(&tree.quantifier),
            items,
        };

        let where_clause = tree
            .where_clause
            .as_ref()
            .map(|w| self.build_expression(w, ctx))
            .transpose()?;
        let group_by = tree.group_by.as_ref().map(|g| self.build_group_by(g, ctx)).transpose()?;
        let having = tree.having.as_ref().map(|h| self.build_expression(h, ctx)).transpose()?;

        self.result_schema = Some(ResultSchema::derive(&select, &into));

        Ok(QuerySpecification {
            location: Some(tree.location),
            select,
            into,
            from,
            where_clause,
            group_by,
            having,
            order_by: Vec::new(),
            limit: None,
        })
    }

    fn build_group_by(
        &mut self,
        tree: &GroupByTree,
        ctx: &ResolutionContext,
    ) -> Result<GroupBy, BuildError> {
        let mut elements = Vec::with_capacity(tree.elements.len());
        for element in &tree.elements {
            elements.push(match element {
                GroupingElementTree::Single { location, expressions } => {
                    let mut built = Vec::with_capacity(expressions.len());
                    for expression in expressions {
                        built.push(self.build_expression(expression, ctx)?);
                    }
                    GroupingElement::Simple { location: Some(*location), expressions: built }
                }
                GroupingElementTree::Rollup { location, columns } => GroupingElement::Rollup {
                    location: Some(*location),
                    columns: columns.iter().map(qualified_name).collect(),
                },
                GroupingElementTree::Cube { location, columns } => GroupingElement::Cube {
                    location: Some(*location),
                    columns: columns.iter().map(qualified_name).collect(),
                },
                GroupingElementTree::MultipleSets { location, sets } => {
                    GroupingElement::GroupingSets {
                        location: Some(*location),
                        sets: sets
                            .iter()
                            .map(|set| set.iter().map(qualified_name).collect())
                            .collect(),
                    }
                }
            });
        }
        Ok(GroupBy {
            location: Some(tree.location),
            distinct: is_distinct(&tree.quantifier),
            elements,
        })
    }

    fn build_with(&mut self, tree: &WithTree) -> Result<With, BuildError> {
        let mut queries = Vec::with_capacity(tree.queries.len());
        for named in &tree.queries {
            queries.push(self.build_named_query(named)?);
        }
        Ok(With { location: Some(tree.location), recursive: tree.recursive, queries })
    }

    fn build_named_query(&mut self, tree: &NamedQueryTree) -> Result<WithQuery, BuildError> {
        Ok(WithQuery {
            location: Some(tree.location),
            name: tree.name.text.clone(),
            query: self.build_query(&tree.query)?,
            column_aliases: tree.column_aliases.iter().map(|a| a.text.clone()).collect(),
        })
    }

    // *************** from clause *****************

    fn build_relation(
        &mut self,
        tree: &RelationTree,
        ctx: &ResolutionContext,
    ) -> Result<Relation, BuildError> {
        match tree {
            RelationTree::Table { location, name } => Ok(Relation::new(
                Some(*location),
                RelationKind::Table(Table::new(Some(*location), qualified_name(name))),
            )),
            RelationTree::Aliased { location, relation, alias, column_aliases } => {
                let child = self.build_relation(relation, ctx)?;
                let alias = match alias {
                    Some(identifier) => identifier.text.to_uppercase(),
                    // Self-aliasing: a bare table is visible under its own
                    // name.
                    None => match &child.kind {
                        RelationKind::Table(table) => table.name.suffix().to_string(),
                        _ => {
                            return BuildError::unsupported(
                                "Cannot derive an alias for a relation that is not a named source",
                            )
                            .err();
                        }
                    },
                };
                Ok(Relation::new(
                    Some(*location),
                    RelationKind::Aliased {
                        relation: Box::new(child),
                        alias,
                        column_aliases: column_aliases.iter().map(|a| a.text.clone()).collect(),
                    },
                ))
            }
            RelationTree::Join { location, left, right, variant } => {
                let left = Box::new(self.build_relation(left, ctx)?);
                let right = Box::new(self.build_relation(right, ctx)?);
                let (join_type, criteria) = match variant {
                    JoinVariantTree::Cross => (JoinType::Cross, None),
                    JoinVariantTree::Natural { join_type } => {
                        (self.join_type_or_inner(join_type)?, Some(JoinCriteria::Natural))
                    }
                    JoinVariantTree::Qualified { join_type, criteria } => {
                        let criteria = match criteria {
                            Some(JoinCriteriaTree::On(expression)) => {
                                JoinCriteria::On(self.build_expression(expression, ctx)?)
                            }
                            Some(JoinCriteriaTree::Using(columns)) => JoinCriteria::Using(
                                columns.iter().map(|c| c.text.clone()).collect(),
                            ),
                            None => {
                                return BuildError::unsupported("Unsupported join criteria").err();
                            }
                        };
                        (self.join_type_or_inner(join_type)?, Some(criteria))
                    }
                };
                Ok(Relation::new(
                    Some(*location),
                    RelationKind::Join { join_type, left, right, criteria },
                ))
            }
            RelationTree::Subquery { location, query } => Ok(Relation::new(
                Some(*location),
                RelationKind::Subquery(Box::new(self.build_query(query)?)),
            )),
            RelationTree::Values { location, rows } => {
                let mut expressions = Vec::with_capacity(rows.len());
                for row in rows {
                    expressions.push(self.build_expression(row, ctx)?);
                }
                Ok(Relation::new(Some(*location), RelationKind::Values(expressions)))
            }
            RelationTree::Parenthesized(inner) => {
                combine_results(vec![self.build_relation(inner, ctx)?])?
                    .ok_or_else(|| BuildError::unsupported("Empty parenthesized relation"))
            }
        }
    }

    fn join_type_or_inner(&self, token: &Option<Token>) -> Result<JoinType, BuildError> {
        match token {
            Some(token) => operators::join_type(token),
            None => Ok(JoinType::Inner),
        }
    }

    // *************** select items *****************

    fn build_select_item(
        &mut self,
        tree: &SelectItemTree,
        ctx: &ResolutionContext,
    ) -> Result<SelectItem, BuildError> {
        match tree {
            SelectItemTree::All { location, prefix } => Ok(SelectItem::AllColumns {
                location: Some(*location),
                prefix: prefix.as_ref().map(qualified_name),
            }),
            SelectItemTree::Single { location, expression, alias } => {
                let expression = self.build_expression(expression, ctx)?;
                let alias = match alias {
                    Some(identifier) if identifier.quoted => identifier.text.clone(),
                    Some(identifier) => identifier.text.to_uppercase(),
                    None => self.default_alias(&expression, ctx),
                };
                self.select_item_index += 1;
                Ok(SelectItem::SingleColumn {
                    location: Some(*location),
                    expression,
                    alias: Some(alias),
                })
            }
        }
    }

    /// The implicit output name of an unaliased select item.
    fn default_alias(&self, expression: &Expression, ctx: &ResolutionContext) -> String {
        match &expression.kind {
            ExpressionKind::QualifiedNameReference(name) => name.suffix().to_uppercase(),
            ExpressionKind::Dereference { base, field } => {
                let base_name = match &base.kind {
                    ExpressionKind::QualifiedNameReference(name) => name.to_string(),
                    _ => String::new(),
                };
                if ctx.is_join() && ctx.is_common_field(field) {
                    // Same naming scheme the wildcard expander uses, so the
                    // two sides of a join never collide.
                    format!("{}_{}", base_name.to_uppercase(), field.to_uppercase())
                } else {
                    field.to_uppercase()
                }
            }
            _ => format!("KSQL_COL_{}", self.select_item_index),
        }
    }

    // ********************* expressions *******************

    pub fn build_expression(
        &mut self,
        tree: &ExpressionTree,
        ctx: &ResolutionContext,
    ) -> Result<Expression, BuildError> {
        match tree {
            ExpressionTree::Literal(literal) => self.build_literal(literal),
            ExpressionTree::ColumnReference { name } => {
                let column = name.text.to_uppercase();
                let owner = ctx.resolve(&column)?.to_string();
                let base = Expression::new(
                    Some(name.location),
                    ExpressionKind::QualifiedNameReference(QualifiedName::single(owner)),
                );
                Ok(Expression::new(
                    Some(name.location),
                    ExpressionKind::Dereference { base: Box::new(base), field: column },
                ))
            }
            ExpressionTree::Dereference { location, base, field } => {
                let base_expression = Expression::new(
                    Some(base.location),
                    ExpressionKind::QualifiedNameReference(QualifiedName::single(
                        base.text.clone(),
                    )),
                );
                Ok(Expression::new(
                    Some(*location),
                    ExpressionKind::Dereference {
                        base: Box::new(base_expression),
                        field: field.text.to_uppercase(),
                    },
                ))
            }
            ExpressionTree::FunctionCall { location, name, distinct, over, arguments } => {
                self.build_function_call(*location, name, *distinct, over, arguments, ctx)
            }
            ExpressionTree::ArithmeticBinary { operator, left, right } => {
                let kind = ExpressionKind::ArithmeticBinary {
                    operator: operators::arithmetic_binary_operator(operator)?,
                    left: Box::new(self.build_expression(left, ctx)?),
                    right: Box::new(self.build_expression(right, ctx)?),
                };
                Ok(Expression::new(Some(operator.location), kind))
            }
            ExpressionTree::ArithmeticUnary { sign, value } => {
                let value = self.build_expression(value, ctx)?;
                match sign.text.as_str() {
                    "-" => Ok(Expression::negative(Some(sign.location), value)),
                    "+" => Ok(Expression::positive(Some(sign.location), value)),
                    other => BuildError::parsing(
                        format!("Unsupported sign: {}", other),
                        sign.location,
                    )
                    .err(),
                }
            }
            ExpressionTree::Concatenation { location, left, right } => {
                // `||` is plain sugar for the concat builtin.
                let kind = ExpressionKind::FunctionCall {
                    name: QualifiedName::verbatim(["concat"]),
                    window: None,
                    distinct: false,
                    arguments: vec![
                        self.build_expression(left, ctx)?,
                        self.build_expression(right, ctx)?,
                    ],
                };
                Ok(Expression::new(Some(*location), kind))
            }
            ExpressionTree::Comparison { operator, left, right } => {
                let kind = ExpressionKind::Comparison {
                    operator: operators::comparison_operator(operator)?,
                    left: Box::new(self.build_expression(left, ctx)?),
                    right: Box::new(self.build_expression(right, ctx)?),
                };
                Ok(Expression::new(Some(operator.location), kind))
            }
            ExpressionTree::LogicalBinary { operator, left, right } => {
                let kind = ExpressionKind::LogicalBinary {
                    operator: operators::logical_binary_operator(operator)?,
                    left: Box::new(self.build_expression(left, ctx)?),
                    right: Box::new(self.build_expression(right, ctx)?),
                };
                Ok(Expression::new(Some(operator.location), kind))
            }
            ExpressionTree::Not { location, value } => {
                let value = self.build_expression(value, ctx)?;
                Ok(Expression::new(Some(*location), ExpressionKind::Not(Box::new(value))))
            }
            ExpressionTree::Between { location, negated, value, lower, upper } => {
                let expression = Expression::new(
                    Some(*location),
                    ExpressionKind::Between {
                        value: Box::new(self.build_expression(value, ctx)?),
                        min: Box::new(self.build_expression(lower, ctx)?),
                        max: Box::new(self.build_expression(upper, ctx)?),
                    },
                );
                Ok(negate_if(*negated, *location, expression))
            }
            ExpressionTree::InList { location, negated, value, list } => {
                let mut built = Vec::with_capacity(list.len());
                for item in list {
                    built.push(self.build_expression(item, ctx)?);
                }
                let expression = Expression::new(
                    Some(*location),
                    ExpressionKind::InList {
                        value: Box::new(self.build_expression(value, ctx)?),
                        list: built,
                    },
                );
                Ok(negate_if(*negated, *location, expression))
            }
            ExpressionTree::InSubquery { location, negated, value, query } => {
                let expression = Expression::new(
                    Some(*location),
                    ExpressionKind::InSubquery {
                        value: Box::new(self.build_expression(value, ctx)?),
                        subquery: Box::new(self.build_query(query)?),
                    },
                );
                Ok(negate_if(*negated, *location, expression))
            }
            ExpressionTree::Exists { location, query } => Ok(Expression::new(
                Some(*location),
                ExpressionKind::Exists(Box::new(self.build_query(query)?)),
            )),
            ExpressionTree::IsNull { location, negated, value } => {
                let value = Box::new(self.build_expression(value, ctx)?);
                let kind = if *negated {
                    ExpressionKind::IsNotNull(value)
                } else {
                    ExpressionKind::IsNull(value)
                };
                Ok(Expression::new(Some(*location), kind))
            }
            ExpressionTree::IsDistinctFrom { location, negated, left, right } => {
                let expression = Expression::new(
                    Some(*location),
                    ExpressionKind::Comparison {
                        operator: ComparisonOp::IsDistinctFrom,
                        left: Box::new(self.build_expression(left, ctx)?),
                        right: Box::new(self.build_expression(right, ctx)?),
                    },
                );
                Ok(negate_if(*negated, *location, expression))
            }
            ExpressionTree::Like { location, negated, value, pattern, escape } => {
                let expression = Expression::new(
                    Some(*location),
                    ExpressionKind::Like {
                        value: Box::new(self.build_expression(value, ctx)?),
                        pattern: Box::new(self.build_expression(pattern, ctx)?),
                        escape: escape
                            .as_ref()
                            .map(|e| self.build_expression(e, ctx).map(Box::new))
                            .transpose()?,
                    },
                );
                Ok(negate_if(*negated, *location, expression))
            }
            ExpressionTree::SimpleCase { location, operand, when_clauses, default } => {
                Ok(Expression::new(
                    Some(*location),
                    ExpressionKind::SimpleCase {
                        operand: Box::new(self.build_expression(operand, ctx)?),
                        when_clauses: self.build_when_clauses(when_clauses, ctx)?,
                        default: default
                            .as_ref()
                            .map(|d| self.build_expression(d, ctx).map(Box::new))
                            .transpose()?,
                    },
                ))
            }
            ExpressionTree::SearchedCase { location, when_clauses, default } => {
                Ok(Expression::new(
                    Some(*location),
                    ExpressionKind::SearchedCase {
                        when_clauses: self.build_when_clauses(when_clauses, ctx)?,
                        default: default
                            .as_ref()
                            .map(|d| self.build_expression(d, ctx).map(Box::new))
                            .transpose()?,
                    },
                ))
            }
            ExpressionTree::Cast { location, expression, target_type, best_effort } => {
                Ok(Expression::new(
                    Some(*location),
                    ExpressionKind::Cast {
                        expression: Box::new(self.build_expression(expression, ctx)?),
                        target_type: serialize_type(target_type)?,
                        best_effort: *best_effort,
                    },
                ))
            }
            ExpressionTree::Extract { location, field, expression } => {
                let interval_field = operators::interval_field(field).map_err(|_| {
                    BuildError::parsing(
                        format!("Invalid EXTRACT field: {}", field.text),
                        *location,
                    )
                })?;
                Ok(Expression::new(
                    Some(*location),
                    ExpressionKind::Extract {
                        expression: Box::new(self.build_expression(expression, ctx)?),
                        field: interval_field,
                    },
                ))
            }
            ExpressionTree::Substring { location, arguments } => {
                self.builtin_call(*location, "substr", arguments, ctx)
            }
            ExpressionTree::Position { location, arguments } => {
                // POSITION(needle IN haystack) calls strpos(haystack, needle).
                let mut arguments: Vec<&ExpressionTree> = arguments.iter().collect();
                arguments.reverse();
                let mut built = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    built.push(self.build_expression(argument, ctx)?);
                }
                Ok(Expression::new(
                    Some(*location),
                    ExpressionKind::FunctionCall {
                        name: QualifiedName::verbatim(["strpos"]),
                        window: None,
                        distinct: false,
                        arguments: built,
                    },
                ))
            }
            ExpressionTree::Subscript { location, base, index } => Ok(Expression::new(
                Some(*location),
                ExpressionKind::Subscript {
                    base: Box::new(self.build_expression(base, ctx)?),
                    index: Box::new(self.build_expression(index, ctx)?),
                },
            )),
            ExpressionTree::Row { location, items } => {
                let mut built = Vec::with_capacity(items.len());
                for item in items {
                    built.push(self.build_expression(item, ctx)?);
                }
                Ok(Expression::new(Some(*location), ExpressionKind::Row(built)))
            }
            ExpressionTree::Array { location, items } => {
                let mut built = Vec::with_capacity(items.len());
                for item in items {
                    built.push(self.build_expression(item, ctx)?);
                }
                Ok(Expression::new(Some(*location), ExpressionKind::Array(built)))
            }
            ExpressionTree::SubqueryExpression { location, query } => Ok(Expression::new(
                Some(*location),
                ExpressionKind::Subquery(Box::new(self.build_query(query)?)),
            )),
            ExpressionTree::SpecialDateTimeFunction { location, name, precision } => {
                let function = operators::date_time_function(name)?;
                let precision = precision
                    .as_ref()
                    .map(|p| {
                        p.text.parse::<u32>().map_err(|_| {
                            BuildError::parsing(
                                format!("Invalid precision: {}", p.text),
                                p.location,
                            )
                        })
                    })
                    .transpose()?;
                Ok(Expression::new(
                    Some(*location),
                    ExpressionKind::CurrentTime { function, precision },
                ))
            }
            ExpressionTree::Parenthesized(inner) => {
                combine_results(vec![self.build_expression(inner, ctx)?])?
                    .ok_or_else(|| BuildError::unsupported("Empty parenthesized expression"))
            }
        }
    }

    fn build_when_clauses(
        &mut self,
        trees: &[WhenClauseTree],
        ctx: &ResolutionContext,
    ) -> Result<Vec<WhenClause>, BuildError> {
        let mut clauses = Vec::with_capacity(trees.len());
        for tree in trees {
            clauses.push(WhenClause {
                location: Some(tree.location),
                condition: self.build_expression(&tree.condition, ctx)?,
                result: self.build_expression(&tree.result, ctx)?,
            });
        }
        Ok(clauses)
    }

    fn builtin_call(
        &mut self,
        location: NodeLocation,
        name: &str,
        arguments: &[ExpressionTree],
        ctx: &ResolutionContext,
    ) -> Result<Expression, BuildError> {
        let mut built = Vec::with_capacity(arguments.len());
        for argument in arguments {
            built.push(self.build_expression(argument, ctx)?);
        }
        Ok(Expression::new(
            Some(location),
            ExpressionKind::FunctionCall {
                name: QualifiedName::verbatim([name]),
                window: None,
                distinct: false,
                arguments: built,
            },
        ))
    }

    /// Function-call production. The specialized forms `if`, `nullif`,
    /// `coalesce` and `try` are not ordinary calls: each carries fixed
    /// arity and clause constraints and lowers to a dedicated node.
    fn build_function_call(
        &mut self,
        location: NodeLocation,
        name: &QualifiedNameTree,
        distinct: bool,
        over: &Option<WindowTree>,
        arguments: &[ExpressionTree],
        ctx: &ResolutionContext,
    ) -> Result<Expression, BuildError> {
        let window = over.as_ref().map(|w| self.build_window(w, ctx)).transpose()?;
        let name = qualified_name(name);
        let lower = name.to_string().to_lowercase();

        // No special form accepts an OVER clause or a DISTINCT quantifier.
        if SPECIAL_FORMS.contains(lower.as_str()) {
            check(
                window.is_none(),
                &format!("OVER clause not valid for '{}' function", lower),
                location,
            )?;
            check(
                !distinct,
                &format!("DISTINCT not valid for '{}' function", lower),
                location,
            )?;
        }

        match lower.as_str() {
            "if" => {
                check(
                    arguments.len() == 2 || arguments.len() == 3,
                    "Invalid number of arguments for 'if' function",
                    location,
                )?;

                let condition = self.build_expression(&arguments[0], ctx)?;
                let then = self.build_expression(&arguments[1], ctx)?;
                let otherwise = match arguments.get(2) {
                    Some(argument) => Some(Box::new(self.build_expression(argument, ctx)?)),
                    None => None,
                };
                Ok(Expression::new(
                    Some(location),
                    ExpressionKind::If {
                        condition: Box::new(condition),
                        then: Box::new(then),
                        otherwise,
                    },
                ))
            }
            "nullif" => {
                check(
                    arguments.len() == 2,
                    "Invalid number of arguments for 'nullif' function",
                    location,
                )?;

                Ok(Expression::new(
                    Some(location),
                    ExpressionKind::NullIf {
                        first: Box::new(self.build_expression(&arguments[0], ctx)?),
                        second: Box::new(self.build_expression(&arguments[1], ctx)?),
                    },
                ))
            }
            "coalesce" => {
                let mut built = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    built.push(self.build_expression(argument, ctx)?);
                }
                Ok(Expression::new(Some(location), ExpressionKind::Coalesce(built)))
            }
            "try" => {
                check(
                    arguments.len() == 1,
                    "Invalid number of arguments for 'try' function",
                    location,
                )?;

                let inner = self.build_expression(&arguments[0], ctx)?;
                Ok(Expression::new(Some(location), ExpressionKind::Try(Box::new(inner))))
            }
            _ => {
                let mut built = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    built.push(self.build_expression(argument, ctx)?);
                }
                Ok(Expression::new(
                    Some(location),
                    ExpressionKind::FunctionCall {
                        name,
                        window: window.map(Box::new),
                        distinct,
                        arguments: built,
                    },
                ))
            }
        }
    }

    // ********************* windows and ordering *******************

    fn build_window(
        &mut self,
        tree: &WindowTree,
        ctx: &ResolutionContext,
    ) -> Result<Window, BuildError> {
        let mut partition_by = Vec::with_capacity(tree.partition_by.len());
        for expression in &tree.partition_by {
            partition_by.push(self.build_expression(expression, ctx)?);
        }
        let frame = tree.frame.as_ref().map(|f| self.build_window_frame(f, ctx)).transpose()?;
        Ok(Window {
            location: Some(tree.location),
            partition_by,
            order_by: self.build_sort_items(&tree.order_by, ctx)?,
            frame,
        })
    }

    fn build_window_frame(
        &mut self,
        tree: &WindowFrameTree,
        ctx: &ResolutionContext,
    ) -> Result<WindowFrame, BuildError> {
        Ok(WindowFrame {
            location: Some(tree.location),
            frame_type: operators::frame_type(&tree.frame_type)?,
            start: self.build_frame_bound(&tree.start, ctx)?,
            end: tree.end.as_ref().map(|e| self.build_frame_bound(e, ctx)).transpose()?,
        })
    }

    fn build_frame_bound(
        &mut self,
        tree: &FrameBoundTree,
        ctx: &ResolutionContext,
    ) -> Result<FrameBound, BuildError> {
        match tree {
            FrameBoundTree::Unbounded { location, bound } => Ok(FrameBound {
                location: Some(*location),
                bound_type: operators::unbounded_frame_bound(bound)?,
                value: None,
            }),
            FrameBoundTree::Bounded { location, bound, value } => Ok(FrameBound {
                location: Some(*location),
                bound_type: operators::bounded_frame_bound(bound)?,
                value: Some(Box::new(self.build_expression(value, ctx)?)),
            }),
            FrameBoundTree::CurrentRow { location } => Ok(FrameBound {
                location: Some(*location),
                bound_type: crate::ast::FrameBoundType::CurrentRow,
                value: None,
            }),
        }
    }

    fn build_sort_items(
        &mut self,
        trees: &[SortItemTree],
        ctx: &ResolutionContext,
    ) -> Result<Vec<SortItem>, BuildError> {
        let mut items = Vec::with_capacity(trees.len());
        for tree in trees {
            items.push(self.build_sort_item(tree, ctx)?);
        }
        Ok(items)
    }

    fn build_sort_item(
        &mut self,
        tree: &SortItemTree,
        ctx: &ResolutionContext,
    ) -> Result<SortItem, BuildError> {
        let ordering = match &tree.ordering {
            Some(token) => operators::sort_ordering(token)?,
            None => Ordering::Ascending,
        };
        let null_ordering = match &tree.null_ordering {
            Some(token) => operators::null_ordering(token)?,
            None => NullOrdering::Undefined,
        };
        Ok(SortItem {
            location: Some(tree.location),
            sort_key: self.build_expression(&tree.sort_key, ctx)?,
            ordering,
            null_ordering,
        })
    }

    // ************** literals **************

    fn build_literal(&mut self, tree: &LiteralTree) -> Result<Expression, BuildError> {
        match tree {
            LiteralTree::Null { location } => {
                Ok(Expression::new(Some(*location), ExpressionKind::Literal(Literal::Null)))
            }
            LiteralTree::String(token) => Ok(Expression::new(
                Some(token.location),
                ExpressionKind::Literal(Literal::String(unquote(&token.text))),
            )),
            LiteralTree::Integer(token) => Ok(Expression::new(
                Some(token.location),
                ExpressionKind::Literal(Literal::Long(parse_long(token)?)),
            )),
            LiteralTree::Decimal(token) => {
                let value: f64 = token.text.parse().map_err(|_| {
                    BuildError::parsing(
                        format!("Invalid numeric literal: {}", token.text),
                        token.location,
                    )
                })?;
                let value = NotNan::new(value).map_err(|_| {
                    BuildError::parsing(
                        format!("Invalid numeric literal: {}", token.text),
                        token.location,
                    )
                })?;
                Ok(Expression::new(
                    Some(token.location),
                    ExpressionKind::Literal(Literal::Double(value)),
                ))
            }
            LiteralTree::Boolean(token) => Ok(Expression::new(
                Some(token.location),
                ExpressionKind::Literal(Literal::Boolean(token.text.eq_ignore_ascii_case("true"))),
            )),
            LiteralTree::Interval { location, value, sign, from, to } => {
                let sign = match sign {
                    Some(token) => operators::interval_sign(token)?,
                    None => IntervalSign::Positive,
                };
                Ok(Expression::new(
                    Some(*location),
                    ExpressionKind::Literal(Literal::Interval {
                        value: unquote(&value.text),
                        sign,
                        start_field: operators::interval_field(from)?,
                        end_field: to.as_ref().map(operators::interval_field).transpose()?,
                    }),
                ))
            }
            LiteralTree::TypeConstructor { location, type_name, value } => {
                let value = unquote(&value.text);
                let literal = match type_name.text.to_lowercase().as_str() {
                    "time" => Literal::Time(value),
                    "timestamp" => Literal::Timestamp(value),
                    "decimal" => Literal::Decimal(value),
                    _ => Literal::Generic { type_name: type_name.text.clone(), value },
                };
                Ok(Expression::new(Some(*location), ExpressionKind::Literal(literal)))
            }
        }
    }
}

// ***************** helpers *****************

/// Per-production composition of independently built sibling results.
///
/// No result is an absent value and a single result passes through
/// unchanged. Two or more results have no defined combination rule in this
/// dialect: failing loudly here prevents silently dropping one side.
pub fn combine_results<T>(mut results: Vec<T>) -> Result<Option<T>, BuildError> {
    match results.len() {
        0 => Ok(None),
        1 => Ok(results.pop()),
        _ => BuildError::unsupported(
            "No combination rule is defined for a production with multiple results",
        )
        .err(),
    }
}

fn check(condition: bool, message: &str, location: NodeLocation) -> Result<(), BuildError> {
    if condition {
        Ok(())
    } else {
        BuildError::parsing(message, location).err()
    }
}

fn qualified_name(tree: &QualifiedNameTree) -> QualifiedName {
    QualifiedName::of(tree.parts.iter().map(|p| p.text.as_str()))
}

fn is_distinct(quantifier: &Option<Token>) -> bool {
    quantifier
        .as_ref()
        .map(|q| q.text.eq_ignore_ascii_case("DISTINCT"))
        .unwrap_or(false)
}

/// Strip the surrounding quotes of a string token and collapse doubled
/// quotes.
fn unquote(value: &str) -> String {
    let inner = if value.len() >= 2 { &value[1..value.len() - 1] } else { value };
    inner.replace("''", "'")
}

fn parse_long(token: &Token) -> Result<i64, BuildError> {
    token.text.parse().map_err(|_| {
        BuildError::parsing(format!("Invalid numeric literal: {}", token.text), token.location)
    })
}

fn negate_if(negated: bool, location: NodeLocation, expression: Expression) -> Expression {
    if negated {
        Expression::new(Some(location), ExpressionKind::Not(Box::new(expression)))
    } else {
        expression
    }
}
