//! Attribute tables
//!
//! Each entity family maps attribute names onto an [`AttributeRule`]; any
//! attribute not listed compiles to plain equality. Adding an attribute with
//! special semantics is a one-line change to the family's table.

use super::{FilterMap, MultiValueFilterMap};
use crate::data::error::QueryError;
use crate::data::sql::{CompiledClause, SqlArg, placeholders};

/// Side table recording ownership per (service, namespace) pair
pub const OWNER_SERVICE_MAP: &str = "owner_service_map";

/// How one attribute value becomes a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeRule {
    /// `col = ?`, value unchanged
    Equal,
    /// `col like ?`, value wrapped as `%value%`. The value is not escaped,
    /// so `%` and `_` in it act as wildcards.
    Contains,
    /// Like `Contains` when the value ends in `*` (the `*` is dropped);
    /// otherwise `Equal`. This is a substring match, not a prefix match.
    Wildcard,
    /// `col in (?,...)`, value split on `,`
    List,
    /// `col = ?`, value parsed as a boolean and bound as 1/0
    Flag,
    /// `(<columns>) in (select service, namespace from owner_service_map where owner = ?)`
    OwnerLookup(&'static str),
}

impl AttributeRule {
    pub fn compile(&self, column: &str, value: &str) -> Result<CompiledClause, QueryError> {
        let clause = match self {
            AttributeRule::Equal => equal(column, value),
            AttributeRule::Contains => contains(column, value),
            AttributeRule::Wildcard => match value.strip_suffix('*') {
                Some(stem) => contains(column, stem),
                None => equal(column, value),
            },
            AttributeRule::List => {
                let items: Vec<SqlArg> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(SqlArg::from)
                    .collect();
                if items.is_empty() {
                    return Err(QueryError::empty_list(column));
                }
                CompiledClause::new(
                    format!("{} in ({})", column, placeholders(items.len() as i64)),
                    items,
                )
            }
            AttributeRule::Flag => {
                let flag = parse_bool(value)
                    .ok_or_else(|| QueryError::invalid_boolean(column, value))?;
                CompiledClause::new(format!("{} = ?", column), vec![flag.into()])
            }
            AttributeRule::OwnerLookup(columns) => CompiledClause::new(
                format!(
                    "({}) in (select service, namespace from {} where owner = ?)",
                    columns, OWNER_SERVICE_MAP
                ),
                vec![value.into()],
            ),
        };
        Ok(clause)
    }
}

fn equal(column: &str, value: &str) -> CompiledClause {
    CompiledClause::new(format!("{} = ?", column), vec![value.into()])
}

fn contains(column: &str, value: &str) -> CompiledClause {
    CompiledClause::new(format!("{} like ?", column), vec![format!("%{}%", value).into()])
}

/// Accepts `1 t T true TRUE True` and `0 f F false FALSE False`
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Attribute semantics for one entity family
#[derive(Debug)]
pub struct AttributeTable {
    name: &'static str,
    rules: &'static [(&'static str, AttributeRule)],
}

impl AttributeTable {
    pub const fn new(name: &'static str, rules: &'static [(&'static str, AttributeRule)]) -> Self {
        Self { name, rules }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rule for an attribute, `Equal` when the table has no entry
    pub fn rule(&self, attribute: &str) -> AttributeRule {
        self.rules
            .iter()
            .find(|(name, _)| *name == attribute)
            .map(|(_, rule)| *rule)
            .unwrap_or(AttributeRule::Equal)
    }

    /// `pred and pred ...` in attribute order; empty for an empty filter
    pub fn compile(&self, filter: &FilterMap) -> Result<CompiledClause, QueryError> {
        self.compile_qualified(None, filter)
    }

    /// Like [`compile`](Self::compile), prefixing every column with `<table>.`
    pub fn compile_qualified(
        &self,
        table: Option<&str>,
        filter: &FilterMap,
    ) -> Result<CompiledClause, QueryError> {
        let parts = filter
            .iter()
            .map(|(attribute, value)| {
                self.rule(attribute)
                    .compile(&qualify(table, attribute), value)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let clause = CompiledClause::join(parts, " and ");
        tracing::trace!(
            family = self.name,
            sql = %clause.sql,
            args = clause.args.len(),
            "Compiled attribute filter"
        );
        Ok(clause)
    }

    /// One parenthesized OR-group per attribute, groups joined with `and`.
    /// Attributes with no values are skipped.
    pub fn compile_any_of(
        &self,
        filters: &MultiValueFilterMap,
    ) -> Result<CompiledClause, QueryError> {
        let mut groups = Vec::with_capacity(filters.len());
        for (attribute, values) in filters {
            let rule = self.rule(attribute);
            let alternatives = values
                .iter()
                .map(|value| rule.compile(attribute, value))
                .collect::<Result<Vec<_>, _>>()?;
            groups.push(CompiledClause::join(alternatives, " or ").parenthesized());
        }
        let clause = CompiledClause::join(groups, " and ");
        tracing::trace!(
            family = self.name,
            sql = %clause.sql,
            args = clause.args.len(),
            "Compiled multi-value filter"
        );
        Ok(clause)
    }
}

fn qualify(table: Option<&str>, attribute: &str) -> String {
    match table {
        Some(table) if !table.is_empty() => format!("{}.{}", table, attribute),
        _ => attribute.to_string(),
    }
}

/// Services and instances
pub static GENERIC_ATTRIBUTES: AttributeTable = AttributeTable::new(
    "generic",
    &[
        ("alias.owner", AttributeRule::Contains),
        ("business", AttributeRule::Contains),
        ("host", AttributeRule::List),
        ("managed", AttributeRule::Flag),
        ("name", AttributeRule::Wildcard),
        ("owner", AttributeRule::Contains),
    ],
);

/// Services listed through the alias join; ownership resolves via the owner map
pub static SERVICE_ALIAS_ATTRIBUTES: AttributeTable = AttributeTable::new(
    "service_alias",
    &[
        (
            "alias.owner",
            AttributeRule::OwnerLookup("alias.name, alias.namespace"),
        ),
        ("business", AttributeRule::Contains),
        ("name", AttributeRule::Wildcard),
        (
            "owner",
            AttributeRule::OwnerLookup("service.name, service.namespace"),
        ),
    ],
);

/// Routing and rate-limit rules
pub static RULE_ATTRIBUTES: AttributeTable =
    AttributeTable::new("rule", &[("owner", AttributeRule::Contains)]);

pub static NAMESPACE_ATTRIBUTES: AttributeTable =
    AttributeTable::new("namespace", &[("owner", AttributeRule::Contains)]);
