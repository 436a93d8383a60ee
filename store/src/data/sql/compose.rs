//! Clause composers
//!
//! Stitch a base select, a compiled filter, an optional metadata fragment and
//! the order/page fragment into one statement. Arguments follow the same
//! order as the fragments: filter, metadata, offset, limit.

use super::clause::CompiledClause;
use super::metadata::{INSTANCE_METADATA, MetadataSource, SERVICE_METADATA};
use super::order::{Order, Page, order_and_page};
use crate::data::error::QueryError;
use crate::data::filters::{
    FilterMap, GENERIC_ATTRIBUTES, MetadataFilter, MultiValueFilterMap, RULE_ATTRIBUTES,
    SERVICE_ALIAS_ATTRIBUTES, namespace_filter,
};

/// Append `where <filter>`, then `<where|and> <metadata>`, then order/page
pub(crate) fn compose(
    base: &str,
    filter: CompiledClause,
    metadata: CompiledClause,
    order: Option<&Order>,
    page: Option<Page>,
) -> Result<CompiledClause, QueryError> {
    let mut clause = CompiledClause::text(base);
    let mut conjunction = "where";
    if !filter.is_empty() {
        clause.push_sql("where");
        clause.append(filter);
        conjunction = "and";
    }
    if !metadata.is_empty() {
        clause.push_sql(conjunction);
        clause.append(metadata);
    }
    clause.append(order_and_page(order, page));

    tracing::trace!(sql = %clause.sql, args = clause.args.len(), "Composed query");
    clause.verified()
}

fn with_metadata(
    base: &str,
    source: &MetadataSource,
    filter: &FilterMap,
    metadata: &MetadataFilter,
    order: Option<&Order>,
    page: Page,
) -> Result<CompiledClause, QueryError> {
    let filter = GENERIC_ATTRIBUTES.compile(filter)?;
    compose(base, filter, source.compile(metadata), order, Some(page))
}

/// Instance listing: generic filter, instance metadata intersection, order/page
pub fn where_sql_and_args(
    base: &str,
    filter: &FilterMap,
    metadata: &MetadataFilter,
    order: Option<&Order>,
    page: Page,
) -> Result<CompiledClause, QueryError> {
    with_metadata(base, &INSTANCE_METADATA, filter, metadata, order, page)
}

/// Service listing: generic filter, service metadata intersection, order/page
pub fn service_where_sql_and_args(
    base: &str,
    filter: &FilterMap,
    metadata: &MetadataFilter,
    order: Option<&Order>,
    page: Page,
) -> Result<CompiledClause, QueryError> {
    with_metadata(base, &SERVICE_METADATA, filter, metadata, order, page)
}

/// Alias listing: ownership resolved through the owner map, no metadata step
pub fn alias_where_sql_and_args(
    base: &str,
    filter: &FilterMap,
    order: Option<&Order>,
    page: Page,
) -> Result<CompiledClause, QueryError> {
    let filter = SERVICE_ALIAS_ATTRIBUTES.compile(filter)?;
    compose(base, filter, CompiledClause::default(), order, Some(page))
}

/// Rule listing with an optional column qualifier; pagination optional
pub fn rule_where_sql_and_args(
    base: &str,
    table: Option<&str>,
    filter: &FilterMap,
    order: Option<&Order>,
    page: Option<Page>,
) -> Result<CompiledClause, QueryError> {
    let filter = RULE_ATTRIBUTES.compile_qualified(table, filter)?;
    compose(base, filter, CompiledClause::default(), order, page)
}

/// Namespace listing: OR-groups per attribute, mandatory pagination
pub fn namespace_where_sql_and_args(
    base: &str,
    filters: &MultiValueFilterMap,
    order: Option<&Order>,
    page: Page,
) -> Result<CompiledClause, QueryError> {
    let mut clause = CompiledClause::text(base);
    clause.append(namespace_filter(filters, order, page.offset, page.limit)?);
    clause.verified()
}
