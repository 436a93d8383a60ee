//! Routing config listing
//!
//! Routing configs are keyed by service id and listed joined with their
//! service, newest modification first. Deleted configs (`flag = 1`) are
//! never returned.

use crate::data::error::QueryError;
use crate::data::filters::{FilterMap, RULE_ATTRIBUTES};
use crate::data::sql::{CompiledClause, Order, Page, order_and_page};

const ROUTING_CONFIG_JOIN: &str =
    "from service, routing_config where service.id = routing_config.id and routing_config.flag = 0";

const ROUTING_CONFIG_COLUMNS: &str = "select routing_config.id, service.name, service.namespace, \
     routing_config.in_bounds, routing_config.out_bounds, routing_config.revision, \
     routing_config.ctime, routing_config.mtime";

/// Filter attributes qualify against the joined service row
const FILTER_TABLE: &str = "service";

/// Total-count and page queries for one routing config listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingConfigQueries {
    pub count: CompiledClause,
    pub list: CompiledClause,
}

pub fn routing_config_queries(
    filter: &FilterMap,
    page: Page,
) -> Result<RoutingConfigQueries, QueryError> {
    let predicate = RULE_ATTRIBUTES.compile_qualified(Some(FILTER_TABLE), filter)?;

    let mut count = CompiledClause::text(format!("select count(*) {}", ROUTING_CONFIG_JOIN));
    let mut list = CompiledClause::text(format!(
        "{} {}",
        ROUTING_CONFIG_COLUMNS, ROUTING_CONFIG_JOIN
    ));
    if !predicate.is_empty() {
        count.push_sql("and");
        count.append(predicate.clone());
        list.push_sql("and");
        list.append(predicate);
    }
    list.append(order_and_page(Some(&Order::desc("routing_config.mtime")), Some(page)));

    tracing::trace!(sql = %list.sql, args = list.args.len(), "Composed routing config query");
    Ok(RoutingConfigQueries {
        count: count.verified()?,
        list: list.verified()?,
    })
}
