//! Request parameter parsing
//!
//! Turns raw list-request parameters into compiler input: pagination is
//! pulled out first, every remaining key must be on the resource kind's
//! allow-list, and the sort field must be sortable.

use crate::core::config::PaginationConfig;
use crate::core::constants::{LIMIT_PARAM, OFFSET_PARAM};
use crate::data::error::QueryError;
use crate::data::filters::attrs::{NAMESPACE_FILTERABLE, ROUTING_CONFIG_FILTERABLE};
use crate::data::filters::{FilterMap, MultiValueFilterMap};
use crate::data::sql::{Order, Page, SortDirection};

/// Single-valued filter plus its page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub filter: FilterMap,
    pub page: Page,
}

/// Multi-valued namespace filter plus its page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceParams {
    pub filters: MultiValueFilterMap,
    pub page: Page,
}

fn parse_u32(name: &str, value: &str) -> Result<u32, QueryError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| QueryError::invalid_parameter(name, value))
}

/// Remove `offset` and `limit` from the parameters and resolve the page.
/// Offset defaults to 0; limit defaults to the configured default and is
/// clamped to the configured maximum.
pub fn parse_offset_and_limit(
    params: &mut FilterMap,
    config: &PaginationConfig,
) -> Result<Page, QueryError> {
    let offset = match params.remove(OFFSET_PARAM) {
        Some(value) => parse_u32(OFFSET_PARAM, &value)?,
        None => 0,
    };
    let limit = match params.remove(LIMIT_PARAM) {
        Some(value) => {
            let requested = parse_u32(LIMIT_PARAM, &value)?;
            let limit = config.clamp(requested);
            if limit != requested {
                tracing::debug!(requested, limit, "Clamped page size");
            }
            limit
        }
        None => config.default_limit,
    };
    Ok(Page::new(offset, limit))
}

fn check_allowed(attribute: &str, allowed: &[&str]) -> Result<(), QueryError> {
    if !allowed.contains(&attribute) {
        tracing::warn!(%attribute, "Filter attribute is not allowed");
        return Err(QueryError::AttributeNotAllowed(attribute.to_string()));
    }
    Ok(())
}

/// Split raw parameters into an allow-listed filter and a page
pub fn parse_list_params(
    mut params: FilterMap,
    allowed: &[&str],
    config: &PaginationConfig,
) -> Result<ListParams, QueryError> {
    let page = parse_offset_and_limit(&mut params, config)?;
    for attribute in params.keys() {
        check_allowed(attribute, allowed)?;
    }
    Ok(ListParams {
        filter: params,
        page,
    })
}

/// Routing config listing: `service` and `namespace` filters, where the
/// `service` parameter names the service's `name` column
pub fn parse_routing_config_params(
    params: FilterMap,
    config: &PaginationConfig,
) -> Result<ListParams, QueryError> {
    let mut parsed = parse_list_params(params, ROUTING_CONFIG_FILTERABLE, config)?;
    if let Some(service) = parsed.filter.remove("service") {
        parsed.filter.insert("name".to_string(), service);
    }
    Ok(parsed)
}

/// Namespace listing from repeated `key=value` pairs. Values of the same key
/// are kept in request order; a repeated `offset`/`limit` keeps the last one.
pub fn parse_namespace_params(
    pairs: &[(String, String)],
    config: &PaginationConfig,
) -> Result<NamespaceParams, QueryError> {
    let mut paging = FilterMap::new();
    let mut filters = MultiValueFilterMap::new();
    for (key, value) in pairs {
        if key == OFFSET_PARAM || key == LIMIT_PARAM {
            paging.insert(key.clone(), value.clone());
            continue;
        }
        check_allowed(key, NAMESPACE_FILTERABLE)?;
        filters.entry(key.clone()).or_default().push(value.clone());
    }
    let page = parse_offset_and_limit(&mut paging, config)?;
    Ok(NamespaceParams { filters, page })
}

/// Sort order from a field and optional direction (ascending by default)
pub fn parse_order(
    field: &str,
    direction: Option<&str>,
    sortable: &[&str],
) -> Result<Order, QueryError> {
    let direction = match direction {
        Some(direction) => direction.parse::<SortDirection>()?,
        None => SortDirection::default(),
    };
    let order = Order::new(field.trim(), direction);
    order.validate(sortable)?;
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::attrs::{INSTANCE_FILTERABLE, INSTANCE_SORTABLE};

    fn params(pairs: &[(&str, &str)]) -> FilterMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn pairs(values: &[(&str, &str)]) -> Vec<(String, String)> {
        values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn pagination() -> PaginationConfig {
        PaginationConfig {
            default_limit: 20,
            max_limit: 100,
        }
    }

    #[test]
    fn offset_and_limit_defaults() {
        let mut p = params(&[("host", "10.0.0.1")]);
        let page = parse_offset_and_limit(&mut p, &pagination()).unwrap();
        assert_eq!(page, Page::new(0, 20));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn offset_and_limit_are_removed_and_clamped() {
        let mut p = params(&[("offset", "40"), ("limit", "1000"), ("host", "h")]);
        let page = parse_offset_and_limit(&mut p, &pagination()).unwrap();
        assert_eq!(page, Page::new(40, 100));
        assert!(!p.contains_key("offset"));
        assert!(!p.contains_key("limit"));
    }

    #[test]
    fn offset_and_limit_reject_garbage() {
        let mut p = params(&[("limit", "ten")]);
        assert_eq!(
            parse_offset_and_limit(&mut p, &pagination()),
            Err(QueryError::invalid_parameter("limit", "ten"))
        );
        let mut p = params(&[("offset", "-1")]);
        assert_eq!(
            parse_offset_and_limit(&mut p, &pagination()),
            Err(QueryError::invalid_parameter("offset", "-1"))
        );
    }

    #[test]
    fn list_params_enforce_allow_list() {
        let parsed = parse_list_params(
            params(&[("host", "10.0.0.1"), ("managed", "true"), ("limit", "5")]),
            INSTANCE_FILTERABLE,
            &pagination(),
        )
        .unwrap();
        assert_eq!(parsed.page, Page::new(0, 5));
        assert_eq!(parsed.filter, params(&[("host", "10.0.0.1"), ("managed", "true")]));

        assert_eq!(
            parse_list_params(params(&[("token", "secret")]), INSTANCE_FILTERABLE, &pagination()),
            Err(QueryError::AttributeNotAllowed("token".to_string()))
        );
    }

    #[test]
    fn routing_params_rename_service() {
        let parsed = parse_routing_config_params(
            params(&[("service", "order-api"), ("namespace", "Production"), ("offset", "10")]),
            &pagination(),
        )
        .unwrap();
        assert_eq!(parsed.filter, params(&[("name", "order-api"), ("namespace", "Production")]));
        assert_eq!(parsed.page, Page::new(10, 20));
    }

    #[test]
    fn routing_params_reject_other_attributes() {
        assert_eq!(
            parse_routing_config_params(params(&[("name", "order-api")]), &pagination()),
            Err(QueryError::AttributeNotAllowed("name".to_string()))
        );
    }

    #[test]
    fn namespace_params_group_repeated_keys() {
        let parsed = parse_namespace_params(
            &pairs(&[
                ("owner", "alice"),
                ("name", "Production"),
                ("owner", "bob"),
                ("limit", "50"),
                ("limit", "10"),
            ]),
            &pagination(),
        )
        .unwrap();
        assert_eq!(
            parsed.filters.get("owner"),
            Some(&vec!["alice".to_string(), "bob".to_string()])
        );
        assert_eq!(parsed.filters.get("name"), Some(&vec!["Production".to_string()]));
        assert_eq!(parsed.page, Page::new(0, 10));
    }

    #[test]
    fn namespace_params_reject_unknown_keys() {
        assert_eq!(
            parse_namespace_params(&pairs(&[("comment", "x")]), &pagination()),
            Err(QueryError::AttributeNotAllowed("comment".to_string()))
        );
    }

    #[test]
    fn order_parsing() {
        assert_eq!(
            parse_order("ctime", Some("desc"), INSTANCE_SORTABLE),
            Ok(Order::desc("ctime"))
        );
        assert_eq!(parse_order("host", None, INSTANCE_SORTABLE), Ok(Order::asc("host")));
        assert_eq!(
            parse_order("password", None, INSTANCE_SORTABLE),
            Err(QueryError::InvalidOrderField("password".to_string()))
        );
        assert_eq!(
            parse_order("host", Some("up"), INSTANCE_SORTABLE),
            Err(QueryError::InvalidSortDirection("up".to_string()))
        );
    }
}
