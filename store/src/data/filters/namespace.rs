//! Namespace filter
//!
//! Namespaces take several values per attribute. Unlike the other listings
//! pagination is mandatory: `limit ?, ?` is always the tail of the fragment.

use super::MultiValueFilterMap;
use super::attributes::NAMESPACE_ATTRIBUTES;
use crate::data::error::QueryError;
use crate::data::sql::{CompiledClause, Order, Page, compose};

/// `[where (a = ? or a = ?) and (owner like ?)] [order by f d] limit ?, ?`
pub fn namespace_filter(
    filters: &MultiValueFilterMap,
    order: Option<&Order>,
    offset: u32,
    limit: u32,
) -> Result<CompiledClause, QueryError> {
    let groups = NAMESPACE_ATTRIBUTES.compile_any_of(filters)?;
    compose(
        "",
        groups,
        CompiledClause::default(),
        order,
        Some(Page::new(offset, limit)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sql::SqlArg;

    fn filters(pairs: &[(&str, Vec<&str>)]) -> MultiValueFilterMap {
        pairs
            .iter()
            .map(|(k, values)| (k.to_string(), values.iter().map(|v| v.to_string()).collect()))
            .collect()
    }

    #[test]
    fn owner_group_with_mandatory_limit() {
        let clause =
            namespace_filter(&filters(&[("owner", vec!["alice", "bob"])]), None, 0, 10).unwrap();
        assert_eq!(clause.sql, "where (owner like ? or owner like ?) limit ?, ?");
        assert_eq!(
            clause.args,
            vec![
                SqlArg::from("%alice%"),
                SqlArg::from("%bob%"),
                SqlArg::Int(0),
                SqlArg::Int(10),
            ]
        );
    }

    #[test]
    fn no_groups_still_limits() {
        let clause = namespace_filter(&MultiValueFilterMap::new(), None, 20, 10).unwrap();
        assert_eq!(clause.sql, "limit ?, ?");
        assert_eq!(clause.args, vec![SqlArg::Int(20), SqlArg::Int(10)]);

        let clause = namespace_filter(&filters(&[("name", vec![])]), None, 0, 10).unwrap();
        assert_eq!(clause.sql, "limit ?, ?");
    }

    #[test]
    fn groups_with_order() {
        let clause = namespace_filter(
            &filters(&[("owner", vec!["carol"]), ("name", vec!["Production", "Test"])]),
            Some(&Order::desc("ctime")),
            0,
            100,
        )
        .unwrap();
        assert_eq!(
            clause.sql,
            "where (name = ? or name = ?) and (owner like ?) order by ctime desc limit ?, ?"
        );
        assert_eq!(clause.args.len(), 5);
        assert_eq!(clause.placeholder_count(), 5);
        assert_eq!(clause.args[3], SqlArg::Int(0));
        assert_eq!(clause.args[4], SqlArg::Int(100));
    }
}
