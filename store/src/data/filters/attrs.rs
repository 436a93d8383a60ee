//! Attribute allow-lists per resource kind
//!
//! The compilers accept any attribute; the request layer checks incoming
//! parameters against these lists first. `offset` and `limit` are consumed
//! before the check and are not listed.

pub const SERVICE_FILTERABLE: &[&str] = &[
    "name",
    "namespace",
    "business",
    "department",
    "owner",
    "platform_id",
    "ports",
];

pub const SERVICE_SORTABLE: &[&str] = &["name", "namespace", "ctime", "mtime"];

pub const INSTANCE_FILTERABLE: &[&str] = &[
    "service_id",
    "host",
    "port",
    "protocol",
    "version",
    "health_status",
    "isolate",
    "weight",
    "logic_set",
    "managed",
];

pub const INSTANCE_SORTABLE: &[&str] = &["host", "port", "weight", "ctime", "mtime"];

pub const SERVICE_ALIAS_FILTERABLE: &[&str] = &[
    "alias.name",
    "alias.namespace",
    "alias.owner",
    "business",
    "name",
    "namespace",
    "owner",
];

pub const SERVICE_ALIAS_SORTABLE: &[&str] = &["alias.name", "alias.ctime", "alias.mtime"];

pub const NAMESPACE_FILTERABLE: &[&str] = &["name", "owner"];

pub const NAMESPACE_SORTABLE: &[&str] = &["name", "ctime", "mtime"];

pub const ROUTING_CONFIG_FILTERABLE: &[&str] = &["service", "namespace"];

pub const RATELIMIT_FILTERABLE: &[&str] = &["name", "namespace", "owner", "revision"];

pub const RATELIMIT_SORTABLE: &[&str] = &["name", "namespace", "mtime"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_params_are_not_attributes() {
        for list in [
            SERVICE_FILTERABLE,
            INSTANCE_FILTERABLE,
            SERVICE_ALIAS_FILTERABLE,
            NAMESPACE_FILTERABLE,
            ROUTING_CONFIG_FILTERABLE,
            RATELIMIT_FILTERABLE,
        ] {
            assert!(!list.contains(&"offset"));
            assert!(!list.contains(&"limit"));
        }
    }

    #[test]
    fn sortable_columns_have_no_whitespace() {
        for list in [
            SERVICE_SORTABLE,
            INSTANCE_SORTABLE,
            SERVICE_ALIAS_SORTABLE,
            NAMESPACE_SORTABLE,
            RATELIMIT_SORTABLE,
        ] {
            assert!(list.iter().all(|c| !c.contains(char::is_whitespace)));
        }
    }
}
