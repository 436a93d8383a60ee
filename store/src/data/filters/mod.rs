//! Attribute filter compilers
//!
//! Turn a mapping of attribute → value into a parameterized predicate. The
//! maps are ordered, so the same logical filter always compiles to the same
//! SQL text.
//!
//! ## Usage
//!
//! ```
//! use registry_store::data::filters::{FilterMap, GENERIC_ATTRIBUTES};
//!
//! let mut filter = FilterMap::new();
//! filter.insert("host".to_string(), "10.0.0.1,10.0.0.2".to_string());
//! filter.insert("name".to_string(), "order*".to_string());
//!
//! let clause = GENERIC_ATTRIBUTES.compile(&filter).unwrap();
//! assert_eq!(clause.sql, "host in (?,?) and name like ?");
//! ```

use std::collections::BTreeMap;

mod attributes;
pub mod attrs;
mod namespace;

pub use attributes::{
    AttributeRule, AttributeTable, GENERIC_ATTRIBUTES, NAMESPACE_ATTRIBUTES, OWNER_SERVICE_MAP,
    RULE_ATTRIBUTES, SERVICE_ALIAS_ATTRIBUTES,
};
pub use namespace::namespace_filter;

/// Attribute → single value
pub type FilterMap = BTreeMap<String, String>;

/// Attribute → values OR'd together (namespace listings)
pub type MultiValueFilterMap = BTreeMap<String, Vec<String>>;

/// Metadata key → value, intersected
pub type MetadataFilter = BTreeMap<String, String>;
