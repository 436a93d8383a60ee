//! Data access layer
//!
//! Compiles list-request filters into parameterized SQL:
//! - `filters` - attribute tables and the per-family filter compilers
//! - `sql` - compiled clauses, placeholders, order/page, metadata, composers
//! - `params` - raw request parameters into compiler input
//! - `routing` - routing config listing queries
//! - `error` - compilation errors
//!
//! Nothing here opens a connection; [`sql::bind_sqlite`] hands a compiled
//! clause to sqlx for the caller to execute.

pub mod error;
pub mod filters;
pub mod params;
pub mod routing;
pub mod sql;

pub use error::QueryError;
pub use filters::{FilterMap, MetadataFilter, MultiValueFilterMap};
pub use params::{ListParams, NamespaceParams};
pub use routing::{RoutingConfigQueries, routing_config_queries};
pub use sql::{CompiledClause, Order, Page, SortDirection, SqlArg};
