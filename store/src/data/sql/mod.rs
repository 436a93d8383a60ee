//! SQL fragment building
//!
//! Everything here is a pure text/argument factory: fragments use `?`
//! placeholders and never embed caller values in the SQL text. The `order by`
//! field and column qualifiers are the exception: callers take them from
//! allow-lists, and a stray `?` in them fails verification.

mod bind;
mod clause;
mod compose;
mod metadata;
mod order;
mod placeholders;
pub mod selects;

#[cfg(test)]
pub(crate) mod testing;

pub use bind::bind_sqlite;
pub use clause::{CompiledClause, SqlArg};
pub use compose::{
    alias_where_sql_and_args, namespace_where_sql_and_args, rule_where_sql_and_args,
    service_where_sql_and_args, where_sql_and_args,
};
pub use metadata::{INSTANCE_METADATA, MetadataSource, SERVICE_METADATA, metadata_subquery};
pub use order::{Order, Page, SortDirection, order_and_page};
pub use placeholders::placeholders;

pub(crate) use compose::compose;
