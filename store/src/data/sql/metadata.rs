//! Metadata side-table subqueries
//!
//! Metadata lives in side tables with one `(id, mkey, mvalue)` row per entry
//! per owning entity. Each requested pair becomes its own
//! `id in (select ...)` predicate, so several pairs intersect.

use super::clause::CompiledClause;
use crate::data::filters::MetadataFilter;

/// Metadata side table and the owner column it correlates with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataSource {
    pub id_column: &'static str,
    pub table: &'static str,
}

pub const INSTANCE_METADATA: MetadataSource = MetadataSource {
    id_column: "instance.id",
    table: "instance_metadata",
};

pub const SERVICE_METADATA: MetadataSource = MetadataSource {
    id_column: "service.id",
    table: "service_metadata",
};

impl MetadataSource {
    pub fn compile(&self, metas: &MetadataFilter) -> CompiledClause {
        metadata_subquery(self.id_column, self.table, metas)
    }
}

/// One `<id_column> in (select id from <table> where mkey = ? and mvalue = ?)`
/// predicate per entry, joined with `and`; args are key, value per entry
pub fn metadata_subquery(id_column: &str, table: &str, metas: &MetadataFilter) -> CompiledClause {
    let predicate = format!(
        "{} in (select id from {} where mkey = ? and mvalue = ?)",
        id_column, table
    );
    CompiledClause::join(
        metas.iter().map(|(key, value)| {
            CompiledClause::new(
                predicate.clone(),
                vec![key.as_str().into(), value.as_str().into()],
            )
        }),
        " and ",
    )
}
