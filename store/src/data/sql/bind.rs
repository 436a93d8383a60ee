//! Binding compiled clauses to sqlx queries

use sqlx::Sqlite;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;

use super::clause::{CompiledClause, SqlArg};

/// Build a SQLite query with every argument bound in placeholder order
///
/// SQLite accepts the `limit <offset>, <count>` form, so composed clauses run
/// unchanged.
pub fn bind_sqlite(clause: &CompiledClause) -> Query<'_, Sqlite, SqliteArguments<'_>> {
    clause
        .args
        .iter()
        .fold(sqlx::query::<Sqlite>(&clause.sql), |query, arg| match arg {
            SqlArg::Text(value) => query.bind(value.as_str()),
            SqlArg::Int(value) => query.bind(*value),
        })
}
