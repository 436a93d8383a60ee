//! Ordering and pagination fragments

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::clause::CompiledClause;
use crate::data::error::QueryError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(QueryError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// Sort order. The field is emitted verbatim, so it must come from a
/// sortable-column allow-list (see [`Order::validate`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Order {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl Order {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Validate the sort field against a sortable-column allow-list
    pub fn validate(&self, sortable: &[&str]) -> Result<(), QueryError> {
        if !sortable.contains(&self.field.as_str()) {
            return Err(QueryError::InvalidOrderField(self.field.clone()));
        }
        Ok(())
    }
}

/// Offset/limit pair, always bound positionally in that order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Page {
    pub offset: u32,
    pub limit: u32,
}

impl Page {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }
}

/// `order by <field> <direction>` and/or `limit ?, ?` with args `[offset, limit]`
pub fn order_and_page(order: Option<&Order>, page: Option<Page>) -> CompiledClause {
    let mut clause = CompiledClause::default();
    if let Some(order) = order {
        clause.push_sql(&format!("order by {} {}", order.field, order.direction));
    }
    if let Some(page) = page {
        clause.push_sql("limit ?, ?");
        clause.args.push(page.offset.into());
        clause.args.push(page.limit.into());
    }
    clause
}
