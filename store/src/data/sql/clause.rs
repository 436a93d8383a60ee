//! Compiled SQL fragments
//!
//! A [`CompiledClause`] is SQL text with `?` placeholders plus the arguments
//! that bind to them, left to right. Fragments carry no leading or trailing
//! whitespace; appending inserts a single space between non-empty parts.

use serde::Serialize;

use crate::data::error::QueryError;

/// Positional argument bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SqlArg {
    Text(String),
    Int(i64),
}

impl From<&str> for SqlArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SqlArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SqlArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for SqlArg {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for SqlArg {
    fn from(value: bool) -> Self {
        Self::Int(i64::from(value))
    }
}

impl std::fmt::Display for SqlArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlArg::Text(s) => write!(f, "{:?}", s),
            SqlArg::Int(n) => write!(f, "{}", n),
        }
    }
}

/// SQL fragment plus its ordered positional arguments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompiledClause {
    pub sql: String,
    pub args: Vec<SqlArg>,
}

impl CompiledClause {
    pub fn new(sql: impl Into<String>, args: Vec<SqlArg>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }

    /// Fragment without arguments
    pub fn text(sql: impl Into<String>) -> Self {
        Self::new(sql, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Append raw SQL text, space separated
    pub fn push_sql(&mut self, sql: &str) {
        if sql.is_empty() {
            return;
        }
        if !self.sql.is_empty() {
            self.sql.push(' ');
        }
        self.sql.push_str(sql);
    }

    /// Append another fragment, its arguments following ours. Balance is
    /// checked once on the finished clause with [`verified`](Self::verified).
    pub fn append(&mut self, other: CompiledClause) {
        self.push_sql(&other.sql);
        self.args.extend(other.args);
    }

    /// Join fragments with a separator such as `" and "`, skipping empty ones
    pub fn join(parts: impl IntoIterator<Item = CompiledClause>, separator: &str) -> Self {
        let mut joined = CompiledClause::default();
        for part in parts.into_iter().filter(|p| !p.is_empty()) {
            if !joined.sql.is_empty() {
                joined.sql.push_str(separator);
            }
            joined.sql.push_str(&part.sql);
            joined.args.extend(part.args);
        }
        joined
    }

    /// Wrap the text in parentheses
    pub fn parenthesized(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            sql: format!("({})", self.sql),
            args: self.args,
        }
    }

    /// Number of `?` placeholders outside `'...'` string literals
    pub fn placeholder_count(&self) -> usize {
        let mut in_literal = false;
        let mut count = 0;
        for c in self.sql.chars() {
            match c {
                // A doubled quote inside a literal toggles twice
                '\'' => in_literal = !in_literal,
                '?' if !in_literal => count += 1,
                _ => {}
            }
        }
        count
    }

    /// Check that every placeholder has exactly one argument
    pub fn verify(&self) -> Result<(), QueryError> {
        let placeholders = self.placeholder_count();
        if placeholders != self.args.len() {
            tracing::warn!(
                sql = %self.sql,
                placeholders,
                args = self.args.len(),
                "Compiled clause placeholder/argument mismatch"
            );
            return Err(QueryError::PlaceholderArgumentMismatch {
                placeholders,
                args: self.args.len(),
            });
        }
        Ok(())
    }

    /// [`verify`](Self::verify), passing the clause through on success
    pub fn verified(self) -> Result<Self, QueryError> {
        self.verify()?;
        Ok(self)
    }
}
