//! Query compilation errors
//!
//! Every error the filter compilers, the clause composers and the request
//! parameter layer can surface. Callers map these onto API responses through
//! [`QueryError::code`].

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A boolean attribute (e.g. `managed`) carried an unparsable value
    #[error("Invalid boolean value for {attribute}: {value}")]
    InvalidBooleanValue { attribute: String, value: String },

    /// A list-valued attribute (e.g. `host`) produced no items
    #[error("Empty list filter for {attribute}")]
    EmptyListFilter { attribute: String },

    /// Placeholder count in the SQL text differs from the argument count
    #[error("Placeholder/argument mismatch: {placeholders} placeholders, {args} arguments")]
    PlaceholderArgumentMismatch { placeholders: usize, args: usize },

    /// Filter attribute not in the resource kind's allow-list
    #[error("Attribute not allowed: {0}")]
    AttributeNotAllowed(String),

    /// Malformed request parameter (offset, limit, ...)
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: String, value: String },

    /// Sort field not in the sortable-column allow-list
    #[error("Cannot order by column: {0}")]
    InvalidOrderField(String),

    #[error("Invalid sort direction: {0}")]
    InvalidSortDirection(String),
}

impl QueryError {
    pub fn invalid_boolean(attribute: &str, value: &str) -> Self {
        Self::InvalidBooleanValue {
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }

    pub fn empty_list(attribute: &str) -> Self {
        Self::EmptyListFilter {
            attribute: attribute.to_string(),
        }
    }

    pub fn invalid_parameter(name: &str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            value: value.into(),
        }
    }

    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidBooleanValue { .. } => "INVALID_BOOLEAN_VALUE",
            Self::EmptyListFilter { .. } => "EMPTY_LIST_FILTER",
            Self::PlaceholderArgumentMismatch { .. } => "PLACEHOLDER_ARGUMENT_MISMATCH",
            Self::AttributeNotAllowed(_) => "INVALID_FILTER_ATTRIBUTE",
            Self::InvalidParameter { .. } => "INVALID_PARAMETER",
            Self::InvalidOrderField(_) => "INVALID_ORDER_FIELD",
            Self::InvalidSortDirection(_) => "INVALID_SORT_DIRECTION",
        }
    }

    /// Whether the error was caused by caller input rather than a compiler bug
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::PlaceholderArgumentMismatch { .. })
    }
}
