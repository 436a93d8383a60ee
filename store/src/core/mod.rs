//! Core application infrastructure

pub mod cli;
pub mod config;
pub mod constants;

pub use crate::app::App;
pub use cli::{Cli, CliConfig, ResourceKind};
pub use config::{PaginationConfig, QueryConfig};
