use clap::{Parser, ValueEnum};

use std::path::PathBuf;

use super::constants::{ENV_CONFIG, ENV_DEFAULT_LIMIT, ENV_MAX_LIMIT};

/// Resource kind whose list query is compiled
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    Instance,
    Service,
    Alias,
    Namespace,
    Routing,
    Ratelimit,
}

#[derive(Parser, Debug)]
#[command(name = "registry-sql")]
#[command(
    version,
    about = "Compile registry list filters into parameterized SQL",
    long_about = None
)]
pub struct Cli {
    /// Resource kind to query
    #[arg(long, short = 'k', value_enum, default_value = "instance")]
    pub kind: ResourceKind,

    /// Filter attribute as key=value (repeatable; namespace keys may repeat)
    #[arg(long = "filter", short = 'f', value_parser = parse_key_value)]
    pub filters: Vec<(String, String)>,

    /// Metadata pair as key=value (repeatable, instance and service only)
    #[arg(long = "meta", short = 'm', value_parser = parse_key_value)]
    pub metadata: Vec<(String, String)>,

    /// Sort order as field[:asc|desc]
    #[arg(long, short = 'o')]
    pub order: Option<String>,

    /// Page offset
    #[arg(long)]
    pub offset: Option<String>,

    /// Page size (clamped to the configured maximum)
    #[arg(long)]
    pub limit: Option<String>,

    /// Print the compiled queries as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to config file
    #[arg(long, short = 'c', env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Page size used when no limit is given
    #[arg(long, env = ENV_DEFAULT_LIMIT)]
    pub default_limit: Option<u32>,

    /// Largest allowed page size
    #[arg(long, env = ENV_MAX_LIMIT)]
    pub max_limit: Option<u32>,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid key=value pair: {}", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Missing key in: {}", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Configuration-relevant subset of the command line
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub config: Option<PathBuf>,
    pub default_limit: Option<u32>,
    pub max_limit: Option<u32>,
}

impl From<&Cli> for CliConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            default_limit: cli.default_limit,
            max_limit: cli.max_limit,
        }
    }
}
