use anyhow::Result;
use clap::Parser;

use crate::core::cli::{Cli, CliConfig, ResourceKind};
use crate::core::config::QueryConfig;
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG, LIMIT_PARAM, OFFSET_PARAM};
use crate::data::QueryError;
use crate::data::filters::attrs::{
    INSTANCE_FILTERABLE, INSTANCE_SORTABLE, NAMESPACE_SORTABLE, RATELIMIT_FILTERABLE,
    RATELIMIT_SORTABLE, SERVICE_ALIAS_FILTERABLE, SERVICE_ALIAS_SORTABLE, SERVICE_FILTERABLE,
    SERVICE_SORTABLE,
};
use crate::data::filters::{FilterMap, MetadataFilter};
use crate::data::params::{
    parse_list_params, parse_namespace_params, parse_order, parse_routing_config_params,
};
use crate::data::routing::routing_config_queries;
use crate::data::sql::selects::{
    INSTANCE_SELECT, NAMESPACE_SELECT, RATELIMIT_SELECT, SERVICE_ALIAS_SELECT, SERVICE_SELECT,
};
use crate::data::sql::{
    CompiledClause, Order, alias_where_sql_and_args, namespace_where_sql_and_args,
    rule_where_sql_and_args, service_where_sql_and_args, where_sql_and_args,
};

/// Labelled compiled statement (`query`, or `count`/`list` for routing)
pub type LabelledQuery = (&'static str, CompiledClause);

pub struct App;

impl App {
    /// Parse the command line, compile the requested listing and print it
    pub fn run() -> Result<()> {
        let cli = Cli::parse();
        Self::init_logging();

        let config = QueryConfig::load(&CliConfig::from(&cli))?;
        let queries = Self::compile(&cli, &config)?;
        println!("{}", Self::render(&queries, cli.json)?);
        Ok(())
    }

    /// Exit status for a failed run: 2 for rejected input, 1 otherwise
    pub fn exit_code(err: &anyhow::Error) -> i32 {
        match err.downcast_ref::<QueryError>() {
            Some(query_err) if query_err.is_client_error() => {
                tracing::debug!(code = query_err.code(), "Rejected query input");
                2
            }
            _ => 1,
        }
    }

    fn init_logging() {
        let default_filter = format!("warn,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }

    /// Compile the listing described by the command line
    pub fn compile(cli: &Cli, config: &QueryConfig) -> Result<Vec<LabelledQuery>> {
        let pagination = &config.pagination;
        let metadata: MetadataFilter = cli.metadata.iter().cloned().collect();
        if !metadata.is_empty()
            && !matches!(cli.kind, ResourceKind::Instance | ResourceKind::Service)
        {
            anyhow::bail!("Metadata filters only apply to instances and services");
        }

        let query = match cli.kind {
            ResourceKind::Instance => {
                let params =
                    parse_list_params(Self::raw_params(cli), INSTANCE_FILTERABLE, pagination)?;
                let order = Self::order(cli, INSTANCE_SORTABLE)?;
                where_sql_and_args(
                    INSTANCE_SELECT,
                    &params.filter,
                    &metadata,
                    order.as_ref(),
                    params.page,
                )?
            }
            ResourceKind::Service => {
                let params =
                    parse_list_params(Self::raw_params(cli), SERVICE_FILTERABLE, pagination)?;
                let order = Self::order(cli, SERVICE_SORTABLE)?;
                service_where_sql_and_args(
                    SERVICE_SELECT,
                    &params.filter,
                    &metadata,
                    order.as_ref(),
                    params.page,
                )?
            }
            ResourceKind::Alias => {
                let params =
                    parse_list_params(Self::raw_params(cli), SERVICE_ALIAS_FILTERABLE, pagination)?;
                let order = Self::order(cli, SERVICE_ALIAS_SORTABLE)?;
                alias_where_sql_and_args(
                    SERVICE_ALIAS_SELECT,
                    &params.filter,
                    order.as_ref(),
                    params.page,
                )?
            }
            ResourceKind::Namespace => {
                let mut pairs = cli.filters.clone();
                pairs.extend(Self::paging_pairs(cli));
                let params = parse_namespace_params(&pairs, pagination)?;
                let order = Self::order(cli, NAMESPACE_SORTABLE)?;
                namespace_where_sql_and_args(
                    NAMESPACE_SELECT,
                    &params.filters,
                    order.as_ref(),
                    params.page,
                )?
            }
            ResourceKind::Ratelimit => {
                let params =
                    parse_list_params(Self::raw_params(cli), RATELIMIT_FILTERABLE, pagination)?;
                let order = Self::order(cli, RATELIMIT_SORTABLE)?;
                rule_where_sql_and_args(
                    RATELIMIT_SELECT,
                    Some("ratelimit_config"),
                    &params.filter,
                    order.as_ref(),
                    Some(params.page),
                )?
            }
            ResourceKind::Routing => {
                if cli.order.is_some() {
                    anyhow::bail!("Routing configs are always ordered by modification time");
                }
                let params = parse_routing_config_params(Self::raw_params(cli), pagination)?;
                let queries = routing_config_queries(&params.filter, params.page)?;
                return Ok(vec![("count", queries.count), ("list", queries.list)]);
            }
        };

        Ok(vec![("query", query)])
    }

    /// Render compiled queries as text or JSON
    pub fn render(queries: &[LabelledQuery], json: bool) -> Result<String> {
        if json {
            let map: serde_json::Map<String, serde_json::Value> = queries
                .iter()
                .map(|(label, clause)| Ok((label.to_string(), serde_json::to_value(clause)?)))
                .collect::<Result<_, serde_json::Error>>()?;
            return Ok(serde_json::to_string_pretty(&map)?);
        }

        let blocks: Vec<String> = queries
            .iter()
            .map(|(label, clause)| {
                let args: Vec<String> = clause.args.iter().map(|a| a.to_string()).collect();
                format!("-- {}\n{}\n-- args: [{}]", label, clause.sql, args.join(", "))
            })
            .collect();
        Ok(blocks.join("\n\n"))
    }

    fn raw_params(cli: &Cli) -> FilterMap {
        let mut params: FilterMap = cli.filters.iter().cloned().collect();
        params.extend(Self::paging_pairs(cli));
        params
    }

    fn paging_pairs(cli: &Cli) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(offset) = &cli.offset {
            pairs.push((OFFSET_PARAM.to_string(), offset.clone()));
        }
        if let Some(limit) = &cli.limit {
            pairs.push((LIMIT_PARAM.to_string(), limit.clone()));
        }
        pairs
    }

    fn order(cli: &Cli, sortable: &[&str]) -> Result<Option<Order>> {
        let Some(raw) = cli.order.as_deref() else {
            return Ok(None);
        };
        let order = match raw.split_once(':') {
            Some((field, direction)) => parse_order(field, Some(direction), sortable)?,
            None => parse_order(raw, None, sortable)?,
        };
        Ok(Some(order))
    }
}
