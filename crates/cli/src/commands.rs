use crate::{error::CliError, input};
use clap::Subcommand;
use es_query::{EsQueryFiltersConfig, compile_filters};
use filter_manager::map_filter_tree;
use filters::DataViewSet;
use kql_syntax::{KqlNode, LiteralNode, build_wildcard};
use serde_json::{Value, json};
use tracing::info;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile filters into an Elasticsearch bool query
    Compile {
        #[arg(long, help = "JSON file holding a filter or a list of filters")]
        filters: String,

        #[arg(long, help = "JSON file holding a data view or a list of data views")]
        data_views: Option<String>,

        #[arg(long, help = "JSON file with compiler options")]
        config: Option<String>,

        #[arg(long, help = "Pretty-print the output")]
        pretty: bool,
    },
    /// Normalize a filter tree
    Map {
        #[arg(long, help = "JSON file holding the filter")]
        filter: String,

        #[arg(long, help = "Pretty-print the output")]
        pretty: bool,
    },
    /// Print the KQL form of a literal value
    Literal {
        value: String,

        #[arg(long, help = "Treat the value as a quoted phrase")]
        phrase: bool,
    },
    /// Print the KQL, Elasticsearch and query-string forms of a value with `*` wildcards
    Wildcard { value: String },
}

impl Commands {
    pub fn pretty(&self) -> bool {
        match self {
            Commands::Compile { pretty, .. } | Commands::Map { pretty, .. } => *pretty,
            Commands::Literal { .. } | Commands::Wildcard { .. } => false,
        }
    }
}

pub fn run(command: Commands) -> Result<Value, CliError> {
    match command {
        Commands::Compile {
            filters,
            data_views,
            config,
            ..
        } => compile(&filters, data_views.as_deref(), config.as_deref()),
        Commands::Map { filter, .. } => {
            let filter = input::read_filter(&filter)?;
            Ok(serde_json::to_value(map_filter_tree(&filter)?).map_err(CliError::JsonSerialize)?)
        }
        Commands::Literal { value, phrase } => Ok(json!(
            LiteralNode::new(value, phrase).to_kql_expression()
        )),
        Commands::Wildcard { value } => Ok(wildcard(&value)),
    }
}

fn compile(
    filters: &str,
    data_views: Option<&str>,
    config: Option<&str>,
) -> Result<Value, CliError> {
    let filters = input::read_filters(filters)?;
    let data_views = match data_views {
        Some(path) => input::read_data_views(path)?,
        None => Vec::new(),
    };
    let config = match config {
        Some(path) => EsQueryFiltersConfig::from_path(path)?,
        None => EsQueryFiltersConfig::default(),
    };

    info!(
        "Compiling {} filters against {} data views",
        filters.len(),
        data_views.len()
    );
    Ok(compile_filters(
        &filters,
        DataViewSet::from(&data_views),
        &config,
    )?)
}

fn wildcard(value: &str) -> Value {
    match build_wildcard(value) {
        KqlNode::Wildcard(node) => json!({
            "kql": node.to_kql_expression(),
            "elasticsearch": node.to_elasticsearch_query(),
            "queryString": node.to_query_string_query(),
        }),
        literal @ KqlNode::Literal(_) => json!({
            "kql": literal.to_kql_expression(),
            "elasticsearch": literal.to_elasticsearch_query(),
        }),
    }
}
