#![allow(clippy::doc_markdown)]
//! `gector` CLI - demo and search driver for the gector index
//!
//! Usage:
//!   `gector demo --count 1000 --dim 8 -k 5`
//!   `gector search ./vectors.jsonl --query "0.1,0.2,0.3" -k 3`
//!   `gector config`

mod demo;
mod load;
mod output;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use gector_core::{GectorConfig, HnswIndex, LoggingConfig, Vector};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "gector")]
#[command(author, version, about = "gector CLI - multi-level graph vector index")]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to ./gector.toml when present)
    #[arg(long, global = true, env = "GECTOR_CONFIG")]
    config: Option<PathBuf>,

    /// Override `index.max_neighbors`
    #[arg(long, global = true)]
    max_neighbors: Option<usize>,

    /// Override `index.max_levels`
    #[arg(long, global = true)]
    max_levels: Option<usize>,

    /// Override `index.seed`
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for search results
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Index random vectors and query one random point
    Demo {
        /// Number of vectors to insert
        #[arg(long, default_value = "1000")]
        count: usize,

        /// Vector dimension
        #[arg(long, default_value = "5")]
        dim: usize,

        /// Number of neighbors to return
        #[arg(short, default_value = "5")]
        k: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Load vectors from a JSONL file and query them
    Search {
        /// JSONL file, one `{"id": ..., "values": [...]}` per line
        file: PathBuf,

        /// Query coordinates, comma separated
        #[arg(short, long, allow_hyphen_values = true)]
        query: String,

        /// Number of neighbors to return
        #[arg(short, default_value = "5")]
        k: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    fn effective_config(&self) -> anyhow::Result<GectorConfig> {
        let mut config = match &self.config {
            Some(path) => GectorConfig::load_from_path(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => GectorConfig::load()?,
        };

        if let Some(max_neighbors) = self.max_neighbors {
            config.index.max_neighbors = max_neighbors;
        }
        if let Some(max_levels) = self.max_levels {
            config.index.max_levels = max_levels;
        }
        if self.seed.is_some() {
            config.index.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout stays parseable.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn parse_query(raw: &str) -> anyhow::Result<Vector> {
    let values = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid query coordinate '{}'", part.trim()))
        })
        .collect::<anyhow::Result<Vec<f64>>>()?;
    Ok(Vector::new("query", values))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.effective_config()?;
    init_logging(&config.logging);

    match cli.command {
        Commands::Demo {
            count,
            dim,
            k,
            format,
        } => {
            let report = demo::run(&config.index, count, dim, k)?;
            output::print_demo(&report, format)?;
        }
        Commands::Search {
            file,
            query,
            k,
            format,
        } => {
            let query = parse_query(&query)?;
            let loaded = load::load_jsonl(&file)?;
            if let Some(dimension) = loaded.dimension {
                if query.dimension() != dimension {
                    anyhow::bail!(
                        "Query has {} coordinates, vectors in {} have {}",
                        query.dimension(),
                        file.display(),
                        dimension
                    );
                }
            }

            let mut index = HnswIndex::from_config(&config.index);
            for vector in loaded.vectors {
                index.add_vector(vector.id.clone(), vector);
            }
            tracing::info!(
                loaded = index.len(),
                skipped = loaded.skipped,
                "vectors indexed"
            );

            let results = index.search(&query, k);
            output::print_results(&results, format)?;
        }
        Commands::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
