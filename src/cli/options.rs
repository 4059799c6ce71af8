use crate::topfile::DEFAULT_TOPFILE_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SaltStack topfile utilities
#[derive(Parser, Debug)]
#[command(name = "tfu")]
#[command(about = "Query SaltStack topfiles for role targets and matching nodes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct TopfileUtilCli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to topfile
    #[arg(short, long, global = true, default_value = DEFAULT_TOPFILE_PATH)]
    pub topfile: PathBuf,

    /// Enable verbose output (repeat for more detail)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print salt targets that match roles.
    Targets {
        /// Roles to look up (all targets when omitted)
        roles: Vec<String>,
    },

    /// Print nodes that match roles.
    Nodes {
        /// YAML list of node names
        nodelist: PathBuf,

        /// Roles to look up (all targets when omitted)
        roles: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        out: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Roles, targets and nodes as an indented tree
    Pretty,
    /// Sorted node names per role under a comment header
    Txt,
    /// A single compact JSON object, keys in topfile order
    Json,
    /// A single YAML document, keys in topfile order rather than sorted
    Yaml,
}

/// Settings for one query, independent of how they were supplied
#[derive(Debug, Clone)]
pub struct QueryOptions {
    pub topfile: PathBuf,
    pub roles: Vec<String>,
    pub verbosity: u8,
}

impl From<&TopfileUtilCli> for QueryOptions {
    fn from(cli: &TopfileUtilCli) -> Self {
        let roles = match &cli.command {
            Commands::Targets { roles } | Commands::Nodes { roles, .. } => roles.clone(),
        };

        Self {
            topfile: cli.topfile.clone(),
            roles,
            verbosity: cli.verbosity,
        }
    }
}

impl QueryOptions {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
