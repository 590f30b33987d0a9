use anyhow::{Result, bail};
use clap::Parser;

/// Command line and environment options. Flags take precedence over the
/// environment (a `.env` file is loaded before parsing).
#[derive(Debug, Parser)]
#[command(name = "tourney-server")]
#[command(about = "HTTP service for creating and retrieving tournaments", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT")]
    pub port: u16,

    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Keep tournaments in memory instead of PostgreSQL.
    #[arg(long)]
    pub in_memory: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres { database_url: String },
    InMemory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let storage = match (cli.in_memory, cli.database_url) {
            (true, _) => StorageBackend::InMemory,
            (false, Some(database_url)) if !database_url.trim().is_empty() => {
                StorageBackend::Postgres { database_url }
            }
            (false, _) => bail!("DATABASE_URL must be set unless --in-memory is given"),
        };

        Ok(Self {
            host: cli.host,
            port: cli.port,
            storage,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Strip credentials from a connection string before it reaches the logs.
pub fn redact_database_url(database_url: &str) -> &str {
    database_url.split('@').next_back().unwrap_or("unknown")
}
