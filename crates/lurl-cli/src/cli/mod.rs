//! CLI for lurl.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lurl_core::{config, BaseContext};

use commands::{run_format, run_parse, run_resolve};

/// Top-level CLI for lurl.
#[derive(Debug, Parser)]
#[command(name = "lurl")]
#[command(about = "lurl: legacy URL parse/format/resolve", long_about = None)]
pub struct Cli {
    /// Base URL for relative references. Overrides the configured base context.
    #[arg(long, global = true, value_name = "URL")]
    pub base: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a URL (absolute or relative) and print its components as JSON.
    Parse {
        /// URL or relative reference.
        url: String,
    },

    /// Format a JSON URL record back into a URL string.
    Format {
        /// JSON object with any of protocol, slashes, auth, host, hostname, port,
        /// pathname, search, query, hash. Use "-" to read from stdin.
        record: String,
    },

    /// Resolve a reference against a URL.
    Resolve {
        /// URL to resolve against (made absolute with the base context first).
        from: String,
        /// Reference to resolve.
        to: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let base = match cli.base.as_deref() {
            Some(b) => BaseContext::new(b)?,
            None => BaseContext::from_config(&cfg)?,
        };

        match cli.command {
            CliCommand::Parse { url } => run_parse(&base, &url)?,
            CliCommand::Format { record } => run_format(&record)?,
            CliCommand::Resolve { from, to } => run_resolve(&base, &from, &to)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
