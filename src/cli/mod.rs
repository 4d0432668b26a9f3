//! CLI module for sqlswap
//!
//! - `translate`: translate one query file into another file
//! - `serve`: run the translation form UI

pub mod serve;
pub mod translate;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// sqlswap - translate SQL between engines with an LLM
#[derive(Parser, Debug)]
#[command(name = "sqlswap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate the query in a file and write the result to another file
    Translate(translate::TranslateArgs),

    /// Run the translation form UI
    Serve(serve::ServeArgs),
}

/// Load `.env`, the layered application config and the global subscriber
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    logging::init_logging(&config.logging)?;

    if let Err(e) = loaded {
        warn!(error = %e, "Invalid configuration files, using defaults");
    }

    Ok(config)
}
