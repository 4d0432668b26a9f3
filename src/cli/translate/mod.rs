//! Translate command - file in, file out

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::ProviderConfig;
use crate::domain::TranslationResponse;
use crate::infrastructure::llm::StructuredClient;
use crate::infrastructure::services::TranslationService;
use crate::infrastructure::sql;

#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// File holding the query to translate
    #[arg(short, long)]
    pub input: PathBuf,

    /// File to write the translated query to
    #[arg(short, long)]
    pub output: PathBuf,

    #[arg(long, default_value = "SQL Server")]
    pub source_engine: String,

    #[arg(long, default_value = "BigQuery")]
    pub target_engine: String,

    /// Overrides LLM_PROVIDER
    #[arg(long)]
    pub provider: Option<String>,

    /// Overrides LLM_MODEL
    #[arg(long)]
    pub model: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Outcome printed after a translation
#[derive(Debug, Serialize)]
pub struct TranslationReport {
    pub query: Option<String>,
    pub explanation: String,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statements: Option<usize>,
}

impl TranslationReport {
    pub fn new(response: TranslationResponse) -> Self {
        let statements = sql::statement_count(response.query.as_deref()).filter(|n| *n > 0);

        Self {
            is_valid: statements.is_some(),
            statements,
            query: response.query,
            explanation: response.explanation,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        match self.query {
            Some(ref query) => {
                out.push_str("Translated query:\n");
                out.push_str(query);
                out.push('\n');
            }
            None => out.push_str("No translated query was produced.\n"),
        }

        out.push_str(&format!("\nExplanation:\n{}\n\n", self.explanation));
        out.push_str(&format!("Is valid: {}\n", self.is_valid));

        if let Some(count) = self.statements {
            out.push_str(&format!("Statements: {}\n", count));
        }

        out
    }
}

pub async fn run(args: TranslateArgs) -> anyhow::Result<()> {
    super::bootstrap()?;

    let mut provider_config = ProviderConfig::from_env()?;
    if args.provider.is_some() {
        provider_config.provider = args.provider.clone();
    }
    if args.model.is_some() {
        provider_config.model = args.model.clone();
    }

    let input = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("Failed to read input file {}", args.input.display()))?;

    let client = StructuredClient::from_config(&provider_config)?;
    let service = TranslationService::new();

    if !service.validate_syntax(Some(&input)) {
        warn!(input = %args.input.display(), "Input query does not look like valid SQL, translating anyway");
    }

    let response = service
        .swap(&client, &input, &args.source_engine, &args.target_engine)
        .await?;

    let report = TranslationReport::new(response);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }

    match report.query {
        Some(ref query) => {
            write_query(&args.output, query).await?;
            info!(output = %args.output.display(), "Translated query written");
        }
        None => {
            warn!(output = %args.output.display(), "Model declined the query, output file not written");
        }
    }

    Ok(())
}

/// Write `query` to `path` exactly as returned, creating parent directories
pub async fn write_query(path: &Path, query: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    tokio::fs::write(path, query)
        .await
        .with_context(|| format!("Failed to write output file {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(query: Option<&str>, explanation: &str) -> TranslationResponse {
        TranslationResponse::new(query.map(str::to_string), explanation.to_string()).unwrap()
    }

    #[test]
    fn test_report_for_translated_query() {
        let report = TranslationReport::new(response(
            Some("SELECT * FROM Orders LIMIT 5;"),
            "TOP n becomes LIMIT n.",
        ));

        assert!(report.is_valid);
        assert_eq!(report.statements, Some(1));

        let text = report.render();
        assert!(text.contains("SELECT * FROM Orders LIMIT 5;"));
        assert!(text.contains("Explanation:\nTOP n becomes LIMIT n."));
        assert!(text.contains("Is valid: true"));
    }

    #[test]
    fn test_report_for_declined_query() {
        let report = TranslationReport::new(response(None, "I can't process this query!"));

        assert!(!report.is_valid);
        assert!(report.statements.is_none());
        assert!(report.render().contains("Is valid: false"));

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["query"].is_null());
        assert!(json.get("statements").is_none());
    }

    #[tokio::test]
    async fn test_write_query_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.sql");
        let query = "SELECT `a`\nFROM t -- ünïcode\n";

        write_query(&path, query).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), query);
    }
}
