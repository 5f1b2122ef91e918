use std::fs;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tables_extract::config::AppConfig;
use tables_extract::errors::FetchError;
use tables_extract::models::ReserveQuery;
use tables_extract::services::fetcher::TableFetcher;

#[derive(Parser, Debug)]
#[command(name = "tables-extract", version)]
#[command(about = "Fetch table availability from the reservation widget API")]
struct Cli {
    /// Reservation date, YYYY-MM-DD; today when omitted
    reserve_date: Option<String>,

    /// Number of guests
    #[arg(default_value_t = 2)]
    guests_count: u32,

    /// API token; RESERVES_API_TOKEN or the built-in widget token when omitted
    token: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let cli = Cli::parse();

    let reserve_date = cli
        .reserve_date
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
    let token = cli.token.unwrap_or_else(|| config.default_token.clone());

    tracing::info!(
        "requesting tables for {reserve_date}, {} guests (token {})",
        cli.guests_count,
        token_preview(&token),
    );

    let fetcher = TableFetcher::new(config.endpoint_url.clone());
    let query = ReserveQuery::new(&reserve_date, cli.guests_count, &token);

    let (tables, response) = match fetcher.fetch(&query).await {
        Ok(result) => result,
        Err(err) => fail(err),
    };

    if tables.is_empty() {
        fail(FetchError::NoTablesFound { response });
    }

    tracing::info!("found {} tables", tables.len());

    let rendered =
        serde_json::to_string_pretty(&tables).context("failed to render tables as JSON")?;
    println!("{rendered}");

    fs::write(&config.output_path, &rendered)
        .with_context(|| format!("failed to write {}", config.output_path))?;
    tracing::info!("saved to {}", config.output_path);

    Ok(())
}

fn fail(err: FetchError) -> ! {
    println!("{err}");
    if let Some(body) = err.server_body() {
        println!("{body}");
    }
    std::process::exit(1);
}

fn token_preview(token: &str) -> String {
    match token.char_indices().nth(20) {
        Some((idx, _)) => format!("{}...", &token[..idx]),
        None => token.to_string(),
    }
}
