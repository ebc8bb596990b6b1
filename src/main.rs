//! User Digest - Per-department summaries of user records
//!
//! Fetches users (through the cache), aggregates them by department and
//! prints the result as pretty JSON on stdout. Logs go to stderr.

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_digest::{Config, HttpUserClient, TtlCache, UserService};

/// Main entry point for the user digest.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the HTTP client and the users cache
/// 4. Fetch, aggregate, and print the grouped summaries
///
/// Any failure is logged, printed to stderr, and turns into exit status 1.
#[tokio::main]
async fn main() {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_digest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run().await {
        error!("{:#}", err);
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env();
    info!(
        "Configuration loaded: api_url={}, cache_ttl={}s, request_timeout={}s",
        config.api_url, config.cache_ttl, config.request_timeout
    );

    let client = HttpUserClient::from_config(&config).context("building HTTP client")?;
    let mut service = UserService::new(client, TtlCache::new(config.cache_ttl()));

    let grouped = service.summarize().await?;
    let output = serde_json::to_string_pretty(&grouped).context("serializing summaries")?;
    println!("{}", output);

    Ok(())
}
