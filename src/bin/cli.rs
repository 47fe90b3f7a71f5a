//! SuricataML Dashboard CLI
//!
//! The dashboard views in a terminal:
//! - Statistics summary
//! - Raw Suricata logs
//! - Active rules
//! - Endpoint resolution and default config generation

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use suricata_dash::client::{select_provider, DashboardClient, EndpointStrategy, FetchResult};
use suricata_dash::config::{generate_default_config, Config};
use suricata_dash::render;

#[derive(Parser)]
#[command(name = "suricata-dash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal view of the SuricataML dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config and SURICATA_DASH_BACKEND_URL)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Endpoint strategy: configured, discovery or fixed
    #[arg(long, global = true)]
    pub strategy: Option<EndpointStrategy>,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show system statistics
    Stats,

    /// Show Suricata logs
    Logs,

    /// Show active rules
    Rules,

    /// Print the resolved backend endpoint
    Endpoint,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so views can be piped
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "suricata_dash=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.backend_url.clone() {
        config.dashboard.backend_url = Some(url);
    }

    let provider = select_provider(&config.dashboard, cli.strategy)?;

    match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }

        Commands::Endpoint => {
            let endpoint = provider.resolve().await;
            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({
                        "strategy": provider.strategy().to_string(),
                        "endpoint": endpoint.as_str(),
                    })
                ),
                OutputFormat::Text => println!("{} ({})", endpoint, provider.strategy()),
            }
        }

        Commands::Stats => {
            let client = connect(&config, provider.resolve().await)?;
            let result = client.stats().await;
            match cli.format {
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Text => println!("{}", render::render_statistics(&result)),
            }
            result.context("Failed to load statistics")?;
        }

        Commands::Logs => {
            let client = connect(&config, provider.resolve().await)?;
            let result = client.logs().await;
            let logs = result.as_deref().unwrap_or_default();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(logs)?),
                OutputFormat::Text => println!("{}", render::render_logs(logs)),
            }
            result.context("Failed to load logs")?;
        }

        Commands::Rules => {
            let client = connect(&config, provider.resolve().await)?;
            let result = client.rules().await;
            let rules = result.as_deref().unwrap_or_default();
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "rules": rules }))?)
                }
                OutputFormat::Text => println!("{}", render::render_rules(rules)),
            }
            result.context("Failed to load rules")?;
        }
    }

    Ok(())
}

fn connect(
    config: &Config,
    endpoint: suricata_dash::Endpoint,
) -> anyhow::Result<DashboardClient> {
    tracing::debug!(endpoint = %endpoint, "Connecting");
    let timeout = Duration::from_secs(config.dashboard.request_timeout_secs);
    DashboardClient::new(endpoint, timeout).context("Failed to create HTTP client")
}

fn print_json<T: serde::Serialize>(result: &FetchResult<T>) -> anyhow::Result<()> {
    if let Ok(data) = result {
        println!("{}", serde_json::to_string_pretty(data)?);
    }
    Ok(())
}
