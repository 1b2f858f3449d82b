use anyhow::{Context, Result};
use clap::Parser;
use pacuare_mcp::api;
use pacuare_mcp::config::{self, TransportKind};
use pacuare_mcp::mcp::{self, QueryServer};
use pacuare_mcp::pacuare::PacuareClient;
use pacuare_mcp::tool::ToolAdapter;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pacuare-mcp")]
#[command(about = "MCP server for querying the Pacuare database", long_about = None)]
#[command(version)]
struct Cli {
    /// Pacuare API token
    #[arg(long, env = "PACUARE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Optional path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Transport to serve MCP on
    #[arg(long, value_enum)]
    transport: Option<TransportKind>,

    /// Override HTTP bind host
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Override Pacuare API base URL
    #[arg(long, env = "PACUARE_API_URL")]
    api_url: Option<String>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Override log format (pretty, json)
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let api_key = match cli.api_key.as_deref() {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => {
            eprintln!("Error: PACUARE_API_KEY environment variable is required");
            eprintln!("Please set your Pacuare API token:");
            eprintln!("  export PACUARE_API_KEY='your_api_key_here'");
            std::process::exit(1);
        }
    };

    let mut config = config::load_config(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load configuration from: {}", path.display()),
        None => "Failed to load configuration".to_string(),
    })?;

    // Apply CLI overrides, then validate the merged result once
    if let Some(transport) = cli.transport {
        config.transport = transport;
    }
    if let Some(host) = cli.host {
        config.http.host = host;
    }
    if let Some(port) = cli.port {
        config.http.port = port;
    }
    if let Some(api_url) = cli.api_url {
        config.pacuare.api_url = api_url;
    }
    if let Some(log_level) = cli.log_level {
        config.logging.level = log_level;
    }
    if let Some(log_format) = cli.log_format {
        config.logging.format = log_format;
    }
    config::validate_config(&config)?;

    init_logging(&config.logging)?;

    print_banner(&config);

    let client = PacuareClient::new(&api_key, &config.pacuare)
        .context("Failed to create Pacuare client")?;
    let server = QueryServer::new(ToolAdapter::new(Arc::new(client)));

    match config.transport {
        TransportKind::Stdio => mcp::serve_stdio(server).await?,
        TransportKind::Http => api::start_server(&config.http, server).await?,
    }

    Ok(())
}

fn init_logging(config: &config::LoggingConfig) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    // stdout carries MCP frames in stdio mode, so logs always go to stderr
    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    Ok(())
}

fn print_banner(config: &config::AppConfig) {
    let version = env!("CARGO_PKG_VERSION");
    let width = 59usize;
    let border = "═".repeat(width + 2);
    let line = |content: &str| {
        info!("║ {:width$} ║", content, width = width);
    };

    info!("╔{}╗", border);
    line("PACUARE-MCP");
    line(&format!("Pacuare Database MCP Server v{}", version));
    info!("╚{}╝", border);
    info!("");
    info!("Server Configuration:");
    info!("  → Transport: {}", config.transport);
    if config.transport == TransportKind::Http {
        info!("  → Address: {}:{}", config.http.host, config.http.port);
    }
    info!("  → Pacuare API: {}", config.pacuare.api_url);
    info!("  → Request Timeout: {}s", config.pacuare.request_timeout_secs);
    info!("  → Log Level: {}", config.logging.level);
    info!("  → Log Format: {}", config.logging.format);
    info!("");
}
