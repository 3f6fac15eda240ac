use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config_endpoint::ConfigStore;
use configservice_server::{create_app, ConfigServer, ServerConfig};

/// ConfigService HTTP Server
#[derive(Parser, Debug)]
#[command(name = "configservice-server")]
#[command(about = "Development server for the pricing-engine config document")]
struct Args {
    /// Server bind address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Config document path
    #[arg(
        short,
        long,
        env = "CONFIGSERVICE_DOCUMENT",
        default_value = "/tmp/core/data/configs/configservice/PRICING_ENGINE.json"
    )]
    config_path: PathBuf,

    /// Serve the document read-only (preview mode)
    #[arg(long)]
    read_only: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(args.verbose);

    info!("Starting ConfigService server v{}", env!("CARGO_PKG_VERSION"));
    info!("Config document: {}", args.config_path.display());
    if args.read_only {
        info!("Running in read-only mode");
    }

    let store = ConfigStore::new(&args.config_path);
    let server = ConfigServer::new(
        ServerConfig {
            name: "ConfigService".to_string(),
            read_only: args.read_only,
        },
        store,
    );

    let app = create_app(server);

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", bind_addr))?;

    info!("ConfigService server running on http://{}", bind_addr);
    info!(
        "Config endpoint available at: http://{}/api/config/pricing-engine",
        bind_addr
    );

    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let is_development =
        env::var("CONFIGSERVICE_ENV").unwrap_or_else(|_| "development".to_string()) == "development";

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "configservice_server={},config_endpoint={},tower_http=info",
            level, level
        )
        .into()
    });

    if is_development {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true))
            .init();
    } else {
        // Structured JSON logging for non-interactive environments
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_ansi(false).json())
            .init();
    }
}
