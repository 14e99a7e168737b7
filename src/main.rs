// Main entrypoint for the esbridge search-gateway adapter.

use anyhow::{Context, Result};
use clap::Parser;
use hyper::Method;
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use esbridge::config::{Config, ConfigTrait};
use esbridge::gateway::Gateway;
use esbridge::shutdown::GracefulShutdown;

const CONFIG_PATH: &str = "cfg/esbridge.cfg.yaml";
const CONFIG_PATH_LOCAL: &str = "cfg/esbridge.cfg.local.yaml";

const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// esbridge - configuration and lifecycle adapter for an Elasticsearch-compatible REST client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, value_name = "FILE")]
    cfg: Option<PathBuf>,
}

/// Loads the configuration struct from YAML file.
/// Tries local config first, then falls back to default config.
fn load_cfg(path: Option<PathBuf>) -> Result<Config> {
    if let Some(custom_path) = path {
        let cfg = Config::load(&custom_path)
            .with_context(|| format!("failed to load custom config from {:?}", custom_path))?;
        info!(
            component = "config",
            event = "load_success",
            path = ?custom_path,
            "config loaded"
        );
        return Ok(cfg);
    }

    // Try local config first
    match Config::load(PathBuf::from(CONFIG_PATH_LOCAL)) {
        Ok(cfg) => {
            info!(
                component = "config",
                event = "load_success",
                path = CONFIG_PATH_LOCAL,
                "config loaded"
            );
            Ok(cfg)
        }
        Err(_) => {
            // Fall back to default config
            let cfg = Config::load(PathBuf::from(CONFIG_PATH))
                .with_context(|| format!("failed to load config from {}", CONFIG_PATH))?;
            info!(
                component = "config",
                event = "load_success",
                path = CONFIG_PATH,
                "config loaded"
            );
            Ok(cfg)
        }
    }
}

/// Configures structured logging based on configuration.
fn configure_logger(cfg: &Config) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let log_level = cfg
        .logs()
        .and_then(|logs| logs.level.as_ref())
        .map(|s| s.as_str())
        .unwrap_or("debug");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    if cfg.is_prod() {
        // Production: JSON format
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        // Development: Pretty console format
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty())
            .init();
    }
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    tokio::runtime::Runtime::new()
        .context("Failed to create tokio runtime")?
        .block_on(async_main(args))
}

async fn async_main(args: Args) -> Result<()> {
    // Create cancellation token for graceful shutdown
    let shutdown_token = CancellationToken::new();

    // Load configuration
    let cfg = load_cfg(args.cfg)?;

    // Configure logger (must be done after config is loaded)
    configure_logger(&cfg);

    let shutdown_timeout = cfg
        .shutdown()
        .and_then(|s| s.timeout)
        .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT);
    let graceful_shutdown = GracefulShutdown::new(shutdown_token.clone(), shutdown_timeout);

    // Assemble the gateway and start the rest client
    let gateway = Gateway::configure(cfg)?;

    info!(
        component = "main",
        event = "started",
        index = gateway.index_name(),
        ttl_ms = gateway.ttl_ms(),
        batch_size = gateway.batch_size(),
        "search gateway assembled"
    );

    // Prove the wiring with a single cluster health call
    if gateway.rest_client().is_some() {
        match gateway
            .execute_request(Method::GET, "/_cluster/health", None)
            .await
        {
            Ok(resp) => {
                let body: serde_json::Value =
                    serde_json::from_slice(&resp.body).unwrap_or_default();
                info!(
                    component = "main",
                    event = "cluster_health",
                    status = resp.status,
                    cluster_status = %body["status"],
                    "cluster health request succeeded"
                );
            }
            Err(e) => warn!(
                component = "main",
                event = "cluster_health_failed",
                error = %e,
                "cluster health request failed"
            ),
        }
    }

    // Listen for OS signals or cancellation, then stop the gateway
    graceful_shutdown.await_signal().await;
    graceful_shutdown
        .shutdown(async move {
            gateway.stop();
        })
        .await
}
