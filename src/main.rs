use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wikid::config;
use wikid::http::HttpServer;
use wikid::lifecycle::{signals, Shutdown};

#[derive(Parser)]
#[command(name = "wikid", about = "Single-document wiki server", version)]
struct Cli {
    /// Address the server listens on. A bare `:PORT` binds all interfaces.
    #[arg(long, value_name = "ADDR", default_value = ":5000")]
    listen_addr: String,

    /// Optional TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wikid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref(), &cli.listen_addr)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        document = %config.document.path.display(),
        "configuration loaded"
    );

    // Bind failure (address in use, permission denied) is fatal; no retry.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "listener bound");

    let grace = Duration::from_secs(config.timeouts.shutdown_grace_secs);
    let server = HttpServer::new(config);

    let shutdown = Shutdown::new();
    let serve_rx = shutdown.subscribe();
    let mut drain_rx = shutdown.subscribe();
    tokio::spawn(async move {
        signals::interrupt().await;
        shutdown.trigger();
    });

    let mut serve_task = tokio::spawn(server.run(listener, serve_rx));

    tokio::select! {
        res = &mut serve_task => res??,
        _ = drain_rx.recv() => {
            match tokio::time::timeout(grace, &mut serve_task).await {
                Ok(res) => res??,
                Err(_) => {
                    tracing::error!(
                        grace_secs = grace.as_secs(),
                        "in-flight requests did not drain before the shutdown deadline"
                    );
                    std::process::exit(1);
                }
            }
        }
    }

    tracing::info!("server stopped");
    Ok(())
}
