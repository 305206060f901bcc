use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use webroot::config::Config;
use webroot::server;

#[derive(Debug, Parser)]
#[command(version, about = "Serve a webroot and its interfaces over HTTP/1.1")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "SERVER_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, overrides the configuration file
    #[arg(short, long, env = "LISTEN")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = Config::load(cli.config.as_deref())?.with_listen_override(cli.listen);

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
