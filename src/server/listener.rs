use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::{Connection, Limits};
use crate::interfaces::Registry;
use crate::server::bootstrap;
use crate::site::Site;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let site = Arc::new(bootstrap::build_site(cfg).await?);
    let registry = Arc::new(Registry::builtin());
    let limits = Limits::from(&cfg.server);

    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!(
        webroot = %site.webroot().display(),
        "Listening on {}", cfg.server.listen_addr
    );

    serve(listener, site, registry, limits).await
}

/// Accept loop. Each connection gets its own task and a single exchange.
pub async fn serve(
    listener: TcpListener,
    site: Arc<Site>,
    registry: Arc<Registry>,
    limits: Limits,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let site = Arc::clone(&site);
        let registry = Arc::clone(&registry);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, site, registry, limits);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
            info!("Closing connection from {}", peer);
        });
    }
}
