use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::date::{Clock, SystemClock};

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let site = cfg.site().context("Invalid site configuration")?;
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!(
        "Listening on {} serving {}",
        cfg.listen_addr,
        cfg.root.display()
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Handling connection from {}", peer);

        let site = site.clone();
        let clock = Arc::clone(&clock);
        tokio::spawn(async move {
            let mut conn = Connection::with_clock(socket, site, clock);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
            info!("Done handling connection from {}", peer);
        });
    }
}
