//! Site server command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use vitrine_server::{SiteServer, SiteServerConfig};

use crate::config;

/// Run the serve command.
pub async fn run(
    config_path: &Path,
    port: Option<u16>,
    dir: Option<PathBuf>,
    open: bool,
) -> Result<()> {
    let config = config::load(config_path)?;

    let contact_db = std::env::var_os(config::CONTACT_DB_ENV).map(PathBuf::from);
    if contact_db.is_none() {
        tracing::warn!(
            "{} not set; contact messages will not be saved",
            config::CONTACT_DB_ENV
        );
    }

    let server_config = SiteServerConfig {
        host: config.server.host,
        port: port.unwrap_or(config.server.port),
        site_dir: dir.unwrap_or_else(|| PathBuf::from(&config.site.dir)),
        contact_db,
        open,
    };

    tracing::info!("Starting site server on port {}", server_config.port);

    SiteServer::new(server_config).start().await?;

    Ok(())
}
