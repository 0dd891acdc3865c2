use folio_archive_contracts::ArchiveService;
use folio_config::Config;
use folio_email_contracts::EmailService;
use tracing::{info, warn};

use crate::{archive, email, environment};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email)?;
    if let Err(err) = email.ping().await {
        // Mail is best-effort; submissions fall back to the archive.
        warn!("Failed to ping smtp server: {err:#}");
    }

    info!("Opening archive at {}", config.archive.path.display());
    let archive = archive::open(&config.archive);
    if let Err(err) = archive.ping().await {
        warn!("Archive location is not writable: {err:#}");
    }

    let server = environment::rest_server(&config, email, archive);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
