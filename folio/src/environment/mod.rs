use std::sync::Arc;

use folio_config::Config;
use folio_core_health_impl::HealthFeatureConfig;
use folio_core_submission_impl::SubmissionFeatureConfig;
use types::{Archive, Email, HealthFeature, PageFeature, RestServer, SubmissionFeature, Time};

pub mod types;

/// Wires the concrete services into the REST server.
///
/// The service graph is small enough that explicit construction beats a
/// dependency injection layer.
pub fn rest_server(config: &Config, email: Email, archive: Archive) -> RestServer {
    let time = Time::default();

    let health = HealthFeature::new(
        time,
        email.clone(),
        archive.clone(),
        HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    );

    let pages = PageFeature::default();

    let submission = SubmissionFeature::new(
        email,
        archive,
        time,
        SubmissionFeatureConfig {
            recipient: Arc::new(config.email.recipient()),
        },
    );

    RestServer::new(health, pages, submission)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn build_rest_server() {
        let config = folio_config::load_paths(&[folio_config::DEFAULT_CONFIG_PATH]).unwrap();

        let email = crate::email::connect(&config.email).unwrap();
        let archive = crate::archive::open(&config.archive);

        let _ = rest_server(&config, email, archive);
    }
}
