use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use folio_archive_contracts::ArchiveService;
use folio_core_health_contracts::{HealthFeatureService, HealthStatus};
use folio_email_contracts::EmailService;
use folio_shared_contracts::time::TimeService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Time, Email, Archive> {
    time: Time,
    email: Email,
    archive: Archive,
    config: HealthFeatureConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    /// How long a reported status is reused before the services are pinged
    /// again.
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, Email, Archive> HealthFeatureServiceImpl<Time, Email, Archive> {
    pub fn new(time: Time, email: Email, archive: Archive, config: HealthFeatureConfig) -> Self {
        Self {
            time,
            email,
            archive,
            config,
            state: Default::default(),
        }
    }
}

impl<Time, Email, Archive> HealthFeatureService for HealthFeatureServiceImpl<Time, Email, Archive>
where
    Time: TimeService,
    Email: EmailService,
    Archive: ArchiveService,
{
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping smtp server: {err}"))
            .is_ok();

        let archive = self
            .archive
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping archive: {err}"))
            .is_ok();

        let status = HealthStatus { email, archive };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: now,
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use folio_archive_contracts::MockArchiveService;
    use folio_email_contracts::MockEmailService;
    use folio_shared_contracts::time::MockTimeService;

    use super::*;

    #[tokio::test]
    async fn reports_service_status() {
        // Arrange
        let time = MockTimeService::new().with_now(timestamp());

        let mut email = MockEmailService::new();
        email
            .expect_ping()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(()))));

        let mut archive = MockArchiveService::new();
        archive
            .expect_ping()
            .once()
            .return_once(|| Box::pin(std::future::ready(Err(anyhow::anyhow!("read-only")))));

        let sut = HealthFeatureServiceImpl::new(time, email, archive, config());

        // Act
        let status = sut.get_status().await;

        // Assert
        assert_eq!(
            status,
            HealthStatus {
                email: true,
                archive: false,
            }
        );
    }

    #[tokio::test]
    async fn reuses_cached_status_within_ttl() {
        // Arrange
        let mut time = MockTimeService::new();
        time.expect_now().times(2).return_const(timestamp());

        let mut email = MockEmailService::new();
        email
            .expect_ping()
            .once()
            .returning(|| Box::pin(std::future::ready(Ok(()))));

        let mut archive = MockArchiveService::new();
        archive
            .expect_ping()
            .once()
            .returning(|| Box::pin(std::future::ready(Ok(()))));

        let sut = HealthFeatureServiceImpl::new(time, email, archive, config());

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn pings_again_once_the_ttl_has_expired() {
        // Arrange
        let mut time = MockTimeService::new();
        let mut timestamps = [timestamp(), timestamp() + Duration::from_secs(31)].into_iter();
        time.expect_now()
            .times(2)
            .returning(move || timestamps.next().unwrap());

        let mut email = MockEmailService::new();
        email
            .expect_ping()
            .times(2)
            .returning(|| Box::pin(std::future::ready(Ok(()))));

        let mut archive = MockArchiveService::new();
        archive
            .expect_ping()
            .times(2)
            .returning(|| Box::pin(std::future::ready(Ok(()))));

        let sut = HealthFeatureServiceImpl::new(time, email, archive, config());

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, second);
    }

    fn config() -> HealthFeatureConfig {
        HealthFeatureConfig {
            cache_ttl: Duration::from_secs(30),
        }
    }

    fn timestamp() -> DateTime<Utc> {
        "2025-03-01T12:00:00Z".parse().unwrap()
    }
}
