use std::future::Future;

use folio_models::submission::SubmissionRecord;

/// Append-only system of record for contact-form submissions.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ArchiveService: Send + Sync + 'static {
    /// Appends `record` to the archive, creating it (including the header
    /// row) if it does not exist yet.
    fn append(&self, record: SubmissionRecord) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Verifies that the archive location is writable.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockArchiveService {
    pub fn with_append(mut self, record: SubmissionRecord) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_append_error(mut self, record: SubmissionRecord, error: String) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(move |_| Box::pin(std::future::ready(Err(anyhow::anyhow!(error)))));
        self
    }
}
