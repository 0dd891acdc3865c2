use std::future::Future;

use chrono::{DateTime, Utc};
use folio_models::submission::{SubmissionCandidate, SubmissionRejected};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SubmissionFeatureService: Send + Sync + 'static {
    /// Runs the contact-form pipeline for `candidate`: validation, a
    /// best-effort email delivery, and the mandatory archive write.
    ///
    /// Delivery failure never fails the submission; it is reported in the
    /// returned receipt. A failed archive write does.
    fn submit(
        &self,
        candidate: SubmissionCandidate,
    ) -> impl Future<Output = Result<SubmissionReceipt, SubmissionSubmitError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Archive timestamp of the submission.
    pub submitted_at: DateTime<Utc>,
    pub delivery: DeliveryOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Failed { reason: String },
}

#[derive(Debug, Error)]
pub enum SubmissionSubmitError {
    #[error(transparent)]
    Rejected(#[from] SubmissionRejected),
    #[error("Failed to archive submission.")]
    Archive {
        #[source]
        source: anyhow::Error,
        /// Outcome of the delivery attempt that preceded the failed write.
        delivery: DeliveryOutcome,
    },
}
