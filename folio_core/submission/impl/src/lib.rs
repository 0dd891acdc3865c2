use std::sync::Arc;

use folio_archive_contracts::ArchiveService;
use folio_core_submission_contracts::{
    DeliveryOutcome, SubmissionFeatureService, SubmissionReceipt, SubmissionSubmitError,
};
use folio_email_contracts::{ContentType, Email, EmailService};
use folio_models::{
    email_address::EmailAddress,
    submission::{Submission, SubmissionCandidate, SubmissionRecord},
};
use folio_shared_contracts::time::TimeService;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct SubmissionFeatureServiceImpl<Email, Archive, Time> {
    email: Email,
    archive: Archive,
    time: Time,
    config: SubmissionFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct SubmissionFeatureConfig {
    /// Recipient of contact-form mail.
    pub recipient: Arc<EmailAddress>,
}

impl<Email, Archive, Time> SubmissionFeatureServiceImpl<Email, Archive, Time> {
    pub fn new(email: Email, archive: Archive, time: Time, config: SubmissionFeatureConfig) -> Self {
        Self {
            email,
            archive,
            time,
            config,
        }
    }
}

impl<EmailS, Archive, Time> SubmissionFeatureService
    for SubmissionFeatureServiceImpl<EmailS, Archive, Time>
where
    EmailS: EmailService,
    Archive: ArchiveService,
    Time: TimeService,
{
    async fn submit(
        &self,
        candidate: SubmissionCandidate,
    ) -> Result<SubmissionReceipt, SubmissionSubmitError> {
        let submission = Submission::try_from(candidate)?;

        // Delivery runs first but is strictly best-effort: whatever happens
        // here, the archive write below still runs.
        let delivery = match self.email.send(compose(&self.config, &submission)).await {
            Ok(true) => DeliveryOutcome::Delivered,
            Ok(false) => {
                warn!("Mail relay rejected the contact message");
                DeliveryOutcome::Failed {
                    reason: "the mail relay rejected the message".into(),
                }
            }
            Err(err) => {
                warn!("Failed to deliver contact message: {err:#}");
                DeliveryOutcome::Failed {
                    reason: format!("{err:#}"),
                }
            }
        };

        let submitted_at = self.time.now();
        let record = SubmissionRecord::new(submitted_at, submission);
        match self.archive.append(record).await {
            Ok(()) => Ok(SubmissionReceipt {
                submitted_at,
                delivery,
            }),
            Err(source) => Err(SubmissionSubmitError::Archive { source, delivery }),
        }
    }
}

fn compose(config: &SubmissionFeatureConfig, submission: &Submission) -> Email {
    Email {
        recipient: (*config.recipient).clone().into(),
        subject: format!("[Portfolio] {} — {}", *submission.subject, *submission.name),
        body: format!(
            "New message received from the portfolio contact form:\n\nName: {}\nEmail: {}\nSubject: {}\n\n{}\n",
            *submission.name, *submission.email, *submission.subject, *submission.message
        ),
        content_type: ContentType::Text,
        // Replies should reach the visitor, not the relay account. If the
        // visitor-provided address is not a valid mailbox the header is
        // omitted; the address is still in the body.
        reply_to: submission.email.parse().ok(),
    }
}
