use folio_models::submission::{RejectedField, SubmissionCandidate, SubmissionRejected};
use serde::{Deserialize, Serialize};

/// Raw form fields as typed by the visitor. Validation happens in the core,
/// which reports every offending field at once.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactCandidate {
    /// Full name of the sender
    pub name: String,
    /// Email address of the sender
    pub email: String,
    /// Subject of the message
    pub subject: String,
    /// Content of the message
    pub message: String,
}

impl From<ApiContactCandidate> for SubmissionCandidate {
    fn from(value: ApiContactCandidate) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiContactResponse {
    pub status: ApiContactStatus,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiContactStatus {
    /// Relayed by email and archived.
    Sent,
    /// Archived only; email delivery failed.
    Archived,
}

#[derive(Debug, Serialize)]
pub struct ApiContactRejection {
    pub detail: &'static str,
    pub fields: Vec<RejectedField>,
}

impl From<SubmissionRejected> for ApiContactRejection {
    fn from(rejected: SubmissionRejected) -> Self {
        Self {
            detail: "Missing required fields",
            fields: rejected.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_models::submission::{FieldViolation, SubmissionField};

    use super::*;

    #[test]
    fn serialize_rejection() {
        let rejection = ApiContactRejection::from(SubmissionRejected {
            fields: vec![RejectedField {
                field: SubmissionField::Email,
                violation: FieldViolation::Missing,
            }],
        });
        assert_eq!(
            serde_json::to_value(&rejection).unwrap(),
            serde_json::json!({
                "detail": "Missing required fields",
                "fields": [{"field": "email", "violation": "missing"}],
            })
        );
    }
}
