use chrono::{DateTime, Utc};
use nutype::nutype;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw form input exactly as received from the page renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionCandidate {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A contact-form entry whose fields have all passed validation.
///
/// Can only be obtained by converting a [`SubmissionCandidate`]; immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: SubmissionName,
    pub email: SubmissionEmail,
    pub subject: SubmissionSubject,
    pub message: SubmissionMessage,
}

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionName(String);

// Deliberately not parsed as a mailbox: the form accepts whatever the
// visitor typed, and delivery degrades gracefully instead.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionEmail(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionSubject(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionMessage(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionField {
    Name,
    Email,
    Subject,
    Message,
}

impl SubmissionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for SubmissionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldViolation {
    /// Empty after trimming leading and trailing whitespace.
    Missing,
    TooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedField {
    pub field: SubmissionField,
    pub violation: FieldViolation,
}

/// Validation failure listing every offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing or invalid submission fields: {}", self.describe())]
pub struct SubmissionRejected {
    pub fields: Vec<RejectedField>,
}

impl SubmissionRejected {
    fn describe(&self) -> String {
        self.fields
            .iter()
            .map(|rejected| rejected.field.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

macro_rules! field_violation {
    ($($err:ident),* $(,)?) => {
        $(
            impl From<$err> for FieldViolation {
                fn from(err: $err) -> Self {
                    match err {
                        $err::NotEmptyViolated => Self::Missing,
                        $err::LenCharMaxViolated => Self::TooLong,
                    }
                }
            }
        )*
    };
}

field_violation!(
    SubmissionNameError,
    SubmissionEmailError,
    SubmissionSubjectError,
    SubmissionMessageError,
);

impl TryFrom<SubmissionCandidate> for Submission {
    type Error = SubmissionRejected;

    fn try_from(candidate: SubmissionCandidate) -> Result<Self, Self::Error> {
        let mut fields = Vec::new();
        let mut reject = |field: SubmissionField, violation: FieldViolation| {
            fields.push(RejectedField { field, violation });
        };

        let name = SubmissionName::try_new(candidate.name)
            .map_err(|err| reject(SubmissionField::Name, err.into()))
            .ok();
        let email = SubmissionEmail::try_new(candidate.email)
            .map_err(|err| reject(SubmissionField::Email, err.into()))
            .ok();
        let subject = SubmissionSubject::try_new(candidate.subject)
            .map_err(|err| reject(SubmissionField::Subject, err.into()))
            .ok();
        let message = SubmissionMessage::try_new(candidate.message)
            .map_err(|err| reject(SubmissionField::Message, err.into()))
            .ok();

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(Self {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(SubmissionRejected { fields }),
        }
    }
}

/// One archived contact-form entry. The timestamp is assigned when the
/// record is written, not when the form was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub timestamp: DateTime<Utc>,
    pub name: SubmissionName,
    pub email: SubmissionEmail,
    pub subject: SubmissionSubject,
    pub message: SubmissionMessage,
}

impl SubmissionRecord {
    pub const COLUMNS: [&'static str; 5] = ["timestamp", "name", "email", "subject", "message"];

    pub fn new(timestamp: DateTime<Utc>, submission: Submission) -> Self {
        Self {
            timestamp,
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
        }
    }
}
