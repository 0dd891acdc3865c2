use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_submission_contracts::{
    DeliveryOutcome, SubmissionFeatureService, SubmissionSubmitError,
};

use super::error;
use crate::models::contact::{
    ApiContactCandidate, ApiContactRejection, ApiContactResponse, ApiContactStatus,
};

pub fn router(service: Arc<impl SubmissionFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl SubmissionFeatureService>>,
    Json(candidate): Json<ApiContactCandidate>,
) -> Response {
    match service.submit(candidate.into()).await {
        Ok(receipt) => {
            let response = match receipt.delivery {
                DeliveryOutcome::Delivered => ApiContactResponse {
                    status: ApiContactStatus::Sent,
                    detail: "Your message has been sent by email.".into(),
                },
                DeliveryOutcome::Failed { reason } => ApiContactResponse {
                    status: ApiContactStatus::Archived,
                    detail: format!(
                        "Your message could not be sent by email ({reason}). It has \
                         been archived and will be read."
                    ),
                },
            };
            Json(response).into_response()
        }
        Err(SubmissionSubmitError::Rejected(rejected)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiContactRejection::from(rejected)),
        )
            .into_response(),
        Err(SubmissionSubmitError::Archive { source, delivery }) => {
            tracing::error!("Failed to archive contact message: {source:#}");
            let detail = match delivery {
                DeliveryOutcome::Delivered => {
                    "Could not archive your message. It was still delivered by email."
                }
                DeliveryOutcome::Failed { .. } => {
                    "Could not archive your message, and email delivery failed as \
                     well. Please try again later."
                }
            };
            error(StatusCode::INTERNAL_SERVER_ERROR, detail)
        }
    }
}
