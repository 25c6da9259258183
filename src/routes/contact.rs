use artmount_forms::ContactSubmission;
use artmount_notification::{
    OutgoingEmail,
    contact::{contact_admin_notification, contact_confirmation},
};
use axum::{Json, body::Bytes, extract::State};
use serde_json::{Value, json};

use crate::{error::AppError, routes::AppState, submission::SubmissionPipeline};

pub static PIPELINE: SubmissionPipeline<ContactSubmission> = SubmissionPipeline {
    form: "contact",
    required_fields: &ContactSubmission::REQUIRED_FIELDS,
    sanitize: ContactSubmission::from_fields,
    compose,
    receipt,
    success_message: "Thank you! We have received your inquiry and will get back to you shortly.",
};

fn compose(
    submission: &ContactSubmission,
    admin_address: &str,
) -> Result<(OutgoingEmail, OutgoingEmail), askama::Error> {
    Ok((
        contact_confirmation(submission)?,
        contact_admin_notification(submission, admin_address)?,
    ))
}

fn receipt(submission: &ContactSubmission) -> Value {
    json!({
        "name": submission.name,
        "email": submission.email,
        "phone": submission.phone,
    })
}

/// POST /contact/submit
pub async fn submit(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    PIPELINE.run(&app_state, &body).await
}
