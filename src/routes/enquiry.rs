use artmount_forms::EnquirySubmission;
use artmount_notification::{
    OutgoingEmail,
    enquiry::{enquiry_admin_notification, enquiry_confirmation},
};
use axum::{Json, body::Bytes, extract::State};
use serde_json::{Value, json};

use crate::{error::AppError, routes::AppState, submission::SubmissionPipeline};

pub static PIPELINE: SubmissionPipeline<EnquirySubmission> = SubmissionPipeline {
    form: "enquiry",
    required_fields: &EnquirySubmission::REQUIRED_FIELDS,
    sanitize: EnquirySubmission::from_fields,
    compose,
    receipt,
    success_message: "Thank you for your interest! We'll contact you soon with batch details.",
};

fn compose(
    submission: &EnquirySubmission,
    admin_address: &str,
) -> Result<(OutgoingEmail, OutgoingEmail), askama::Error> {
    Ok((
        enquiry_confirmation(submission)?,
        enquiry_admin_notification(submission, admin_address)?,
    ))
}

fn receipt(submission: &EnquirySubmission) -> Value {
    json!({
        "name": submission.name,
        "email": submission.email,
        "phone": submission.phone,
        "course": submission.course,
    })
}

/// POST /enquiry/submit
pub async fn submit(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    PIPELINE.run(&app_state, &body).await
}
