//! The shared path every form submission takes: required-field check,
//! sanitization, email syntax check, optional mail dispatch, JSON receipt.

use artmount_forms::{Fields, validate_required_fields};
use artmount_notification::OutgoingEmail;
use axum::Json;
use serde_json::{Value, json};
use validator::Validate;

use crate::{error::AppError, routes::AppState};

/// Renders the `(user confirmation, admin notification)` pair for a submission.
pub type Compose<S> = fn(&S, &str) -> Result<(OutgoingEmail, OutgoingEmail), askama::Error>;

/// Describes one form: which fields it requires, how it is cleaned up,
/// which mails it produces and what is echoed back.
pub struct SubmissionPipeline<S> {
    pub form: &'static str,
    pub required_fields: &'static [&'static str],
    pub sanitize: fn(&Fields) -> S,
    pub compose: Compose<S>,
    pub receipt: fn(&S) -> Value,
    pub success_message: &'static str,
}

impl<S> SubmissionPipeline<S>
where
    S: Validate + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(skip_all, fields(form = self.form))]
    pub async fn run(&self, state: &AppState, body: &[u8]) -> Result<Json<Value>, AppError> {
        let fields = Fields::from_body(body);
        tracing::info!("Received submission");
        tracing::debug!(?fields, "Submission payload");

        if let Err(missing) = validate_required_fields(&fields, self.required_fields) {
            tracing::warn!(missing = ?missing.names(), "Validation failed");
            return Err(missing.into());
        }

        let submission = (self.sanitize)(&fields);
        tracing::debug!(?submission, "Sanitized submission");

        if submission.validate().is_err() {
            tracing::warn!("Invalid email format");
            return Err(AppError::InvalidEmail);
        }

        if state.email_configured {
            self.dispatch(state, &submission).await?;
        } else {
            tracing::warn!("Email not configured, skipping send");
        }

        tracing::info!(email_sent = state.email_configured, "Submission accepted");

        Ok(Json(json!({
            "message": self.success_message,
            "success": true,
            "email_sent": state.email_configured,
            "data_received": (self.receipt)(&submission),
        })))
    }

    /// The visitor's confirmation decides the outcome. The admin copy is
    /// always attempted and its delivery is only logged.
    async fn dispatch(&self, state: &AppState, submission: &S) -> Result<(), AppError> {
        let (confirmation, notification) =
            (self.compose)(submission, state.notifier.admin_address())
                .map_err(|e| AppError::Email(e.to_string()))?;

        let confirmation = state
            .notifier
            .send_email(confirmation.to, confirmation.subject, confirmation.html)
            .await;
        state
            .notifier
            .send_email(notification.to, notification.subject, notification.html)
            .await;

        if !confirmation.is_sent() {
            return Err(AppError::ConfirmationNotSent);
        }

        Ok(())
    }
}
