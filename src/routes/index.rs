use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET / - Service banner
pub async fn page(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "message": "Contact Form API is running",
        "email_configured": app_state.email_configured,
        "endpoints": {
            "POST /contact/submit": "Submit contact form",
            "POST /enquiry/submit": "Submit course enquiry",
            "GET /health": "Health check",
        },
    }))
}
