use std::{any::Any, sync::Arc};

use artmount_notification::{Mailer, Notifier};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{config::Config, error::AppError};

pub mod contact;
pub mod enquiry;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    /// Computed once at startup; never changes while the process runs.
    pub email_configured: bool,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(config: &Config, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            email_configured: config.email.is_configured(),
            notifier: Notifier::new(mailer, config.email.admin_address.clone()),
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(index::page))
        .route("/health", get(health::health))
        .route("/contact/submit", post(contact::submit))
        .route("/enquiry/submit", post(enquiry::submit))
        .with_state(app_state);

    with_layers(routes)
}

/// Middleware shared by every route. Request bodies are not size limited.
fn with_layers(router: Router) -> Router {
    router
        .layer(DefaultBodyLimit::disable())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(anyhow::anyhow!(details)).into_response()
}
