//! Shared helpers for driving the router without a network or SMTP server

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use artmount::{AppState, router};
use artmount_notification::{Delivery, Mailer, Notifier, OutgoingEmail};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@artmount.test";

/// Records every message handed to it instead of talking to an SMTP server.
#[derive(Default)]
pub struct RecordingMailer {
    attempts: Mutex<Vec<OutgoingEmail>>,
    fail_to: Option<String>,
}

impl RecordingMailer {
    /// Fails every delivery addressed to `to`.
    pub fn failing_for(to: &str) -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            fail_to: Some(to.to_owned()),
        }
    }

    pub fn attempts(&self) -> Vec<OutgoingEmail> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn deliver(&self, email: OutgoingEmail) -> Delivery {
        let failed = self.fail_to.as_deref() == Some(email.to.as_str());
        self.attempts.lock().unwrap().push(email);

        if failed {
            Delivery::Failed {
                reason: "535 Authentication failed".to_owned(),
            }
        } else {
            Delivery::Sent
        }
    }
}

pub fn create_test_app(email_configured: bool, mailer: Arc<RecordingMailer>) -> Router {
    router(AppState {
        email_configured,
        notifier: Notifier::new(mailer, ADMIN_EMAIL),
    })
}

pub async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).expect("response body should be JSON");

    (status, json)
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    read_json(response).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    read_json(response).await
}
