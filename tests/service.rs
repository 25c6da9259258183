//! Banner, health check and cross-origin behaviour

mod helpers;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use helpers::{RecordingMailer, create_test_app, get_json};
use tower::ServiceExt;

#[tokio::test]
async fn test_banner_reports_email_configuration() {
    for configured in [true, false] {
        let app = create_test_app(configured, Arc::new(RecordingMailer::default()));

        let (status, body) = get_json(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Contact Form API is running");
        assert_eq!(body["email_configured"], configured);
        assert!(body["endpoints"]["POST /contact/submit"].is_string());
        assert!(body["endpoints"]["POST /enquiry/submit"].is_string());
    }
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app(false, Arc::new(RecordingMailer::default()));

    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["email_configured"], false);
}

#[tokio::test]
async fn test_submit_requires_post() {
    let app = create_test_app(false, Arc::new(RecordingMailer::default()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/contact/submit")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cross_origin_requests_are_allowed() {
    let app = create_test_app(false, Arc::new(RecordingMailer::default()));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/contact/submit")
                .header(header::ORIGIN, "https://artmountacademy.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
