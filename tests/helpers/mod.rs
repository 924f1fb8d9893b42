//! Shared setup for the HTTP integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use folio::{
    AppState, Config,
    config::{ObservabilityConfig, ServerConfig},
};
use folio_contact::{Mailer, NotificationEmail};
use folio_notification::EmailConfig;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Mailer that keeps every email it is asked to send.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<NotificationEmail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<NotificationEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &NotificationEmail) -> anyhow::Result<Option<String>> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());

        Ok(Some(format!("email-{}", sent.len())))
    }
}

/// Mailer that fails with a provider-specific message.
#[derive(Default)]
pub struct FailingMailer {
    pub calls: Mutex<usize>,
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: &NotificationEmail) -> anyhow::Result<Option<String>> {
        *self.calls.lock().unwrap() += 1;

        anyhow::bail!("Resend returned HTTP 401: API key re_secret is invalid")
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: vec![],
            static_dir: None,
        },
        email: EmailConfig {
            from_address: "notifications@folio.localhost".to_string(),
            contact_address: "owner@folio.localhost".to_string(),
            ..EmailConfig::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app(config: Config, mailer: Arc<dyn Mailer>) -> Router {
    let contact_command = folio_contact::Command::new(
        mailer,
        &config.email.from_address,
        &config.email.contact_address,
    );

    folio::router(AppState {
        config,
        contact_command,
    })
}

pub async fn post_json(app: &Router, uri: &str, body: impl Into<String>) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.into()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();

    serde_json::from_slice(&body).unwrap()
}
