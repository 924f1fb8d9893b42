//! Resend HTTP API mailer

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use folio_contact::{Mailer, NotificationEmail};
use serde::{Deserialize, Serialize};

use crate::ResendConfig;

/// HTTP request timeout for a single send.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

/// Sends notifications through the Resend `POST /emails` endpoint.
pub struct ResendMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ResendMailer {
    pub fn new(config: &ResendConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build reqwest HTTP client")?;

        tracing::info!(base_url = %config.base_url, "Resend mailer initialized");

        Ok(Self {
            client,
            endpoint: format!("{}/emails", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &NotificationEmail) -> anyhow::Result<Option<String>> {
        tracing::info!(to = %email.to, subject = %email.subject, "Sending email via Resend");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&SendEmailRequest {
                from: &email.from,
                to: [&email.to],
                subject: &email.subject,
                html: &email.html,
                text: &email.plain,
            })
            .send()
            .await
            .context("Resend request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Resend returned HTTP {}: {}", status.as_u16(), body);
        }

        let body: SendEmailResponse = response
            .json()
            .await
            .context("Failed to decode Resend response")?;

        Ok(body.id)
    }
}
