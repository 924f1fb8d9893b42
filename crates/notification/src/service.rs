//! SMTP mailer using lettre

use async_trait::async_trait;
use folio_contact::{Mailer, NotificationEmail};
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};

use crate::SmtpConfig;

/// Sends notifications over SMTP.
#[derive(Clone)]
pub struct SmtpMailer {
    mailer: SmtpTransport,
    domain: String,
}

impl SmtpMailer {
    /// `from` only provides the domain used in generated `Message-ID`s; the
    /// sender header is taken from each email.
    pub fn new(config: &SmtpConfig, from: &str) -> anyhow::Result<Self> {
        let mailer = if config.username.is_empty() || config.password.is_empty() {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.host)
                .port(config.port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP mailer initialized with authentication and TLS"
            );

            // relay() negotiates STARTTLS, which is what port 587 expects
            let creds = Credentials::new(config.username.clone(), config.password.clone());

            SmtpTransport::relay(&config.host)?
                .port(config.port)
                .credentials(creds)
                .build()
        };

        let from: Mailbox = from.parse()?;
        let domain = from.email.domain().to_owned();

        Ok(Self { mailer, domain })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &NotificationEmail) -> anyhow::Result<Option<String>> {
        tracing::info!(to = %email.to, subject = %email.subject, "Sending email via SMTP");

        let message_id = format!("<{}@{}>", uuid::Uuid::new_v4(), self.domain);

        let message = Message::builder()
            .from(email.from.parse()?)
            .to(email.to.parse()?)
            .subject(&email.subject)
            .message_id(Some(message_id.clone()))
            .multipart(MultiPart::alternative_plain_html(
                email.plain.clone(),
                email.html.clone(),
            ))?;

        // SmtpTransport blocks on network I/O
        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(Some(message_id))
    }
}
