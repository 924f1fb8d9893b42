use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use folio_contact::{Command, ContactForm, Mailer, NotificationEmail};

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

/// Mailer that always fails the way a rejecting provider would.
#[derive(Default)]
pub struct FailingMailer {
    pub calls: Mutex<usize>,
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: &NotificationEmail) -> anyhow::Result<Option<String>> {
        *self.calls.lock().unwrap() += 1;

        anyhow::bail!("provider said: invalid api key re_123")
    }
}

pub fn command(mailer: Arc<dyn Mailer>) -> Command {
    Command::new(
        mailer,
        "notifications@folio.localhost",
        "owner@folio.localhost",
    )
}

pub fn form() -> ContactForm {
    ContactForm {
        name: Some("Ana".to_owned()),
        email: Some("ana@example.com".to_owned()),
        subject: Some("Hello".to_owned()),
        message: Some("Hi there".to_owned()),
        project_type: None,
    }
}
