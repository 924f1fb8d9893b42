use anyhow::Context;
use askama::Template;

use crate::{ContactSubmission, Error};

/// Contact notification HTML template
#[derive(Template)]
#[template(path = "emails/contact.html")]
struct ContactHtmlTemplate<'a> {
    submission: &'a ContactSubmission,
    message_lines: Vec<&'a str>,
}

/// Contact notification plain text template
#[derive(Template)]
#[template(path = "emails/contact.txt")]
struct ContactTextTemplate<'a> {
    submission: &'a ContactSubmission,
}

/// The email sent to the site owner for one submission. Built per request and
/// dropped once the mailer returns.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub plain: String,
}

impl NotificationEmail {
    /// Renders the notification for `submission`.
    ///
    /// Sender and recipient are the configured addresses; the submitter only
    /// appears inside the body.
    pub fn for_submission(
        submission: &ContactSubmission,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, Error> {
        let html = ContactHtmlTemplate {
            submission,
            message_lines: submission.message.lines().collect(),
        }
        .render()
        .context("Failed to render HTML email template")
        .map_err(Error::Delivery)?;

        let plain = ContactTextTemplate { submission }
            .render()
            .context("Failed to render plain text email template")
            .map_err(Error::Delivery)?;

        Ok(Self {
            from: from.into(),
            to: to.into(),
            subject: format!("New contact from portfolio: {}", submission.subject),
            html,
            plain,
        })
    }
}
