use std::sync::Arc;

use crate::{ContactForm, ContactSubmission, Error, Mailer, NotificationEmail, Result};

/// Outcome of a dispatched submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub email_id: Option<String>,
}

/// Contact submission handler.
///
/// Holds no per-request state: the mailer and the two configured addresses are
/// fixed at startup and shared by every request.
#[derive(Clone)]
pub struct Command {
    mailer: Arc<dyn Mailer>,
    from: String,
    to: String,
}

impl Command {
    pub fn new(mailer: Arc<dyn Mailer>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            mailer,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Validates `form` and dispatches exactly one notification email.
    ///
    /// Validation failures return before the mailer is touched. Provider
    /// failures are logged here and returned as [`Error::Delivery`].
    #[tracing::instrument(skip_all, fields(email, subject))]
    pub async fn submit(&self, form: ContactForm) -> Result<Submitted> {
        let submission = ContactSubmission::try_from(form)?;

        tracing::Span::current()
            .record("email", &submission.email)
            .record("subject", &submission.subject);

        let email = NotificationEmail::for_submission(&submission, &self.from, &self.to)?;

        match self.mailer.send(&email).await {
            Ok(email_id) => {
                tracing::info!(
                    email_id = ?email_id,
                    project_type = ?submission.known_project_type(),
                    "Contact notification sent"
                );

                Ok(Submitted { email_id })
            }
            Err(err) => {
                tracing::error!(error = ?err, "Failed to send contact notification");

                Err(Error::Delivery(err))
            }
        }
    }
}
