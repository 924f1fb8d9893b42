mod config;
mod resend;
mod service;

use std::sync::Arc;

pub use config::*;
use folio_contact::Mailer;
pub use resend::ResendMailer;
pub use service::SmtpMailer;

/// Builds the mailer selected by `config.provider`.
pub fn mailer(config: &EmailConfig) -> anyhow::Result<Arc<dyn Mailer>> {
    let mailer: Arc<dyn Mailer> = match config.provider {
        Provider::Resend => Arc::new(ResendMailer::new(&config.resend)?),
        Provider::Smtp => Arc::new(SmtpMailer::new(&config.smtp, &config.from_address)?),
    };

    Ok(mailer)
}
