use lettre::message::Mailbox;
use serde::Deserialize;
use strum::Display;

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    #[default]
    Resend,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: Provider,
    /// Sender of every notification. Never taken from a submission.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Inbox that receives contact notifications.
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
    #[serde(default)]
    pub resend: ResendConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
            resend: ResendConfig::default(),
            smtp: SmtpConfig::default(),
        }
    }
}

impl EmailConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.from_address
            .parse::<Mailbox>()
            .map_err(|e| format!("Invalid email.from_address '{}': {e}", self.from_address))?;
        self.contact_address.parse::<Mailbox>().map_err(|e| {
            format!(
                "Invalid email.contact_address '{}': {e}",
                self.contact_address
            )
        })?;

        if self.provider == Provider::Resend && self.resend.api_key.is_empty() {
            return Err(
                "email.resend.api_key (or RESEND_API_KEY) is required for the resend provider"
                    .to_string(),
            );
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResendConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_resend_base_url")]
    pub base_url: String,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_resend_base_url(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
        }
    }
}

fn default_from_address() -> String {
    "notifications@portfolio.localhost".to_string()
}

fn default_contact_address() -> String {
    "contact@portfolio.localhost".to_string()
}

fn default_resend_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}
