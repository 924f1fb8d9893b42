use std::{env, path::PathBuf};

use axum::http::HeaderValue;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_notification::EmailConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed to post the contact form cross-origin. Empty disables
    /// CORS; `"*"` allows any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Pre-built front end served for every path the API does not handle.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Provider environment variables (RESEND_API_KEY, FROM_EMAIL, CONTACT_EMAIL)
    /// 2. Prefixed environment variables (FOLIO__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.allowed_origins")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            builder = builder.set_override("email.resend.api_key", api_key)?;
        }
        if let Ok(from_email) = env::var("FROM_EMAIL") {
            builder = builder.set_override("email.from_address", from_email)?;
        }
        if let Ok(contact_email) = env::var("CONTACT_EMAIL") {
            builder = builder.set_override("email.contact_address", contact_email)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        for origin in &self.server.allowed_origins {
            if HeaderValue::from_str(origin).is_err() {
                return Err(format!("Invalid allowed origin '{origin}'"));
            }
        }
        if let Some(dir) = &self.server.static_dir {
            if !dir.is_dir() {
                return Err(format!(
                    "Static directory '{}' does not exist",
                    dir.display()
                ));
            }
        }

        self.email.validate()
    }

    /// Whether logs should be emitted as JSON lines.
    pub fn json_logs(&self) -> bool {
        self.observability.json
            || env::var("ENVIRONMENT")
                .map(|env| env == "production")
                .unwrap_or(false)
    }
}
