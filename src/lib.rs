pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::{AppState, router};

/// Wires the contact handler to the mailer selected in `config`.
pub fn app_state(config: Config) -> anyhow::Result<AppState> {
    let mailer = folio_notification::mailer(&config.email)?;
    let contact_command = folio_contact::Command::new(
        mailer,
        &config.email.from_address,
        &config.email.contact_address,
    );

    Ok(AppState {
        config,
        contact_command,
    })
}
