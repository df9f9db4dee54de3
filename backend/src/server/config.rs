//! Runtime settings loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::mail::MailAccount;

const DEFAULT_STORE_PATH: &str = "yadoya.db";
const DEFAULT_PORT: u16 = 8080;

/// Configuration values controlling the server at startup.
///
/// Every value has a working default except the mail transport, which
/// stays disabled until all three mail settings are supplied.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "YADOYA")]
pub struct Settings {
    /// Path of the SQLite document store file.
    pub store_path: Option<PathBuf>,
    /// TCP port the HTTP server binds to.
    pub port: Option<u16>,
    /// Mail API endpoint URL for confirmation delivery.
    pub mail_endpoint: Option<String>,
    /// Bearer token for the mail API.
    pub mail_token: Option<String>,
    /// Sender address used on confirmation emails.
    pub mail_from: Option<String>,
    /// Insert demonstration rooms into an empty store on startup.
    #[ortho_config(default = false)]
    pub seed_demo_rooms: bool,
}

impl Settings {
    /// Return the configured store path, falling back to the default.
    pub fn store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
    }

    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the mail endpoint and account when fully configured.
    ///
    /// A partial mail configuration counts as disabled.
    pub fn mail(&self) -> Option<(String, MailAccount)> {
        match (&self.mail_endpoint, &self.mail_token, &self.mail_from) {
            (Some(endpoint), Some(token), Some(from)) => Some((
                endpoint.clone(),
                MailAccount {
                    token: token.clone(),
                    from: from.clone(),
                },
            )),
            _ => None,
        }
    }
}
