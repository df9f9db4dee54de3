//! Mailer used when no mail transport is configured.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{ConfirmationEmail, ConfirmationMailer, MailerError};

/// Refuses delivery when mail settings are absent.
///
/// Absence of transport configuration is a valid operating mode: the
/// creation workflow still completes and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledMailer;

#[async_trait]
impl ConfirmationMailer for DisabledMailer {
    async fn send_confirmation(&self, email: &ConfirmationEmail) -> Result<(), MailerError> {
        debug!(
            reservation_id = %email.reservation_id,
            "mail transport not configured; confirmation skipped"
        );
        Ok(())
    }
}
