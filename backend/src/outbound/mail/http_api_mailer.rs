//! Reqwest-backed mail API adapter.
//!
//! This adapter owns transport details only: message serialisation, the
//! request timeout, and HTTP error mapping. Workflow-level failure handling
//! stays in the domain service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;

use crate::domain::ports::{ConfirmationEmail, ConfirmationMailer, MailerError};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Credentials and sender identity for the mail API.
#[derive(Debug, Clone)]
pub struct MailAccount {
    /// Bearer token presented to the mail API.
    pub token: String,
    /// Sender address recorded on outgoing messages.
    pub from: String,
}

#[derive(Debug, Serialize)]
struct MailMessageDto<'a> {
    from: &'a str,
    to: &'a str,
    subject: String,
    text: String,
}

fn format_message<'a>(account: &'a MailAccount, email: &'a ConfirmationEmail) -> MailMessageDto<'a> {
    MailMessageDto {
        from: &account.from,
        to: &email.to,
        subject: format!("Reservation confirmed: {}", email.room_name),
        text: format!(
            "Dear {guest},\n\n\
             Your reservation is confirmed.\n\n\
             Room: {room}\n\
             Check-in: {check_in}\n\
             Check-out: {check_out}\n\
             Nights: {nights}\n\
             Guests: {guests}\n\
             Total: {total}\n\n\
             Reservation number: {id}\n",
            guest = email.guest_name,
            room = email.room_name,
            check_in = email.check_in,
            check_out = email.check_out,
            nights = email.nights,
            guests = email.guests,
            total = email.total_price,
            id = email.reservation_id,
        ),
    }
}

fn map_transport_error(error: reqwest::Error) -> MailerError {
    MailerError::transport(error.to_string())
}

fn map_status_error(status: StatusCode) -> MailerError {
    MailerError::rejected(format!("mail API answered {status}"))
}

/// Mailer adapter delivering through an HTTP mail API endpoint.
pub struct HttpApiMailer {
    client: Client,
    endpoint: Url,
    account: MailAccount,
}

impl HttpApiMailer {
    /// Build an adapter with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, account: MailAccount) -> Result<Self, reqwest::Error> {
        Self::with_timeout(endpoint, account, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(
        endpoint: Url,
        account: MailAccount,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            account,
        })
    }
}

#[async_trait]
impl ConfirmationMailer for HttpApiMailer {
    async fn send_confirmation(&self, email: &ConfirmationEmail) -> Result<(), MailerError> {
        let message = format_message(&self.account, email);
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.account.token)
            .json(&message)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_status_error(status));
        }
        Ok(())
    }
}
