//! Port for dispatching reservation confirmation messages.
//!
//! The creation workflow treats this collaborator as best effort: adapters
//! report faults through [`MailerError`], and the service logs and swallows
//! them without touching the reservation outcome.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::reservation::ReservationId;

/// Errors raised by mail transport adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailerError {
    /// The transport could not be reached or timed out.
    #[error("mail transport failed: {message}")]
    Transport {
        /// Diagnostic detail.
        message: String,
    },
    /// The mail API answered with a non-success status.
    #[error("mail API rejected the message: {message}")]
    Rejected {
        /// Diagnostic detail.
        message: String,
    },
}

impl MailerError {
    /// Build a transport failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a rejection failure.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Confirmation message content assembled by the creation workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationEmail {
    /// Guest email address the message is sent to.
    pub to: String,
    /// Guest name used in the greeting.
    pub guest_name: String,
    /// Name of the booked room, from the creation-time snapshot.
    pub room_name: String,
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
    /// Number of nights booked.
    pub nights: u32,
    /// Number of guests booked.
    pub guests: u32,
    /// Computed total in currency minor units; confirmation-message only,
    /// never persisted.
    pub total_price: i64,
    /// Identifier of the created reservation.
    pub reservation_id: ReservationId,
}

/// Port for handing a confirmation message to the mail transport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfirmationMailer: Send + Sync {
    /// Deliver the confirmation message.
    async fn send_confirmation(&self, email: &ConfirmationEmail) -> Result<(), MailerError>;
}
