//! Port for reservation persistence.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::reservation::{NewReservation, Reservation, ReservationId};

/// Errors raised by reservation repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationStoreError {
    /// The store handle could not be reached.
    #[error("reservation store connection failed: {message}")]
    Connection {
        /// Diagnostic detail.
        message: String,
    },
    /// A query or mutation failed during execution.
    #[error("reservation store query failed: {message}")]
    Query {
        /// Diagnostic detail.
        message: String,
    },
}

impl ReservationStoreError {
    /// Build a connection failure.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a query failure.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for writing and reading reservation documents.
///
/// Inserts are not idempotent: every call stores a new document under a
/// fresh identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Persist a reservation, returning the stored record with its
    /// generated identifier.
    async fn insert(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, ReservationStoreError>;

    /// Find a reservation by identifier.
    async fn find_by_id(
        &self,
        id: &ReservationId,
    ) -> Result<Option<Reservation>, ReservationStoreError>;
}
