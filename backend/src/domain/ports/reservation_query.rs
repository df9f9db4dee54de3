//! Driving port for reservation retrieval.

use async_trait::async_trait;

use crate::domain::error::ReservationError;
use crate::domain::reservation::ReservationWithRoom;

/// Port exposed to inbound adapters for reading a reservation joined with
/// its room's current record.
#[async_trait]
pub trait ReservationQuery: Send + Sync {
    /// Resolve a reservation by its raw path identifier.
    ///
    /// Malformed identifiers never reach the store; they resolve to
    /// [`ReservationError::ReservationNotFound`].
    async fn get_reservation(&self, id: &str) -> Result<ReservationWithRoom, ReservationError>;
}

/// Fixture implementation reporting every reservation as missing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReservationQuery;

#[async_trait]
impl ReservationQuery for FixtureReservationQuery {
    async fn get_reservation(&self, id: &str) -> Result<ReservationWithRoom, ReservationError> {
        Err(ReservationError::ReservationNotFound { id: id.to_owned() })
    }
}
