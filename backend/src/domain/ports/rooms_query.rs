//! Driving port for room listing.

use async_trait::async_trait;

use crate::domain::error::ReservationError;
use crate::domain::room::Room;

/// Port exposed to inbound adapters for reading the room catalogue.
#[async_trait]
pub trait RoomsQuery: Send + Sync {
    /// List every room in insertion order. An empty list is a valid success.
    async fn list_rooms(&self) -> Result<Vec<Room>, ReservationError>;
}

/// Fixture implementation returning an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRoomsQuery;

#[async_trait]
impl RoomsQuery for FixtureRoomsQuery {
    async fn list_rooms(&self) -> Result<Vec<Room>, ReservationError> {
        Ok(Vec::new())
    }
}
