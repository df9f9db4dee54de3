//! Room catalogue query service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::ReservationError;
use crate::domain::ports::{RoomRepository, RoomsQuery};
use crate::domain::room::Room;

/// Service implementing the room listing driving port.
#[derive(Clone)]
pub struct RoomQueryService<R> {
    rooms: Arc<R>,
}

impl<R> RoomQueryService<R> {
    /// Create a new query service over the room repository.
    pub fn new(rooms: Arc<R>) -> Self {
        Self { rooms }
    }
}

#[async_trait]
impl<R> RoomsQuery for RoomQueryService<R>
where
    R: RoomRepository,
{
    async fn list_rooms(&self) -> Result<Vec<Room>, ReservationError> {
        self.rooms
            .list()
            .await
            .map_err(|error| ReservationError::store(error.to_string()))
    }
}
