//! Port for room reads against the document store.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::room::{NewRoom, Room, RoomId};

/// Errors raised by room repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomStoreError {
    /// The store handle could not be reached.
    #[error("room store connection failed: {message}")]
    Connection {
        /// Diagnostic detail.
        message: String,
    },
    /// A query or mutation failed during execution.
    #[error("room store query failed: {message}")]
    Query {
        /// Diagnostic detail.
        message: String,
    },
}

impl RoomStoreError {
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

/// Port for reading rooms and, for seeding, inserting them.
///
/// Rooms are maintained outside this service; `insert` exists for the demo
/// seeder and tests only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// List every room in insertion order.
    async fn list(&self) -> Result<Vec<Room>, RoomStoreError>;

    /// Find a room by identifier.
    async fn find_by_id(&self, room_id: &RoomId) -> Result<Option<Room>, RoomStoreError>;

    /// Insert a room, returning the stored record with its generated
    /// identifier.
    async fn insert(&self, room: &NewRoom) -> Result<Room, RoomStoreError>;
}

/// Fixture implementation for tests that do not exercise room persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRoomRepository;

#[async_trait]
impl RoomRepository for FixtureRoomRepository {
    async fn list(&self) -> Result<Vec<Room>, RoomStoreError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _room_id: &RoomId) -> Result<Option<Room>, RoomStoreError> {
        Ok(None)
    }

    async fn insert(&self, room: &NewRoom) -> Result<Room, RoomStoreError> {
        Ok(Room {
            id: RoomId::random(),
            name: room.name.clone(),
            price: room.price,
            image: room.image.clone(),
        })
    }
}
