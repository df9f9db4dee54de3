//! SQLite adapter for the room repository port.

use async_trait::async_trait;
use rusqlite::OptionalExtension;

use crate::domain::ports::{RoomRepository, RoomStoreError};
use crate::domain::room::{NewRoom, Room, RoomId};
use crate::outbound::persistence::document_store::{DocumentStore, StoreError};

fn map_store_error(error: StoreError) -> RoomStoreError {
    match error {
        StoreError::Open(err) => RoomStoreError::connection(err.to_string()),
        other => RoomStoreError::query(other.to_string()),
    }
}

fn map_join_error(error: tokio::task::JoinError) -> RoomStoreError {
    RoomStoreError::query(format!("blocking task failed: {error}"))
}

/// Room repository over the shared document store.
#[derive(Clone)]
pub struct SqliteRoomRepository {
    store: DocumentStore,
}

impl SqliteRoomRepository {
    /// Create a repository over the shared store handle.
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RoomRepository for SqliteRoomRepository {
    async fn list(&self) -> Result<Vec<Room>, RoomStoreError> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || {
            store.with_conn(|conn| {
                let mut stmt = conn.prepare("SELECT doc FROM rooms ORDER BY rowid")?;
                let docs = stmt.query_map([], |row| row.get::<_, String>(0))?;
                let mut rooms = Vec::new();
                for doc in docs {
                    rooms.push(serde_json::from_str(&doc?)?);
                }
                Ok(rooms)
            })
        })
        .await
        .map_err(map_join_error)?
        .map_err(map_store_error)
    }

    async fn find_by_id(&self, room_id: &RoomId) -> Result<Option<Room>, RoomStoreError> {
        let store = self.store.clone();
        let id = room_id.to_string();
        tokio::task::spawn_blocking(move || {
            store.with_conn(|conn| {
                let doc: Option<String> = conn
                    .query_row(
                        "SELECT doc FROM rooms WHERE id = ?1",
                        rusqlite::params![id],
                        |row| row.get(0),
                    )
                    .optional()?;
                doc.map(|raw| serde_json::from_str(&raw))
                    .transpose()
                    .map_err(StoreError::from)
            })
        })
        .await
        .map_err(map_join_error)?
        .map_err(map_store_error)
    }

    async fn insert(&self, room: &NewRoom) -> Result<Room, RoomStoreError> {
        let store = self.store.clone();
        let record = Room {
            id: RoomId::random(),
            name: room.name.clone(),
            price: room.price,
            image: room.image.clone(),
        };
        let stored = record.clone();
        tokio::task::spawn_blocking(move || {
            store.with_conn(|conn| {
                let doc = serde_json::to_string(&record)?;
                conn.execute(
                    "INSERT INTO rooms (id, doc) VALUES (?1, ?2)",
                    rusqlite::params![record.id.to_string(), doc],
                )?;
                Ok(())
            })
        })
        .await
        .map_err(map_join_error)?
        .map_err(map_store_error)?;
        Ok(stored)
    }
}
