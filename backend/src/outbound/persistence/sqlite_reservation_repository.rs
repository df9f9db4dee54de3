//! SQLite adapter for the reservation repository port.
//!
//! The adapter assigns the document identifier on insert; every call stores
//! a new document, so retried submissions create distinct reservations.

use async_trait::async_trait;
use rusqlite::OptionalExtension;

use crate::domain::ports::{ReservationRepository, ReservationStoreError};
use crate::domain::reservation::{NewReservation, Reservation, ReservationId};
use crate::outbound::persistence::document_store::{DocumentStore, StoreError};

fn map_store_error(error: StoreError) -> ReservationStoreError {
    match error {
        StoreError::Open(err) => ReservationStoreError::connection(err.to_string()),
        other => ReservationStoreError::query(other.to_string()),
    }
}

fn map_join_error(error: tokio::task::JoinError) -> ReservationStoreError {
    ReservationStoreError::query(format!("blocking task failed: {error}"))
}

/// Reservation repository over the shared document store.
#[derive(Clone)]
pub struct SqliteReservationRepository {
    store: DocumentStore,
}

impl SqliteReservationRepository {
    /// Create a repository over the shared store handle.
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReservationRepository for SqliteReservationRepository {
    async fn insert(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, ReservationStoreError> {
        let store = self.store.clone();
        let record = reservation.clone().with_id(ReservationId::random());
        let stored = record.clone();
        tokio::task::spawn_blocking(move || {
            store.with_conn(|conn| {
                let doc = serde_json::to_string(&record)?;
                conn.execute(
                    "INSERT INTO reservations (id, doc) VALUES (?1, ?2)",
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

    async fn find_by_id(
        &self,
        id: &ReservationId,
    ) -> Result<Option<Reservation>, ReservationStoreError> {
        let store = self.store.clone();
        let raw_id = id.to_string();
        tokio::task::spawn_blocking(move || {
            store.with_conn(|conn| {
                let doc: Option<String> = conn
                    .query_row(
                        "SELECT doc FROM reservations WHERE id = ?1",
                        rusqlite::params![raw_id],
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
}
