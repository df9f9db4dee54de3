//! SQLite-backed document persistence.
//!
//! The store keeps each collection as a two-column table of identifier and
//! JSON document; repository adapters serialise domain records with serde
//! and run their synchronous SQLite work on the blocking pool.

pub mod document_store;
pub mod sqlite_reservation_repository;
pub mod sqlite_room_repository;

pub use self::document_store::{DocumentStore, StoreError};
pub use self::sqlite_reservation_repository::SqliteReservationRepository;
pub use self::sqlite_room_repository::SqliteRoomRepository;
