//! Reservation data model.
//!
//! A reservation is written once by the creation workflow and never mutated
//! or deleted afterwards. The stored document carries a `roomDetails`
//! snapshot of the referenced room captured at creation time; the read-time
//! join in [`crate::domain::ReservationQueryService`] substitutes the live
//! room instead.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::room::{Room, RoomId};

/// Sentinel `userId` recorded when the payload omits one.
pub const GUEST_USER_ID: &str = "guest";

/// Stable reservation identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(Uuid);

impl ReservationId {
    /// Generate a new random [`ReservationId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier string, rejecting anything that is not a UUID.
    pub fn parse(value: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value).map(Self)
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reservation lifecycle state.
///
/// Reservations are created confirmed and no transition logic exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// The reservation is booked.
    Confirmed,
}

/// Denormalised copy of the referenced room captured at creation time.
///
/// This snapshot is the historical record of what the guest booked; it is
/// never refreshed when the room later changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    /// Price per night per guest at booking time, in currency minor units.
    pub price: i64,
    /// Room image reference at booking time.
    pub image: String,
    /// Room name at booking time.
    pub name: String,
}

impl RoomSnapshot {
    /// Capture the snapshot fields from a room record.
    pub fn capture(room: &Room) -> Self {
        Self {
            price: room.price,
            image: room.image.clone(),
            name: room.name.clone(),
        }
    }
}

/// Reservation document as stored in the `reservations` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Store-generated identifier, immutable after creation.
    #[schema(value_type = String, format = "uuid")]
    pub id: ReservationId,
    /// Booking user, `"guest"` when the payload omitted one.
    pub user_id: String,
    /// Guest name.
    pub name: String,
    /// Guest email address; confirmation messages are sent here.
    pub email: String,
    /// Guest postal code in `DDD-DDDD` form.
    pub postal_code: String,
    /// Guest street address.
    pub address: String,
    /// Guest phone number, 10 or 11 digits.
    pub phone: String,
    /// Referenced room. Resolved at creation; rooms may be deleted later
    /// without cascading.
    #[schema(value_type = String, format = "uuid")]
    pub room_id: RoomId,
    /// Caller-supplied room-type label, not cross-checked against the room.
    pub room_type: String,
    /// First night of the stay.
    #[schema(value_type = String, format = "date")]
    pub check_in: NaiveDate,
    /// Departure date, strictly after `check_in`.
    #[schema(value_type = String, format = "date")]
    pub check_out: NaiveDate,
    /// Number of nights, supplied independently of the date span.
    pub nights: u32,
    /// Number of guests.
    pub guests: u32,
    /// Lifecycle state, always confirmed at creation.
    pub status: ReservationStatus,
    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
    /// Snapshot of the referenced room at creation time.
    pub room_details: RoomSnapshot,
}

/// Reservation fields assembled by the creation workflow before the store
/// assigns an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    /// Booking user, already defaulted to `"guest"` when absent.
    pub user_id: String,
    /// Guest name.
    pub name: String,
    /// Guest email address.
    pub email: String,
    /// Guest postal code.
    pub postal_code: String,
    /// Guest street address.
    pub address: String,
    /// Guest phone number.
    pub phone: String,
    /// Referenced room.
    pub room_id: RoomId,
    /// Caller-supplied room-type label.
    pub room_type: String,
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
    /// Number of nights.
    pub nights: u32,
    /// Number of guests.
    pub guests: u32,
    /// Lifecycle state.
    pub status: ReservationStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Snapshot of the referenced room.
    pub room_details: RoomSnapshot,
}

impl NewReservation {
    /// Attach the store-generated identifier, producing the stored record.
    pub fn with_id(self, id: ReservationId) -> Reservation {
        Reservation {
            id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            postal_code: self.postal_code,
            address: self.address,
            phone: self.phone,
            room_id: self.room_id,
            room_type: self.room_type,
            check_in: self.check_in,
            check_out: self.check_out,
            nights: self.nights,
            guests: self.guests,
            status: self.status,
            created_at: self.created_at,
            room_details: self.room_details,
        }
    }
}

/// Read model returned by reservation retrieval: the stored reservation
/// joined with the referenced room's current record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationWithRoom {
    /// The stored reservation document.
    pub reservation: Reservation,
    /// The referenced room as it exists at read time.
    pub room: Room,
}
