//! Room data model.
//!
//! Rooms are created and maintained outside this service; the domain treats
//! them as read-only records referenced by reservations.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Stable room identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(Uuid);

impl RoomId {
    /// Generate a new random [`RoomId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier string, rejecting anything that is not a UUID.
    pub fn parse(value: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value).map(Self)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RoomId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Room record as stored in the `rooms` collection.
///
/// `price` is an integer amount of currency minor units per night per guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Store-generated identifier.
    #[schema(value_type = String, format = "uuid")]
    pub id: RoomId,
    /// Display name of the room.
    pub name: String,
    /// Price per night per guest in currency minor units.
    pub price: i64,
    /// Reference to the room image asset.
    pub image: String,
}

/// Room fields supplied when inserting a new room (demo seeding and tests).
///
/// The store generates the identifier on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    /// Display name of the room.
    pub name: String,
    /// Price per night per guest in currency minor units.
    pub price: i64,
    /// Reference to the room image asset.
    pub image: String,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for room identifier parsing.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    #[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    fn parse_rejects_malformed_identifiers(#[case] raw: &str) {
        assert!(RoomId::parse(raw).is_err());
    }

    #[rstest]
    fn parse_round_trips_canonical_uuid() {
        let id = RoomId::random();
        let parsed = RoomId::parse(&id.to_string()).expect("canonical UUID parses");
        assert_eq!(parsed, id);
    }

    #[rstest]
    fn room_serialises_with_camel_case_fields() {
        let room = Room {
            id: RoomId::random(),
            name: "Standard Room".to_owned(),
            price: 10_000,
            image: "a.jpg".to_owned(),
        };
        let value = serde_json::to_value(&room).expect("room serialises");
        assert_eq!(value["name"], "Standard Room");
        assert_eq!(value["price"], 10_000);
        assert_eq!(value["image"], "a.jpg");
        assert_eq!(value["id"], room.id.to_string());
    }
}
