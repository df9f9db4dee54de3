//! Domain models and services for the reservation workflow.
//!
//! Purpose: define the transport-agnostic types (rooms, reservations, the
//! validation rule table) and the services implementing the driving ports.
//! Adapters live in `inbound`/`outbound`; nothing here touches HTTP or SQL.

pub mod error;
pub mod ports;
pub mod reservation;
pub mod reservation_service;
pub mod room;
pub mod room_service;
pub mod validation;

pub use self::error::ReservationError;
pub use self::reservation::{
    NewReservation, Reservation, ReservationId, ReservationStatus, ReservationWithRoom,
    RoomSnapshot,
};
pub use self::reservation_service::{ReservationCommandService, ReservationQueryService};
pub use self::room::{NewRoom, Room, RoomId};
pub use self::room_service::RoomQueryService;
pub use self::validation::{FieldError, ReservationPayload, ValidatedReservation};
