//! Domain ports.
//!
//! Driven ports (`RoomRepository`, `ReservationRepository`,
//! `ConfirmationMailer`) are implemented by outbound adapters; driving ports
//! (`RoomsQuery`, `ReservationCommand`, `ReservationQuery`) are implemented
//! by the domain services and consumed by inbound adapters. Fixture
//! implementations live beside each trait for tests that do not exercise the
//! real adapter.

pub mod confirmation_mailer;
pub mod reservation_command;
pub mod reservation_query;
pub mod reservation_repository;
pub mod room_repository;
pub mod rooms_query;

pub use self::confirmation_mailer::{ConfirmationEmail, ConfirmationMailer, MailerError};
pub use self::reservation_command::{
    CreateReservationRequest, FixtureReservationCommand, ReservationCommand,
};
pub use self::reservation_query::{FixtureReservationQuery, ReservationQuery};
pub use self::reservation_repository::{ReservationRepository, ReservationStoreError};
pub use self::room_repository::{FixtureRoomRepository, RoomRepository, RoomStoreError};
pub use self::rooms_query::{FixtureRoomsQuery, RoomsQuery};
