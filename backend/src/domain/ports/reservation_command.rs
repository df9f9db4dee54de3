//! Driving port for the reservation creation workflow.

use async_trait::async_trait;

use crate::domain::error::ReservationError;
use crate::domain::reservation::Reservation;
use crate::domain::validation::ReservationPayload;

/// Request envelope for reservation creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReservationRequest {
    /// Raw payload to validate and persist.
    pub payload: ReservationPayload,
}

/// Port exposed to inbound adapters for creating reservations.
#[async_trait]
pub trait ReservationCommand: Send + Sync {
    /// Run the creation workflow: validate, resolve the room, persist, and
    /// dispatch the confirmation best-effort.
    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<Reservation, ReservationError>;
}

/// Fixture implementation rejecting every payload as if the room were
/// unknown.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReservationCommand;

#[async_trait]
impl ReservationCommand for FixtureReservationCommand {
    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<Reservation, ReservationError> {
        Err(ReservationError::UnknownRoom {
            room_id: request.payload.room_id.unwrap_or_default(),
        })
    }
}
