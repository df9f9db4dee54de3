//! Reservation domain services.
//!
//! `ReservationCommandService` implements the creation workflow; the steps
//! are ordered to fail cheaply before any write, and confirmation dispatch
//! is decoupled from the transactional outcome. `ReservationQueryService`
//! implements retrieval with the read-time room join.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::domain::error::ReservationError;
use crate::domain::ports::{
    ConfirmationEmail, ConfirmationMailer, CreateReservationRequest, ReservationCommand,
    ReservationQuery, ReservationRepository, ReservationStoreError, RoomRepository, RoomStoreError,
};
use crate::domain::reservation::{
    GUEST_USER_ID, NewReservation, Reservation, ReservationId, ReservationStatus,
    ReservationWithRoom, RoomSnapshot,
};
use crate::domain::room::Room;
use crate::domain::validation::{ValidatedReservation, validate_payload};

fn map_room_store_error(error: RoomStoreError) -> ReservationError {
    ReservationError::store(error.to_string())
}

fn map_reservation_store_error(error: ReservationStoreError) -> ReservationError {
    ReservationError::store(error.to_string())
}

fn build_reservation(validated: ValidatedReservation, room: &Room) -> NewReservation {
    NewReservation {
        user_id: validated
            .user_id
            .unwrap_or_else(|| GUEST_USER_ID.to_owned()),
        name: validated.name,
        email: validated.email,
        postal_code: validated.postal_code,
        address: validated.address,
        phone: validated.phone,
        room_id: validated.room_id,
        room_type: validated.room_type,
        check_in: validated.check_in,
        check_out: validated.check_out,
        nights: validated.nights,
        guests: validated.guests,
        status: ReservationStatus::Confirmed,
        created_at: Utc::now(),
        room_details: RoomSnapshot::capture(room),
    }
}

/// Total for the confirmation message: price per night per guest times
/// nights times guests. Never persisted.
fn total_price(reservation: &Reservation) -> i64 {
    reservation
        .room_details
        .price
        .saturating_mul(i64::from(reservation.nights))
        .saturating_mul(i64::from(reservation.guests))
}

fn confirmation_for(reservation: &Reservation) -> ConfirmationEmail {
    ConfirmationEmail {
        to: reservation.email.clone(),
        guest_name: reservation.name.clone(),
        room_name: reservation.room_details.name.clone(),
        check_in: reservation.check_in,
        check_out: reservation.check_out,
        nights: reservation.nights,
        guests: reservation.guests,
        total_price: total_price(reservation),
        reservation_id: reservation.id,
    }
}

/// Reservation service implementing the creation driving port.
#[derive(Clone)]
pub struct ReservationCommandService<R, S> {
    rooms: Arc<R>,
    reservations: Arc<S>,
    mailer: Arc<dyn ConfirmationMailer>,
}

impl<R, S> ReservationCommandService<R, S> {
    /// Create a new command service over the room and reservation
    /// repositories and the confirmation mailer.
    pub fn new(rooms: Arc<R>, reservations: Arc<S>, mailer: Arc<dyn ConfirmationMailer>) -> Self {
        Self {
            rooms,
            reservations,
            mailer,
        }
    }
}

#[async_trait]
impl<R, S> ReservationCommand for ReservationCommandService<R, S>
where
    R: RoomRepository,
    S: ReservationRepository,
{
    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<Reservation, ReservationError> {
        // Step 1: the rule table runs before any store access.
        let validated =
            validate_payload(&request.payload).map_err(ReservationError::Validation)?;

        // Step 2: referential integrity against the rooms collection. No
        // transaction spans this lookup and the insert below; a concurrent
        // room deletion is an accepted race.
        let room = self
            .rooms
            .find_by_id(&validated.room_id)
            .await
            .map_err(map_room_store_error)?
            .ok_or_else(|| ReservationError::UnknownRoom {
                room_id: validated.room_id.to_string(),
            })?;

        // Steps 3 and 4: assemble the document with the room snapshot and
        // persist it under a store-generated identifier.
        let reservation = self
            .reservations
            .insert(&build_reservation(validated, &room))
            .await
            .map_err(map_reservation_store_error)?;

        // Steps 5 to 7: dispatch the confirmation; its outcome feeds
        // logging only and never alters the workflow result.
        match self.mailer.send_confirmation(&confirmation_for(&reservation)).await {
            Ok(()) => info!(
                reservation_id = %reservation.id,
                "confirmation dispatched"
            ),
            Err(error) => warn!(
                %error,
                reservation_id = %reservation.id,
                "confirmation dispatch failed; reservation unaffected"
            ),
        }

        Ok(reservation)
    }
}

/// Reservation service implementing the retrieval driving port.
#[derive(Clone)]
pub struct ReservationQueryService<R, S> {
    rooms: Arc<R>,
    reservations: Arc<S>,
}

impl<R, S> ReservationQueryService<R, S> {
    /// Create a new query service over the room and reservation
    /// repositories.
    pub fn new(rooms: Arc<R>, reservations: Arc<S>) -> Self {
        Self {
            rooms,
            reservations,
        }
    }
}

#[async_trait]
impl<R, S> ReservationQuery for ReservationQueryService<R, S>
where
    R: RoomRepository,
    S: ReservationRepository,
{
    async fn get_reservation(&self, id: &str) -> Result<ReservationWithRoom, ReservationError> {
        // Malformed identifiers are indistinguishable from unknown ones to
        // the caller and never reach the store.
        let reservation_id =
            ReservationId::parse(id).map_err(|_| ReservationError::ReservationNotFound {
                id: id.to_owned(),
            })?;

        let reservation = self
            .reservations
            .find_by_id(&reservation_id)
            .await
            .map_err(map_reservation_store_error)?
            .ok_or_else(|| ReservationError::ReservationNotFound { id: id.to_owned() })?;

        // Read-time join: the response reflects the room's current state,
        // not the stored snapshot. A deleted room fails the read even
        // though the reservation exists.
        let room = self
            .rooms
            .find_by_id(&reservation.room_id)
            .await
            .map_err(map_room_store_error)?
            .ok_or_else(|| ReservationError::RoomNotFound { id: id.to_owned() })?;

        Ok(ReservationWithRoom { reservation, room })
    }
}

#[cfg(test)]
#[path = "reservation_service_tests.rs"]
mod tests;
