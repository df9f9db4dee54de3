//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain driving ports.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureReservationCommand, FixtureReservationQuery, FixtureRoomsQuery, ReservationCommand,
    ReservationQuery, RoomsQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Room catalogue reads.
    pub rooms: Arc<dyn RoomsQuery>,
    /// Reservation creation workflow.
    pub reservations: Arc<dyn ReservationCommand>,
    /// Reservation retrieval with the read-time room join.
    pub reservations_query: Arc<dyn ReservationQuery>,
}

impl HttpState {
    /// Construct state from port implementations.
    pub fn new(
        rooms: Arc<dyn RoomsQuery>,
        reservations: Arc<dyn ReservationCommand>,
        reservations_query: Arc<dyn ReservationQuery>,
    ) -> Self {
        Self {
            rooms,
            reservations,
            reservations_query,
        }
    }

    /// State backed entirely by fixtures, for handler tests that do not
    /// exercise a particular port.
    pub fn fixture() -> Self {
        Self {
            rooms: Arc::new(FixtureRoomsQuery),
            reservations: Arc::new(FixtureReservationCommand),
            reservations_query: Arc::new(FixtureReservationQuery),
        }
    }
}
