//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (rooms,
//!   reservations, welcome, health)
//! - **Schemas**: The transport bodies and the domain records they embed
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{Reservation, ReservationStatus, Room, RoomSnapshot};
use crate::inbound::http::reservations::{CreateReservationBody, ReservationWithRoomBody};
use crate::models::{Error, ErrorCode};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Yadoya reservation API",
        description = "HTTP interface for listing rooms and booking reservations."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::rooms::list_rooms,
        crate::inbound::http::reservations::create_reservation,
        crate::inbound::http::reservations::get_reservation,
        crate::inbound::http::welcome::welcome,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Room,
        Reservation,
        ReservationStatus,
        RoomSnapshot,
        CreateReservationBody,
        ReservationWithRoomBody,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "rooms", description = "Room catalogue reads"),
        (name = "reservations", description = "Reservation creation and retrieval"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
