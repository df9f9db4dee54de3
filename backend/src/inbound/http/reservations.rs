//! Reservation HTTP handlers.
//!
//! ```text
//! POST /api/reservations
//! GET  /api/reservations/{id}
//! ```
//!
//! Creation responses return the stored document, including its
//! creation-time `roomDetails` snapshot. Retrieval responses substitute the
//! referenced room's current record as `roomDetails` instead; the two shapes
//! differ deliberately.

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::CreateReservationRequest;
use crate::domain::{
    Reservation, ReservationId, ReservationPayload, ReservationStatus, ReservationWithRoom, Room,
    RoomId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::models::Error;

/// Request payload for creating a reservation.
///
/// Required fields are optional at the type level so that a missing field
/// reaches the validation table and reports a `{field, message}` descriptor
/// instead of failing body deserialisation. A present-but-non-string
/// `userId` still fails deserialisation with a structured 400.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationBody {
    /// Booking user identifier; defaults to `"guest"` when absent.
    pub user_id: Option<String>,
    /// Guest name, 2 to 50 characters.
    pub name: Option<String>,
    /// Guest email address.
    pub email: Option<String>,
    /// Guest postal code in `123-4567` form.
    pub postal_code: Option<String>,
    /// Guest street address, 5 to 100 characters.
    pub address: Option<String>,
    /// Guest phone number, 10 or 11 digits.
    pub phone: Option<String>,
    /// Room-type label; recorded as supplied.
    pub room_type: Option<String>,
    /// First night of the stay, `YYYY-MM-DD`.
    pub check_in: Option<String>,
    /// Departure date, `YYYY-MM-DD`, strictly after `checkIn`.
    pub check_out: Option<String>,
    /// Number of nights, at least 1.
    pub nights: Option<i64>,
    /// Number of guests, at least 1.
    pub guests: Option<i64>,
    /// Identifier of the room being booked.
    pub room_id: Option<String>,
}

impl From<CreateReservationBody> for ReservationPayload {
    fn from(body: CreateReservationBody) -> Self {
        Self {
            user_id: body.user_id,
            name: body.name,
            email: body.email,
            postal_code: body.postal_code,
            address: body.address,
            phone: body.phone,
            room_type: body.room_type,
            check_in: body.check_in,
            check_out: body.check_out,
            nights: body.nights,
            guests: body.guests,
            room_id: body.room_id,
        }
    }
}

/// Retrieval response: the stored reservation with the referenced room's
/// current record substituted as `roomDetails`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationWithRoomBody {
    /// Reservation identifier.
    #[schema(value_type = String, format = "uuid")]
    pub id: ReservationId,
    /// Booking user.
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
    /// Referenced room identifier.
    #[schema(value_type = String, format = "uuid")]
    pub room_id: RoomId,
    /// Caller-supplied room-type label.
    pub room_type: String,
    /// First night of the stay.
    #[schema(value_type = String, format = "date")]
    pub check_in: NaiveDate,
    /// Departure date.
    #[schema(value_type = String, format = "date")]
    pub check_out: NaiveDate,
    /// Number of nights.
    pub nights: u32,
    /// Number of guests.
    pub guests: u32,
    /// Lifecycle state.
    pub status: ReservationStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// The referenced room as it exists now, not the stored snapshot.
    pub room_details: Room,
}

impl From<ReservationWithRoom> for ReservationWithRoomBody {
    fn from(value: ReservationWithRoom) -> Self {
        let ReservationWithRoom { reservation, room } = value;
        Self {
            id: reservation.id,
            user_id: reservation.user_id,
            name: reservation.name,
            email: reservation.email,
            postal_code: reservation.postal_code,
            address: reservation.address,
            phone: reservation.phone,
            room_id: reservation.room_id,
            room_type: reservation.room_type,
            check_in: reservation.check_in,
            check_out: reservation.check_out,
            nights: reservation.nights,
            guests: reservation.guests,
            status: reservation.status,
            created_at: reservation.created_at,
            room_details: room,
        }
    }
}

/// Create a reservation.
///
/// Runs the full workflow: rule-table validation, room existence check,
/// persistence, and best-effort confirmation dispatch. The 201 response is
/// unaffected by confirmation outcome.
#[utoipa::path(
    post,
    path = "/api/reservations",
    request_body = CreateReservationBody,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Validation descriptors or unknown room", body = Error),
        (status = 500, description = "Store fault", body = Error)
    ),
    tags = ["reservations"],
    operation_id = "createReservation"
)]
#[post("/reservations")]
pub async fn create_reservation(
    state: web::Data<HttpState>,
    payload: web::Json<CreateReservationBody>,
) -> ApiResult<HttpResponse> {
    let reservation = state
        .reservations
        .create_reservation(CreateReservationRequest {
            payload: payload.into_inner().into(),
        })
        .await?;

    Ok(HttpResponse::Created().json(reservation))
}

/// Fetch a reservation joined with its room's current record.
#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    params(
        ("id" = String, Path, description = "Reservation identifier")
    ),
    responses(
        (status = 200, description = "Reservation with live room details", body = ReservationWithRoomBody),
        (status = 404, description = "Reservation or room not found", body = Error)
    ),
    tags = ["reservations"],
    operation_id = "getReservation"
)]
#[get("/reservations/{id}")]
pub async fn get_reservation(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<ReservationWithRoomBody>> {
    let joined = state.reservations_query.get_reservation(&id).await?;
    Ok(web::Json(ReservationWithRoomBody::from(joined)))
}

#[cfg(test)]
#[path = "reservations_tests.rs"]
mod tests;
