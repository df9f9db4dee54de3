//! Room catalogue HTTP handlers.
//!
//! ```text
//! GET /api/rooms
//! ```

use actix_web::{get, web};

use crate::domain::Room;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::models::Error;

/// List every room, in insertion order, without filtering or pagination.
#[utoipa::path(
    get,
    path = "/api/rooms",
    responses(
        (status = 200, description = "All rooms in insertion order", body = [Room]),
        (status = 500, description = "Store fault", body = Error)
    ),
    tags = ["rooms"],
    operation_id = "listRooms"
)]
#[get("/rooms")]
pub async fn list_rooms(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Room>>> {
    let rooms = state.rooms.list_rooms().await?;
    Ok(web::Json(rooms))
}

#[cfg(test)]
#[path = "rooms_tests.rs"]
mod tests;
