//! Root welcome endpoint.

use actix_web::{HttpResponse, get};
use serde_json::json;

/// Static welcome payload at the service root.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Static welcome payload")
    ),
    tags = ["welcome"],
    operation_id = "welcome"
)]
#[get("/")]
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "service": "yadoya-backend",
        "message": "Welcome to the Yadoya reservation API",
    }))
}
