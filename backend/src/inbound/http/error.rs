//! HTTP mapping for domain errors.
//!
//! Validation and reference failures carry their descriptors in the payload
//! `details.errors` array; store faults are logged with their diagnostic and
//! reach the client as a generic internal error.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use serde_json::json;
use tracing::error;

use crate::domain::ReservationError;
use crate::domain::validation::FieldError;
use crate::models::Error;

fn descriptor_details(errors: &[FieldError]) -> serde_json::Value {
    json!({ "errors": errors })
}

impl From<ReservationError> for Error {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::Validation(descriptors) => {
                Error::invalid_request("reservation payload failed validation")
                    .with_details(descriptor_details(&descriptors))
            }
            ReservationError::UnknownRoom { room_id } => {
                Error::invalid_request("referenced room does not exist").with_details(
                    descriptor_details(&[FieldError {
                        field: "roomId".to_owned(),
                        message: format!("room {room_id} does not exist"),
                    }]),
                )
            }
            ReservationError::ReservationNotFound { id } => {
                Error::not_found(format!("reservation {id} not found"))
            }
            ReservationError::RoomNotFound { id } => {
                Error::not_found(format!("room for reservation {id} not found"))
            }
            ReservationError::Store { message } => {
                // The diagnostic stays server-side; the payload is redacted
                // again by the ResponseError implementation.
                error!(detail = %message, "store fault surfaced to HTTP");
                Error::internal(message)
            }
        }
    }
}

/// Map body deserialisation failures onto the structured error payload so
/// malformed JSON and type mismatches look like every other failure.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid request body: {err}")).into()
}
