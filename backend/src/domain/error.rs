//! Domain-level error type for the reservation services.
//!
//! Transport agnostic: inbound adapters map these variants to HTTP status
//! codes and the JSON error payload. The taxonomy distinguishes payload
//! validation failures (caller fixes the payload) from reference failures
//! (caller-correctable, dependent on store state) and store faults (not
//! caller-correctable).

use thiserror::Error;

use crate::domain::validation::FieldError;

/// Failures raised by the reservation and room services.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReservationError {
    /// The creation payload violated one or more field rules.
    #[error("reservation payload failed validation")]
    Validation(Vec<FieldError>),
    /// The payload referenced a room that does not exist in the store.
    #[error("referenced room does not exist")]
    UnknownRoom {
        /// Identifier supplied in the payload.
        room_id: String,
    },
    /// No reservation exists under the requested identifier.
    #[error("reservation {id} not found")]
    ReservationNotFound {
        /// Identifier supplied in the request path.
        id: String,
    },
    /// The reservation exists but its room has since been deleted.
    #[error("room for reservation {id} not found")]
    RoomNotFound {
        /// Identifier of the reservation whose room is missing.
        id: String,
    },
    /// The document store failed; the diagnostic stays server-side.
    #[error("store operation failed: {message}")]
    Store {
        /// Diagnostic detail for logging, never sent to clients.
        message: String,
    },
}

impl ReservationError {
    /// Build a store fault carrying a diagnostic message.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Display formatting coverage for the error taxonomy.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn unknown_room_message_is_caller_facing() {
        let err = ReservationError::UnknownRoom {
            room_id: "abc".to_owned(),
        };
        assert_eq!(err.to_string(), "referenced room does not exist");
    }

    #[rstest]
    fn store_fault_carries_diagnostic() {
        let err = ReservationError::store("disk on fire");
        assert!(err.to_string().contains("disk on fire"));
    }
}
