//! Declarative validation for reservation creation payloads.
//!
//! The rules live in a static table of `{field, check}` entries evaluated
//! independently; every violated rule contributes one `{field, message}`
//! descriptor, so a single response reports all problems at once. Rule
//! evaluation never touches the store: `roomId` is checked for identifier
//! syntax only, existence is the creation workflow's concern.
//!
//! A present-but-non-string `userId` (or any other JSON type mismatch) is
//! rejected structurally by the typed request body before this table runs.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::room::RoomId;

/// Minimum trimmed length for the guest name.
pub const NAME_MIN: usize = 2;
/// Maximum trimmed length for the guest name.
pub const NAME_MAX: usize = 50;
/// Minimum trimmed length for the address.
pub const ADDRESS_MIN: usize = 5;
/// Maximum trimmed length for the address.
pub const ADDRESS_MAX: usize = 100;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static POSTAL_CODE_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn postal_code_regex() -> &'static Regex {
    POSTAL_CODE_RE.get_or_init(|| {
        let pattern = r"^\d{3}-\d{4}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("postal code regex failed to compile: {error}"))
    })
}

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        let pattern = r"^\d{10,11}$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

/// Raw reservation creation payload before validation.
///
/// Built from the typed request body; required fields are optional here so
/// that a missing field reaches the rule table and reports a descriptor
/// instead of failing at the transport edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationPayload {
    /// Optional booking user identifier.
    pub user_id: Option<String>,
    /// Guest name.
    pub name: Option<String>,
    /// Guest email address.
    pub email: Option<String>,
    /// Guest postal code.
    pub postal_code: Option<String>,
    /// Guest street address.
    pub address: Option<String>,
    /// Guest phone number.
    pub phone: Option<String>,
    /// Caller-supplied room-type label.
    pub room_type: Option<String>,
    /// First night of the stay, ISO-8601 calendar date.
    pub check_in: Option<String>,
    /// Departure date, ISO-8601 calendar date.
    pub check_out: Option<String>,
    /// Number of nights.
    pub nights: Option<i64>,
    /// Number of guests.
    pub guests: Option<i64>,
    /// Referenced room identifier.
    pub room_id: Option<String>,
}

/// One validation failure: the camelCase field name and a caller-facing
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// camelCase name of the violating field.
    pub field: String,
    /// Caller-facing description of the violated rule.
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_owned(),
            message: message.into(),
        }
    }
}

/// Payload fields after every rule passed, with dates and identifiers parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedReservation {
    /// Booking user identifier, still optional; the workflow applies the
    /// guest default.
    pub user_id: Option<String>,
    /// Guest name as submitted.
    pub name: String,
    /// Guest email address.
    pub email: String,
    /// Guest postal code.
    pub postal_code: String,
    /// Guest street address as submitted.
    pub address: String,
    /// Guest phone number.
    pub phone: String,
    /// Caller-supplied room-type label.
    pub room_type: String,
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Departure date, strictly after `check_in`.
    pub check_out: NaiveDate,
    /// Number of nights, at least one.
    pub nights: u32,
    /// Number of guests, at least one.
    pub guests: u32,
    /// Referenced room identifier.
    pub room_id: RoomId,
}

type Check = fn(&ReservationPayload) -> Option<String>;

struct Rule {
    field: &'static str,
    check: Check,
}

static RULES: &[Rule] = &[
    Rule {
        field: "name",
        check: check_name,
    },
    Rule {
        field: "email",
        check: check_email,
    },
    Rule {
        field: "postalCode",
        check: check_postal_code,
    },
    Rule {
        field: "address",
        check: check_address,
    },
    Rule {
        field: "phone",
        check: check_phone,
    },
    Rule {
        field: "roomType",
        check: check_room_type,
    },
    Rule {
        field: "checkIn",
        check: check_check_in,
    },
    Rule {
        field: "checkOut",
        check: check_check_out,
    },
    Rule {
        field: "checkOut",
        check: check_stay_order,
    },
    Rule {
        field: "nights",
        check: check_nights,
    },
    Rule {
        field: "guests",
        check: check_guests,
    },
    Rule {
        field: "roomId",
        check: check_room_id,
    },
];

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_date(value: &Option<String>) -> Option<NaiveDate> {
    present(value).and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

fn parse_count(value: Option<i64>) -> Option<u32> {
    value.filter(|n| *n >= 1).and_then(|n| u32::try_from(n).ok())
}

fn parse_room_id(value: &Option<String>) -> Option<RoomId> {
    present(value).and_then(|raw| RoomId::parse(raw).ok())
}

fn check_len(
    value: &Option<String>,
    label: &str,
    min: usize,
    max: usize,
) -> Option<String> {
    let Some(raw) = present(value) else {
        return Some(format!("{label} is required"));
    };
    let length = raw.chars().count();
    (length < min || length > max)
        .then(|| format!("{label} must be between {min} and {max} characters"))
}

fn check_name(payload: &ReservationPayload) -> Option<String> {
    check_len(&payload.name, "name", NAME_MIN, NAME_MAX)
}

fn check_address(payload: &ReservationPayload) -> Option<String> {
    check_len(&payload.address, "address", ADDRESS_MIN, ADDRESS_MAX)
}

fn check_email(payload: &ReservationPayload) -> Option<String> {
    let Some(raw) = present(&payload.email) else {
        return Some("email is required".to_owned());
    };
    (!email_regex().is_match(raw)).then(|| "email must be a valid email address".to_owned())
}

fn check_postal_code(payload: &ReservationPayload) -> Option<String> {
    let Some(raw) = present(&payload.postal_code) else {
        return Some("postalCode is required".to_owned());
    };
    (!postal_code_regex().is_match(raw))
        .then(|| "postalCode must match the 123-4567 format".to_owned())
}

fn check_phone(payload: &ReservationPayload) -> Option<String> {
    let Some(raw) = present(&payload.phone) else {
        return Some("phone is required".to_owned());
    };
    (!phone_regex().is_match(raw)).then(|| "phone must be 10 or 11 digits".to_owned())
}

fn check_room_type(payload: &ReservationPayload) -> Option<String> {
    present(&payload.room_type)
        .is_none()
        .then(|| "roomType is required".to_owned())
}

fn check_check_in(payload: &ReservationPayload) -> Option<String> {
    if present(&payload.check_in).is_none() {
        return Some("checkIn is required".to_owned());
    }
    parse_date(&payload.check_in)
        .is_none()
        .then(|| "checkIn must be a valid date in YYYY-MM-DD form".to_owned())
}

fn check_check_out(payload: &ReservationPayload) -> Option<String> {
    if present(&payload.check_out).is_none() {
        return Some("checkOut is required".to_owned());
    }
    parse_date(&payload.check_out)
        .is_none()
        .then(|| "checkOut must be a valid date in YYYY-MM-DD form".to_owned())
}

/// Cross-field rule: only reports once both dates parse, so each date's own
/// rule owns the parse failure message.
fn check_stay_order(payload: &ReservationPayload) -> Option<String> {
    let check_in = parse_date(&payload.check_in)?;
    let check_out = parse_date(&payload.check_out)?;
    (check_out <= check_in).then(|| "checkOut must be later than checkIn".to_owned())
}

fn check_nights(payload: &ReservationPayload) -> Option<String> {
    if payload.nights.is_none() {
        return Some("nights is required".to_owned());
    }
    parse_count(payload.nights)
        .is_none()
        .then(|| "nights must be an integer of at least 1".to_owned())
}

fn check_guests(payload: &ReservationPayload) -> Option<String> {
    if payload.guests.is_none() {
        return Some("guests is required".to_owned());
    }
    parse_count(payload.guests)
        .is_none()
        .then(|| "guests must be an integer of at least 1".to_owned())
}

fn check_room_id(payload: &ReservationPayload) -> Option<String> {
    if present(&payload.room_id).is_none() {
        return Some("roomId is required".to_owned());
    }
    parse_room_id(&payload.room_id)
        .is_none()
        .then(|| "roomId must be a valid object identifier".to_owned())
}

/// Evaluate every rule in the table against the payload.
///
/// Returns one descriptor per violated rule, in table order; an empty vector
/// means the payload is valid.
pub fn collect_field_errors(payload: &ReservationPayload) -> Vec<FieldError> {
    RULES
        .iter()
        .filter_map(|rule| (rule.check)(payload).map(|message| FieldError::new(rule.field, message)))
        .collect()
}

fn build_validated(payload: &ReservationPayload) -> Option<ValidatedReservation> {
    Some(ValidatedReservation {
        user_id: payload.user_id.clone(),
        name: payload.name.clone()?,
        email: payload.email.clone()?,
        postal_code: payload.postal_code.clone()?,
        address: payload.address.clone()?,
        phone: payload.phone.clone()?,
        room_type: payload.room_type.clone()?,
        check_in: parse_date(&payload.check_in)?,
        check_out: parse_date(&payload.check_out)?,
        nights: parse_count(payload.nights)?,
        guests: parse_count(payload.guests)?,
        room_id: parse_room_id(&payload.room_id)?,
    })
}

/// Validate the payload and, when every rule passes, produce the parsed
/// representation the creation workflow consumes.
///
/// # Errors
///
/// Returns the full descriptor list when any rule is violated.
pub fn validate_payload(
    payload: &ReservationPayload,
) -> Result<ValidatedReservation, Vec<FieldError>> {
    let errors = collect_field_errors(payload);
    if !errors.is_empty() {
        return Err(errors);
    }
    // Extraction cannot fail once the table passes; the fallback descriptor
    // keeps this path panic-free all the same.
    build_validated(payload).ok_or_else(|| {
        vec![FieldError::new(
            "payload",
            "payload failed validation".to_owned(),
        )]
    })
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
