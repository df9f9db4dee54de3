//! HTTP adapter: handlers, shared state, and domain-error mapping.
//!
//! Handlers depend only on the driving ports bundled in
//! [`state::HttpState`], so they remain testable without I/O.

pub mod error;
pub mod health;
pub mod reservations;
pub mod rooms;
pub mod state;
pub mod welcome;

pub use self::error::json_error_handler;
pub use crate::models::ApiResult;
