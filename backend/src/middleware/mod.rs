//! Actix middleware for request-scoped concerns.

pub mod trace;

pub use self::trace::Trace;
