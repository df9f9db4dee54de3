//! Yadoya backend library modules.
//!
//! A small reservation service exposing rooms and reservations over HTTP,
//! backed by a SQLite document store, with best-effort email confirmation on
//! reservation creation.

pub mod doc;
pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod models;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request-scoped trace identifier middleware.
pub use middleware::trace::Trace;
