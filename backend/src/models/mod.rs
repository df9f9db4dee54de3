//! Transport-facing payload types shared across inbound adapters.

pub mod error;

pub use self::error::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;
