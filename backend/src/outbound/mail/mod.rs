//! Confirmation mailer adapters.
//!
//! `HttpApiMailer` delivers through an HTTP mail API; `DisabledMailer` is
//! selected when no mail settings are configured and refuses delivery
//! without failing the workflow.

pub mod disabled_mailer;
pub mod http_api_mailer;

pub use self::disabled_mailer::DisabledMailer;
pub use self::http_api_mailer::{HttpApiMailer, MailAccount};
