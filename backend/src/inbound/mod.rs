//! Inbound adapters translating external protocols onto domain ports.

pub mod http;
