//! Inbound adapters translating transport requests onto the domain.

pub mod http;
