//! Bankhub library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds entities, form
//! validation, and the persistence ports; `inbound` adapts HTTP requests
//! onto the domain; `outbound` implements the ports; `server` wires
//! everything into an actix application.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
