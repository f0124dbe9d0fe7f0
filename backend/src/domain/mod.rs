//! Domain model: entities, form validation, authentication primitives,
//! ownership guards, and the ports implemented by outbound adapters.
//!
//! Nothing in this module depends on actix or any other transport; inbound
//! adapters translate domain errors into protocol responses.

pub mod auth;
pub mod bank;
pub mod branch;
pub mod error;
pub mod forms;
pub mod ownership;
pub mod ports;
pub mod user;

pub use auth::{authenticate, LoginCredentials, PasswordHash};
pub use bank::{Bank, BankId};
pub use branch::{Branch, BranchId};
pub use error::{Error, ErrorCode};
pub use forms::{FieldErrors, FormData};
pub use user::{User, UserId, Username};
