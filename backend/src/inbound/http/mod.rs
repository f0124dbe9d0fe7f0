//! HTTP inbound adapter exposing the accounts and banks endpoints.

pub mod accounts;
pub mod banks;
pub mod branches;
pub mod error;
pub mod form;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
