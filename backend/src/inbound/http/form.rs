//! Shared helpers for form-driven handlers.
//!
//! Every create/edit endpoint follows the same two-branch shape: a valid
//! submission performs exactly one mutation and redirects, an invalid one
//! re-renders as `200 OK` with the field-keyed error map.

use std::collections::HashMap;

use actix_web::http::header;
use actix_web::HttpResponse;
use serde_json::json;

use crate::domain::{FieldErrors, FormData};

/// Convert a urlencoded body into domain form data.
pub fn form_data(body: HashMap<String, String>) -> FormData {
    FormData::new(body)
}

/// `302 Found` redirect to `location`.
pub fn redirect(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.as_ref().to_owned()))
        .finish()
}

/// `200 OK` carrying the validation errors for re-rendering the form.
pub fn validation_failure(errors: &FieldErrors) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "errors": errors }))
}
