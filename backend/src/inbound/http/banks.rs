//! Bank endpoints: creation, listing, and details.
//!
//! ```text
//! POST /banks/add/               name=...&description=...&inst_num=...&swift_code=...
//! GET  /banks/all/
//! GET  /banks/{bank_id}/details/
//! ```
//!
//! Creation requires a session; the creator becomes the immutable owner.
//! The read endpoints are deliberately public and only check existence.

use std::collections::HashMap;

use actix_web::{get, post, web, HttpResponse};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::domain::forms::BankForm;
use crate::domain::{Bank, BankId, Error};
use crate::inbound::http::form::{form_data, redirect, validation_failure};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Bank payload for the read endpoints. Field names are wire contract.
#[derive(Debug, Serialize)]
pub struct BankResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub institution_number: String,
    pub swift_code: String,
    pub owner: String,
}

impl From<&Bank> for BankResponse {
    fn from(bank: &Bank) -> Self {
        Self {
            id: bank.id().to_string(),
            name: bank.name().to_owned(),
            description: bank.description().to_owned(),
            institution_number: bank.institution_number().to_owned(),
            swift_code: bank.swift_code().to_owned(),
            owner: bank.owner().to_string(),
        }
    }
}

/// Create a bank owned by the session principal.
#[post("/add/")]
pub async fn bank_add(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: web::Form<HashMap<String, String>>,
) -> ApiResult<HttpResponse> {
    let principal = session.require_user_id()?;
    let data = form_data(body.into_inner());

    match BankForm::parse(&data) {
        Ok(submission) => {
            let bank = Bank::create(
                submission.name,
                submission.description,
                submission.institution_number,
                submission.swift_code,
                principal,
            );
            let id = bank.id();
            info!(bank = %id, owner = %principal, "created bank");
            state.banks.insert(bank).await?;
            Ok(redirect(format!("/banks/{id}/details/")))
        }
        Err(errors) => Ok(validation_failure(&errors)),
    }
}

/// All banks.
#[get("/all/")]
pub async fn bank_list(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BankResponse>>> {
    let banks = state.banks.list_all().await?;
    Ok(web::Json(banks.iter().map(BankResponse::from).collect()))
}

/// Details for one bank.
#[get("/{bank_id}/details/")]
pub async fn bank_details(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<BankResponse>> {
    let id = BankId::from(path.into_inner());
    let bank = state
        .banks
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("Not Found"))?;
    Ok(web::Json(BankResponse::from(&bank)))
}
