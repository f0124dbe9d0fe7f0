//! Branch endpoints: creation, details, listing, and edit.
//!
//! ```text
//! POST /banks/{bank_id}/branches/add/     name=...&transit_num=...&...
//! GET  /banks/branch/{branch_id}/details/
//! GET  /banks/{bank_id}/branches/all/
//! GET  /banks/branch/{branch_id}/edit/
//! POST /banks/branch/{branch_id}/edit/
//! ```
//!
//! Mutations run the guard chain in a fixed order: session (401), target
//! existence (404), then ownership of the parent bank (403). Validation
//! only runs once the guards pass, so a non-owner never learns whether a
//! payload was well-formed. The read endpoints are deliberately public.

use std::collections::HashMap;

use actix_web::{get, post, web, HttpResponse};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::domain::forms::BranchForm;
use crate::domain::ownership::require_bank_owner;
use crate::domain::{Bank, BankId, Branch, BranchId, Error};
use crate::inbound::http::form::{form_data, redirect, validation_failure};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Branch payload for the read endpoints. Field names are wire contract;
/// note `transit_num` (not `transit_number`) and the RFC 3339 timestamp.
#[derive(Debug, Serialize)]
pub struct BranchResponse {
    pub id: String,
    pub name: String,
    pub transit_num: String,
    pub address: String,
    pub email: String,
    pub capacity: Option<u32>,
    pub last_modified: String,
}

impl From<&Branch> for BranchResponse {
    fn from(branch: &Branch) -> Self {
        Self {
            id: branch.id().to_string(),
            name: branch.name().to_owned(),
            transit_num: branch.transit_number().to_owned(),
            address: branch.address().to_owned(),
            email: branch.email().to_owned(),
            capacity: branch.capacity(),
            last_modified: branch.last_modified().to_rfc3339(),
        }
    }
}

async fn bank_or_404(state: &HttpState, id: BankId) -> Result<Bank, Error> {
    state
        .banks
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("Not Found"))
}

async fn branch_or_404(state: &HttpState, id: BranchId) -> Result<Branch, Error> {
    state
        .branches
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("Not Found"))
}

/// Create a branch under a bank the principal owns.
#[post("/{bank_id}/branches/add/")]
pub async fn branch_add(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    body: web::Form<HashMap<String, String>>,
) -> ApiResult<HttpResponse> {
    let principal = session.require_user_id()?;
    let bank = bank_or_404(&state, BankId::from(path.into_inner())).await?;
    require_bank_owner(&bank, principal)?;

    let data = form_data(body.into_inner());
    match BranchForm::parse(&data) {
        Ok(fields) => {
            let branch = Branch::create(bank.id(), fields);
            let id = branch.id();
            info!(branch = %id, bank = %bank.id(), "created branch");
            state.branches.insert(branch).await?;
            Ok(redirect(format!("/banks/branch/{id}/details/")))
        }
        Err(errors) => Ok(validation_failure(&errors)),
    }
}

/// Details for one branch.
#[get("/branch/{branch_id}/details/")]
pub async fn branch_details(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<BranchResponse>> {
    let branch = branch_or_404(&state, BranchId::from(path.into_inner())).await?;
    Ok(web::Json(BranchResponse::from(&branch)))
}

/// All branches of a bank.
#[get("/{bank_id}/branches/all/")]
pub async fn bank_branches_all(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<Vec<BranchResponse>>> {
    let bank = bank_or_404(&state, BankId::from(path.into_inner())).await?;
    let branches = state.branches.list_by_bank(bank.id()).await?;
    Ok(web::Json(branches.iter().map(BranchResponse::from).collect()))
}

/// Current values used to pre-fill the branch edit form.
#[get("/branch/{branch_id}/edit/")]
pub async fn branch_edit_form(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<BranchResponse>> {
    let principal = session.require_user_id()?;
    let branch = branch_or_404(&state, BranchId::from(path.into_inner())).await?;
    let bank = bank_or_404(&state, branch.bank()).await?;
    require_bank_owner(&bank, principal)?;
    Ok(web::Json(BranchResponse::from(&branch)))
}

/// Edit a branch of a bank the principal owns.
#[post("/branch/{branch_id}/edit/")]
pub async fn branch_edit(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    body: web::Form<HashMap<String, String>>,
) -> ApiResult<HttpResponse> {
    let principal = session.require_user_id()?;
    let mut branch = branch_or_404(&state, BranchId::from(path.into_inner())).await?;
    let bank = bank_or_404(&state, branch.bank()).await?;
    require_bank_owner(&bank, principal)?;

    let data = form_data(body.into_inner());
    match BranchForm::parse(&data) {
        Ok(fields) => {
            branch.apply_edit(fields);
            let id = branch.id();
            state.branches.update(branch).await?;
            Ok(redirect(format!("/banks/branch/{id}/details/")))
        }
        Err(errors) => Ok(validation_failure(&errors)),
    }
}
