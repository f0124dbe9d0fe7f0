//! Account endpoints: registration, login/logout, and profile view/edit.
//!
//! ```text
//! POST /accounts/register/       username=alice&password1=...&password2=...
//! POST /accounts/login/          username=alice&password=...
//! GET  /accounts/logout/
//! GET  /accounts/profile/view/
//! GET  /accounts/profile/edit/
//! POST /accounts/profile/edit/   first_name=...&password1=...
//! ```
//!
//! Successful form submissions redirect with `302 Found`; validation
//! failures re-render as `200 OK` with a field-keyed error map.

use std::collections::HashMap;

use actix_web::{get, post, web, HttpResponse};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::domain::forms::{ProfileEditForm, RegisterForm};
use crate::domain::{authenticate, Error, LoginCredentials, PasswordHash, User, Username};
use crate::inbound::http::form::{form_data, redirect, validation_failure};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Profile payload for `GET /accounts/profile/view/`.
///
/// Field names are part of the wire contract; they stay snake_case.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            email: user.email().to_owned(),
            first_name: user.first_name().to_owned(),
            last_name: user.last_name().to_owned(),
        }
    }
}

/// Create a new account.
#[post("/register/")]
pub async fn register(
    state: web::Data<HttpState>,
    body: web::Form<HashMap<String, String>>,
) -> ApiResult<HttpResponse> {
    let data = form_data(body.into_inner());
    let username = data.field("username");
    let taken = !username.is_empty()
        && state.users.find_by_username(username).await?.is_some();

    match RegisterForm::parse(&data, taken) {
        Ok(submission) => {
            let user = User::register(
                Username::new(submission.username),
                PasswordHash::new(&submission.password),
                submission.email,
                submission.first_name,
                submission.last_name,
            );
            let username = user.username().clone();
            state.users.insert(user).await?;
            info!(username = %username, "registered user");
            Ok(redirect("/accounts/login/"))
        }
        Err(errors) => Ok(validation_failure(&errors)),
    }
}

/// Authenticate credentials and establish a session.
///
/// Failures are deliberately generic: unknown username, wrong password, and
/// blank fields all produce the same response.
#[post("/login/")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: web::Form<HashMap<String, String>>,
) -> ApiResult<HttpResponse> {
    let data = form_data(body.into_inner());
    let credentials = LoginCredentials::new(data.field("username"), data.field("password"));

    match authenticate(&state.users, &credentials).await? {
        Some(user) => {
            session.persist_user(user.id())?;
            info!(username = %user.username(), "login");
            Ok(redirect("/accounts/profile/view/"))
        }
        None => Ok(HttpResponse::Ok().json(json!({
            "error": "Username or password is invalid",
            "username": credentials.username(),
        }))),
    }
}

/// Tear the session down. Safe to call without a session.
#[get("/logout/")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.forget();
    redirect("/accounts/login/")
}

/// Current user's profile.
#[get("/profile/view/")]
pub async fn profile_view(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<ProfileResponse>> {
    let user = current_user(&state, &session).await?;
    Ok(web::Json(ProfileResponse::from(&user)))
}

/// Current values used to pre-fill the profile edit form.
#[get("/profile/edit/")]
pub async fn profile_edit_form(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user = current_user(&state, &session).await?;
    Ok(HttpResponse::Ok().json(json!({
        "first_name": user.first_name(),
        "last_name": user.last_name(),
        "email": user.email(),
    })))
}

/// Apply a profile edit.
#[post("/profile/edit/")]
pub async fn profile_edit(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: web::Form<HashMap<String, String>>,
) -> ApiResult<HttpResponse> {
    let mut user = current_user(&state, &session).await?;
    let data = form_data(body.into_inner());

    match ProfileEditForm::parse(&data) {
        Ok(submission) => {
            user.apply_profile_edit(
                submission.first_name,
                submission.last_name,
                submission.email,
                submission.new_password.as_deref().map(PasswordHash::new),
            );
            state.users.update(user).await?;
            Ok(redirect("/accounts/profile/view/"))
        }
        Err(errors) => Ok(validation_failure(&errors)),
    }
}

/// Resolve the session principal to a stored user.
///
/// A session naming a user the store no longer knows is treated as
/// unauthenticated, the same as no session at all.
async fn current_user(state: &HttpState, session: &SessionContext) -> Result<User, Error> {
    let id = session.require_user_id()?;
    state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::unauthorized("Unauthorized"))
}
