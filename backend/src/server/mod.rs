//! Server construction and middleware wiring.

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Key, SameSite};
use actix_web::{web, App, HttpServer};
use std::env;
use tracing::warn;

use crate::inbound::http::state::HttpState;
use crate::inbound::http::{accounts, banks, branches};

/// Runtime configuration resolved from the environment.
#[derive(Clone)]
pub struct ServerConfig {
    pub bind_addr: (String, u16),
    pub session_key: Key,
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Resolve configuration from environment variables.
    ///
    /// - `BIND_ADDR` (default `0.0.0.0:8080`).
    /// - `SESSION_KEY_FILE` points at key material; without it a release
    ///   build refuses to start unless `SESSION_ALLOW_EPHEMERAL=1`.
    /// - `SESSION_COOKIE_SECURE` (default on; set `0` for plain HTTP).
    pub fn from_env() -> std::io::Result<Self> {
        let raw_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
        let (host, port) = raw_addr
            .rsplit_once(':')
            .ok_or_else(|| std::io::Error::other(format!("invalid BIND_ADDR: {raw_addr}")))?;
        let port: u16 = port
            .parse()
            .map_err(|_| std::io::Error::other(format!("invalid BIND_ADDR port: {raw_addr}")))?;

        let key_path =
            env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
        let session_key = match std::fs::read(&key_path) {
            Ok(bytes) => Key::derive_from(&bytes),
            Err(e) => {
                let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
                if cfg!(debug_assertions) || allow_dev {
                    warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                    Key::generate()
                } else {
                    return Err(std::io::Error::other(format!(
                        "failed to read session key at {key_path}: {e}"
                    )));
                }
            }
        };

        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|v| v != "0")
            .unwrap_or(true);

        Ok(Self {
            bind_addr: (host.to_owned(), port),
            session_key,
            cookie_secure,
        })
    }
}

/// Build the actix application: session middleware plus the accounts and
/// banks scopes.
pub fn build_app(
    state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build();

    App::new()
        .app_data(state)
        .wrap(session)
        .service(
            web::scope("/accounts")
                .service(accounts::register)
                .service(accounts::login)
                .service(accounts::logout)
                .service(accounts::profile_view)
                .service(accounts::profile_edit_form)
                .service(accounts::profile_edit),
        )
        .service(
            // Literal `branch/` routes must register ahead of the
            // `{bank_id}` matchers.
            web::scope("/banks")
                .service(branches::branch_details)
                .service(branches::branch_edit_form)
                .service(branches::branch_edit)
                .service(banks::bank_add)
                .service(banks::bank_list)
                .service(branches::branch_add)
                .service(branches::bank_branches_all)
                .service(banks::bank_details),
        )
}

/// Bind and run the server until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(HttpState::in_memory());
    let ServerConfig {
        bind_addr,
        session_key,
        cookie_secure,
    } = config;

    HttpServer::new(move || build_app(state.clone(), session_key.clone(), cookie_secure))
        .bind(bind_addr)?
        .run()
        .await
}
