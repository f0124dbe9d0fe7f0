//! End-to-end flow over the full application: registration, login,
//! bank/branch creation, and the ownership boundary between two users.

use actix_web::cookie::{Cookie, Key};
use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use serde_json::Value;

use bankhub::inbound::http::state::HttpState;
use bankhub::server::build_app;

fn test_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = web::Data::new(HttpState::in_memory());
    build_app(state, Key::generate(), false)
}

async fn post_form(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    uri: &str,
    fields: &[(&str, &str)],
) -> actix_web::dev::ServiceResponse {
    let pairs: Vec<(String, String)> = fields
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri(uri)
            .set_form(&pairs)
            .to_request(),
    )
    .await
}

fn session_cookie(response: &actix_web::dev::ServiceResponse) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

#[actix_web::test]
async fn register_login_and_ownership_boundary() {
    let app = actix_test::init_service(test_app()).await;

    // Register alice.
    let response = post_form(
        &app,
        "/accounts/register/",
        &[
            ("username", "alice"),
            ("password1", "longpass1"),
            ("password2", "longpass1"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);

    // Wrong password: generic error, no session established.
    let response = post_form(
        &app,
        "/accounts/login/",
        &[("username", "alice"), ("password", "wrongpass")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["error"], "Username or password is invalid");

    // Real login.
    let response = post_form(
        &app,
        "/accounts/login/",
        &[("username", "alice"), ("password", "longpass1")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let alice = session_cookie(&response);

    // Alice creates a bank and a branch.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/banks/add/")
            .cookie(alice.clone())
            .set_form(&[
                ("name".to_owned(), "First Exemplar".to_owned()),
                ("description".to_owned(), "A bank".to_owned()),
                ("inst_num".to_owned(), "001".to_owned()),
                ("swift_code".to_owned(), "EXMPCATT".to_owned()),
            ])
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let bank_id = response
        .headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|loc| loc.strip_prefix("/banks/"))
        .and_then(|rest| rest.strip_suffix("/details/"))
        .expect("bank details redirect")
        .to_owned();

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/banks/{bank_id}/branches/add/"))
            .cookie(alice)
            .set_form(&[
                ("name".to_owned(), "Downtown".to_owned()),
                ("transit_num".to_owned(), "00012".to_owned()),
                ("address".to_owned(), "1 Main St".to_owned()),
                ("email".to_owned(), "downtown@example.com".to_owned()),
            ])
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);

    // Bob registers, logs in, and may not touch alice's bank.
    let response = post_form(
        &app,
        "/accounts/register/",
        &[
            ("username", "bob"),
            ("password1", "longpass2"),
            ("password2", "longpass2"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let response = post_form(
        &app,
        "/accounts/login/",
        &[("username", "bob"), ("password", "longpass2")],
    )
    .await;
    let bob = session_cookie(&response);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/banks/{bank_id}/branches/add/"))
            .cookie(bob)
            .set_form(&[
                ("name".to_owned(), "Intruder".to_owned()),
                ("transit_num".to_owned(), "00099".to_owned()),
                ("address".to_owned(), "9 Side St".to_owned()),
                ("email".to_owned(), "intruder@example.com".to_owned()),
            ])
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Branch count unchanged: only alice's branch exists.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/banks/{bank_id}/branches/all/"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let branches = body.as_array().expect("array");
    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0]["name"], "Downtown");
}

#[actix_web::test]
async fn logout_clears_the_session() {
    let app = actix_test::init_service(test_app()).await;

    let response = post_form(
        &app,
        "/accounts/register/",
        &[
            ("username", "carol"),
            ("password1", "longpass3"),
            ("password2", "longpass3"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let response = post_form(
        &app,
        "/accounts/login/",
        &[("username", "carol"), ("password", "longpass3")],
    )
    .await;
    let cookie = session_cookie(&response);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/accounts/logout/")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let cleared = session_cookie(&response);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/accounts/profile/view/")
            .cookie(cleared)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
