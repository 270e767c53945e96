use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::init_test_state;
use astra::Body;
use http::{Method, Request};
use std::io::Read;

#[test]
fn login_page_loads_successfully() {
    let state = init_test_state();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/login")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();

    assert!(body.contains("Google"));
    assert!(body.contains("/auth/signInGoogle"));
}

#[test]
fn sign_in_with_malformed_body_is_a_bad_request() {
    let state = init_test_state();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/signInGoogle")
        .header("Content-Type", "application/json")
        .body(Body::from(b"{}".to_vec()))
        .unwrap();

    let result = handle(req, &state);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn sign_out_revokes_the_cookie_session() {
    let state = init_test_state();

    let token = state
        .db
        .with_conn(|conn| {
            let user_id = crate::db::auth::upsert_google_user(
                conn,
                "ana@example.com",
                "Ana",
                None,
                Some("g-1"),
                1000,
            )?;
            crate::auth::sessions::create_session(conn, user_id, 1000)
        })
        .unwrap();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/signOut")
        .header("Cookie", format!("session={token}"))
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 200);

    let loaded = state
        .db
        .with_conn(|conn| {
            crate::auth::sessions::load_user_from_session(conn, &token, 1001)
        })
        .unwrap();
    assert_eq!(loaded, None);
}

#[test]
fn sign_out_without_a_cookie_is_a_no_op() {
    let state = init_test_state();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/signOut")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn unreachable_backend_surfaces_a_user_readable_message() {
    let state = init_test_state();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/signInGoogle")
        .header("Content-Type", "application/json")
        .body(Body::from(br#"{"accessToken": "tok"}"#.to_vec()))
        .unwrap();

    // The test state points at an unroutable port, so the exchange fails
    // at the transport layer and must degrade to the generic message.
    match handle(req, &state) {
        Err(ServerError::Auth(msg)) => assert!(!msg.is_empty()),
        other => panic!("expected Auth error, got {other:?}"),
    }
}
