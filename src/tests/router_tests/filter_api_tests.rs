use crate::filters::record::{FilterRecord, Flag, Geometry, PRICE_MAX};
use crate::router::handle;
use crate::tests::utils::init_test_state;
use astra::Body;
use http::{Method, Request};
use std::io::Read;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

fn body_string(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

#[test]
fn filters_endpoint_starts_empty() {
    let state = init_test_state();

    let resp = handle(get("/api/filters"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "null");
}

#[test]
fn apply_round_trips_through_the_selection() {
    let state = init_test_state();

    let draft = r#"{"flags": ["venda", "cobertura"], "bedrooms": 3, "priceMax": 900000}"#;
    let resp = handle(post_json("/api/filters/apply", draft), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let applied: FilterRecord =
        serde_json::from_str(&body_string(handle(get("/api/filters"), &state).unwrap())).unwrap();
    assert!(applied.flags.contains(&Flag::Venda));
    assert!(applied.flags.contains(&Flag::Cobertura));
    assert_eq!(applied.bedrooms, Some(3));
    assert_eq!(applied.price_max, 900_000);
}

#[test]
fn apply_preserves_location_fields_from_the_previous_selection() {
    let state = init_test_state();

    let mut previous = FilterRecord::default();
    previous.cities = vec!["Campinas".into()];
    previous.address_coordinates = Some((-22.9, -47.06));
    previous.drawing_geometries = Some(vec![Geometry::Circle {
        center: [-22.9, -47.06],
        radius: "800".into(),
    }]);
    state.selection.set(Some(previous.clone()));

    // Draft with no cities of its own: location scope must survive.
    let resp = handle(post_json("/api/filters/apply", r#"{"keywords": "piscina"}"#), &state)
        .unwrap();
    let committed: FilterRecord = serde_json::from_str(&body_string(resp)).unwrap();

    assert_eq!(committed.cities, vec!["Campinas".to_string()]);
    assert_eq!(committed.address_coordinates, Some((-22.9, -47.06)));
    assert_eq!(committed.drawing_geometries, previous.drawing_geometries);
    assert_eq!(committed.keywords, "piscina");
}

#[test]
fn draft_cities_win_over_preserved_ones() {
    let state = init_test_state();

    let mut previous = FilterRecord::default();
    previous.cities = vec!["Campinas".into()];
    state.selection.set(Some(previous));

    let resp = handle(
        post_json("/api/filters/apply", r#"{"cities": ["Rio"]}"#),
        &state,
    )
    .unwrap();
    let committed: FilterRecord = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(committed.cities, vec!["Rio".to_string()]);
}

#[test]
fn clear_resets_everything_but_the_city_scope() {
    let state = init_test_state();

    let mut previous = FilterRecord::default();
    previous.cities = vec!["São Paulo".into()];
    previous.flags.insert(Flag::Aluguel);
    previous.price_max = 2_000;
    state.selection.set(Some(previous));

    let resp = handle(post_json("/api/filters/clear", ""), &state).unwrap();
    let cleared: FilterRecord = serde_json::from_str(&body_string(resp)).unwrap();

    assert_eq!(cleared.cities, vec!["São Paulo".to_string()]);
    assert!(cleared.flags.is_empty());
    assert_eq!(cleared.price_max, PRICE_MAX);
}

#[test]
fn label_endpoint_resolves_property_type_codes() {
    let state = init_test_state();

    let resp = handle(get("/api/labels?type=warehouse"), &state).unwrap();
    assert_eq!(body_string(resp), r#"{"label":"Galpão"}"#);

    let resp = handle(get("/api/labels?type=spaceship"), &state).unwrap();
    assert_eq!(body_string(resp), r#"{"label":""}"#);
}

#[test]
fn malformed_apply_body_is_a_bad_request() {
    let state = init_test_state();

    let result = handle(post_json("/api/filters/apply", "not json"), &state);
    assert!(matches!(
        result,
        Err(crate::errors::ServerError::BadRequest(_))
    ));
    // The selection must be untouched.
    assert_eq!(state.selection.get(), None);
}
