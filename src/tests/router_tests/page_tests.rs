use crate::filters::record::{FilterRecord, Flag};
use crate::router::handle;
use crate::tests::utils::init_test_state;
use astra::Body;
use http::{Method, Request};
use std::io::Read;

fn get_body(uri: &str, state: &crate::state::AppState) -> String {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

#[test]
fn home_page_renders_the_empty_editor() {
    let state = init_test_state();
    let body = get_body("/", &state);

    assert!(body.contains("Buscar imóveis"));
    assert!(body.contains("Nenhum filtro aplicado."));
    assert!(body.contains("Aplicar"));
    assert!(body.contains("Limpar"));
    // Default price bound, formatted pt-BR style.
    assert!(body.contains("R$ 100.000.000"));
}

#[test]
fn home_page_seeds_the_editor_from_the_applied_filter() {
    let state = init_test_state();

    let mut applied = FilterRecord::default();
    applied.cities = vec!["São Paulo".into()];
    applied.flags.insert(Flag::Venda);
    applied.price_max = 850_000;
    state.selection.set(Some(applied));

    let body = get_body("/", &state);

    assert!(body.contains("São Paulo"));
    assert!(body.contains("R$ 850.000"));
    // The Venda chip is rendered active.
    assert!(body.contains("chip-active"));
}

#[test]
fn unknown_route_is_not_found() {
    let state = init_test_state();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/does-not-exist")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(
        handle(req, &state),
        Err(crate::errors::ServerError::NotFound)
    ));
}
