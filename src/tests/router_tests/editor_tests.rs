use crate::filters::record::{FilterRecord, Flag, Geometry};
use crate::router::handle;
use crate::tests::utils::init_test_state;
use astra::Body;
use http::{Method, Request};
use std::io::Read;

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
fn opening_the_editor_adopts_the_applied_filter() {
    let state = init_test_state();

    let mut applied = FilterRecord::default();
    applied.price_max = 850_000;
    state.selection.set(Some(applied));

    let resp = handle(post_json("/editor/open", ""), &state).unwrap();
    let body = body_string(resp);

    assert!(body.contains("R$ 850.000"));
    assert_eq!(state.editor().draft.price_max, 850_000);
}

#[test]
fn toggling_a_flag_updates_the_draft_not_the_selection() {
    let state = init_test_state();
    state.selection.set(Some(FilterRecord::default()));
    handle(post_json("/editor/open", ""), &state).unwrap();

    let resp = handle(
        post_json("/editor/action", r#"{"toggle_flag": "venda"}"#),
        &state,
    )
    .unwrap();
    let body = body_string(resp);

    assert!(body.contains("chip-active"));
    assert!(state.editor().draft.flags.contains(&Flag::Venda));
    // Not committed yet.
    assert!(state.selection.get().unwrap().flags.is_empty());
}

#[test]
fn range_text_edits_clamp_and_keep_ordering() {
    let state = init_test_state();
    state.selection.set(Some(FilterRecord::default()));
    handle(post_json("/editor/open", ""), &state).unwrap();

    handle(
        post_json(
            "/editor/range",
            r#"{"kind": "price", "end": "max", "raw": "R$ 500.000"}"#,
        ),
        &state,
    )
    .unwrap();
    handle(
        post_json(
            "/editor/range",
            r#"{"kind": "price", "end": "min", "raw": "900000"}"#,
        ),
        &state,
    )
    .unwrap();

    let draft = state.editor().draft.clone();
    // Raising the minimum above the maximum pushes the maximum up.
    assert_eq!((draft.price_min, draft.price_max), (900_000, 900_000));
    assert_eq!(state.editor().price_slider, (900_000, 900_000));
}

#[test]
fn set_range_action_re_renders_with_fresh_slider_text() {
    let state = init_test_state();
    state.selection.set(Some(FilterRecord::default()));
    handle(post_json("/editor/open", ""), &state).unwrap();

    let resp = handle(
        post_json("/editor/action", r#"{"set_range": ["price", 100000, 750000]}"#),
        &state,
    )
    .unwrap();
    let body = body_string(resp);

    // The partial reflects the new range, not the stale slider values.
    assert!(body.contains("R$ 100.000"));
    assert!(body.contains("R$ 750.000"));
    assert_eq!(state.editor().price_slider, (100_000, 750_000));
}

#[test]
fn applying_the_editor_draft_preserves_location_scope() {
    let state = init_test_state();

    let mut applied = FilterRecord::default();
    applied.cities = vec!["Campinas".into()];
    applied.drawing_geometries = Some(vec![Geometry::Polygon {
        rings: vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]],
    }]);
    state.selection.set(Some(applied.clone()));

    handle(post_json("/editor/open", ""), &state).unwrap();
    handle(
        post_json("/editor/action", r#"{"toggle_flag": "aluguel"}"#),
        &state,
    )
    .unwrap();
    handle(post_json("/editor/apply", ""), &state).unwrap();

    let committed = state.selection.get().unwrap();
    assert!(committed.flags.contains(&Flag::Aluguel));
    assert_eq!(committed.cities, vec!["Campinas".to_string()]);
    assert_eq!(committed.drawing_geometries, applied.drawing_geometries);
}

#[test]
fn external_clear_while_open_is_adopted_on_the_next_open_cycle() {
    let state = init_test_state();

    let mut applied = FilterRecord::default();
    applied.flags.insert(Flag::Venda);
    state.selection.set(Some(applied));
    handle(post_json("/editor/open", ""), &state).unwrap();
    assert!(state.editor().draft.flags.contains(&Flag::Venda));

    // A clear elsewhere changes the applied fingerprint; the open editor
    // picks it up on its next sync.
    handle(post_json("/api/filters/clear", ""), &state).unwrap();
    let resp = handle(post_json("/editor/open", ""), &state).unwrap();
    body_string(resp);

    assert!(state.editor().draft.flags.is_empty());
}
