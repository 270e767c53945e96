use crate::auth::google::{ApiUser, GoogleCredential, NewAccount};
use crate::auth::sessions::{create_session, load_user_from_session, revoke_session};
use crate::db::auth::{normalize_email, upsert_google_user};
use crate::errors::ServerError;
use crate::filters::actions::{
    apply_draft, clear_draft, edit_range_max, edit_range_min, reduce, Action, PreservedLocation,
};
use crate::filters::record::{FilterRecord, RangeKind};
use crate::labels::property_type_label;
use crate::responses::{html_response, json_response, ResultResp};
use crate::state::AppState;
use crate::templates;
use astra::Request;
use serde::{Deserialize, Serialize};
use std::io::Read;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let logged_in = current_user(&req, state)?.is_some();
            let applied = state.selection.get();
            html_response(templates::pages::home_page(applied.as_ref(), logged_in))
        }
        ("GET", "/login") => html_response(templates::pages::login_page()),

        // Applied-filter API
        ("GET", "/api/filters") => json_response(&state.selection.get()),
        ("POST", "/api/filters/apply") => apply_filters(req, state),
        ("POST", "/api/filters/clear") => clear_filters(state),

        // Filter editor (htmx partials over the server-held draft)
        ("POST", "/editor/open") => open_editor(state),
        ("POST", "/editor/close") => close_editor(state),
        ("POST", "/editor/action") => dispatch_editor_action(req, state),
        ("POST", "/editor/range") => edit_editor_range(req, state),
        ("POST", "/editor/apply") => apply_editor_draft(state),

        ("GET", "/api/labels") => {
            let params = parse_query(&req);
            let code = params.get("type").map(String::as_str).unwrap_or("");
            json_response(&LabelResult {
                label: property_type_label(code),
            })
        }

        ("POST", "/auth/signInGoogle") => sign_in_google(req, state),
        ("POST", "/auth/signOut") => sign_out(req, state),

        _ => Err(ServerError::NotFound),
    }
}

#[derive(Serialize)]
struct LabelResult {
    label: String,
}

/// Commit the posted draft. The editor never touches geometry, address or
/// city scope directly, so those come from the currently applied record.
fn apply_filters(req: Request, state: &AppState) -> ResultResp {
    let draft: FilterRecord = read_json_body(req)?;
    commit_draft(&draft, state)
}

fn commit_draft(draft: &FilterRecord, state: &AppState) -> ResultResp {
    let applied = state.selection.get();
    let preserved = PreservedLocation::from_applied(applied.as_ref());
    let committed = apply_draft(draft, &preserved);

    state.selection.set(Some(committed.clone()));
    json_response(&committed)
}

/// Reset everything except the city scope of the applied record.
fn clear_filters(state: &AppState) -> ResultResp {
    let preserved_cities = state
        .selection
        .get()
        .map(|r| r.cities)
        .unwrap_or_default();

    let cleared = clear_draft(preserved_cities);
    state.selection.set(Some(cleared.clone()));
    json_response(&cleared)
}

fn open_editor(state: &AppState) -> ResultResp {
    let applied = state.selection.get();
    let mut editor = state.editor();
    editor.sync(true, applied.as_ref());
    editor_partial(&editor)
}

fn close_editor(state: &AppState) -> ResultResp {
    let applied = state.selection.get();
    let mut editor = state.editor();
    editor.sync(false, applied.as_ref());
    json_response(&serde_json::json!({ "closed": true }))
}

fn dispatch_editor_action(req: Request, state: &AppState) -> ResultResp {
    let action: Action = read_json_body(req)?;

    let mut editor = state.editor();
    editor.draft = reduce(&editor.draft, action);
    resync_sliders(&mut editor);
    editor_partial(&editor)
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum RangeEnd {
    Min,
    Max,
}

#[derive(Deserialize)]
struct RangeEdit {
    kind: RangeKind,
    end: RangeEnd,
    raw: String,
}

/// Raw text typed into a range input; non-digits are stripped and the
/// untouched endpoint is forced to keep min <= max.
fn edit_editor_range(req: Request, state: &AppState) -> ResultResp {
    let edit: RangeEdit = read_json_body(req)?;

    let mut editor = state.editor();
    editor.draft = match edit.end {
        RangeEnd::Min => edit_range_min(&editor.draft, edit.kind, &edit.raw),
        RangeEnd::Max => edit_range_max(&editor.draft, edit.kind, &edit.raw),
    };
    resync_sliders(&mut editor);
    editor_partial(&editor)
}

/// The slider pairs mirror the draft's ranges; re-seed them after any
/// draft mutation so the re-rendered partial shows the current values.
fn resync_sliders(editor: &mut crate::filters::reconciler::DraftReconciler) {
    editor.area_slider = editor.draft.range(RangeKind::Area);
    editor.price_slider = editor.draft.range(RangeKind::Price);
}

/// Commit the server-held editor draft.
fn apply_editor_draft(state: &AppState) -> ResultResp {
    let draft = state.editor().draft.clone();
    commit_draft(&draft, state)
}

fn editor_partial(editor: &crate::filters::reconciler::DraftReconciler) -> ResultResp {
    html_response(templates::pages::editor_form(
        &editor.draft,
        editor.area_slider,
        editor.price_slider,
    ))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInResult {
    token: Option<String>,
    user: Option<ApiUser>,
    new_account: Option<NewAccount>,
}

fn sign_in_google(req: Request, state: &AppState) -> ResultResp {
    let credential: GoogleCredential = read_json_body(req)?;

    let exchanged = state.google.sign_in(&credential)?;
    let now = chrono::Utc::now().timestamp();

    // A known user gets a local session; a brand-new Google identity is
    // handed back for the account-creation flow.
    let token = match &exchanged.user {
        Some(user) => {
            let email = normalize_email(&user.email)?;
            let user_id = state.db.with_conn(|conn| {
                upsert_google_user(
                    conn,
                    &email,
                    &user.name,
                    user.picture.as_deref(),
                    user.sub.as_deref(),
                    now,
                )
            })?;
            Some(state.db.with_conn(|conn| create_session(conn, user_id, now))?)
        }
        None => None,
    };

    json_response(&SignInResult {
        token,
        user: exchanged.user,
        new_account: exchanged.new_account,
    })
}

/// Revoke the session cookie's token. Signing out without a cookie is fine.
fn sign_out(req: Request, state: &AppState) -> ResultResp {
    if let Some(token) = session_cookie(&req) {
        let now = chrono::Utc::now().timestamp();
        state
            .db
            .with_conn(|conn| revoke_session(conn, &token, now))?;
    }

    json_response(&serde_json::json!({ "signedOut": true }))
}

/// Resolve the `session` cookie to a user, if any.
fn current_user(req: &Request, state: &AppState) -> Result<Option<(i64, String)>, ServerError> {
    let Some(token) = session_cookie(req) else {
        return Ok(None);
    };

    let now = chrono::Utc::now().timestamp();
    state
        .db
        .with_conn(|conn| load_user_from_session(conn, &token, now))
}

fn session_cookie(req: &Request) -> Option<String> {
    let header = req.headers().get("cookie")?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == "session").then(|| v.to_string())
    })
}

fn read_json_body<T: serde::de::DeserializeOwned>(req: Request) -> Result<T, ServerError> {
    let mut body = String::new();
    req.into_body()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    serde_json::from_str(&body).map_err(|e| ServerError::BadRequest(format!("invalid body: {e}")))
}

fn parse_query(req: &astra::Request) -> std::collections::HashMap<String, String> {
    let mut map = std::collections::HashMap::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(k.to_string(), v.to_string());
            }
        }
    }

    map
}
