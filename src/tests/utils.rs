use crate::auth::google::GoogleAuthClient;
use crate::db::connection::{init_db, Database};
use crate::state::AppState;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_DB: AtomicU32 = AtomicU32::new(0);

/// Fresh test state: an isolated SQLite file initialized from the
/// production schema, plus a Google client pointed at an unroutable port.
pub fn init_test_state() -> AppState {
    let n = NEXT_DB.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "imosearch_test_{}_{n}.sqlite3",
        std::process::id()
    ));

    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    AppState::new(db, GoogleAuthClient::new("http://127.0.0.1:9"))
}
