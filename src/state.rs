// src/state.rs

use crate::auth::google::GoogleAuthClient;
use crate::db::Database;
use crate::filters::reconciler::DraftReconciler;
use crate::filters::selection::SelectionStore;
use std::sync::{Mutex, MutexGuard};

/// Everything a request handler needs, passed explicitly into the router.
pub struct AppState {
    pub db: Database,
    pub selection: SelectionStore,
    /// The filter editor's draft state, reconciled against the applied
    /// selection on every open/close.
    pub editor: Mutex<DraftReconciler>,
    pub google: GoogleAuthClient,
}

impl AppState {
    pub fn new(db: Database, google: GoogleAuthClient) -> Self {
        AppState {
            db,
            selection: SelectionStore::new(),
            editor: Mutex::new(DraftReconciler::new()),
            google,
        }
    }

    pub fn editor(&self) -> MutexGuard<'_, DraftReconciler> {
        self.editor.lock().unwrap_or_else(|p| p.into_inner())
    }
}
