// src/filters/reconciler.rs

use crate::filters::record::{fingerprint, FilterRecord};

/// Keeps the editor's draft consistent with the externally applied filter
/// without discarding in-progress edits.
///
/// The draft is replaced by the external snapshot in exactly two cases:
/// the editor transitions from closed to open, or the snapshot's business
/// fingerprint changes while the editor stays open (someone cleared or
/// applied filters elsewhere). A snapshot that only moved location or
/// geometry fields fingerprints identically and never clobbers an edit.
#[derive(Debug, Clone)]
pub struct DraftReconciler {
    pub draft: FilterRecord,
    /// Slider sub-states mirror the draft's ranges but are owned by the
    /// slider widgets, so they are re-seeded explicitly on adoption.
    pub area_slider: (u64, u64),
    pub price_slider: (u64, u64),
    was_open: bool,
    prev_fingerprint: String,
}

impl Default for DraftReconciler {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftReconciler {
    pub fn new() -> Self {
        let draft = FilterRecord::default();
        let area_slider = (draft.area_min, draft.area_max);
        let price_slider = (draft.price_min, draft.price_max);
        DraftReconciler {
            draft,
            area_slider,
            price_slider,
            was_open: false,
            prev_fingerprint: String::new(),
        }
    }

    /// Evaluates one open/snapshot cycle. Returns true when the snapshot
    /// was adopted into the draft.
    pub fn sync(&mut self, is_open: bool, initial: Option<&FilterRecord>) -> bool {
        let adopted = match initial {
            None => false,
            Some(snapshot) => {
                let opening = is_open && !self.was_open;
                let changed_outside =
                    is_open && self.was_open && fingerprint(Some(snapshot)) != self.prev_fingerprint;
                if opening || changed_outside {
                    self.adopt(snapshot);
                    true
                } else {
                    false
                }
            }
        };
        self.was_open = is_open;
        adopted
    }

    fn adopt(&mut self, snapshot: &FilterRecord) {
        self.draft = snapshot.clone();
        self.area_slider = (snapshot.area_min, snapshot.area_max);
        self.price_slider = (snapshot.price_min, snapshot.price_max);
        self.prev_fingerprint = fingerprint(Some(snapshot));
    }
}
