pub mod actions;
pub mod reconciler;
pub mod record;
pub mod selection;

pub use actions::{apply_draft, clear_draft, reduce, Action, PreservedLocation};
pub use record::{fingerprint, FilterRecord, Flag, RangeKind, RoomCategory};
pub use reconciler::DraftReconciler;
pub use selection::SelectionStore;
