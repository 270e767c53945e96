// src/filters/actions.rs
//
// Pure mutation operations over a draft FilterRecord. Every operation is
// total: out-of-range input is clamped, malformed numeric text degrades to
// zero, nothing here returns an error.

use crate::filters::record::{FilterRecord, Flag, Geometry, RangeKind, RoomCategory};
use serde::{Deserialize, Serialize};

/// A single user interaction with the filter editor, interpreted by
/// [`reduce`]. Keeping mutations as data makes each one testable in
/// isolation, rules out field access by name, and gives the editor
/// endpoints their wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ToggleFlag(Flag),
    SetRoomCount(RoomCategory, u8),
    SetRange(RangeKind, u64, u64),
    SetKeywords(String),
}

/// Derives a new record from `record` and one action.
pub fn reduce(record: &FilterRecord, action: Action) -> FilterRecord {
    let mut next = record.clone();
    match action {
        Action::ToggleFlag(flag) => {
            if !next.flags.remove(&flag) {
                next.flags.insert(flag);
            }
        }
        Action::SetRoomCount(category, value) => {
            let value = value.clamp(1, 4);
            if next.room_count(category) == Some(value) {
                // Re-selecting the active count clears the constraint.
                next.set_room_count(category, None);
            } else {
                next.set_room_count(category, Some(value));
            }
        }
        Action::SetRange(kind, a, b) => {
            let bound = kind.bound();
            let (a, b) = (a.min(bound), b.min(bound));
            next.set_range_pair(kind, a.min(b), a.max(b));
        }
        Action::SetKeywords(text) => {
            next.keywords = text;
        }
    }
    next
}

/// Parses raw numeric text the way the range text inputs do: strip every
/// non-digit character, treat the empty result as zero, clamp to the
/// range bound. Digit strings too large for u64 saturate before clamping,
/// so absurdly large input still lands on the bound rather than zero.
pub fn parse_amount(raw: &str, kind: RangeKind) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let value = if digits.is_empty() {
        0
    } else {
        digits.parse::<u64>().unwrap_or(u64::MAX)
    };
    value.min(kind.bound())
}

/// Applies a minimum typed into a range text input. The maximum is pushed
/// up if needed so min <= max keeps holding.
pub fn edit_range_min(record: &FilterRecord, kind: RangeKind, raw: &str) -> FilterRecord {
    let min = parse_amount(raw, kind);
    let (_, max) = record.range(kind);
    let mut next = record.clone();
    next.set_range_pair(kind, min, max.max(min));
    next
}

/// Applies a maximum typed into a range text input. The minimum is pulled
/// down if needed so min <= max keeps holding.
pub fn edit_range_max(record: &FilterRecord, kind: RangeKind, raw: &str) -> FilterRecord {
    let max = parse_amount(raw, kind);
    let (min, _) = record.range(kind);
    let mut next = record.clone();
    next.set_range_pair(kind, min.min(max), max);
    next
}

/// pt-BR thousands grouping: 1234567 -> "1.234.567". Display only.
pub fn format_area(n: u64) -> String {
    group_thousands(n)
}

/// "R$ " prefix plus pt-BR grouping. Display only.
pub fn format_price(n: u64) -> String {
    format!("R$ {}", group_thousands(n))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Location fields the editor never touches, carried over from the last
/// applied record on commit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreservedLocation {
    pub cities: Vec<String>,
    pub drawing_geometries: Option<Vec<Geometry>>,
    pub address_coordinates: Option<(f64, f64)>,
    pub address_zoom: Option<f64>,
}

impl PreservedLocation {
    /// Snapshot of the location fields of an applied record, if any.
    pub fn from_applied(applied: Option<&FilterRecord>) -> Self {
        match applied {
            Some(r) => PreservedLocation {
                cities: r.cities.clone(),
                drawing_geometries: r.drawing_geometries.clone(),
                address_coordinates: r.address_coordinates,
                address_zoom: r.address_zoom,
            },
            None => PreservedLocation::default(),
        }
    }
}

/// Produces the record to commit on "Apply": the draft's cities win when
/// non-empty, otherwise the preserved cities; geometry and address fields
/// always come from `preserved`; everything else comes from the draft.
pub fn apply_draft(draft: &FilterRecord, preserved: &PreservedLocation) -> FilterRecord {
    let mut committed = draft.clone();
    if committed.cities.is_empty() {
        committed.cities = preserved.cities.clone();
    }
    committed.drawing_geometries = preserved.drawing_geometries.clone();
    committed.address_coordinates = preserved.address_coordinates;
    committed.address_zoom = preserved.address_zoom;
    committed
}

/// The "Clear" record: everything back to defaults, city scope kept.
pub fn clear_draft(preserved_cities: Vec<String>) -> FilterRecord {
    FilterRecord {
        cities: preserved_cities,
        ..FilterRecord::default()
    }
}
