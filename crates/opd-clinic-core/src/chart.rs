//! Tooth chart model.
//!
//! Defines the canonical tooth-id space (adult permanent dentition plus
//! primary dentition) and get/set/clear semantics over a sparse set of
//! per-tooth condition notes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Closed vocabulary of per-tooth condition notes.
pub const CONDITIONS: [&str; 9] = [
    "Decayed",
    "Grossly Decayed",
    "Restored",
    "mobile",
    "root stumps",
    "RCT treated",
    "missing",
    "fractured",
    "impacted",
];

/// Anatomical quadrant, doubled for permanent vs. primary dentition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Permanent upper right (UR1-UR8)
    UpperRight,
    /// Permanent upper left (UL1-UL8)
    UpperLeft,
    /// Permanent lower right (LR1-LR8)
    LowerRight,
    /// Permanent lower left (LL1-LL8)
    LowerLeft,
    /// Primary upper right (PURI-PURV)
    PrimaryUpperRight,
    /// Primary upper left (PULI-PULV)
    PrimaryUpperLeft,
    /// Primary lower right (PLRI-PLRV)
    PrimaryLowerRight,
    /// Primary lower left (PLLI-PLLV)
    PrimaryLowerLeft,
}

/// Adult position labels, mesial to distal.
const ADULT_POSITIONS: [&str; 8] = ["1", "2", "3", "4", "5", "6", "7", "8"];

/// Primary position labels, mesial to distal.
const PRIMARY_POSITIONS: [&str; 5] = ["I", "II", "III", "IV", "V"];

impl Quadrant {
    /// The tooth-id prefix for this quadrant.
    pub fn prefix(&self) -> &'static str {
        match self {
            Quadrant::UpperRight => "UR",
            Quadrant::UpperLeft => "UL",
            Quadrant::LowerRight => "LR",
            Quadrant::LowerLeft => "LL",
            Quadrant::PrimaryUpperRight => "PUR",
            Quadrant::PrimaryUpperLeft => "PUL",
            Quadrant::PrimaryLowerRight => "PLR",
            Quadrant::PrimaryLowerLeft => "PLL",
        }
    }

    /// Whether this quadrant belongs to the primary dentition.
    pub fn is_primary(&self) -> bool {
        matches!(
            self,
            Quadrant::PrimaryUpperRight
                | Quadrant::PrimaryUpperLeft
                | Quadrant::PrimaryLowerRight
                | Quadrant::PrimaryLowerLeft
        )
    }

    /// Position labels valid for this quadrant, mesial to distal.
    pub fn positions(&self) -> &'static [&'static str] {
        if self.is_primary() {
            &PRIMARY_POSITIONS
        } else {
            &ADULT_POSITIONS
        }
    }
}

/// Build a tooth id from quadrant and position label.
///
/// Pure concatenation. Passing a position label outside the quadrant's
/// numbering scheme is a programmer error, not a runtime failure.
pub fn tooth_id(quadrant: Quadrant, position: &str) -> String {
    format!("{}{}", quadrant.prefix(), position)
}

/// All 52 tooth ids in canonical display order.
///
/// Permanent dentition before primary; upper row before lower. Within each
/// row the right quadrant runs distal to mesial (8→1, V→I), then the left
/// quadrant mesial to distal (1→8, I→V).
pub fn canonical_ids() -> Vec<String> {
    let rows = [
        (Quadrant::UpperRight, Quadrant::UpperLeft),
        (Quadrant::LowerRight, Quadrant::LowerLeft),
        (Quadrant::PrimaryUpperRight, Quadrant::PrimaryUpperLeft),
        (Quadrant::PrimaryLowerRight, Quadrant::PrimaryLowerLeft),
    ];

    let mut ids = Vec::with_capacity(52);
    for (right, left) in rows {
        for pos in right.positions().iter().rev().copied() {
            ids.push(tooth_id(right, pos));
        }
        for pos in left.positions().iter().copied() {
            ids.push(tooth_id(left, pos));
        }
    }
    ids
}

/// Sparse set of per-tooth condition notes, keyed by tooth id.
///
/// At most one note per tooth. The collection is value-semantic: updates go
/// through [`ToothChart::with_note`], which returns a fresh chart so callers
/// can rely on referential distinctness for change detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToothChart {
    notes: HashMap<String, String>,
}

impl ToothChart {
    /// Create an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new chart with the note for `tooth` set.
    ///
    /// An empty note removes any existing entry; a non-empty note replaces
    /// or inserts. The receiver is never mutated.
    pub fn with_note(&self, tooth: &str, note: &str) -> ToothChart {
        let mut notes = self.notes.clone();
        if note.is_empty() {
            notes.remove(tooth);
        } else {
            notes.insert(tooth.to_string(), note.to_string());
        }
        ToothChart { notes }
    }

    /// The note for `tooth`, or "" when absent.
    pub fn note_for(&self, tooth: &str) -> &str {
        self.notes.get(tooth).map(String::as_str).unwrap_or("")
    }

    /// Number of annotated teeth.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether no tooth carries a note.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Annotated (tooth id, note) pairs in canonical display order.
    pub fn annotated(&self) -> Vec<(String, String)> {
        canonical_ids()
            .into_iter()
            .filter_map(|id| {
                self.notes
                    .get(&id)
                    .map(|note| (id.clone(), note.clone()))
            })
            .collect()
    }
}
