//! Per-day status values and the click-to-toggle transition.
//!
//! ## State Transitions
//!
//! ```text
//! Unset -> Complete -> Half -> Failed -> Unset
//! ```
//!
//! On disk a status is `true` (complete), `"half"`, or `false` (failed).
//! Unset days are never written.

use serde::de::{self, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::fmt;

/// Status of one calendar day of one habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayStatus {
    /// Never clicked, or cycled back to blank.
    #[default]
    Unset,
    /// Full credit.
    Complete,
    /// Partial credit.
    Half,
    /// Explicit non-completion. Counts as tracked with zero credit.
    Failed,
}

/// Transition table for [`DayStatus::cycle`], indexed by [`DayStatus::ordinal`].
const NEXT: [DayStatus; 4] = [
    DayStatus::Complete, // Unset
    DayStatus::Half,     // Complete
    DayStatus::Failed,   // Half
    DayStatus::Unset,    // Failed
];

impl DayStatus {
    /// Every status, in cycle order.
    pub const ALL: [DayStatus; 4] = [
        DayStatus::Unset,
        DayStatus::Complete,
        DayStatus::Half,
        DayStatus::Failed,
    ];

    fn ordinal(self) -> usize {
        match self {
            DayStatus::Unset => 0,
            DayStatus::Complete => 1,
            DayStatus::Half => 2,
            DayStatus::Failed => 3,
        }
    }

    /// The status a single click moves this day to.
    pub fn cycle(self) -> DayStatus {
        NEXT[self.ordinal()]
    }

    /// Credit this status contributes to aggregate metrics.
    pub fn score(self) -> f64 {
        match self {
            DayStatus::Complete => 1.0,
            DayStatus::Half => 0.5,
            DayStatus::Failed | DayStatus::Unset => 0.0,
        }
    }

    pub fn is_set(self) -> bool {
        self != DayStatus::Unset
    }

    /// Grid symbol for this status.
    pub fn glyph(self) -> char {
        match self {
            DayStatus::Unset => '·',
            DayStatus::Complete => '✓',
            DayStatus::Half => '½',
            DayStatus::Failed => '✗',
        }
    }

    /// Parse a persisted JSON value. Anything unrecognised yields `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<DayStatus> {
        match value {
            serde_json::Value::Bool(true) => Some(DayStatus::Complete),
            serde_json::Value::Bool(false) => Some(DayStatus::Failed),
            serde_json::Value::String(s) if s == "half" => Some(DayStatus::Half),
            _ => None,
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayStatus::Unset => "unset",
            DayStatus::Complete => "complete",
            DayStatus::Half => "half",
            DayStatus::Failed => "failed",
        };
        f.write_str(label)
    }
}

impl Serialize for DayStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DayStatus::Complete => serializer.serialize_bool(true),
            DayStatus::Failed => serializer.serialize_bool(false),
            DayStatus::Half => serializer.serialize_str("half"),
            DayStatus::Unset => serializer.serialize_none(),
        }
    }
}

struct DayStatusVisitor;

impl<'de> Visitor<'de> for DayStatusVisitor {
    type Value = DayStatus;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("true, false, \"half\" or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<DayStatus, E> {
        Ok(if v {
            DayStatus::Complete
        } else {
            DayStatus::Failed
        })
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<DayStatus, E> {
        match v {
            "half" => Ok(DayStatus::Half),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }

    fn visit_none<E: de::Error>(self) -> Result<DayStatus, E> {
        Ok(DayStatus::Unset)
    }

    fn visit_unit<E: de::Error>(self) -> Result<DayStatus, E> {
        Ok(DayStatus::Unset)
    }
}

impl<'de> serde::Deserialize<'de> for DayStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<DayStatus, D::Error> {
        deserializer.deserialize_any(DayStatusVisitor)
    }
}
