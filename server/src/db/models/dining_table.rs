//! Dining Table Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use std::fmt;
use surrealdb::RecordId;

/// Dining table ID type
pub type DiningTableId = RecordId;

/// Seating type — a hard filter on table eligibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatingType {
    Indoor,
    Outdoor,
}

impl fmt::Display for SeatingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatingType::Indoor => write!(f, "indoor"),
            SeatingType::Outdoor => write!(f, "outdoor"),
        }
    }
}

/// Dining table entity
///
/// `available` is the administrative block flag. Slot occupancy is tracked
/// by reservation tuples `(table_id, date, time)`, never by this flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<DiningTableId>,
    /// Display number, unique across the restaurant
    pub table_number: i64,
    pub seats: i64,
    pub seating: SeatingType,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub table_number: i64,
    pub seats: i64,
    pub seating: SeatingType,
    pub available: Option<bool>,
}

/// Update dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seating: Option<SeatingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// PATCH payload: set the administrative block flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableAvailability {
    pub available: bool,
}
