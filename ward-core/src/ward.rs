//! Ward bed model: the location lookup the scanner renders from.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BedStatus {
    Vacant,
    Occupied,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bed {
    pub id: i64,
    /// Human display number, distinct from the internal id.
    pub bed_number: i64,
    pub status: BedStatus,
    pub current_hn: Option<String>,
}

/// bed id -> display number lookup for message composition.
pub fn bed_number_map(beds: &[Bed]) -> HashMap<i64, i64> {
    beds.iter().map(|b| (b.id, b.bed_number)).collect()
}
