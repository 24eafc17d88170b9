//! Rows exactly as the sheet-style backend stores them.

use serde::{Deserialize, Serialize};

/// IV fluid row; timestamps are raw RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IvRow {
    pub id: u64,
    pub hn: String,
    pub bed_id: i64,
    pub started_at: String,
    pub due_at: String,
    pub fluid_type: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub is_active: bool,
}

/// High-risk medication row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedRow {
    pub id: u64,
    pub hn: String,
    pub bed_id: i64,
    pub started_at: String,
    pub expire_at: String,
    pub med_name: String,
    pub med_code: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub is_active: bool,
}
