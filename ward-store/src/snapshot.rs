//! The full store document, one JSON object mirroring the backend's tabs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use ward_core::{Bed, IvOrder, MedOrder, Notification};

use crate::parse::{parse_iv_rows, parse_med_rows};
use crate::records::{IvRow, MedRow};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WardSnapshot {
    #[serde(default)]
    pub beds: Vec<Bed>,
    #[serde(default)]
    pub iv_fluids: Vec<IvRow>,
    #[serde(default)]
    pub high_risk_meds: Vec<MedRow>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl WardSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parse ward snapshot JSON")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize ward snapshot")
    }

    /// Typed orders for the scanner; malformed rows are already dropped.
    pub fn orders(&self) -> (Vec<IvOrder>, Vec<MedOrder>) {
        (
            parse_iv_rows(&self.iv_fluids),
            parse_med_rows(&self.high_risk_meds),
        )
    }
}
