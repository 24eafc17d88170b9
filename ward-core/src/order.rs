//! Clinical order model: IV fluids and high-risk medications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::notification::AlertKind;

/// IV fluid order. `due_at` is when the bag runs out and must be checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IvOrder {
    pub id: u64,
    /// Hospital number: stable patient identifier, independent of bed moves.
    pub hn: String,
    pub bed_id: i64,
    pub started_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub fluid_type: String,
    pub notes: Option<String>,
    /// Set false on discharge or manual closure; never reactivated.
    pub is_active: bool,
}

impl IvOrder {
    pub fn new(
        id: u64,
        hn: impl Into<String>,
        bed_id: i64,
        started_at: DateTime<Utc>,
        due_at: DateTime<Utc>,
        fluid_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            hn: hn.into(),
            bed_id,
            started_at,
            due_at,
            fluid_type: fluid_type.into(),
            notes: None,
            is_active: true,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// High-risk medication order. `expire_at` is when the dose wears off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedOrder {
    pub id: u64,
    pub hn: String,
    pub bed_id: i64,
    pub started_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
    pub med_name: String,
    pub med_code: String,
    pub notes: Option<String>,
    pub is_active: bool,
}

impl MedOrder {
    pub fn new(
        id: u64,
        hn: impl Into<String>,
        bed_id: i64,
        started_at: DateTime<Utc>,
        expire_at: DateTime<Utc>,
        med_name: impl Into<String>,
        med_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            hn: hn.into(),
            bed_id,
            started_at,
            expire_at,
            med_name: med_name.into(),
            med_code: med_code.into(),
            notes: None,
            is_active: true,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Shared view over the two order variants.
///
/// The evaluator, composer and scanner only ever see this, so the structural
/// role of `due_at` vs `expire_at` stays in one place.
#[derive(Debug, Clone, Copy)]
pub enum OrderRef<'a> {
    Iv(&'a IvOrder),
    Med(&'a MedOrder),
}

impl<'a> OrderRef<'a> {
    pub fn kind(self) -> AlertKind {
        match self {
            OrderRef::Iv(_) => AlertKind::Iv,
            OrderRef::Med(_) => AlertKind::Med,
        }
    }

    pub fn hn(self) -> &'a str {
        match self {
            OrderRef::Iv(o) => &o.hn,
            OrderRef::Med(o) => &o.hn,
        }
    }

    pub fn bed_id(self) -> i64 {
        match self {
            OrderRef::Iv(o) => o.bed_id,
            OrderRef::Med(o) => o.bed_id,
        }
    }

    pub fn started_at(self) -> DateTime<Utc> {
        match self {
            OrderRef::Iv(o) => o.started_at,
            OrderRef::Med(o) => o.started_at,
        }
    }

    /// Due time (IV) or expiry time (med).
    pub fn deadline_at(self) -> DateTime<Utc> {
        match self {
            OrderRef::Iv(o) => o.due_at,
            OrderRef::Med(o) => o.expire_at,
        }
    }

    pub fn is_active(self) -> bool {
        match self {
            OrderRef::Iv(o) => o.is_active,
            OrderRef::Med(o) => o.is_active,
        }
    }

    /// Fluid type or medication name, for display.
    pub fn label(self) -> &'a str {
        match self {
            OrderRef::Iv(o) => &o.fluid_type,
            OrderRef::Med(o) => &o.med_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn order_ref_maps_variant_deadlines() {
        let start = Utc.with_ymd_and_hms(2026, 2, 21, 6, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 2, 21, 12, 0, 0).unwrap();

        let iv = IvOrder::new(1, "HN-1", 5, start, end, "NSS 1000ml");
        let med = MedOrder::new(2, "HN-2", 6, start, end, "Heparin", "HEP01");

        assert_eq!(OrderRef::Iv(&iv).kind(), AlertKind::Iv);
        assert_eq!(OrderRef::Iv(&iv).deadline_at(), end);
        assert_eq!(OrderRef::Iv(&iv).label(), "NSS 1000ml");

        assert_eq!(OrderRef::Med(&med).kind(), AlertKind::Med);
        assert_eq!(OrderRef::Med(&med).deadline_at(), end);
        assert_eq!(OrderRef::Med(&med).label(), "Heparin");
    }
}
