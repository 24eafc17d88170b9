//! Lenient row -> typed-order conversion.

use chrono::{DateTime, Utc};
use tracing::warn;
use ward_core::{IvOrder, MedOrder};

use crate::records::{IvRow, MedRow};

fn parse_ts(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Convert raw IV rows to typed orders. A row with an unparseable timestamp
/// is skipped with a warning; one bad row never blocks the rest of the batch.
pub fn parse_iv_rows(rows: &[IvRow]) -> Vec<IvOrder> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let (Some(started_at), Some(due_at)) = (parse_ts(&row.started_at), parse_ts(&row.due_at))
        else {
            warn!(id = row.id, hn = %row.hn, "skipping IV row with malformed timestamp");
            continue;
        };
        out.push(IvOrder {
            id: row.id,
            hn: row.hn.clone(),
            bed_id: row.bed_id,
            started_at,
            due_at,
            fluid_type: row.fluid_type.clone(),
            notes: row.notes.clone(),
            is_active: row.is_active,
        });
    }
    out
}

/// Same contract for medication rows.
pub fn parse_med_rows(rows: &[MedRow]) -> Vec<MedOrder> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let (Some(started_at), Some(expire_at)) =
            (parse_ts(&row.started_at), parse_ts(&row.expire_at))
        else {
            warn!(id = row.id, hn = %row.hn, "skipping med row with malformed timestamp");
            continue;
        };
        out.push(MedOrder {
            id: row.id,
            hn: row.hn.clone(),
            bed_id: row.bed_id,
            started_at,
            expire_at,
            med_name: row.med_name.clone(),
            med_code: row.med_code.clone(),
            notes: row.notes.clone(),
            is_active: row.is_active,
        });
    }
    out
}
