//! Alert scanner: one pass over the active orders, returning only
//! genuinely new notifications.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::dedup::{AlertKey, already_alerted};
use crate::evaluator::{AlertPolicy, is_alert_due};
use crate::message::{MessageStyle, compose_message};
use crate::notification::{Notification, NotificationPayload, NotificationStatus};
use crate::order::{IvOrder, MedOrder, OrderRef};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanConfig {
    pub policy: AlertPolicy,
    pub style: MessageStyle,
}

/// Evaluate every order, drop already-alerted deadlines, and compose one
/// Pending notification per newly-qualifying (kind, hn, deadline) triple.
///
/// Stateless and repeatable: the dedup set is rebuilt from `existing` each
/// call, and the input collections are read-only snapshots. The caller must
/// persist the returned records before the next invocation, or the same
/// deadlines will qualify again.
pub fn scan(
    ivs: &[IvOrder],
    meds: &[MedOrder],
    existing: &[Notification],
    bed_numbers: &HashMap<i64, i64>,
    now: DateTime<Utc>,
    cfg: &ScanConfig,
) -> Vec<Notification> {
    let mut alerted = already_alerted(existing);
    let next_id = existing.iter().map(|n| n.id).max().unwrap_or(0) + 1;

    let mut out: Vec<Notification> = Vec::new();

    let candidates = ivs
        .iter()
        .map(OrderRef::Iv)
        .chain(meds.iter().map(OrderRef::Med));

    for order in candidates {
        if !is_alert_due(order, now, &cfg.policy) {
            continue;
        }

        let key = AlertKey {
            kind: order.kind(),
            hn: order.hn().to_string(),
            target_date: order.deadline_at(),
        };
        // Inserting also guards against duplicate rows within this batch.
        if !alerted.insert(key) {
            continue;
        }

        let bed_number = bed_numbers.get(&order.bed_id()).copied();
        out.push(Notification {
            id: next_id + out.len() as u64,
            kind: order.kind(),
            hn: order.hn().to_string(),
            bed_id: order.bed_id(),
            created_at: now,
            status: NotificationStatus::Pending,
            payload: NotificationPayload {
                message: compose_message(order, bed_number, &cfg.style),
                target_date: order.deadline_at(),
            },
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::AlertKind;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 21, 8, 0, 0).unwrap()
    }

    fn beds() -> HashMap<i64, i64> {
        HashMap::from([(5, 12), (6, 3)])
    }

    fn iv(id: u64, hn: &str, due_in: Duration) -> IvOrder {
        IvOrder::new(id, hn, 5, now() - Duration::hours(6), now() + due_in, "NSS 1000ml")
    }

    #[test]
    fn single_iv_inside_threshold_produces_one_pending_alert() {
        let orders = vec![iv(1, "HN-1", Duration::hours(3))];
        let out = scan(&orders, &[], &[], &beds(), now(), &ScanConfig::default());

        assert_eq!(out.len(), 1);
        let n = &out[0];
        assert_eq!(n.id, 1);
        assert_eq!(n.kind, AlertKind::Iv);
        assert_eq!(n.hn, "HN-1");
        assert_eq!(n.status, NotificationStatus::Pending);
        assert_eq!(n.payload.target_date, orders[0].due_at);
        assert!(n.payload.message.contains("เตียง 12"));
    }

    #[test]
    fn rescan_with_persisted_output_is_empty() {
        let orders = vec![iv(1, "HN-1", Duration::hours(3))];
        let cfg = ScanConfig::default();
        let first = scan(&orders, &[], &[], &beds(), now(), &cfg);
        assert_eq!(first.len(), 1);

        let second = scan(&orders, &[], &first, &beds(), now(), &cfg);
        assert!(second.is_empty());
    }

    #[test]
    fn batch_ids_are_unique_and_continue_from_existing_max() {
        let orders = vec![
            iv(1, "HN-1", Duration::hours(1)),
            iv(2, "HN-2", Duration::hours(2)),
        ];
        let existing = scan(&[iv(3, "HN-3", Duration::hours(3))], &[], &[], &beds(), now(), &ScanConfig::default());
        assert_eq!(existing[0].id, 1);

        let out = scan(&orders, &[], &existing, &beds(), now(), &ScanConfig::default());
        let ids: Vec<u64> = out.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn duplicate_rows_in_one_batch_alert_once() {
        let orders = vec![
            iv(1, "HN-1", Duration::hours(3)),
            iv(2, "HN-1", Duration::hours(3)),
        ];
        let out = scan(&orders, &[], &[], &beds(), now(), &ScanConfig::default());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn same_subject_different_deadlines_alert_independently() {
        let orders = vec![
            iv(1, "HN-1", Duration::hours(1)),
            iv(2, "HN-1", Duration::hours(3)),
        ];
        let out = scan(&orders, &[], &[], &beds(), now(), &ScanConfig::default());
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn overdue_med_still_alerts() {
        let med = MedOrder::new(
            1,
            "HN-9",
            6,
            now() - Duration::hours(6),
            now() - Duration::hours(2),
            "Heparin",
            "HEP01",
        );
        let out = scan(&[], &[med], &[], &beds(), now(), &ScanConfig::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, AlertKind::Med);
    }

    #[test]
    fn unknown_bed_id_degrades_to_raw_id_in_message() {
        let mut order = iv(1, "HN-1", Duration::hours(3));
        order.bed_id = 99;
        let out = scan(&[order], &[], &[], &beds(), now(), &ScanConfig::default());
        assert!(out[0].payload.message.contains("เตียง 99"));
    }
}
