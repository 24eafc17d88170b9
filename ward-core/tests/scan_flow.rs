use std::collections::HashMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use ward_core::{
    AlertKey, Bed, BedStatus, IvOrder, MedOrder, ScanConfig, bed_number_map, scan,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 21, 8, 0, 0).unwrap()
}

fn ward_beds() -> HashMap<i64, i64> {
    bed_number_map(&[
        Bed {
            id: 5,
            bed_number: 12,
            status: BedStatus::Occupied,
            current_hn: Some("HN-1".to_string()),
        },
        Bed {
            id: 6,
            bed_number: 3,
            status: BedStatus::Occupied,
            current_hn: Some("HN-2".to_string()),
        },
    ])
}

fn iv(id: u64, hn: &str, due_at: DateTime<Utc>) -> IvOrder {
    IvOrder::new(id, hn, 5, now() - Duration::hours(6), due_at, "NSS 1000ml")
}

fn med(id: u64, hn: &str, expire_at: DateTime<Utc>) -> MedOrder {
    MedOrder::new(
        id,
        hn,
        6,
        now() - Duration::hours(3),
        expire_at,
        "Heparin",
        "HEP01",
    )
}

/// Scan, fold the output into the store, scan again: nothing new the second
/// time. This is the idempotence guarantee the whole engine exists for.
#[test]
fn idempotent_once_output_is_persisted() {
    let ivs = vec![iv(1, "HN-1", now() + Duration::hours(3))];
    let meds = vec![med(2, "HN-2", now() + Duration::minutes(30))];
    let beds = ward_beds();
    let cfg = ScanConfig::default();

    let first = scan(&ivs, &meds, &[], &beds, now(), &cfg);
    assert_eq!(first.len(), 2);

    let mut store = Vec::new();
    store.extend(first.iter().cloned());

    let second = scan(&ivs, &meds, &store, &beds, now(), &cfg);
    assert!(second.is_empty());

    // Even a later scan (closer to the deadline) stays quiet.
    let third = scan(&ivs, &meds, &store, &beds, now() + Duration::hours(1), &cfg);
    assert!(third.is_empty());
}

/// Without persistence between calls the same deadlines qualify again.
/// The host's watch loop persists before the next tick for exactly this
/// reason.
#[test]
fn rescan_without_persisting_repeats_the_same_alert() {
    let ivs = vec![iv(1, "HN-1", now() + Duration::hours(3))];
    let beds = ward_beds();
    let cfg = ScanConfig::default();

    let first = scan(&ivs, &[], &[], &beds, now(), &cfg);
    let again = scan(&ivs, &[], &[], &beds, now(), &cfg);

    assert_eq!(first.len(), 1);
    assert_eq!(again.len(), 1);
    assert_eq!(AlertKey::of(&first[0]), AlertKey::of(&again[0]));
}

/// The dedup key binds the deadline, not the order row: editing the label
/// never re-alerts, replacing the deadline always does.
#[test]
fn new_deadline_realerts_label_edit_does_not() {
    let beds = ward_beds();
    let cfg = ScanConfig::default();
    let due = now() + Duration::hours(2);

    let original = vec![iv(1, "HN-1", due)];
    let mut store = scan(&original, &[], &[], &beds, now(), &cfg);
    assert_eq!(store.len(), 1);

    // Label edit, same deadline: silent.
    let mut relabeled = iv(1, "HN-1", due);
    relabeled.fluid_type = "RLS 1000ml".to_string();
    let after_edit = scan(&[relabeled], &[], &store, &beds, now(), &cfg);
    assert!(after_edit.is_empty());

    // New row replacing the old with a fresh deadline: one new alert.
    let replacement = vec![iv(7, "HN-1", due + Duration::hours(6))];
    let later = now() + Duration::hours(5);
    let after_replace = scan(&replacement, &[], &store, &beds, later, &cfg);
    assert_eq!(after_replace.len(), 1);
    assert_eq!(after_replace[0].payload.target_date, due + Duration::hours(6));

    store.extend(after_replace);
    assert_eq!(store.len(), 2);
}

#[test]
fn discharge_suppresses_even_overdue_orders() {
    let beds = ward_beds();
    let mut overdue = iv(1, "HN-1", now() - Duration::minutes(1));
    overdue.is_active = false;

    let out = scan(&[overdue], &[], &[], &beds, now(), &ScanConfig::default());
    assert!(out.is_empty());
}

#[test]
fn med_overdue_by_two_hours_still_alerts() {
    let beds = ward_beds();
    let meds = vec![med(1, "HN-2", now() - Duration::hours(2))];

    let out = scan(&[], &meds, &[], &beds, now(), &ScanConfig::default());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].payload.target_date, now() - Duration::hours(2));
}

/// A mixed batch gets strictly increasing ids above the existing maximum,
/// unique even before anything is persisted.
#[test]
fn mixed_batch_ids_are_unique_above_existing_max() {
    let beds = ward_beds();
    let cfg = ScanConfig::default();

    let seed = scan(
        &[iv(1, "HN-0", now() + Duration::hours(1))],
        &[],
        &[],
        &beds,
        now(),
        &cfg,
    );
    assert_eq!(seed[0].id, 1);

    let ivs = vec![
        iv(2, "HN-1", now() + Duration::hours(2)),
        iv(3, "HN-2", now() + Duration::hours(3)),
    ];
    let meds = vec![med(4, "HN-3", now() + Duration::minutes(10))];

    let out = scan(&ivs, &meds, &seed, &beds, now(), &cfg);
    let ids: Vec<u64> = out.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![2, 3, 4]);
}
