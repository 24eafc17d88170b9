//! Deduplication index over existing notifications.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::notification::{AlertKind, Notification};

/// Composite dedup key: at most one notification may exist per real-world
/// deadline. The deadline value itself is part of the key, so a replacement
/// order with a new deadline alerts independently while label or start-time
/// edits do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlertKey {
    pub kind: AlertKind,
    pub hn: String,
    pub target_date: DateTime<Utc>,
}

impl AlertKey {
    pub fn of(n: &Notification) -> Self {
        Self {
            kind: n.kind,
            hn: n.hn.clone(),
            target_date: n.payload.target_date,
        }
    }
}

/// Keys already notified. Rebuilt fresh from the full list on every scan;
/// other actors may touch the store between runs, so nothing is cached.
pub fn already_alerted(existing: &[Notification]) -> HashSet<AlertKey> {
    existing.iter().map(AlertKey::of).collect()
}
