//! Notification records produced by the alert scanner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which order variant triggered the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertKind {
    #[serde(rename = "iv_alert")]
    Iv,
    #[serde(rename = "med_alert")]
    Med,
}

/// Created as Pending; a human acknowledgement moves it to Sent.
/// Failed is reserved for the delivery collaborator and never set here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    Pending,
    Sent,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub message: String,
    /// Echo of the source order's deadline at generation time.
    /// Third component of the dedup key; a changed deadline is a new alert.
    pub target_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub hn: String,
    pub bed_id: i64,
    pub created_at: DateTime<Utc>,
    pub status: NotificationStatus,
    pub payload: NotificationPayload,
}

impl Notification {
    /// Human acknowledgement: Pending -> Sent. Returns false if the record
    /// was not pending (Sent is terminal).
    pub fn acknowledge(&mut self) -> bool {
        if self.status == NotificationStatus::Pending {
            self.status = NotificationStatus::Sent;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pending() -> Notification {
        let at = Utc.with_ymd_and_hms(2026, 2, 21, 8, 0, 0).unwrap();
        Notification {
            id: 1,
            kind: AlertKind::Iv,
            hn: "HN-1".to_string(),
            bed_id: 5,
            created_at: at,
            status: NotificationStatus::Pending,
            payload: NotificationPayload {
                message: "check".to_string(),
                target_date: at,
            },
        }
    }

    #[test]
    fn acknowledge_moves_pending_to_sent_once() {
        let mut n = pending();
        assert!(n.acknowledge());
        assert_eq!(n.status, NotificationStatus::Sent);
        assert!(!n.acknowledge());
        assert_eq!(n.status, NotificationStatus::Sent);
    }

    #[test]
    fn kind_serializes_to_store_vocabulary() {
        let n = pending();
        let json = serde_json::to_string(&n).unwrap();
        assert!(json.contains("\"type\":\"iv_alert\""));
        assert!(json.contains("\"status\":\"pending\""));
    }
}
