//! Threshold evaluator: is a single order alert-worthy right now?

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::notification::AlertKind;
use crate::order::OrderRef;

/// Per-variant alert lead times. Clinical policy changes, so these are named
/// and overridable rather than inlined.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlertPolicy {
    pub iv_lead_hours: i64,
    pub med_lead_hours: i64,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            iv_lead_hours: 4,
            med_lead_hours: 1,
        }
    }
}

impl AlertPolicy {
    pub fn lead(&self, kind: AlertKind) -> Duration {
        match kind {
            AlertKind::Iv => Duration::hours(self.iv_lead_hours),
            AlertKind::Med => Duration::hours(self.med_lead_hours),
        }
    }
}

/// True when the order has crossed its variant's alert threshold.
///
/// Pure over (order, now). Inactive orders never alert. Overdue orders stay
/// alert-worthy: there is no "already too late" upper cutoff.
pub fn is_alert_due(order: OrderRef<'_>, now: DateTime<Utc>, policy: &AlertPolicy) -> bool {
    if !order.is_active() {
        return false;
    }
    order.deadline_at() - now <= policy.lead(order.kind())
}
