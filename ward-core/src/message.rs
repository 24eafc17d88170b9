//! Message composer: human-readable alert text, Thai or English.
//!
//! Same order + same style must produce byte-identical output; golden tests
//! depend on it.

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;

use crate::order::OrderRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLanguage {
    Thai,
    English,
}

#[derive(Debug, Clone, Copy)]
pub struct MessageStyle {
    pub language: MessageLanguage,
    /// Display timezone; timestamps are stored in UTC.
    pub tz: Tz,
}

impl Default for MessageStyle {
    fn default() -> Self {
        Self {
            language: MessageLanguage::Thai,
            tz: chrono_tz::Asia::Bangkok,
        }
    }
}

/// d/m/yyyy in the style's timezone. Thai dates use the Buddhist era
/// (Gregorian year + 543), matching ward paperwork.
pub fn format_date(at: DateTime<Utc>, style: &MessageStyle) -> String {
    let local = at.with_timezone(&style.tz);
    let year = match style.language {
        MessageLanguage::Thai => local.year() + 543,
        MessageLanguage::English => local.year(),
    };
    format!("{}/{}/{}", local.day(), local.month(), year)
}

/// HH:MM in the style's timezone.
pub fn format_time(at: DateTime<Utc>, style: &MessageStyle) -> String {
    let local = at.with_timezone(&style.tz);
    format!("{:02}:{:02}", local.hour(), local.minute())
}

/// Render the four-line alert message for one order.
///
/// `bed_number` is the resolved display number; a missing lookup falls back
/// to echoing the raw bed id. Composition never fails.
pub fn compose_message(order: OrderRef<'_>, bed_number: Option<i64>, style: &MessageStyle) -> String {
    let bed = bed_number.unwrap_or(order.bed_id());
    let d_start = format_date(order.started_at(), style);
    let t_start = format_time(order.started_at(), style);
    let d_end = format_date(order.deadline_at(), style);
    let t_end = format_time(order.deadline_at(), style);

    match (style.language, order) {
        (MessageLanguage::Thai, OrderRef::Iv(_)) => format!(
            "HN {} (เตียง {}): สารน้ำ {}\nเริ่ม: {} {}\nครบกำหนด: {} {}\nกรุณาตรวจสอบ",
            order.hn(),
            bed,
            order.label(),
            d_start,
            t_start,
            d_end,
            t_end
        ),
        (MessageLanguage::Thai, OrderRef::Med(_)) => format!(
            "HN {} (เตียง {}): ยา {}\nเริ่ม: {} {}\nหมดฤทธิ์: {} {}\nกรุณาตรวจสอบ",
            order.hn(),
            bed,
            order.label(),
            d_start,
            t_start,
            d_end,
            t_end
        ),
        (MessageLanguage::English, OrderRef::Iv(_)) => format!(
            "HN {} (bed {}): IV fluid {}\nStarted: {} {}\nDue: {} {}\nPlease check",
            order.hn(),
            bed,
            order.label(),
            d_start,
            t_start,
            d_end,
            t_end
        ),
        (MessageLanguage::English, OrderRef::Med(_)) => format!(
            "HN {} (bed {}): medication {}\nStarted: {} {}\nExpires: {} {}\nPlease check",
            order.hn(),
            bed,
            order.label(),
            d_start,
            t_start,
            d_end,
            t_end
        ),
    }
}
