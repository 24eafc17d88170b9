//! ward-core: bed occupancy and clinical-order alerting engine.
//!
//! Everything in this crate is pure computation over already-fetched
//! collections. The host owns scheduling, persistence and delivery;
//! `now` is always injected.

pub mod dedup;
pub mod evaluator;
pub mod message;
pub mod notification;
pub mod order;
pub mod scanner;
pub mod ward;

pub use dedup::{AlertKey, already_alerted};
pub use evaluator::{AlertPolicy, is_alert_due};
pub use message::{MessageLanguage, MessageStyle, compose_message, format_date, format_time};
pub use notification::{AlertKind, Notification, NotificationPayload, NotificationStatus};
pub use order::{IvOrder, MedOrder, OrderRef};
pub use scanner::{ScanConfig, scan};
pub use ward::{Bed, BedStatus, bed_number_map};
