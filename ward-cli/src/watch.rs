use anyhow::Result;
use chrono::Utc;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{info, warn};

use ward_core::{bed_number_map, scan};

use crate::config::Config;
use crate::dispatch::dispatch_all;
use crate::state::{load_snapshot, resolve_store_path, save_snapshot};

/// Interval-driven scan loop.
///
/// Each cycle runs to completion (load, scan, persist, dispatch) before the
/// next tick is taken, and ticks that elapse during a slow cycle are skipped.
/// That is the in-flight guard the scanner's contract requires: two scans
/// never run against a snapshot whose predecessor's output is unpersisted.
pub async fn run(cfg: &Config, interval_secs: u64) -> Result<()> {
    let scan_cfg = cfg.scan_config()?;
    let store_path = resolve_store_path(cfg)?;
    let client = reqwest::Client::new();

    let mut ticker = interval(Duration::from_secs(interval_secs.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(path = %store_path.display(), interval_secs, "watch loop started");

    loop {
        ticker.tick().await;

        let mut snapshot = match load_snapshot(&store_path) {
            Ok(s) => s,
            Err(e) => {
                warn!("skipping tick: {e:#}");
                continue;
            }
        };

        let (ivs, meds) = snapshot.orders();
        let beds = bed_number_map(&snapshot.beds);
        let new = scan(&ivs, &meds, &snapshot.notifications, &beds, Utc::now(), &scan_cfg);

        if new.is_empty() {
            continue;
        }

        // Persist before dispatch: a delivery failure must never lose the
        // durable record that the alert was generated.
        snapshot.notifications.extend(new.iter().cloned());
        save_snapshot(&store_path, &snapshot)?;
        info!(count = new.len(), "new alerts persisted");

        if let Some(url) = cfg.delivery.webhook_url.as_deref() {
            let sent = dispatch_all(&client, url, &new, &scan_cfg.style).await;
            info!(sent, total = new.len(), "dispatch complete");
        }
    }
}
