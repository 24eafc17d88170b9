use anyhow::{Context, Result};
use serde_json::json;
use tracing::warn;
use ward_core::{AlertKind, MessageStyle, Notification, format_date, format_time};

const IV_COLOR: &str = "#3b82f6";
const MED_COLOR: &str = "#ef4444";

/// POST one alert card to the webhook.
pub async fn deliver(
    client: &reqwest::Client,
    url: &str,
    n: &Notification,
    style: &MessageStyle,
) -> Result<()> {
    let (title, color, verb) = match n.kind {
        AlertKind::Iv => ("IV Fluid Alert", IV_COLOR, "Due"),
        AlertKind::Med => ("High-Risk Med Alert", MED_COLOR, "Expire"),
    };
    let detail = format!(
        "{}: {} {}",
        verb,
        format_date(n.payload.target_date, style),
        format_time(n.payload.target_date, style)
    );

    let payload = json!({
        "title": title,
        "color": color,
        "message": n.payload.message,
        "hn": n.hn,
        "bed": n.bed_id,
        "detail": detail,
    });

    let resp = client
        .post(url)
        .json(&payload)
        .send()
        .await
        .with_context(|| format!("POST {url}"))?;

    if !resp.status().is_success() {
        anyhow::bail!("webhook returned {}", resp.status());
    }
    Ok(())
}

/// Deliver each new notification, logging failures. The records were
/// persisted before this runs, so a failed send leaves them Pending in the
/// store rather than losing them.
pub async fn dispatch_all(
    client: &reqwest::Client,
    url: &str,
    new: &[Notification],
    style: &MessageStyle,
) -> usize {
    let mut sent = 0;
    for n in new {
        match deliver(client, url, n, style).await {
            Ok(()) => sent += 1,
            Err(e) => warn!(id = n.id, "delivery failed: {e:#}"),
        }
    }
    sent
}
