use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};

use ward_core::{BedStatus, NotificationStatus, bed_number_map, scan};
use ward_store::WardSnapshot;

mod config;
mod dispatch;
mod state;
mod watch;

#[derive(Parser, Debug)]
#[command(name = "wardwatch", version, about = "Ward bed and clinical-order alerting")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write default config and an empty ward store
    Init,

    /// Run one scan cycle now
    Scan {
        /// Print would-be alerts without persisting or dispatching
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },

    /// Run the interval scan loop
    Watch {
        /// Override [scan].interval_secs
        #[arg(long)]
        interval: Option<u64>,
    },

    /// Store summary: beds, active orders, notifications by status
    Status,

    /// Acknowledge a pending notification (marks it sent)
    Ack {
        #[arg(long)]
        id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init => init()?,
        Command::Scan { dry_run } => scan_once(dry_run).await?,
        Command::Watch { interval } => {
            let cfg = config::load_config()?;
            let secs = interval.unwrap_or(cfg.scan.interval_secs);
            watch::run(&cfg, secs).await?;
        }
        Command::Status => status()?,
        Command::Ack { id } => ack(id)?,
    }

    Ok(())
}

fn init() -> Result<()> {
    config::init_config()?;

    let cfg = config::load_config()?;
    let path = state::resolve_store_path(&cfg)?;
    if path.exists() {
        println!("Store already exists: {}", path.display());
        return Ok(());
    }
    state::save_snapshot(&path, &WardSnapshot::default())?;
    println!("Wrote {}", path.display());
    Ok(())
}

async fn scan_once(dry_run: bool) -> Result<()> {
    let cfg = config::load_config()?;
    let scan_cfg = cfg.scan_config()?;
    let path = state::resolve_store_path(&cfg)?;
    let mut snapshot = state::load_snapshot(&path)?;

    let (ivs, meds) = snapshot.orders();
    let beds = bed_number_map(&snapshot.beds);
    let new = scan(&ivs, &meds, &snapshot.notifications, &beds, Utc::now(), &scan_cfg);

    if new.is_empty() {
        println!("No new alerts.");
        return Ok(());
    }

    for n in &new {
        println!(
            "[{:?}] #{} HN {} (bed {})\n{}\n",
            n.kind, n.id, n.hn, n.bed_id, n.payload.message
        );
    }

    if dry_run {
        println!("Dry run: {} alert(s) not persisted.", new.len());
        return Ok(());
    }

    snapshot.notifications.extend(new.iter().cloned());
    state::save_snapshot(&path, &snapshot)?;
    println!("Persisted {} alert(s) to {}", new.len(), path.display());

    if let Some(url) = cfg.delivery.webhook_url.as_deref() {
        let client = reqwest::Client::new();
        let sent = dispatch::dispatch_all(&client, url, &new, &scan_cfg.style).await;
        println!("Dispatched {}/{} alert(s).", sent, new.len());
    }

    Ok(())
}

fn status() -> Result<()> {
    let cfg = config::load_config()?;
    let path = state::resolve_store_path(&cfg)?;
    let snapshot = state::load_snapshot(&path)?;

    let occupied = snapshot
        .beds
        .iter()
        .filter(|b| b.status == BedStatus::Occupied)
        .count();

    let (ivs, meds) = snapshot.orders();
    let active_ivs = ivs.iter().filter(|o| o.is_active).count();
    let active_meds = meds.iter().filter(|o| o.is_active).count();

    let mut pending = 0usize;
    let mut sent = 0usize;
    let mut failed = 0usize;
    for n in &snapshot.notifications {
        match n.status {
            NotificationStatus::Pending => pending += 1,
            NotificationStatus::Sent => sent += 1,
            NotificationStatus::Failed => failed += 1,
        }
    }

    println!("Beds: {} total, {} occupied", snapshot.beds.len(), occupied);
    println!("Orders: {} IV active, {} med active", active_ivs, active_meds);
    println!(
        "Notifications: {} pending, {} sent, {} failed",
        pending, sent, failed
    );
    Ok(())
}

fn ack(id: u64) -> Result<()> {
    let cfg = config::load_config()?;
    let path = state::resolve_store_path(&cfg)?;
    let mut snapshot = state::load_snapshot(&path)?;

    let Some(n) = snapshot.notifications.iter_mut().find(|n| n.id == id) else {
        anyhow::bail!("no notification with id {id}");
    };
    if !n.acknowledge() {
        println!("Notification {id} is already {:?}.", n.status);
        return Ok(());
    }

    state::save_snapshot(&path, &snapshot)?;
    println!("Acknowledged notification {id}.");
    Ok(())
}
