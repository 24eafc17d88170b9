use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use ward_core::{AlertPolicy, MessageLanguage, MessageStyle, ScanConfig};

use crate::state::ensure_wardwatch_home;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub scan: ScanSection,
    #[serde(default)]
    pub delivery: DeliverySection,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreSection {
    /// Path to the ward snapshot JSON; defaults to ~/.wardwatch/ward.json.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSection {
    pub interval_secs: u64,
    pub iv_lead_hours: i64,
    pub med_lead_hours: i64,
    /// "th" or "en".
    pub language: String,
    /// IANA timezone for message timestamps.
    pub timezone: String,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            interval_secs: 60,
            iv_lead_hours: 4,
            med_lead_hours: 1,
            language: "th".to_string(),
            timezone: "Asia/Bangkok".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeliverySection {
    /// Webhook endpoint for alert cards. None disables dispatch.
    pub webhook_url: Option<String>,
}

impl Config {
    pub fn scan_config(&self) -> Result<ScanConfig> {
        let tz: chrono_tz::Tz = self
            .scan
            .timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid timezone: {}", self.scan.timezone))?;

        let language = match self.scan.language.as_str() {
            "th" => MessageLanguage::Thai,
            "en" => MessageLanguage::English,
            other => anyhow::bail!("unsupported language: {other} (expected th or en)"),
        };

        Ok(ScanConfig {
            policy: AlertPolicy {
                iv_lead_hours: self.scan.iv_lead_hours,
                med_lead_hours: self.scan.med_lead_hours,
            },
            style: MessageStyle { language, tz },
        })
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_wardwatch_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
