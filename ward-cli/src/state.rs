use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use ward_store::WardSnapshot;

use crate::config::Config;

pub fn wardwatch_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".wardwatch"))
}

pub fn ensure_wardwatch_home() -> Result<PathBuf> {
    let dir = wardwatch_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn default_store_path() -> Result<PathBuf> {
    Ok(ensure_wardwatch_home()?.join("ward.json"))
}

pub fn resolve_store_path(cfg: &Config) -> Result<PathBuf> {
    match &cfg.store.path {
        Some(p) => Ok(p.clone()),
        None => default_store_path(),
    }
}

pub fn load_snapshot(path: &Path) -> Result<WardSnapshot> {
    if !path.exists() {
        anyhow::bail!(
            "store not found: {} (run `wardwatch init` first)",
            path.display()
        );
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    WardSnapshot::from_json(&s)
}

pub fn save_snapshot(path: &Path, snapshot: &WardSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, snapshot.to_json()?).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
