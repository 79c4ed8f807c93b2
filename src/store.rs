//! Flat-file persistence for the three pipeline documents. Every save
//! rewrites the whole file through a temp sibling plus rename so a crash
//! never leaves a truncated document behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::{PlayerLink, ScrapedPlayer, Team};

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn data_dir() -> PathBuf {
    PathBuf::from(env_or("IPL_DATA_DIR", "data"))
}

pub fn public_dir() -> PathBuf {
    PathBuf::from(env_or("IPL_PUBLIC_DIR", "public"))
}

pub fn dataset_path() -> PathBuf {
    data_dir().join("ipl_data.json")
}

pub fn scraped_players_path() -> PathBuf {
    data_dir().join("scraped_players.json")
}

pub fn player_links_path() -> PathBuf {
    data_dir().join("player_links.json")
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("serialize {}", path.display()))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("swap {}", path.display()))
}

/// The canonical dataset is required input for every post-seed flow, so a
/// missing or unreadable file is an error here, not an empty default.
pub fn load_dataset(path: &Path) -> Result<Vec<Team>> {
    read_json(path)
}

pub fn save_dataset(path: &Path, teams: &[Team]) -> Result<()> {
    write_json(path, &teams)
}

/// A first run has no cache yet; a missing or corrupt file loads as empty.
pub fn load_scraped_players(path: &Path) -> Vec<ScrapedPlayer> {
    let Ok(raw) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

pub fn save_scraped_players(path: &Path, players: &[ScrapedPlayer]) -> Result<()> {
    write_json(path, &players)
}

pub fn load_player_links(path: &Path) -> Result<Vec<PlayerLink>> {
    read_json(path)
}

pub fn save_player_links(path: &Path, links: &[PlayerLink]) -> Result<()> {
    write_json(path, &links)
}
