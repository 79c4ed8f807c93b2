//! Asset placement on disk: franchise logos, player headshots, and the
//! reconciliation pass that lines up existing downloads with roster names.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::fetch;
use crate::model::Team;
use crate::names;
use crate::store;

/// Roster names whose image is published under a different stem. Keyed by
/// the space-joined normalized name.
const SPECIAL_IMAGE_KEYS: &[(&str, &str)] = &[("rasikh salam", "rasikh_dar")];

fn ext_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let file = path.rsplit('/').next().unwrap_or(path);
    match file.rfind('.') {
        Some(pos) if pos > 0 && pos + 1 < file.len() => file[pos..].to_string(),
        _ => ".png".to_string(),
    }
}

/// Filename stem for a player image, with the special-case table applied.
pub fn player_image_stem(name: &str) -> String {
    let key = names::filename_key(name);
    let lookup = key.replace('_', " ");
    SPECIAL_IMAGE_KEYS
        .iter()
        .find(|(from, _)| *from == lookup)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(key)
}

pub fn logo_path(code: &str, url: &str) -> PathBuf {
    store::public_dir()
        .join("logos")
        .join("teams")
        .join(format!("{code}{}", ext_from_url(url)))
}

pub fn player_image_path(team_code: &str, name: &str, url: &str) -> PathBuf {
    store::public_dir()
        .join("images")
        .join("players")
        .join(team_code)
        .join(format!("{}{}", player_image_stem(name), ext_from_url(url)))
}

/// Best-effort download. A failure is logged and swallowed so one broken
/// asset never aborts a scrape.
pub fn download_logo(code: &str, url: &str) {
    let path = logo_path(code, url);
    if let Err(err) = fetch::download(url, &path) {
        warn!("logo download for {code} failed: {err}");
    }
}

pub fn download_player_image(team_code: &str, name: &str, url: &str) {
    let path = player_image_path(team_code, name, url);
    if let Err(err) = fetch::download(url, &path) {
        warn!("image download for {name} failed: {err}");
    }
}

fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read directory {}", dir.display()))?;
        if entry.path().is_file() {
            if let Some(name) = entry.file_name().to_str() {
                files.push(name.to_string());
            }
        }
    }
    // Directory order is platform-defined; sorting keeps tie-breaks stable.
    files.sort();
    Ok(files)
}

fn reconcile_one(team_dir: &Path, pool: &mut Vec<String>, player_name: &str) -> Result<()> {
    let expected = format!("{}.png", player_image_stem(player_name));
    if team_dir.join(&expected).exists() {
        return Ok(());
    }

    let key = names::filename_key(player_name);
    let tokens: Vec<&str> = key.split('_').filter(|part| part.len() > 1).collect();

    let mut best: Option<usize> = None;
    for (idx, file) in pool.iter().enumerate() {
        let lower = file.to_lowercase();
        let base = lower.strip_suffix(".png").unwrap_or(&lower);
        if tokens.is_empty() || !tokens.iter().all(|token| base.contains(token)) {
            continue;
        }
        if best.is_none_or(|prev| file.len() < pool[prev].len()) {
            best = Some(idx);
        }
    }

    let Some(idx) = best else {
        info!("no image match for {player_name} (expected {expected})");
        return Ok(());
    };
    let chosen = pool.remove(idx);
    info!("renaming {chosen} -> {expected} (for {player_name})");
    fs::rename(team_dir.join(&chosen), team_dir.join(&expected))
        .with_context(|| format!("rename {chosen} to {expected}"))
}

/// Renames downloaded headshots to the name-derived filenames the dataset
/// expects. A file is matched when every multi-letter token of the player
/// name appears in it; among matches the shortest filename wins, and each
/// file is spent once per run.
pub fn reconcile_image_files(teams: &[Team]) -> Result<()> {
    let images_root = store::public_dir().join("images").join("players");
    for team in teams {
        let team_dir = images_root.join(&team.code);
        if !team_dir.is_dir() {
            info!("no image directory for {}, skipping", team.code);
            continue;
        }
        let mut pool = list_file_names(&team_dir)?;
        info!("reconciling {} ({} files)", team.code, pool.len());
        for player in &team.roster {
            reconcile_one(&team_dir, &mut pool, &player.name)?;
        }
    }
    Ok(())
}
