//! Pipeline driver. One mode per run; every mode reads and writes the
//! documents under the data directory and leaves the rest alone.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use log::{info, warn};

use ipl26_data::model::ScrapedPlayer;
use ipl26_data::{analysis, assets, auction, fetch, merge, profile_fetch, store, team_fetch};

const MODES: &str =
    "seed, scrape-teams, scrape-links, scrape-details, find-missing, normalize-images, all";

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let mode = parse_mode_arg().unwrap_or_else(|| "seed".to_string());
    match mode.as_str() {
        "seed" => seed(),
        "scrape-teams" => scrape_teams(),
        "scrape-links" => scrape_links(),
        "scrape-details" => scrape_details(),
        "find-missing" => find_missing(),
        "normalize-images" => normalize_images(),
        "all" => {
            seed()?;
            scrape_teams()?;
            scrape_links()?;
            scrape_details()
        }
        other => bail!("unknown mode {other:?}; expected one of: {MODES}"),
    }
}

fn parse_mode_arg() -> Option<String> {
    std::env::args().skip(1).find(|arg| !arg.starts_with("--"))
}

fn parse_path_arg(flag: &str) -> Option<PathBuf> {
    let prefix = format!("--{flag}=");
    for arg in std::env::args().skip(1) {
        if let Some(path) = arg.strip_prefix(&prefix) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
    }
    None
}

/// Parses the two text sources, joins them, folds in any scraped details
/// already cached, and writes the canonical dataset.
fn seed() -> Result<()> {
    let auction_path = parse_path_arg("auction")
        .unwrap_or_else(|| PathBuf::from("data_source/auction_report.txt"));
    let analysis_path = parse_path_arg("analysis")
        .unwrap_or_else(|| PathBuf::from("data_source/team_analysis.txt"));

    let report = fs::read_to_string(&auction_path)
        .with_context(|| format!("read auction report {}", auction_path.display()))?;
    let table = fs::read_to_string(&analysis_path)
        .with_context(|| format!("read analysis table {}", analysis_path.display()))?;

    let mut teams = auction::parse_auction_report(&report);
    let analyses = analysis::parse_analysis_table(&table);
    merge::attach_analyses(&mut teams, &analyses);

    let cache = store::load_scraped_players(&store::scraped_players_path());
    if !cache.is_empty() {
        info!("enriching rosters from {} cached players", cache.len());
        merge::enrich_rosters(&mut teams, &cache);
    }

    let dataset_path = store::dataset_path();
    store::save_dataset(&dataset_path, &teams)?;
    let players: usize = teams.iter().map(|t| t.roster.len()).sum();
    println!(
        "Seeded {} teams ({players} players) to {}",
        teams.len(),
        dataset_path.display()
    );
    Ok(())
}

/// Scrapes the team listing and every franchise page, downloading assets on
/// the way, and rewrites the scraped-player cache with the fresh stubs.
fn scrape_teams() -> Result<()> {
    let teams = team_fetch::scrape_teams()?;
    let mut all_players = Vec::new();
    for team in &teams {
        match team_fetch::scrape_team_players(team) {
            Ok(players) => all_players.extend(players),
            Err(err) => warn!("players for {} failed: {}", team.code, err),
        }
    }
    let cache_path = store::scraped_players_path();
    store::save_scraped_players(&cache_path, &all_players)?;
    println!(
        "Saved {} players to {}",
        all_players.len(),
        cache_path.display()
    );
    Ok(())
}

fn scrape_links() -> Result<()> {
    let links = team_fetch::scrape_all_squad_links()?;
    let links_path = store::player_links_path();
    store::save_player_links(&links_path, &links)?;
    println!("Saved {} player links to {}", links.len(), links_path.display());
    Ok(())
}

/// Visits the profile page of every cache entry that has a URL but no
/// derived details yet. The cache is rewritten every ten visits and once at
/// the end, so an interrupted run resumes where it stopped.
fn scrape_details() -> Result<()> {
    let cache_path = store::scraped_players_path();
    let mut players = store::load_scraped_players(&cache_path);
    if players.is_empty() {
        bail!(
            "no scraped-player cache at {}; run scrape-teams first",
            cache_path.display()
        );
    }

    let total = players.len();
    info!("{total} cache entries, scraping missing details");
    let mut processed = 0usize;
    let mut updated = 0usize;
    for idx in 0..players.len() {
        if players[idx].has_details() {
            continue;
        }
        let Some(url) = players[idx].profile_url.clone() else {
            continue;
        };
        info!("[{}/{}] scraping {}", idx + 1, total, players[idx].name);
        match profile_fetch::scrape_profile(url.trim()) {
            Ok(details) => {
                profile_fetch::apply_details(&mut players[idx], &details);
                updated += 1;
            }
            Err(err) => warn!("profile for {} failed: {}", players[idx].name, err),
        }
        processed += 1;
        if processed % 10 == 0 {
            store::save_scraped_players(&cache_path, &players)?;
        }
        fetch::pause(100);
    }
    store::save_scraped_players(&cache_path, &players)?;
    println!("Updated {updated} of {total} cache entries");
    Ok(())
}

/// Works through roster players absent from the cache: resolves a profile
/// link from the harvested squad links, scrapes it, and appends the result.
/// Unresolvable players still get a stub entry so the run converges. The
/// cache is rewritten after every player.
fn find_missing() -> Result<()> {
    let dataset_path = store::dataset_path();
    let teams = store::load_dataset(&dataset_path).context("dataset missing; run seed first")?;
    let links = store::load_player_links(&store::player_links_path())
        .context("player links missing; run scrape-links first")?;
    let cache_path = store::scraped_players_path();
    let mut cache = store::load_scraped_players(&cache_path);

    let missing = merge::missing_from_cache(&teams, &cache);
    println!("Found {} players missing from the cache.", missing.len());

    for (name, team_code) in missing {
        info!("searching for {name} ({team_code})");
        let mut entry = ScrapedPlayer {
            name: name.clone(),
            team_code: team_code.clone(),
            image_url: None,
            profile_url: None,
            age: None,
            total_years: None,
            dob: None,
            ipl_debut: None,
        };
        match merge::resolve_profile_url(&name, &team_code, &links) {
            Some(url) => {
                info!("  found {url}");
                match profile_fetch::scrape_profile(&url) {
                    Ok(details) => profile_fetch::apply_details(&mut entry, &details),
                    Err(err) => warn!("  profile for {name} failed: {err}"),
                }
                entry.profile_url = Some(url);
            }
            None => warn!("  no profile link for {name} in {team_code}"),
        }
        cache.push(entry);
        store::save_scraped_players(&cache_path, &cache)?;
        fetch::pause(200);
    }
    println!("Done.");
    Ok(())
}

fn normalize_images() -> Result<()> {
    let dataset_path = store::dataset_path();
    let teams = store::load_dataset(&dataset_path).context("dataset missing; run seed first")?;
    assets::reconcile_image_files(&teams)?;
    println!("Image reconciliation complete.");
    Ok(())
}
