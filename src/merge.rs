//! Joins the per-source record lists into the unified dataset and answers
//! the cross-source membership questions the reports and resume flows ask.

use std::collections::HashSet;

use log::info;

use crate::fetch;
use crate::matching;
use crate::model::{Player, PlayerLink, ScrapedPlayer, Team, TeamAnalysis};
use crate::names;

/// Attaches each analysis row to the team whose code matches exactly.
/// Teams without a row keep their default analysis; that is data coverage,
/// not an error.
pub fn attach_analyses(teams: &mut [Team], analyses: &[TeamAnalysis]) {
    for team in teams.iter_mut() {
        match analyses.iter().find(|a| a.code == team.code) {
            Some(analysis) => team.analysis = analysis.clone(),
            None => info!("no analysis row for {}", team.code),
        }
    }
}

fn apply_scraped(player: &mut Player, source: &ScrapedPlayer) {
    if let Some(dob) = &source.dob {
        player.dob = Some(dob.clone());
    }
    if let Some(debut) = &source.ipl_debut {
        player.ipl_debut = Some(debut.clone());
    }
    if let Some(age) = source.age {
        player.age = Some(age);
    }
    if let Some(years) = source.total_years {
        player.total_years = Some(years);
    }
    if let Some(url) = &source.profile_url {
        player.profile_url = Some(url.clone());
    }
    if let Some(url) = &source.image_url {
        player.image_url = Some(url.clone());
    }
}

/// Copies scraped details onto roster entries. An exact normalized-name hit
/// within the same team wins; otherwise the edit-distance matcher decides,
/// still restricted to the same team. Unmatched roster entries are left
/// untouched.
pub fn enrich_rosters(teams: &mut [Team], scraped: &[ScrapedPlayer]) {
    for team in teams.iter_mut() {
        let candidates: Vec<(String, &ScrapedPlayer)> = scraped
            .iter()
            .filter(|s| s.team_code == team.code)
            .map(|s| (s.name.clone(), s))
            .collect();
        for player in &mut team.roster {
            let exact = candidates
                .iter()
                .find(|(name, _)| matching::same_name(name, &player.name))
                .map(|(_, source)| *source);
            let found =
                exact.or_else(|| matching::best_match(&player.name, &candidates).copied());
            if let Some(source) = found {
                apply_scraped(player, source);
            }
        }
    }
}

/// Best-eleven fragments that match nobody on the roster. Fragments are
/// often partial surnames, so containment in either direction counts as a
/// match; that looseness is deliberate.
pub fn unmatched_best_eleven(team: &Team) -> Vec<String> {
    team.analysis
        .best_xi
        .split(',')
        .map(|fragment| fragment.replace("**", "").trim().to_string())
        .filter(|fragment| !names::compare_key(fragment).is_empty())
        .filter(|fragment| {
            !team
                .roster
                .iter()
                .any(|p| matching::either_contains(fragment, &p.name))
        })
        .collect()
}

/// Roster entries with no cache entry under the normalized name, as
/// (name, team code) pairs in dataset order. The cache is keyed by name
/// alone, so membership is checked across all teams.
pub fn missing_from_cache(teams: &[Team], scraped: &[ScrapedPlayer]) -> Vec<(String, String)> {
    let cached: HashSet<String> = scraped
        .iter()
        .map(|s| names::compare_key(&s.name))
        .collect();
    let mut missing = Vec::new();
    for team in teams {
        for player in &team.roster {
            if !cached.contains(&names::compare_key(&player.name)) {
                missing.push((player.name.clone(), team.code.clone()));
            }
        }
    }
    missing
}

/// Picks the profile link for a roster name from the harvested squad links,
/// restricted to the player's own team, and makes it absolute.
pub fn resolve_profile_url(name: &str, team_code: &str, links: &[PlayerLink]) -> Option<String> {
    let candidates: Vec<(String, &str)> = links
        .iter()
        .filter(|link| link.team_code == team_code)
        .map(|link| (link.name.clone(), link.url.as_str()))
        .collect();
    matching::best_match(name, &candidates).map(|url| fetch::absolute_url(url))
}

/// Roster entries still lacking derived details, as (name, team code) pairs.
pub fn missing_roster_details(teams: &[Team]) -> Vec<(String, String)> {
    teams
        .iter()
        .flat_map(|team| {
            team.roster
                .iter()
                .filter(|p| p.age.is_none() || p.total_years.is_none())
                .map(move |p| (p.name.clone(), team.code.clone()))
        })
        .collect()
}
