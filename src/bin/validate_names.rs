use anyhow::{Context, Result};

use ipl26_data::model::Team;
use ipl26_data::{merge, names, store};

fn main() -> Result<()> {
    let dataset_path = store::dataset_path();
    let teams = store::load_dataset(&dataset_path).context("dataset missing; run seed first")?;

    println!("Validating best-eleven names against rosters...\n");
    for team in &teams {
        let unmatched = merge::unmatched_best_eleven(team);
        if unmatched.is_empty() {
            println!("{}: all best-eleven names matched.", team.code);
            continue;
        }
        println!(
            "{}: {} unmatched best-eleven names:",
            team.code,
            unmatched.len()
        );
        for name in &unmatched {
            println!("  - {name:?} (no roster match)");
        }
        let candidates = first_letter_candidates(team, &unmatched);
        if !candidates.is_empty() {
            println!("  roster candidates:");
            for candidate in candidates {
                println!("    - {candidate}");
            }
        }
        println!();
    }
    Ok(())
}

/// Narrows the suggestion list to roster names sharing a first letter with
/// any unmatched fragment.
fn first_letter_candidates(team: &Team, unmatched: &[String]) -> Vec<String> {
    let initials: Vec<char> = unmatched
        .iter()
        .filter_map(|name| names::compare_key(name).chars().next())
        .collect();
    team.roster
        .iter()
        .filter(|player| {
            names::compare_key(&player.name)
                .chars()
                .next()
                .is_some_and(|c| initials.contains(&c))
        })
        .map(|player| player.name.clone())
        .collect()
}
