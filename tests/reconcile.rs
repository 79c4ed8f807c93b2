use std::fs;
use std::path::PathBuf;

use ipl26_data::analysis::parse_analysis_table;
use ipl26_data::auction::parse_auction_report;
use ipl26_data::merge::{
    attach_analyses, enrich_rosters, missing_from_cache, unmatched_best_eleven,
};
use ipl26_data::model::{ScrapedPlayer, TeamAnalysis};
use ipl26_data::store;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("ipl26_reconcile_{}_{}", std::process::id(), name));
    path
}

fn scraped_stub(name: &str, code: &str) -> ScrapedPlayer {
    ScrapedPlayer {
        name: name.to_string(),
        team_code: code.to_string(),
        image_url: None,
        profile_url: None,
        age: None,
        total_years: None,
        dob: None,
        ipl_debut: None,
    }
}

fn scraped_detailed(name: &str, code: &str, age: u32, years: u32) -> ScrapedPlayer {
    ScrapedPlayer {
        age: Some(age),
        total_years: Some(years),
        profile_url: Some(format!("/players/{}", name.to_lowercase().replace(' ', "-"))),
        ..scraped_stub(name, code)
    }
}

#[test]
fn pipeline_joins_all_three_sources() {
    let mut teams = parse_auction_report(&read_fixture("auction_report.txt"));
    let analyses = parse_analysis_table(&read_fixture("team_analysis.txt"));
    attach_analyses(&mut teams, &analyses);
    assert!(teams.iter().all(|t| t.analysis.code == t.code));

    let cache = vec![
        scraped_detailed("Suryakumar Yadav", "MI", 35, 15),
        scraped_detailed("Matheesha Pathirana", "CSK", 23, 3),
    ];
    enrich_rosters(&mut teams, &cache);

    let sky = teams[1]
        .roster
        .iter()
        .find(|p| p.name == "Suryakumar Yadav")
        .expect("on MI roster");
    assert_eq!(sky.age, Some(35));
    assert_eq!(sky.total_years, Some(15));
    assert!(sky.profile_url.is_some());

    // The roster name carries an overseas marker; the scraped one does not.
    let pathirana = teams[0]
        .roster
        .iter()
        .find(|p| p.name.starts_with("Matheesha"))
        .expect("on CSK roster");
    assert_eq!(pathirana.age, Some(23));

    // Everyone else is untouched.
    let dube = teams[0]
        .roster
        .iter()
        .find(|p| p.name == "Shivam Dube")
        .expect("on CSK roster");
    assert_eq!(dube.age, None);
}

#[test]
fn teams_without_analysis_rows_keep_defaults() {
    let mut teams = parse_auction_report(&read_fixture("auction_report.txt"));
    let analyses: Vec<TeamAnalysis> = parse_analysis_table(&read_fixture("team_analysis.txt"))
        .into_iter()
        .filter(|row| row.code != "MI")
        .collect();
    attach_analyses(&mut teams, &analyses);

    assert_eq!(teams[0].analysis.code, "CSK");
    assert_eq!(teams[1].analysis, TeamAnalysis::default());

    // The gap survives a save/load cycle without erroring anywhere.
    let path = temp_path("default_analysis.json");
    store::save_dataset(&path, &teams).expect("save dataset");
    let reloaded = store::load_dataset(&path).expect("load dataset");
    assert_eq!(reloaded[1].analysis, TeamAnalysis::default());
    assert_eq!(reloaded[0].analysis.title_probability, "18% (top-4: 65%)");
    let _ = fs::remove_file(&path);
}

#[test]
fn best_eleven_validation_on_the_fixture_dataset() {
    let mut teams = parse_auction_report(&read_fixture("auction_report.txt"));
    let analyses = parse_analysis_table(&read_fixture("team_analysis.txt"));
    attach_analyses(&mut teams, &analyses);

    // CSK and MI each name one player who is not on the roster; every RR
    // fragment resolves, "Stubbs" by partial-surname containment.
    assert_eq!(unmatched_best_eleven(&teams[0]), vec!["Devon Conway"]);
    assert_eq!(unmatched_best_eleven(&teams[1]), vec!["Rohit Sharma"]);
    assert!(unmatched_best_eleven(&teams[2]).is_empty());
}

#[test]
fn missing_player_flow_grows_the_cache_monotonically() {
    let teams = parse_auction_report(&read_fixture("auction_report.txt"));
    let cache_path = temp_path("resume_cache.json");
    let _ = fs::remove_file(&cache_path);

    let initial = vec![
        scraped_detailed("Ruturaj Gaikwad", "CSK", 29, 7),
        scraped_detailed("MS DHONI", "CSK", 44, 19),
    ];
    store::save_scraped_players(&cache_path, &initial).expect("save initial cache");

    let mut cache = store::load_scraped_players(&cache_path);
    let missing = missing_from_cache(&teams, &cache);
    let total_roster: usize = teams.iter().map(|t| t.roster.len()).sum();
    assert_eq!(missing.len(), total_roster - 2);
    // Cached names never come back, marker and case drift included.
    assert!(
        missing
            .iter()
            .all(|(name, _)| name != "Ruturaj Gaikwad (c)" && name != "MS Dhoni (wk)")
    );

    // Resolution appends one entry per missing player, rewriting the cache
    // each time the way the driver does.
    for (name, code) in missing {
        cache.push(scraped_stub(&name, &code));
        store::save_scraped_players(&cache_path, &cache).expect("periodic save");
    }

    let reloaded = store::load_scraped_players(&cache_path);
    assert_eq!(reloaded.len(), total_roster);
    // The pre-existing entries survived every rewrite.
    assert!(
        reloaded
            .iter()
            .any(|p| p.name == "Ruturaj Gaikwad" && p.age == Some(29))
    );
    // A rerun finds nothing left to do.
    assert!(missing_from_cache(&teams, &reloaded).is_empty());

    let _ = fs::remove_file(&cache_path);
}

#[test]
fn dataset_document_uses_dashboard_field_names() {
    let mut teams = parse_auction_report(&read_fixture("auction_report.txt"));
    let analyses = parse_analysis_table(&read_fixture("team_analysis.txt"));
    attach_analyses(&mut teams, &analyses);
    enrich_rosters(&mut teams, &[scraped_detailed("Suryakumar Yadav", "MI", 35, 15)]);

    let path = temp_path("document_shape.json");
    store::save_dataset(&path, &teams).expect("save dataset");
    let raw = fs::read_to_string(&path).expect("read back");

    assert!(raw.contains("\"purseSpent\""));
    assert!(raw.contains("\"isNew\""));
    assert!(raw.contains("\"strongPoints\""));
    assert!(raw.contains("\"bestXI\""));
    assert!(raw.contains("\"totalYears\""));
    assert!(!raw.contains("purse_spent"));
    // Pretty-printed, one field per line.
    assert!(raw.contains("\n  "));

    let reloaded = store::load_dataset(&path).expect("load dataset");
    assert_eq!(reloaded.len(), teams.len());
    let sky = reloaded[1]
        .roster
        .iter()
        .find(|p| p.name == "Suryakumar Yadav")
        .expect("on MI roster");
    assert_eq!(sky.total_years, Some(15));
    let _ = fs::remove_file(&path);
}
