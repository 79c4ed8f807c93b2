use std::fs;
use std::path::PathBuf;

use ipl26_data::profile_fetch::{age_from_dob, parse_profile_page, tenure_from_debut};
use ipl26_data::team_fetch::{parse_squad_links, parse_team_listing, parse_team_players};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_team_listing_fixture() {
    let html = read_fixture("team_listing.html");
    let teams = parse_team_listing(&html);

    let codes: Vec<&str> = teams.iter().map(|t| t.code.as_str()).collect();
    assert_eq!(codes, ["CSK", "MI", "RR"]);

    let csk = &teams[0];
    assert_eq!(csk.name, "Chennai Super Kings");
    assert_eq!(csk.url, "https://www.iplt20.com/teams/chennai-super-kings");
    assert_eq!(csk.logo_url, "https://assets.iplt20.com/logos/CSK/logo.png");

    // The defunct franchise card is outside the ten-team table.
    assert!(teams.iter().all(|t| t.name != "Deccan Chargers"));
}

#[test]
fn parses_team_squad_fixture() {
    let html = read_fixture("team_squad.html");
    let players = parse_team_players(&html, "MI");

    assert_eq!(players.len(), 3);
    assert!(players.iter().all(|p| p.team_code == "MI"));
    assert!(players.iter().all(|p| !p.has_details()));

    let sky = &players[0];
    assert_eq!(sky.name, "Suryakumar Yadav");
    assert_eq!(
        sky.image_url.as_deref(),
        Some("https://scores.iplt20.com/ipl/playerimages/Suryakumar%20Yadav.png")
    );
    assert_eq!(
        sky.profile_url.as_deref(),
        Some("https://www.iplt20.com/teams/mumbai-indians/squad-details/107")
    );

    // No lazy-load attribute: plain src is used; no image anchor: the first
    // anchor in the card is used.
    let bumrah = &players[1];
    assert_eq!(
        bumrah.image_url.as_deref(),
        Some("https://scores.iplt20.com/ipl/playerimages/Jasprit%20Bumrah.png")
    );
    assert_eq!(
        bumrah.profile_url.as_deref(),
        Some("https://www.iplt20.com/teams/mumbai-indians/squad-details/9")
    );

    // No anchor at all: the stub still carries the image.
    let boult = &players[2];
    assert_eq!(
        boult.image_url.as_deref(),
        Some("https://scores.iplt20.com/ipl/playerimages/Trent%20Boult.png")
    );
    assert_eq!(boult.profile_url, None);
}

#[test]
fn parses_squad_links_fixture() {
    let html = read_fixture("squad_links.html");
    let links = parse_squad_links(&html, "MI");

    let names: Vec<&str> = links.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "SURYA KUMAR YADAV",
            "JASPRIT BUMRAH",
            "HARDIK PANDYA",
            "RYAN RICKELTON"
        ]
    );
    assert_eq!(links[0].url, "/players/surya-kumar-yadav");
    assert!(links.iter().all(|l| l.team_code == "MI"));
    assert!(links.iter().all(|l| l.url.contains("/players/")));
}

#[test]
fn parses_player_profile_fixture() {
    let html = read_fixture("player_profile.html");
    let details = parse_profile_page(&html);

    assert_eq!(details.dob.as_deref(), Some("14 September 1990"));
    assert_eq!(details.ipl_debut.as_deref(), Some("2012"));

    let dob = details.dob.expect("dob extracted");
    assert!(age_from_dob(&dob).is_some_and(|age| age >= 34));

    let debut = details.ipl_debut.expect("debut extracted");
    assert_eq!(tenure_from_debut(&debut), Some(15));
}
