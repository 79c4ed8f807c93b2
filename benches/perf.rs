use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use ipl26_data::analysis::parse_analysis_table;
use ipl26_data::auction::parse_auction_report;
use ipl26_data::matching::best_match;
use ipl26_data::merge::enrich_rosters;
use ipl26_data::model::ScrapedPlayer;
use ipl26_data::names::compare_key;
use ipl26_data::profile_fetch::parse_profile_page;
use ipl26_data::team_fetch::parse_team_listing;

fn sample_cache() -> Vec<ScrapedPlayer> {
    let teams = parse_auction_report(AUCTION_TXT);
    let mut cache = Vec::new();
    for team in &teams {
        for player in &team.roster {
            cache.push(ScrapedPlayer {
                name: player.name.to_uppercase(),
                team_code: team.code.clone(),
                image_url: None,
                profile_url: Some(format!("/teams/{}/players/1", team.code)),
                age: Some(27),
                total_years: Some(5),
                dob: None,
                ipl_debut: None,
            });
        }
    }
    cache
}

fn bench_auction_parse(c: &mut Criterion) {
    c.bench_function("auction_parse", |b| {
        b.iter(|| {
            let teams = parse_auction_report(black_box(AUCTION_TXT));
            black_box(teams.len());
        })
    });
}

fn bench_analysis_parse(c: &mut Criterion) {
    c.bench_function("analysis_parse", |b| {
        b.iter(|| {
            let rows = parse_analysis_table(black_box(ANALYSIS_TXT));
            black_box(rows.len());
        })
    });
}

fn bench_roster_enrich(c: &mut Criterion) {
    let base = parse_auction_report(AUCTION_TXT);
    let cache = sample_cache();

    c.bench_function("roster_enrich", |b| {
        b.iter(|| {
            let mut teams = base.clone();
            enrich_rosters(black_box(&mut teams), black_box(&cache));
            black_box(teams.len());
        })
    });
}

fn bench_name_matching(c: &mut Criterion) {
    let pool: Vec<(String, u32)> = (0..200)
        .map(|idx| (format!("Squad Player Number {idx}"), idx))
        .collect();

    c.bench_function("name_matching", |b| {
        b.iter(|| {
            let hit = best_match(black_box("Squad Playr Number 137"), black_box(&pool));
            black_box(hit.is_some());
        })
    });
}

fn bench_compare_key(c: &mut Criterion) {
    c.bench_function("compare_key", |b| {
        b.iter(|| {
            let key = compare_key(black_box("Matheesha Pathirana \u{2708}\u{fe0f} (wk) **"));
            black_box(key.len());
        })
    });
}

fn bench_team_listing_parse(c: &mut Criterion) {
    c.bench_function("team_listing_parse", |b| {
        b.iter(|| {
            let teams = parse_team_listing(black_box(TEAM_LISTING_HTML));
            black_box(teams.len());
        })
    });
}

fn bench_profile_parse(c: &mut Criterion) {
    c.bench_function("profile_parse", |b| {
        b.iter(|| {
            let details = parse_profile_page(black_box(PROFILE_HTML));
            black_box(details.dob.is_some());
        })
    });
}

criterion_group!(
    perf,
    bench_auction_parse,
    bench_analysis_parse,
    bench_roster_enrich,
    bench_name_matching,
    bench_compare_key,
    bench_team_listing_parse,
    bench_profile_parse
);
criterion_main!(perf);

static AUCTION_TXT: &str = include_str!("../tests/fixtures/auction_report.txt");
static ANALYSIS_TXT: &str = include_str!("../tests/fixtures/team_analysis.txt");
static TEAM_LISTING_HTML: &str = include_str!("../tests/fixtures/team_listing.html");
static PROFILE_HTML: &str = include_str!("../tests/fixtures/player_profile.html");
