//! Scrapers for the franchise listing page and the two squad-page layouts.
//!
//! Parsing is split from fetching so the selector logic can be exercised
//! against saved HTML fixtures.

use anyhow::Result;
use log::{info, warn};
use scraper::{ElementRef, Html, Selector};

use crate::assets;
use crate::fetch;
use crate::league;
use crate::model::{PlayerLink, ScrapedPlayer};

/// Role captions rendered after player names on squad pages. Longest first
/// so the compound captions win over their tails.
const ROLE_SUFFIXES: &[&str] = &["All-Rounder", "WK-Batter", "Batter", "Bowler"];

/// Franchise entry discovered on the league teams page.
#[derive(Debug, Clone)]
pub struct TeamPage {
    pub name: String,
    pub code: String,
    pub url: String,
    pub logo_url: String,
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn first_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

fn first_attr(scope: ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Drops a trailing role caption ("SURYA KUMAR YADAV Batter" becomes
/// "SURYA KUMAR YADAV"). The caption must follow whitespace so a bare
/// caption-shaped name stays intact.
fn strip_role_suffix(name: &str) -> String {
    let trimmed = name.trim();
    for suffix in ROLE_SUFFIXES {
        if trimmed.len() <= suffix.len() {
            continue;
        }
        let cut = trimmed.len() - suffix.len();
        if trimmed.is_char_boundary(cut)
            && trimmed[cut..].eq_ignore_ascii_case(suffix)
            && trimmed[..cut].ends_with(char::is_whitespace)
        {
            return trimmed[..cut].trim_end().to_string();
        }
    }
    trimmed.to_string()
}

/// Reads franchise cards off the teams page. Entries whose display name is
/// not one of the ten franchises, or which lack a logo or page link, are
/// dropped.
pub fn parse_team_listing(html: &str) -> Vec<TeamPage> {
    let document = Html::parse_document(html);
    let card_sel = Selector::parse(".vn-teamsInnerWrp > li").unwrap();
    let name_sel = Selector::parse(".ap-team-contn > h3").unwrap();
    let logo_sel = Selector::parse(".vn-team-logo > img").unwrap();
    let link_sel = Selector::parse("a").unwrap();

    let mut teams = Vec::new();
    for card in document.select(&card_sel) {
        let Some(name) = first_text(card, &name_sel) else {
            continue;
        };
        let Some(code) = league::code_for_name(&name) else {
            continue;
        };
        let Some(logo_url) = first_attr(card, &logo_sel, "src") else {
            continue;
        };
        let Some(url) = first_attr(card, &link_sel, "href") else {
            continue;
        };
        teams.push(TeamPage {
            name,
            code: code.to_string(),
            url,
            logo_url,
        });
    }
    teams
}

/// Reads player cards off a franchise page. Images prefer the lazy-load
/// `data-src` attribute over `src`; the profile link prefers the image
/// anchor over the first anchor in the card.
pub fn parse_team_players(html: &str, team_code: &str) -> Vec<ScrapedPlayer> {
    let document = Html::parse_document(html);
    let card_sel = Selector::parse("li.ih-pcard1").unwrap();
    let name_sel = Selector::parse(".ih-p-name > h2").unwrap();
    let img_sel = Selector::parse(".ih-p-img > img").unwrap();
    let img_link_sel = Selector::parse("a.ih-p-img").unwrap();
    let link_sel = Selector::parse("a").unwrap();

    let mut players = Vec::new();
    for card in document.select(&card_sel) {
        let Some(name) = first_text(card, &name_sel) else {
            continue;
        };
        let image_url = first_attr(card, &img_sel, "data-src")
            .or_else(|| first_attr(card, &img_sel, "src"));
        let profile_url = first_attr(card, &img_link_sel, "href")
            .or_else(|| first_attr(card, &link_sel, "href"));
        players.push(ScrapedPlayer {
            name,
            team_code: team_code.to_string(),
            image_url,
            profile_url,
            age: None,
            total_years: None,
            dob: None,
            ipl_debut: None,
        });
    }
    players
}

/// Collects every profile anchor on a squad page. Anchors without text
/// (image-only links) are skipped; role captions are stripped from the rest.
pub fn parse_squad_links(html: &str, team_code: &str) -> Vec<PlayerLink> {
    let document = Html::parse_document(html);
    let anchor_sel = Selector::parse(r#"a[href*="/players/"]"#).unwrap();

    let mut links = Vec::new();
    for anchor in document.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        let name = strip_role_suffix(&element_text(anchor));
        if href.is_empty() || name.is_empty() {
            continue;
        }
        links.push(PlayerLink {
            name,
            url: href.to_string(),
            team_code: team_code.to_string(),
        });
    }
    links
}

/// Fetches the teams page and downloads each franchise logo on the way.
pub fn scrape_teams() -> Result<Vec<TeamPage>> {
    let url = format!("{}/teams", fetch::base_url());
    info!("fetching team listing from {url}");
    let html = fetch::fetch_html(&url)?;
    let teams = parse_team_listing(&html);
    for team in &teams {
        info!("found team {} ({})", team.name, team.code);
        assets::download_logo(&team.code, &fetch::absolute_url(&team.logo_url));
    }
    Ok(teams)
}

/// Fetches one franchise page and downloads each player headshot on the way.
pub fn scrape_team_players(team: &TeamPage) -> Result<Vec<ScrapedPlayer>> {
    info!("fetching players for {}", team.name);
    let html = fetch::fetch_html(&fetch::absolute_url(&team.url))?;
    let players = parse_team_players(&html, &team.code);
    for player in &players {
        if let Some(image_url) = &player.image_url {
            assets::download_player_image(
                &team.code,
                &player.name,
                &fetch::absolute_url(image_url),
            );
        }
    }
    Ok(players)
}

/// Walks all ten squad pages and collects profile links, pausing between
/// requests. A failed page is logged and skipped so one outage does not
/// void the whole harvest.
pub fn scrape_all_squad_links() -> Result<Vec<PlayerLink>> {
    let mut links = Vec::new();
    for franchise in league::FRANCHISES {
        let url = format!("{}/teams/{}/squad", fetch::base_url(), franchise.slug);
        info!("scraping {url}");
        match fetch::fetch_html(&url) {
            Ok(html) => links.extend(parse_squad_links(&html, franchise.code)),
            Err(err) => warn!("squad page for {} failed: {}", franchise.code, err),
        }
        fetch::pause(1000);
    }
    Ok(links)
}
