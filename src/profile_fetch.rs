//! Player-profile page scraper. The overview block renders each figure as a
//! value element immediately followed by its caption, so extraction walks
//! from the caption back to its previous sibling.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use scraper::{ElementRef, Html, Selector};

use crate::fetch;
use crate::league::SEASON_YEAR;
use crate::model::ScrapedPlayer;

/// Accepted date renderings for the birth-date figure. The site uses the
/// first; the alternates have shown up after layout changes.
const DOB_FORMATS: &[&str] = &["%d %B %Y", "%B %d, %Y", "%Y-%m-%d"];

/// Raw figures lifted off a profile page, before derivation.
#[derive(Debug, Clone, Default)]
pub struct ProfileDetails {
    pub dob: Option<String>,
    pub ipl_debut: Option<String>,
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn prev_element(el: ElementRef) -> Option<ElementRef> {
    el.prev_siblings().find_map(ElementRef::wrap)
}

fn has_class(el: ElementRef, class: &str) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|classes| classes.split_whitespace().any(|token| token == class))
}

/// Structured lookup: a caption element inside the overview block whose
/// text carries the label, valued by its preceding figure element.
fn overview_value(document: &Html, label: &str) -> Option<String> {
    let caption_sel = Selector::parse(".ap-p-player-overview__info").unwrap();
    for caption in document.select(&caption_sel) {
        if !element_text(caption).contains(label) {
            continue;
        }
        let Some(figure) = prev_element(caption) else {
            continue;
        };
        if !has_class(figure, "ap-p-player-overview__num") {
            continue;
        }
        let text = element_text(figure);
        if !text.is_empty() {
            return Some(text);
        }
    }
    None
}

/// Layout-agnostic fallback: any element whose whole text is exactly the
/// label, valued by its preceding sibling.
fn label_scan(document: &Html, label: &str) -> Option<String> {
    let any_sel = Selector::parse("*").unwrap();
    let mut found = None;
    for el in document.select(&any_sel) {
        if element_text(el) != label {
            continue;
        }
        if let Some(value) = prev_element(el) {
            let text = element_text(value);
            if !text.is_empty() {
                found = Some(text);
            }
        }
    }
    found
}

pub fn parse_profile_page(html: &str) -> ProfileDetails {
    let document = Html::parse_document(html);
    ProfileDetails {
        dob: overview_value(&document, "Date of Birth")
            .or_else(|| label_scan(&document, "Date of Birth")),
        ipl_debut: overview_value(&document, "IPL Debut")
            .or_else(|| label_scan(&document, "IPL Debut")),
    }
}

fn parse_dob(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DOB_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Whole years elapsed since the birth date. Unparseable or future dates
/// yield `None`.
pub fn age_from_dob(dob: &str) -> Option<u32> {
    let date = parse_dob(dob)?;
    Utc::now().date_naive().years_since(date)
}

/// Seasons from the debut year through the reference season, inclusive.
/// The debut figure sometimes reads "2021/22"; only the leading digits
/// count. Debuts after the reference season yield `None`.
pub fn tenure_from_debut(debut: &str) -> Option<u32> {
    let digits: String = debut
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let year: i32 = digits.parse().ok()?;
    if year > SEASON_YEAR {
        return None;
    }
    u32::try_from(SEASON_YEAR - year + 1).ok()
}

/// Copies scraped figures onto a cache entry and derives age and tenure.
/// Figures that failed to extract leave the entry untouched.
pub fn apply_details(player: &mut ScrapedPlayer, details: &ProfileDetails) {
    if let Some(dob) = &details.dob {
        player.dob = Some(dob.clone());
        player.age = age_from_dob(dob);
    }
    if let Some(debut) = &details.ipl_debut {
        player.ipl_debut = Some(debut.clone());
        player.total_years = tenure_from_debut(debut);
    }
}

pub fn scrape_profile(url: &str) -> Result<ProfileDetails> {
    let html = fetch::fetch_html(url)?;
    Ok(parse_profile_page(&html))
}
