//! Data pipeline for the 2026 IPL season: parses the auction report and the
//! analysis table, scrapes the league site, and reconciles all three sources
//! into one dataset keyed by franchise and player.

pub mod analysis;
pub mod assets;
pub mod auction;
pub mod fetch;
pub mod league;
pub mod matching;
pub mod merge;
pub mod model;
pub mod names;
pub mod profile_fetch;
pub mod store;
pub mod team_fetch;
