//! Record types for the unified dataset and the two intermediate documents.
//! Field names mirror the JSON the downstream dashboard consumes, so the
//! renames here are load-bearing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerRole {
    #[serde(rename = "BAT")]
    Bat,
    #[serde(rename = "BOWL")]
    Bowl,
    #[serde(rename = "AR")]
    AllRounder,
    #[serde(rename = "WK")]
    Keeper,
}

impl PlayerRole {
    /// Auction-report role token. Anything outside the closed set is a
    /// structural gap and stays unset.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "BAT" => Some(Self::Bat),
            "BOWL" => Some(Self::Bowl),
            "AR" => Some(Self::AllRounder),
            "WK" => Some(Self::Keeper),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bat => "BAT",
            Self::Bowl => "BOWL",
            Self::AllRounder => "AR",
            Self::Keeper => "WK",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<PlayerRole>,
    #[serde(rename = "isNew", default)]
    pub is_new: bool,
    #[serde(rename = "basePrice", default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<String>,
    #[serde(rename = "soldPrice", default, skip_serializing_if = "Option::is_none")]
    pub sold_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(rename = "iplDebut", default, skip_serializing_if = "Option::is_none")]
    pub ipl_debut: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(rename = "totalYears", default, skip_serializing_if = "Option::is_none")]
    pub total_years: Option<u32>,
    #[serde(rename = "profileUrl", default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamAnalysis {
    #[serde(default)]
    pub code: String,
    #[serde(rename = "strongPoints", default)]
    pub strong_points: Vec<String>,
    #[serde(rename = "weakPoints", default)]
    pub weak_points: Vec<String>,
    #[serde(rename = "titleProbability", default)]
    pub title_probability: String,
    #[serde(default)]
    pub spof: String,
    #[serde(rename = "bestXI", default)]
    pub best_xi: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Team {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "purseSpent", default, skip_serializing_if = "Option::is_none")]
    pub purse_spent: Option<String>,
    #[serde(rename = "purseLeft", default, skip_serializing_if = "Option::is_none")]
    pub purse_left: Option<String>,
    #[serde(rename = "playersBought", default, skip_serializing_if = "Option::is_none")]
    pub players_bought: Option<String>,
    #[serde(rename = "overseasBuys", default, skip_serializing_if = "Option::is_none")]
    pub overseas_buys: Option<String>,
    #[serde(default)]
    pub roster: Vec<Player>,
    #[serde(default)]
    pub analysis: TeamAnalysis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedPlayer {
    pub name: String,
    #[serde(rename = "teamCode")]
    pub team_code: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "profileUrl", default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(rename = "totalYears", default, skip_serializing_if = "Option::is_none")]
    pub total_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(rename = "iplDebut", default, skip_serializing_if = "Option::is_none")]
    pub ipl_debut: Option<String>,
}

impl ScrapedPlayer {
    /// Detail scraping is done for an entry once both derived fields exist.
    pub fn has_details(&self) -> bool {
        self.age.is_some() && self.total_years.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerLink {
    pub name: String,
    pub url: String,
    #[serde(rename = "teamCode")]
    pub team_code: String,
}
