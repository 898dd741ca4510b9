use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::global::{Copyright, ExternalUrl, Image, ShowType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedShow {
    pub available_markets: Vec<String>,
    pub copyrights: Vec<Copyright>,
    pub description: String,
    pub html_description: String,
    pub explicit: bool,
    pub external_urls: ExternalUrl,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub is_externally_hosted: bool,
    pub languages: Vec<String>,
    pub media_type: String,
    pub name: String,
    pub publisher: String,
    #[serde(rename = "type")]
    pub kind: ShowType,
    pub uri: String,
    pub total_episodes: u32,
}

/// A show in the user's library together with when it was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedShow {
    pub added_at: DateTime<Utc>,
    pub show: SimplifiedShow,
}
