use serde::{Deserialize, Serialize};

use super::global::{EpisodeType, ExternalUrl, Image, ReleaseDatePrecision, Restriction};

/// The user's most recent position in an episode or chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumePoint {
    pub fully_played: bool,
    pub resume_position_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedEpisode {
    pub audio_preview_url: Option<String>,
    pub description: String,
    pub html_description: String,
    pub duration_ms: u64,
    pub explicit: bool,
    pub external_urls: ExternalUrl,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub is_externally_hosted: bool,
    pub is_playable: bool,
    pub languages: Vec<String>,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    /// Present only for user tokens with the `user-read-playback-position` scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_point: Option<ResumePoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Restriction>,
    #[serde(rename = "type")]
    pub kind: EpisodeType,
    pub uri: String,
}
