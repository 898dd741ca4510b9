use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::album::SimplifiedAlbum;
use super::artist::SimplifiedArtist;
use super::global::{ExternalId, ExternalUrl, Restriction, TrackType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub album: SimplifiedAlbum,
    pub artists: Vec<SimplifiedArtist>,
    pub available_markets: Vec<String>,
    pub disc_number: u32,
    pub duration_ms: u64,
    pub explicit: bool,
    pub external_ids: ExternalId,
    pub external_urls: ExternalUrl,
    pub href: String,
    pub id: String,
    /// Only sent when the request applied track relinking for a market.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_playable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Restriction>,
    pub name: String,
    pub popularity: u32,
    pub preview_url: Option<String>,
    pub track_number: u32,
    #[serde(rename = "type")]
    pub kind: TrackType,
    pub uri: String,
    pub is_local: bool,
}

/// A track in the user's library together with when it was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTrack {
    pub added_at: DateTime<Utc>,
    pub track: Track,
}
