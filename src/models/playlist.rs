use serde::{Deserialize, Serialize};

use super::global::{ExternalUrl, Image, PlaylistType};
use super::user::PublicUser;

/// Link to the playlist's full track listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub href: String,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedPlaylist {
    pub collaborative: bool,
    pub description: Option<String>,
    pub external_urls: ExternalUrl,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub name: String,
    pub owner: PublicUser,
    /// `None` when the playlist status is not relevant.
    pub public: Option<bool>,
    pub snapshot_id: String,
    pub tracks: PlaylistTracksRef,
    #[serde(rename = "type")]
    pub kind: PlaylistType,
    pub uri: String,
}
