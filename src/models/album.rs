use serde::{Deserialize, Serialize};

use super::artist::SimplifiedArtist;
use super::global::{AlbumObjectType, ExternalUrl, Image, ReleaseDatePrecision, Restriction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumType {
    Album,
    Single,
    Compilation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedAlbum {
    pub album_type: AlbumType,
    pub total_tracks: u32,
    pub available_markets: Vec<String>,
    pub external_urls: ExternalUrl,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Restriction>,
    #[serde(rename = "type")]
    pub kind: AlbumObjectType,
    pub uri: String,
    pub artists: Vec<SimplifiedArtist>,
}
