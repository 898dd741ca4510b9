use serde::{Deserialize, Serialize};

use super::global::{ArtistType, ExternalUrl, Image};
use super::user::Followers;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    pub external_urls: ExternalUrl,
    pub href: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ArtistType,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(flatten)]
    pub simplified: SimplifiedArtist,
    pub followers: Followers,
    pub genres: Vec<String>,
    pub images: Vec<Image>,
    /// 0 to 100, derived from the popularity of the artist's tracks.
    pub popularity: u32,
}

impl From<Artist> for SimplifiedArtist {
    fn from(artist: Artist) -> Self {
        artist.simplified
    }
}
