use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::album::SimplifiedAlbum;
use super::artist::Artist;
use super::audiobook::SimplifiedAudiobook;
use super::episode::SimplifiedEpisode;
use super::playlist::SimplifiedPlaylist;
use super::show::SimplifiedShow;
use super::track::Track;

/// Every object type the Web API tags its payloads with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotifyType {
    User,
    Episode,
    Playlist,
    Show,
    Track,
    Album,
    Artist,
    Audiobook,
}

/// The categories accepted by the search endpoint's `type` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Album,
    Artist,
    Track,
    Show,
    Episode,
    Playlist,
    Audiobook,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Album => "album",
            SearchType::Artist => "artist",
            SearchType::Track => "track",
            SearchType::Show => "show",
            SearchType::Episode => "episode",
            SearchType::Playlist => "playlist",
            SearchType::Audiobook => "audiobook",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declares a single-valued enum standing for the literal `type` tag of
/// one object family. Decoding rejects any other tag.
macro_rules! object_tag {
    ($(#[$meta:meta])* $name:ident => $variant:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            #[default]
            #[serde(rename = $tag)]
            $variant,
        }

        impl From<$name> for SpotifyType {
            fn from(_: $name) -> Self {
                SpotifyType::$variant
            }
        }
    };
}

object_tag!(
    /// `"audiobook"`
    AudiobookType => Audiobook, "audiobook"
);
object_tag!(
    /// Chapters are tagged `"episode"` by the API.
    ChapterType => Episode, "episode"
);
object_tag!(
    /// `"episode"`
    EpisodeType => Episode, "episode"
);
object_tag!(
    /// `"show"`
    ShowType => Show, "show"
);
object_tag!(
    /// `"track"`
    TrackType => Track, "track"
);
object_tag!(
    /// `"album"`
    AlbumObjectType => Album, "album"
);
object_tag!(
    /// `"artist"`
    ArtistType => Artist, "artist"
);
object_tag!(
    /// `"playlist"`
    PlaylistType => Playlist, "playlist"
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Height in pixels; `None` when unknown.
    pub height: Option<u32>,
    pub url: String,
    /// Width in pixels; `None` when unknown.
    pub width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUrl {
    pub spotify: String,
}

/// Known external identifiers. The API only sends the keys it has.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalId {
    /// International Article Number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    /// International Standard Recording Code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,
    /// Universal Product Code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
}

/// Offset-based page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paging<T> {
    pub href: String,
    pub items: Vec<T>,
    pub limit: u32,
    pub next: Option<String>,
    pub offset: u32,
    pub previous: Option<String>,
    pub total: u32,
}

impl<T> Paging<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Key for the next page of items.
    pub after: Option<String>,
    /// Key for the previous page of items.
    pub before: Option<String>,
}

/// Page of results navigated by opaque cursors instead of offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorPaging<T> {
    pub href: String,
    pub items: Vec<T>,
    pub limit: u32,
    pub next: Option<String>,
    pub cursors: Cursor,
    pub total: u32,
}

impl<T> CursorPaging<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CopyrightType {
    #[serde(rename = "C")]
    Copyright,
    #[serde(rename = "P")]
    Performance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copyright {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: CopyrightType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestrictionReason {
    Market,
    Product,
    Explicit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    pub reason: RestrictionReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseDatePrecision {
    Year,
    Month,
    Day,
}

/// The failure payload the API sends alongside a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
}

/// Body of the search endpoint. Only the requested categories are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SearchContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub episodes: Option<Paging<SimplifiedEpisode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub shows: Option<Paging<SimplifiedShow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub tracks: Option<Paging<Track>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub artists: Option<Paging<Artist>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub albums: Option<Paging<SimplifiedAlbum>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub playlists: Option<Paging<SimplifiedPlaylist>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub audiobooks: Option<Paging<SimplifiedAudiobook>>,
}

impl SearchContent {
    /// The categories present in this result, in declaration order.
    pub fn categories(&self) -> Vec<SearchType> {
        let present = [
            (SearchType::Episode, self.episodes.is_some()),
            (SearchType::Show, self.shows.is_some()),
            (SearchType::Track, self.tracks.is_some()),
            (SearchType::Artist, self.artists.is_some()),
            (SearchType::Album, self.albums.is_some()),
            (SearchType::Playlist, self.playlists.is_some()),
            (SearchType::Audiobook, self.audiobooks.is_some()),
        ];

        present
            .into_iter()
            .filter_map(|(kind, is_present)| is_present.then_some(kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_copyright_type_rejects_unknown_letter() {
        let ok: Copyright = serde_json::from_value(json!({"text": "(C) 2021", "type": "C"})).unwrap();
        assert_eq!(ok.kind, CopyrightType::Copyright);

        let ok: Copyright = serde_json::from_value(json!({"text": "(P) 2021", "type": "P"})).unwrap();
        assert_eq!(ok.kind, CopyrightType::Performance);

        assert!(serde_json::from_value::<Copyright>(json!({"text": "x", "type": "X"})).is_err());
        assert!(serde_json::from_value::<Copyright>(json!({"text": "x", "type": "c"})).is_err());
    }

    #[test]
    fn test_restriction_reason_rejects_unknown_value() {
        for reason in ["market", "product", "explicit"] {
            let restriction: Restriction =
                serde_json::from_value(json!({ "reason": reason })).unwrap();
            assert_eq!(serde_json::to_value(&restriction).unwrap()["reason"], reason);
        }

        assert!(serde_json::from_value::<Restriction>(json!({"reason": "payment_required"})).is_err());
        assert!(serde_json::from_value::<Restriction>(json!({"reason": "Market"})).is_err());
    }

    #[test]
    fn test_image_dimensions_null_or_missing() {
        let image: Image = serde_json::from_value(json!({
            "height": null,
            "url": "https://i.scdn.co/image/ab67616d0000b273",
        }))
        .unwrap();
        assert_eq!(image.height, None);
        assert_eq!(image.width, None);

        let encoded = serde_json::to_value(&image).unwrap();
        assert_eq!(encoded["width"], serde_json::Value::Null);
    }

    #[test]
    fn test_external_id_only_emits_known_keys() {
        let ids: ExternalId = serde_json::from_value(json!({"isrc": "USUM71703861"})).unwrap();
        assert_eq!(ids.isrc.as_deref(), Some("USUM71703861"));
        assert_eq!(serde_json::to_value(&ids).unwrap(), json!({"isrc": "USUM71703861"}));
    }

    #[test]
    fn test_object_tag_rejects_other_families() {
        assert!(serde_json::from_value::<AudiobookType>(json!("audiobook")).is_ok());
        assert!(serde_json::from_value::<AudiobookType>(json!("episode")).is_err());
        assert_eq!(SpotifyType::from(ChapterType::Episode), SpotifyType::Episode);
    }

    #[test]
    fn test_search_content_with_only_tracks() {
        let content: SearchContent = serde_json::from_value(json!({
            "tracks": {
                "href": "https://api.spotify.com/v1/search?query=abba&type=track&offset=0&limit=20",
                "items": [],
                "limit": 20,
                "next": null,
                "offset": 0,
                "previous": null,
                "total": 0
            }
        }))
        .unwrap();

        assert!(content.tracks.is_some());
        assert!(content.episodes.is_none());
        assert!(content.shows.is_none());
        assert!(content.artists.is_none());
        assert!(content.albums.is_none());
        assert!(content.playlists.is_none());
        assert!(content.audiobooks.is_none());
        assert_eq!(content.categories(), vec![SearchType::Track]);

        let encoded = serde_json::to_value(&content).unwrap();
        let keys: Vec<&String> = encoded.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["tracks"]);
    }

    #[test]
    fn test_search_type_display() {
        assert_eq!(SearchType::Audiobook.to_string(), "audiobook");
        assert_eq!(
            serde_json::to_value(SearchType::Playlist).unwrap(),
            json!(SearchType::Playlist.as_str())
        );
    }

    #[test]
    fn test_paging_navigation_links() {
        let mut page: Paging<u32> = serde_json::from_value(json!({
            "href": "https://api.spotify.com/v1/me/tracks?offset=20&limit=20",
            "items": [],
            "limit": 20,
            "next": null,
            "offset": 20,
            "previous": "https://api.spotify.com/v1/me/tracks?offset=0&limit=20",
            "total": 20
        }))
        .unwrap();
        assert!(page.has_previous());
        assert!(!page.has_next());

        page.previous = None;
        assert!(!page.has_previous());
    }
}
