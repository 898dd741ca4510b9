use serde::{Deserialize, Serialize};

use super::album::SimplifiedAlbum;
use super::artist::{Artist, SimplifiedArtist};
use super::audiobook::{Audiobook, Chapter, SimplifiedAudiobook, SimplifiedChapter};
use super::episode::SimplifiedEpisode;
use super::global::SpotifyType;
use super::playlist::SimplifiedPlaylist;
use super::show::SimplifiedShow;
use super::track::Track;
use super::user::PublicUser;

/// Any single object the API returns, decoded by its `type` tag.
///
/// Chapters and episodes share the `"episode"` tag; a payload carrying
/// `chapter_number` decodes as a chapter. Full shapes are tried before
/// their simplified forms so their extra fields survive a re-encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpotifyItem {
    Track(Box<Track>),
    Album(Box<SimplifiedAlbum>),
    Artist(Box<Artist>),
    SimplifiedArtist(Box<SimplifiedArtist>),
    Chapter(Box<Chapter>),
    SimplifiedChapter(Box<SimplifiedChapter>),
    Episode(Box<SimplifiedEpisode>),
    Show(Box<SimplifiedShow>),
    Audiobook(Box<Audiobook>),
    SimplifiedAudiobook(Box<SimplifiedAudiobook>),
    Playlist(Box<SimplifiedPlaylist>),
    User(Box<PublicUser>),
}

impl SpotifyItem {
    pub fn spotify_type(&self) -> SpotifyType {
        match self {
            SpotifyItem::Track(track) => track.kind.into(),
            SpotifyItem::Album(album) => album.kind.into(),
            SpotifyItem::Artist(artist) => artist.simplified.kind.into(),
            SpotifyItem::SimplifiedArtist(artist) => artist.kind.into(),
            SpotifyItem::Chapter(chapter) => chapter.simplified.kind.into(),
            SpotifyItem::SimplifiedChapter(chapter) => chapter.kind.into(),
            SpotifyItem::Episode(episode) => episode.kind.into(),
            SpotifyItem::Show(show) => show.kind.into(),
            SpotifyItem::Audiobook(audiobook) => audiobook.simplified.kind.into(),
            SpotifyItem::SimplifiedAudiobook(audiobook) => audiobook.kind.into(),
            SpotifyItem::Playlist(playlist) => playlist.kind.into(),
            SpotifyItem::User(user) => user.kind.into(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            SpotifyItem::Track(track) => &track.id,
            SpotifyItem::Album(album) => &album.id,
            SpotifyItem::Artist(artist) => &artist.simplified.id,
            SpotifyItem::SimplifiedArtist(artist) => &artist.id,
            SpotifyItem::Chapter(chapter) => &chapter.simplified.id,
            SpotifyItem::SimplifiedChapter(chapter) => &chapter.id,
            SpotifyItem::Episode(episode) => &episode.id,
            SpotifyItem::Show(show) => &show.id,
            SpotifyItem::Audiobook(audiobook) => &audiobook.simplified.id,
            SpotifyItem::SimplifiedAudiobook(audiobook) => &audiobook.id,
            SpotifyItem::Playlist(playlist) => &playlist.id,
            SpotifyItem::User(user) => &user.id,
        }
    }

    pub fn uri(&self) -> &str {
        match self {
            SpotifyItem::Track(track) => &track.uri,
            SpotifyItem::Album(album) => &album.uri,
            SpotifyItem::Artist(artist) => &artist.simplified.uri,
            SpotifyItem::SimplifiedArtist(artist) => &artist.uri,
            SpotifyItem::Chapter(chapter) => &chapter.simplified.uri,
            SpotifyItem::SimplifiedChapter(chapter) => &chapter.uri,
            SpotifyItem::Episode(episode) => &episode.uri,
            SpotifyItem::Show(show) => &show.uri,
            SpotifyItem::Audiobook(audiobook) => &audiobook.simplified.uri,
            SpotifyItem::SimplifiedAudiobook(audiobook) => &audiobook.uri,
            SpotifyItem::Playlist(playlist) => &playlist.uri,
            SpotifyItem::User(user) => &user.uri,
        }
    }
}
