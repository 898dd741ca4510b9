pub mod album;
pub mod artist;
pub mod audiobook;
pub mod episode;
pub mod global;
pub mod item;
pub mod playlist;
pub mod show;
pub mod track;
pub mod user;

pub use album::{AlbumType, SimplifiedAlbum};
pub use artist::{Artist, SimplifiedArtist};
pub use audiobook::{Audiobook, Chapter, SimplifiedAudiobook, SimplifiedChapter, Username};
pub use episode::{ResumePoint, SimplifiedEpisode};
pub use global::{
    AlbumObjectType, ArtistType, AudiobookType, ChapterType, Copyright, CopyrightType, Cursor,
    CursorPaging, EpisodeType, ErrorResponse, ExternalId, ExternalUrl, Image, Paging,
    PlaylistType, ReleaseDatePrecision, Restriction, RestrictionReason, SearchContent, SearchType,
    ShowType, SpotifyType, TrackType,
};
pub use item::SpotifyItem;
pub use playlist::{PlaylistTracksRef, SimplifiedPlaylist};
pub use show::{SavedShow, SimplifiedShow};
pub use track::{SavedTrack, Track};
pub use user::{
    AccessToken, AccessTokenType, ExplicitContentSettings, FollowedArtistCursorPaging,
    FollowedArtistsResults, Followers, PrivateUser, PublicUser, UserProductType, UserType,
};
