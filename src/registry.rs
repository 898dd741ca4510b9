use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::conformance::Conformance;
use crate::error::{Result, ShapeError, Violation};
use crate::models::{
    AccessToken, Artist, Audiobook, Chapter, Copyright, ErrorResponse, FollowedArtistsResults,
    Image, Paging, PrivateUser, PublicUser, Restriction, SavedShow, SavedTrack, SearchContent,
    SimplifiedAlbum, SimplifiedAudiobook, SimplifiedChapter, SimplifiedEpisode,
    SimplifiedPlaylist, SimplifiedShow, SpotifyItem, Track,
};

/// Every top-level shape a JSON document can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ShapeKind {
    Image,
    Copyright,
    Restriction,
    ErrorResponse,
    AccessToken,
    PublicUser,
    PrivateUser,
    FollowedArtists,
    SimplifiedAudiobook,
    Audiobook,
    AudiobookPage,
    SimplifiedChapter,
    Chapter,
    ChapterPage,
    Track,
    SavedTrackPage,
    Artist,
    SimplifiedAlbum,
    SimplifiedShow,
    SavedShowPage,
    SimplifiedEpisode,
    SimplifiedPlaylist,
    SearchContent,
    Item,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{:?}", self),
        }
    }
}

/// A document decoded as one of the registered shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Image(Image),
    Copyright(Copyright),
    Restriction(Restriction),
    ErrorResponse(ErrorResponse),
    AccessToken(AccessToken),
    PublicUser(Box<PublicUser>),
    PrivateUser(Box<PrivateUser>),
    FollowedArtists(Box<FollowedArtistsResults>),
    SimplifiedAudiobook(Box<SimplifiedAudiobook>),
    Audiobook(Box<Audiobook>),
    AudiobookPage(Box<Paging<SimplifiedAudiobook>>),
    SimplifiedChapter(Box<SimplifiedChapter>),
    Chapter(Box<Chapter>),
    ChapterPage(Box<Paging<SimplifiedChapter>>),
    Track(Box<Track>),
    SavedTrackPage(Box<Paging<SavedTrack>>),
    Artist(Box<Artist>),
    SimplifiedAlbum(Box<SimplifiedAlbum>),
    SimplifiedShow(Box<SimplifiedShow>),
    SavedShowPage(Box<Paging<SavedShow>>),
    SimplifiedEpisode(Box<SimplifiedEpisode>),
    SimplifiedPlaylist(Box<SimplifiedPlaylist>),
    SearchContent(Box<SearchContent>),
    Item(Box<SpotifyItem>),
}

impl Payload {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Payload::Image(_) => ShapeKind::Image,
            Payload::Copyright(_) => ShapeKind::Copyright,
            Payload::Restriction(_) => ShapeKind::Restriction,
            Payload::ErrorResponse(_) => ShapeKind::ErrorResponse,
            Payload::AccessToken(_) => ShapeKind::AccessToken,
            Payload::PublicUser(_) => ShapeKind::PublicUser,
            Payload::PrivateUser(_) => ShapeKind::PrivateUser,
            Payload::FollowedArtists(_) => ShapeKind::FollowedArtists,
            Payload::SimplifiedAudiobook(_) => ShapeKind::SimplifiedAudiobook,
            Payload::Audiobook(_) => ShapeKind::Audiobook,
            Payload::AudiobookPage(_) => ShapeKind::AudiobookPage,
            Payload::SimplifiedChapter(_) => ShapeKind::SimplifiedChapter,
            Payload::Chapter(_) => ShapeKind::Chapter,
            Payload::ChapterPage(_) => ShapeKind::ChapterPage,
            Payload::Track(_) => ShapeKind::Track,
            Payload::SavedTrackPage(_) => ShapeKind::SavedTrackPage,
            Payload::Artist(_) => ShapeKind::Artist,
            Payload::SimplifiedAlbum(_) => ShapeKind::SimplifiedAlbum,
            Payload::SimplifiedShow(_) => ShapeKind::SimplifiedShow,
            Payload::SavedShowPage(_) => ShapeKind::SavedShowPage,
            Payload::SimplifiedEpisode(_) => ShapeKind::SimplifiedEpisode,
            Payload::SimplifiedPlaylist(_) => ShapeKind::SimplifiedPlaylist,
            Payload::SearchContent(_) => ShapeKind::SearchContent,
            Payload::Item(_) => ShapeKind::Item,
        }
    }

    /// Broken invariants for the shapes that document any.
    pub fn violations(&self) -> Vec<Violation> {
        match self {
            Payload::FollowedArtists(results) => results.violations(),
            Payload::Audiobook(audiobook) => audiobook.violations(),
            Payload::AudiobookPage(page) => page.violations(),
            Payload::ChapterPage(page) => page.violations(),
            Payload::SavedTrackPage(page) => page.violations(),
            Payload::SavedShowPage(page) => page.violations(),
            Payload::SearchContent(content) => content.violations(),
            _ => Vec::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(ShapeError::decode::<T>)
}

/// Decodes `body` as the shape named by `kind`.
pub fn decode(kind: ShapeKind, body: &str) -> Result<Payload> {
    let payload = match kind {
        ShapeKind::Image => Payload::Image(parse(body)?),
        ShapeKind::Copyright => Payload::Copyright(parse(body)?),
        ShapeKind::Restriction => Payload::Restriction(parse(body)?),
        ShapeKind::ErrorResponse => Payload::ErrorResponse(parse(body)?),
        ShapeKind::AccessToken => Payload::AccessToken(parse(body)?),
        ShapeKind::PublicUser => Payload::PublicUser(Box::new(parse(body)?)),
        ShapeKind::PrivateUser => Payload::PrivateUser(Box::new(parse(body)?)),
        ShapeKind::FollowedArtists => Payload::FollowedArtists(Box::new(parse(body)?)),
        ShapeKind::SimplifiedAudiobook => Payload::SimplifiedAudiobook(Box::new(parse(body)?)),
        ShapeKind::Audiobook => Payload::Audiobook(Box::new(parse(body)?)),
        ShapeKind::AudiobookPage => Payload::AudiobookPage(Box::new(parse(body)?)),
        ShapeKind::SimplifiedChapter => Payload::SimplifiedChapter(Box::new(parse(body)?)),
        ShapeKind::Chapter => Payload::Chapter(Box::new(parse(body)?)),
        ShapeKind::ChapterPage => Payload::ChapterPage(Box::new(parse(body)?)),
        ShapeKind::Track => Payload::Track(Box::new(parse(body)?)),
        ShapeKind::SavedTrackPage => Payload::SavedTrackPage(Box::new(parse(body)?)),
        ShapeKind::Artist => Payload::Artist(Box::new(parse(body)?)),
        ShapeKind::SimplifiedAlbum => Payload::SimplifiedAlbum(Box::new(parse(body)?)),
        ShapeKind::SimplifiedShow => Payload::SimplifiedShow(Box::new(parse(body)?)),
        ShapeKind::SavedShowPage => Payload::SavedShowPage(Box::new(parse(body)?)),
        ShapeKind::SimplifiedEpisode => Payload::SimplifiedEpisode(Box::new(parse(body)?)),
        ShapeKind::SimplifiedPlaylist => Payload::SimplifiedPlaylist(Box::new(parse(body)?)),
        ShapeKind::SearchContent => Payload::SearchContent(Box::new(parse(body)?)),
        ShapeKind::Item => Payload::Item(Box::new(parse(body)?)),
    };

    Ok(payload)
}

/// Outcome of checking one sample file.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub path: PathBuf,
    pub kind: ShapeKind,
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Reads `path`, decodes it as `kind` and collects its violations.
pub async fn check_file(kind: ShapeKind, path: impl AsRef<Path>) -> Result<CheckReport> {
    let path = path.as_ref();
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ShapeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Checking {} as {}", path.display(), kind);

    let payload = decode(kind, &body)?;
    let violations = payload.violations();

    for violation in &violations {
        tracing::warn!("{}: {}", path.display(), violation);
    }

    Ok(CheckReport {
        path: path.to_path_buf(),
        kind,
        violations,
    })
}
