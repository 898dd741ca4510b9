use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::episode::ResumePoint;
use crate::conformance::chapter_count_mismatch;
use super::global::{
    AudiobookType, ChapterType, Copyright, ExternalUrl, Image, Paging, ReleaseDatePrecision,
    Restriction,
};

/// Minimal author or narrator reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Username {
    pub name: String,
}

/// Audiobook as returned in list and browse contexts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedAudiobook {
    pub authors: Vec<Username>,
    pub available_markets: Vec<String>,
    pub copyrights: Vec<Copyright>,
    pub description: String,
    pub html_description: String,
    pub edition: String,
    pub explicit: bool,
    pub external_urls: ExternalUrl,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub languages: Vec<String>,
    pub media_type: String,
    pub name: String,
    pub narrators: Vec<Username>,
    pub publisher: String,
    #[serde(rename = "type")]
    pub kind: AudiobookType,
    pub uri: String,
    pub total_chapters: u32,
}

/// Full audiobook: the simplified fields plus the first page of chapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_chapter_count"))]
pub struct Audiobook {
    #[serde(flatten)]
    pub simplified: SimplifiedAudiobook,
    #[validate(nested)]
    pub chapters: Paging<SimplifiedChapter>,
}

// `total_chapters` counts the whole book, so it must agree with the page total.
fn validate_chapter_count(audiobook: &Audiobook) -> Result<(), ValidationError> {
    let total_chapters = audiobook.simplified.total_chapters;
    if total_chapters == audiobook.chapters.total {
        Ok(())
    } else {
        Err(chapter_count_mismatch(total_chapters, audiobook.chapters.total))
    }
}

impl Audiobook {
    pub fn from_parts(simplified: SimplifiedAudiobook, chapters: Paging<SimplifiedChapter>) -> Self {
        Self {
            simplified,
            chapters,
        }
    }
}

impl From<Audiobook> for SimplifiedAudiobook {
    fn from(audiobook: Audiobook) -> Self {
        audiobook.simplified
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedChapter {
    pub audio_preview_url: Option<String>,
    pub available_markets: Vec<String>,
    pub chapter_number: u32,
    pub description: String,
    pub html_description: String,
    pub duration_ms: u64,
    pub explicit: bool,
    pub external_urls: ExternalUrl,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub is_playable: bool,
    pub languages: Vec<String>,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    /// Present only when a content restriction applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Restriction>,
    /// Present only for user tokens with the `user-read-playback-position` scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_point: Option<ResumePoint>,
    #[serde(rename = "type")]
    pub kind: ChapterType,
    pub uri: String,
}

/// Full chapter: the simplified fields plus its parent audiobook.
///
/// The parent is embedded in simplified form only, an [`Audiobook`] never
/// carries full chapters back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(flatten)]
    pub simplified: SimplifiedChapter,
    pub audiobook: SimplifiedAudiobook,
}

impl Chapter {
    pub fn from_parts(simplified: SimplifiedChapter, audiobook: SimplifiedAudiobook) -> Self {
        Self {
            simplified,
            audiobook,
        }
    }

    pub fn into_parts(self) -> (SimplifiedChapter, SimplifiedAudiobook) {
        (self.simplified, self.audiobook)
    }
}

impl From<Chapter> for SimplifiedChapter {
    fn from(chapter: Chapter) -> Self {
        chapter.simplified
    }
}
