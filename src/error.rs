use std::path::PathBuf;

use crate::models::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("Failed to decode {shape}: {source}")]
    Decode {
        shape: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("API returned status {}: {}", .0.status, .0.message)]
    Api(ErrorResponse),

    #[error("Invariant violated: {0}")]
    Invariant(Violation),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ShapeError {
    pub(crate) fn decode<T>(source: serde_json::Error) -> Self {
        ShapeError::Decode {
            shape: short_type_name::<T>(),
            source,
        }
    }
}

/// A documented structural invariant that a decoded value breaks.
///
/// `context` names where the offending value sits, e.g. `search.tracks`
/// or `audiobook.chapters`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("{context}: page holds {items} items but its limit is {limit}")]
    ItemsExceedLimit {
        context: String,
        items: usize,
        limit: u32,
    },

    #[error("{context}: offset {offset} plus {items} items exceeds total {total}")]
    ItemsExceedTotal {
        context: String,
        offset: u32,
        items: usize,
        total: u32,
    },

    #[error("{context}: page has items but neither an after nor a before cursor")]
    MissingCursors { context: String },

    #[error("{context}: audiobook reports {total_chapters} chapters but its chapter page totals {paged}")]
    ChapterCountMismatch {
        context: String,
        total_chapters: u32,
        paged: u32,
    },
}

impl Violation {
    pub fn context(&self) -> &str {
        match self {
            Violation::ItemsExceedLimit { context, .. }
            | Violation::ItemsExceedTotal { context, .. }
            | Violation::MissingCursors { context }
            | Violation::ChapterCountMismatch { context, .. } => context,
        }
    }
}

// `type_name` yields full paths; strip the module prefix from every
// segment, e.g. `Paging<SimplifiedChapter>`.
fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            out.push_str(segment.rsplit("::").next().unwrap_or_default());
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(segment.rsplit("::").next().unwrap_or_default());
    out
}

pub type Result<T> = std::result::Result<T, ShapeError>;
