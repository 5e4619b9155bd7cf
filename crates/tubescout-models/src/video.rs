//! Video search record models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// YouTube video identifier (the 11-character ID, not a URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub String);

impl VideoId {
    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VideoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VideoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One search result, in upstream relevance order.
///
/// Produced by the search aggregator with `view_count` unset; the ranking
/// step fills it in exactly once from the statistics batch. The raw integer
/// is kept so that sorting never round-trips through the display string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Video ID as returned by the search endpoint
    pub video_id: VideoId,

    /// Video title
    pub title: String,

    /// Raw view count, set during merge; absent until statistics arrive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
}

impl VideoRecord {
    /// Create a record fresh from a search page, before statistics merge.
    pub fn new(video_id: impl Into<VideoId>, title: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            view_count: None,
        }
    }

    /// View count with the merge default applied (missing statistics = 0).
    pub fn views(&self) -> u64 {
        self.view_count.unwrap_or(0)
    }
}

/// Final record handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedVideo {
    /// 1-based display rank
    pub rank: usize,

    /// Video title
    pub title: String,

    /// Magnitude-abbreviated view count ("900", "45K", "2.5M")
    pub views: String,
}
