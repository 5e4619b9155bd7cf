//! YouTube client error types.

use thiserror::Error;

pub type YoutubeResult<T> = Result<T, YoutubeError>;

#[derive(Debug, Error)]
pub enum YoutubeError {
    /// Credential missing at startup. Fatal; no request may be made.
    #[error("YOUTUBE_API_KEY is not set")]
    MissingApiKey,

    /// Network-level failure reaching the API.
    #[error("YouTube API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the API.
    #[error("YouTube API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body was not the expected JSON shape.
    #[error("Failed to decode YouTube API response: {0}")]
    Decode(#[source] reqwest::Error),
}
