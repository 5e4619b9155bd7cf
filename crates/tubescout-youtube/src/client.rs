//! YouTube Data API v3 client.
//!
//! Two endpoints are used: `/search` for paginated topic search and
//! `/videos` for batched statistics lookups. Both are plain GETs with the
//! API key passed as a query parameter.

use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use tubescout_models::{RankedVideo, VideoId, VideoRecord};

use crate::config::{SearchConfig, MAX_PAGE_SIZE};
use crate::error::{YoutubeError, YoutubeResult};
use crate::rank::rank_videos;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API client.
///
/// Holds the API key explicitly; nothing here reads the environment after
/// construction.
pub struct YoutubeClient {
    api_key: String,
    base_url: String,
    http: Client,
}

/// Search endpoint response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    /// A page without `items` is a valid empty page, not an error
    #[serde(default)]
    items: Vec<SearchItem>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    id: SearchItemId,
    #[serde(default)]
    snippet: SearchSnippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchSnippet {
    title: Option<String>,
}

impl SearchItem {
    /// Translate one upstream item into a record. Items missing the video id
    /// or title are malformed and yield `None` so the page can skip them.
    fn into_record(self) -> Option<VideoRecord> {
        let video_id = self.id.video_id?;
        let title = self.snippet.title?;
        Some(VideoRecord::new(video_id, title))
    }
}

/// Videos (statistics) endpoint response.
#[derive(Debug, Deserialize)]
struct StatsResponse {
    #[serde(default)]
    items: Vec<StatsItem>,
}

#[derive(Debug, Deserialize)]
struct StatsItem {
    id: Option<String>,
    #[serde(default)]
    statistics: Option<Statistics>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    /// The API encodes view counts as JSON strings
    view_count: Option<String>,
}

impl StatsItem {
    /// Raw view count with the documented default: absent or unparsable
    /// statistics count as zero views.
    fn view_count(&self) -> u64 {
        self.statistics
            .as_ref()
            .and_then(|s| s.view_count.as_deref())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }
}

impl YoutubeClient {
    /// Create a client against the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (used by tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Create a client from `YOUTUBE_API_KEY`.
    ///
    /// Fails with [`YoutubeError::MissingApiKey`] before any request is made,
    /// so a misconfigured process halts at startup instead of issuing
    /// unauthenticated calls.
    pub fn from_env() -> YoutubeResult<Self> {
        let api_key = std::env::var("YOUTUBE_API_KEY").map_err(|_| YoutubeError::MissingApiKey)?;
        let base_url = std::env::var("YOUTUBE_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::with_base_url(api_key, base_url))
    }

    /// Aggregate search results for a topic across pages.
    ///
    /// Issues sequential page requests, carrying the pagination token from
    /// each response into the next, until `target_count` records are
    /// collected or the response supplies no further token. Records come
    /// back in upstream relevance order with view counts unset.
    pub async fn search_topic(
        &self,
        topic: &str,
        target_count: u32,
        config: &SearchConfig,
    ) -> YoutubeResult<Vec<VideoRecord>> {
        if target_count == 0 {
            return Ok(Vec::new());
        }

        let page_size = config.page_size.min(MAX_PAGE_SIZE);
        let mut videos: Vec<VideoRecord> = Vec::new();
        let mut page_token: Option<String> = None;

        while (videos.len() as u32) < target_count {
            let remaining = target_count - videos.len() as u32;
            let max_results = remaining.min(page_size);

            let mut params: Vec<(&str, String)> = vec![
                ("part", "snippet".to_string()),
                ("q", topic.to_string()),
                ("maxResults", max_results.to_string()),
                ("type", "video".to_string()),
                ("regionCode", config.region_code.clone()),
                ("key", self.api_key.clone()),
            ];
            if let Some(token) = &page_token {
                params.push(("pageToken", token.clone()));
            }

            let page: SearchResponse = self.get_json("search", &params).await?;

            debug!(
                items = page.items.len(),
                collected = videos.len(),
                "Search page received"
            );

            for item in page.items {
                match item.into_record() {
                    Some(record) => videos.push(record),
                    None => warn!("Skipping search item with missing id or title"),
                }
            }

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        info!(topic = %topic, count = videos.len(), "Topic search complete");
        Ok(videos)
    }

    /// Fetch raw view counts for a batch of video ids in one call.
    ///
    /// Ids absent from the response are absent from the returned map; the
    /// caller defaults them to zero during merge.
    pub async fn fetch_view_counts(
        &self,
        ids: &[VideoId],
    ) -> YoutubeResult<HashMap<VideoId, u64>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let joined = ids
            .iter()
            .map(VideoId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let params: Vec<(&str, String)> = vec![
            ("part", "statistics".to_string()),
            ("id", joined),
            ("key", self.api_key.clone()),
        ];

        let response: StatsResponse = self.get_json("videos", &params).await?;

        let mut counts = HashMap::with_capacity(response.items.len());
        for item in &response.items {
            let Some(id) = &item.id else {
                warn!("Skipping statistics item with missing id");
                continue;
            };
            counts.insert(VideoId::from(id.as_str()), item.view_count());
        }

        debug!(requested = ids.len(), returned = counts.len(), "View counts fetched");
        Ok(counts)
    }

    /// Run the full research pipeline for a topic: search, batch-fetch view
    /// counts, merge, sort descending by views, truncate to `top_n`.
    pub async fn research(
        &self,
        topic: &str,
        config: &SearchConfig,
    ) -> YoutubeResult<Vec<RankedVideo>> {
        let videos = self.search_topic(topic, config.result_cap, config).await?;

        let ids: Vec<VideoId> = videos.iter().map(|v| v.video_id.clone()).collect();
        let counts = self.fetch_view_counts(&ids).await?;

        Ok(rank_videos(videos, &counts, config.top_n))
    }

    /// GET an endpoint and decode the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> YoutubeResult<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.http.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(YoutubeError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(YoutubeError::Decode)
    }
}
