//! YouTube Data API v3 client for TubeScout.
//!
//! This crate provides:
//! - Paginated topic search aggregation (`search_topic`)
//! - Batched view count lookups (`fetch_view_counts`)
//! - The research orchestration: merge, sort, truncate (`research`)

pub mod client;
pub mod config;
pub mod error;
pub mod rank;

pub use client::YoutubeClient;
pub use config::SearchConfig;
pub use error::{YoutubeError, YoutubeResult};
pub use rank::rank_videos;
