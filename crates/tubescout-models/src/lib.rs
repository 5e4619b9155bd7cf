//! Shared data models for TubeScout.
//!
//! This crate provides Serde-serializable types for:
//! - Video identifiers and search records
//! - Ranked results handed to the presentation layer
//! - View count formatting ("45K", "2.5M")

pub mod video;
pub mod views;

// Re-export common types
pub use video::{RankedVideo, VideoId, VideoRecord};
pub use views::format_view_count;
