//! Merge, sort and truncate search results into the display ranking.

use std::collections::HashMap;

use tubescout_models::{format_view_count, RankedVideo, VideoId, VideoRecord};

/// Merge view counts onto search records and produce the top-N ranking.
///
/// Records whose id is missing from `counts` are kept with zero views.
/// Sorting is on the raw integer count, descending and stable, so ties keep
/// their upstream relevance order; formatting happens only after the cut.
pub fn rank_videos(
    mut videos: Vec<VideoRecord>,
    counts: &HashMap<VideoId, u64>,
    top_n: usize,
) -> Vec<RankedVideo> {
    for video in &mut videos {
        video.view_count = Some(counts.get(&video.video_id).copied().unwrap_or(0));
    }

    videos.sort_by_key(|v| std::cmp::Reverse(v.views()));

    videos
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(i, v)| RankedVideo {
            rank: i + 1,
            views: format_view_count(v.views()),
            title: v.title,
        })
        .collect()
}
