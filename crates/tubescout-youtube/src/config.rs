//! Search configuration.

/// Per-call cap imposed by the search endpoint itself.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Research run configuration.
///
/// These were fixed constants in the original tool; they are surfaced here
/// with the same values as defaults.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Total candidate videos to aggregate across search pages
    pub result_cap: u32,
    /// Results requested per search page (capped at 50 by the endpoint)
    pub page_size: u32,
    /// Region filter passed to the search endpoint
    pub region_code: String,
    /// Number of ranked videos kept for display
    pub top_n: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_cap: 50,
            page_size: MAX_PAGE_SIZE,
            region_code: "IN".to_string(),
            top_n: 5,
        }
    }
}

impl SearchConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            result_cap: std::env::var("SEARCH_RESULT_CAP")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(50),
            page_size: std::env::var("SEARCH_PAGE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(|n: u32| n.min(MAX_PAGE_SIZE))
                .unwrap_or(MAX_PAGE_SIZE),
            region_code: std::env::var("SEARCH_REGION_CODE").unwrap_or_else(|_| "IN".to_string()),
            top_n: std::env::var("SEARCH_TOP_N")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }
}
