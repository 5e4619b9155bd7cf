//! Topic research handlers.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use tubescout_models::RankedVideo;

use crate::error::{ApiError, ApiResult};
use crate::render;
use crate::state::AppState;

/// Query parameters for the research routes.
#[derive(Debug, Deserialize)]
pub struct ResearchQuery {
    pub topic: Option<String>,
}

/// JSON payload for `/api/research`.
#[derive(Debug, Serialize)]
pub struct ResearchResponse {
    pub topic: String,
    pub results: Vec<RankedVideo>,
}

fn require_topic(query: &ResearchQuery) -> ApiResult<&str> {
    match query.topic.as_deref().map(str::trim) {
        Some(topic) if !topic.is_empty() => Ok(topic),
        _ => Err(ApiError::bad_request("missing 'topic' query parameter")),
    }
}

/// Landing page with the search form.
pub async fn index() -> Html<String> {
    Html(render::index_page())
}

/// HTML results page.
pub async fn research_page(
    State(state): State<AppState>,
    Query(query): Query<ResearchQuery>,
) -> ApiResult<Html<String>> {
    let topic = require_topic(&query)?;

    info!(topic = %topic, "Research request");
    let results = state.youtube.research(topic, &state.search).await?;

    Ok(Html(render::results_page(topic, &results)))
}

/// JSON results for programmatic use.
pub async fn research_api(
    State(state): State<AppState>,
    Query(query): Query<ResearchQuery>,
) -> ApiResult<Json<ResearchResponse>> {
    let topic = require_topic(&query)?;

    let results = state.youtube.research(topic, &state.search).await?;

    Ok(Json(ResearchResponse {
        topic: topic.to_string(),
        results,
    }))
}
