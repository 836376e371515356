use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiResult, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ThemeCountsQuery {
    pub user_id: String,
    /// Window size; defaults to the configured recent window
    pub last_n: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ThemeCountsResponse {
    pub user_id: String,
    pub last_n: usize,
    pub counts: BTreeMap<String, u64>,
}

/// Theme frequencies over a user's recent entries
///
/// Counts each theme name once per entry, over the latest summaries of the
/// `last_n` most recent entries.
#[utoipa::path(
    get,
    path = "/themes/counts",
    params(
        ("user_id" = String, Query, description = "Owner of the entries"),
        ("last_n" = Option<usize>, Query, description = "Window size (default 10)")
    ),
    responses(
        (status = 200, description = "Theme name to count mapping", body = ThemeCountsResponse),
        (status = 503, description = "Store unreachable")
    ),
    tag = "themes"
)]
pub async fn theme_counts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ThemeCountsQuery>,
) -> ApiResult<Json<ThemeCountsResponse>> {
    let last_n = query.last_n.unwrap_or(state.config.journal.recent_window);

    let counts = state.store.theme_counts(&query.user_id, last_n).await?;

    Ok(Json(ThemeCountsResponse {
        user_id: query.user_id,
        last_n,
        counts,
    }))
}
