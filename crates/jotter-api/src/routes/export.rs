use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use jotter_types::SharedEntryRecord;

use crate::{
    error::ApiResult,
    routes::entries::{theme_to_response, ThemeResponse},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExportResponse {
    pub user_id: String,
    pub shared: Vec<SharedEntryResponse>,
}

/// One exported entry; summary fields are null when the entry was never
/// summarized
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SharedEntryResponse {
    pub entry_id: String,
    pub text: String,
    pub prompt_used: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub summary: Option<String>,
    pub themes: Option<Vec<ThemeResponse>>,
}

/// Export a user's shared entries
///
/// Only entries flagged shared appear, oldest first, each with its latest
/// summary's text and themes when one exists.
#[utoipa::path(
    get,
    path = "/export",
    params(
        ("user_id" = String, Query, description = "Owner of the entries")
    ),
    responses(
        (status = 200, description = "Shared entries in export form", body = ExportResponse),
        (status = 503, description = "Store unreachable")
    ),
    tag = "export"
)]
pub async fn export_shared(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
) -> ApiResult<Json<ExportResponse>> {
    let shared = state.store.export_shared(&query.user_id).await?;

    Ok(Json(ExportResponse {
        user_id: query.user_id,
        shared: shared.into_iter().map(shared_record_to_response).collect(),
    }))
}

fn shared_record_to_response(record: SharedEntryRecord) -> SharedEntryResponse {
    SharedEntryResponse {
        entry_id: record.entry_id,
        text: record.text,
        prompt_used: record.prompt_used,
        created_at: record.created_at,
        summary: record.summary,
        themes: record
            .themes
            .map(|themes| themes.into_iter().map(theme_to_response).collect()),
    }
}
