use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use jotter_session::{follow_up_prompt, hot_theme};
use jotter_types::{Entry, EntryWithSummary, NewSummary, SummaryRecord, Theme};

use crate::{
    error::{ApiError, ApiResult},
    routes::session::{resolve_session, SessionState},
    state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEntryRequest {
    pub user_id: String,
    pub text: String,
    /// Session state; its current prompt is recorded as the prompt that
    /// elicited this entry
    #[serde(default)]
    pub session: Option<SessionState>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EntryResponse {
    pub entry_id: String,
    pub user_id: String,
    pub text: String,
    pub prompt_used: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub is_shared: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_summary: Option<SummaryResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    pub summary_id: String,
    pub summary_text: String,
    pub themes: Vec<ThemeResponse>,
    pub suggested_prompts: Vec<String>,
    pub model: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ThemeResponse {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEntryResponse {
    pub entry: EntryResponse,
    /// Session after the save (counter cleared, prompt back to the first one)
    pub session: SessionState,
}

#[derive(Debug, Deserialize)]
pub struct ListEntriesQuery {
    pub user_id: String,
    /// Optional theme filter, matched against each entry's latest summary
    pub theme: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListEntriesResponse {
    pub entries: Vec<EntryResponse>,
}

#[derive(Debug, Deserialize)]
pub struct EntryOwnerQuery {
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummarizeRequest {
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NudgeResponse {
    /// Theme that has been recurring
    pub theme: String,
    /// How many recent entries carried it
    pub count: u64,
    /// Tailored prompt offered to the user
    pub follow_up_prompt: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummarizeResponse {
    pub summary: SummaryResponse,
    /// Theme counts over the recent window, recomputed after this summary
    pub counts: BTreeMap<String, u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nudge: Option<NudgeResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShareRequest {
    pub user_id: String,
    pub is_shared: bool,
}

/// Save a journal entry
///
/// Empty or whitespace-only text is rejected before any store call. On
/// success the session comes back reset to its initial state.
#[utoipa::path(
    post,
    path = "/entries",
    request_body = CreateEntryRequest,
    responses(
        (status = 201, description = "Entry saved", body = CreateEntryResponse),
        (status = 422, description = "Empty entry text"),
        (status = 503, description = "Store unreachable")
    ),
    tag = "entries"
)]
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateEntryRequest>,
) -> ApiResult<(StatusCode, Json<CreateEntryResponse>)> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err(ApiError::EmptyEntry);
    }

    let mut session = resolve_session(req.session);
    let prompt_used = Some(session.current_prompt.clone());

    let entry = state
        .store
        .create_entry(&req.user_id, text, prompt_used)
        .await?;

    session.reset_after_save();

    Ok((
        StatusCode::CREATED,
        Json(CreateEntryResponse {
            entry: entry_to_response(entry, None),
            session: session.into(),
        }),
    ))
}

/// List a user's entries, newest first
///
/// With `theme`, only entries whose latest summary mentions that theme
/// (case-insensitive) are returned; unsummarized entries are excluded.
#[utoipa::path(
    get,
    path = "/entries",
    params(
        ("user_id" = String, Query, description = "Owner of the entries"),
        ("theme" = Option<String>, Query, description = "Theme name to filter by")
    ),
    responses(
        (status = 200, description = "Entries with their latest summaries", body = ListEntriesResponse),
        (status = 503, description = "Store unreachable")
    ),
    tag = "entries"
)]
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListEntriesQuery>,
) -> ApiResult<Json<ListEntriesResponse>> {
    let theme_filter = query
        .theme
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let entries = state
        .store
        .list_entries(&query.user_id, theme_filter)
        .await?;

    Ok(Json(ListEntriesResponse {
        entries: entries.into_iter().map(entry_with_summary_to_response).collect(),
    }))
}

/// Get one entry with its latest summary
#[utoipa::path(
    get,
    path = "/entries/{entry_id}",
    params(
        ("entry_id" = String, Path, description = "Entry ID"),
        ("user_id" = String, Query, description = "Owner of the entry")
    ),
    responses(
        (status = 200, description = "The entry", body = EntryResponse),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<String>,
    Query(query): Query<EntryOwnerQuery>,
) -> ApiResult<Json<EntryResponse>> {
    let entry = state.store.get_entry(&query.user_id, &entry_id).await?;

    Ok(Json(entry_with_summary_to_response(entry)))
}

/// Summarize an entry
///
/// Runs the generative summary (one retry on malformed output), appends the
/// result to the entry, then recomputes theme counts over the recent window.
/// When a theme recurs often enough, the response carries a nudge offering a
/// tailored follow-up prompt; accepting it is `POST /session/nudge`.
#[utoipa::path(
    post,
    path = "/entries/{entry_id}/summarize",
    params(
        ("entry_id" = String, Path, description = "Entry ID")
    ),
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Stored summary plus theme counts", body = SummarizeResponse),
        (status = 404, description = "Entry not found"),
        (status = 502, description = "Model output unusable after retry"),
        (status = 503, description = "Store unreachable")
    ),
    tag = "entries"
)]
pub async fn summarize_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<String>,
    Json(req): Json<SummarizeRequest>,
) -> ApiResult<Json<SummarizeResponse>> {
    let entry = state.store.get_entry(&req.user_id, &entry_id).await?;

    let summary = state.summarizer.summarize(&entry.entry.text).await?;

    let record = state
        .store
        .append_summary(
            &req.user_id,
            &entry_id,
            NewSummary::from_summary(summary, state.summarizer.model()),
        )
        .await?;

    let counts = state
        .store
        .theme_counts(&req.user_id, state.config.journal.recent_window)
        .await?;

    let nudge = hot_theme(&counts, state.config.journal.nudge_threshold).map(|hot| NudgeResponse {
        follow_up_prompt: follow_up_prompt(&hot.name),
        theme: hot.name,
        count: hot.count,
    });

    Ok(Json(SummarizeResponse {
        summary: summary_to_response(record),
        counts,
        nudge,
    }))
}

/// Set or clear the shared flag on an entry
#[utoipa::path(
    put,
    path = "/entries/{entry_id}/share",
    params(
        ("entry_id" = String, Path, description = "Entry ID")
    ),
    request_body = ShareRequest,
    responses(
        (status = 200, description = "Updated entry", body = EntryResponse),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn share_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<String>,
    Json(req): Json<ShareRequest>,
) -> ApiResult<Json<EntryResponse>> {
    let entry = state
        .store
        .set_shared(&req.user_id, &entry_id, req.is_shared)
        .await?;

    Ok(Json(entry_with_summary_to_response(entry)))
}

// ============================================================================
// DOMAIN -> RESPONSE CONVERSIONS
// ============================================================================

pub fn entry_to_response(entry: Entry, latest_summary: Option<SummaryRecord>) -> EntryResponse {
    EntryResponse {
        entry_id: entry.id,
        user_id: entry.user_id,
        text: entry.text,
        prompt_used: entry.prompt_used,
        created_at: entry.created_at,
        is_shared: entry.is_shared,
        latest_summary: latest_summary.map(summary_to_response),
    }
}

pub fn entry_with_summary_to_response(entry: EntryWithSummary) -> EntryResponse {
    entry_to_response(entry.entry, entry.latest_summary)
}

pub fn summary_to_response(summary: SummaryRecord) -> SummaryResponse {
    SummaryResponse {
        summary_id: summary.id,
        summary_text: summary.summary_text,
        themes: summary.themes.into_iter().map(theme_to_response).collect(),
        suggested_prompts: summary.suggested_prompts,
        model: summary.model,
        created_at: summary.created_at,
    }
}

pub fn theme_to_response(theme: Theme) -> ThemeResponse {
    ThemeResponse {
        name: theme.name,
        description: theme.description,
    }
}
