use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use jotter_session::SessionContext;

use crate::error::ApiResult;

/// Per-session UI state carried in request and response bodies
///
/// There is no server-side session storage: clients hold this between calls
/// and send it back with the next action. Omitting it means "fresh session".
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionState {
    pub current_prompt: String,
    pub refresh_count: u32,
}

impl From<SessionState> for SessionContext {
    fn from(state: SessionState) -> Self {
        Self {
            current_prompt: state.current_prompt,
            refresh_count: state.refresh_count,
        }
    }
}

impl From<SessionContext> for SessionState {
    fn from(context: SessionContext) -> Self {
        Self {
            current_prompt: context.current_prompt,
            refresh_count: context.refresh_count,
        }
    }
}

/// Resolve the incoming session, falling back to a fresh one
pub fn resolve_session(session: Option<SessionState>) -> SessionContext {
    session.map(Into::into).unwrap_or_default()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RotatePromptRequest {
    #[serde(default)]
    pub session: Option<SessionState>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AcceptNudgeRequest {
    #[serde(default)]
    pub session: Option<SessionState>,
    /// Theme name from the nudge being accepted
    pub theme: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub session: SessionState,
}

/// Rotate to a new writing prompt
///
/// The first refresh picks a different prompt at random; the second and any
/// later refresh lands on the fixed fallback prompt until an entry is saved.
#[utoipa::path(
    post,
    path = "/session/prompt",
    request_body = RotatePromptRequest,
    responses(
        (status = 200, description = "Rotated session state", body = SessionResponse)
    ),
    tag = "session"
)]
pub async fn rotate_prompt(
    Json(req): Json<RotatePromptRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let mut context = resolve_session(req.session);
    context.rotate_prompt(&mut rand::thread_rng());

    Ok(Json(SessionResponse {
        session: context.into(),
    }))
}

/// Accept a theme nudge
///
/// Loads the tailored follow-up prompt for the theme into the session and
/// clears the refresh counter. Dismissing a nudge needs no call at all.
#[utoipa::path(
    post,
    path = "/session/nudge",
    request_body = AcceptNudgeRequest,
    responses(
        (status = 200, description = "Session with the follow-up prompt loaded", body = SessionResponse)
    ),
    tag = "session"
)]
pub async fn accept_nudge(
    Json(req): Json<AcceptNudgeRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let mut context = resolve_session(req.session);
    context.accept_nudge(&req.theme);

    Ok(Json(SessionResponse {
        session: context.into(),
    }))
}
