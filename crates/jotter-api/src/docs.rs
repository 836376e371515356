use utoipa::OpenApi;

use crate::routes;

/// OpenAPI description served at /api/docs
#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::health_check,
        routes::entries::create_entry,
        routes::entries::list_entries,
        routes::entries::get_entry,
        routes::entries::summarize_entry,
        routes::entries::share_entry,
        routes::export::export_shared,
        routes::themes::theme_counts,
        routes::session::rotate_prompt,
        routes::session::accept_nudge,
    ),
    components(schemas(
        routes::health::HealthResponse,
        routes::entries::CreateEntryRequest,
        routes::entries::CreateEntryResponse,
        routes::entries::EntryResponse,
        routes::entries::ListEntriesResponse,
        routes::entries::SummaryResponse,
        routes::entries::ThemeResponse,
        routes::entries::SummarizeRequest,
        routes::entries::SummarizeResponse,
        routes::entries::NudgeResponse,
        routes::entries::ShareRequest,
        routes::export::ExportResponse,
        routes::export::SharedEntryResponse,
        routes::themes::ThemeCountsResponse,
        routes::session::SessionState,
        routes::session::RotatePromptRequest,
        routes::session::AcceptNudgeRequest,
        routes::session::SessionResponse,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "entries", description = "Journal entries and their summaries"),
        (name = "session", description = "Prompt rotation and nudges"),
        (name = "export", description = "Shared-entry export"),
        (name = "themes", description = "Theme aggregation")
    )
)]
pub struct ApiDoc;
