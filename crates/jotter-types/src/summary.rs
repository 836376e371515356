use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named topic extracted from an entry, with a one-sentence description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub description: String,
}

impl Theme {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A stored summary of one entry
///
/// Summaries are append-only: a re-summarize adds a new record instead of
/// updating the old one, and "latest" means most recent `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: String,
    pub entry_id: String,
    pub summary_text: String,
    pub themes: Vec<Theme>,
    pub suggested_prompts: Vec<String>,
    pub model: String,
    pub created_at: DateTime<Utc>,
}

/// Summary payload produced by the model, before it is persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySummary {
    pub summary: String,
    pub themes: Vec<Theme>,
    pub suggested_prompts: Vec<String>,
}

/// Write model for appending a summary (store assigns id and created_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSummary {
    pub summary_text: String,
    pub themes: Vec<Theme>,
    pub suggested_prompts: Vec<String>,
    pub model: String,
}

impl NewSummary {
    /// Build a write model from a model-produced summary
    pub fn from_summary(summary: EntrySummary, model: impl Into<String>) -> Self {
        Self {
            summary_text: summary.summary,
            themes: summary.themes,
            suggested_prompts: summary.suggested_prompts,
            model: model.into(),
        }
    }
}
