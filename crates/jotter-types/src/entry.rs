use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::summary::SummaryRecord;

/// Database-agnostic journal entry
///
/// `id` and `created_at` are assigned by the store; `is_shared` is the only
/// field that may change after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub prompt_used: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_shared: bool,
}

/// An entry joined with its latest summary (most recent `created_at` wins)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryWithSummary {
    pub entry: Entry,
    pub latest_summary: Option<SummaryRecord>,
}
