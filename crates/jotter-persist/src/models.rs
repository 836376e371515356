use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use jotter_types::{Entry, SummaryRecord, Theme};

/// MongoDB-specific entry document (uses ObjectId)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoEntry {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: String,
    pub text: String,
    pub prompt_used: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_shared: bool,
}

/// MongoDB-specific summary document (uses ObjectId)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoSummary {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub entry_id: ObjectId,
    pub summary_text: String,
    pub themes: Vec<Theme>,
    pub suggested_prompts: Vec<String>,
    pub model: String,
    pub created_at: DateTime<Utc>,
}

// Conversions into the database-agnostic models

impl From<MongoEntry> for Entry {
    fn from(entry: MongoEntry) -> Self {
        Self {
            id: entry.id.to_hex(),
            user_id: entry.user_id,
            text: entry.text,
            prompt_used: entry.prompt_used,
            created_at: entry.created_at,
            is_shared: entry.is_shared,
        }
    }
}

impl From<MongoSummary> for SummaryRecord {
    fn from(summary: MongoSummary) -> Self {
        Self {
            id: summary.id.to_hex(),
            entry_id: summary.entry_id.to_hex(),
            summary_text: summary.summary_text,
            themes: summary.themes,
            suggested_prompts: summary.suggested_prompts,
            model: summary.model,
            created_at: summary.created_at,
        }
    }
}
