use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::summary::Theme;

/// Projection of a shared entry for export
///
/// `summary` and `themes` come from the entry's latest summary and are None
/// for entries that were never summarized. `created_at` serializes as
/// ISO-8601 or null, matching the export contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedEntryRecord {
    pub entry_id: String,
    pub text: String,
    pub prompt_used: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub summary: Option<String>,
    pub themes: Option<Vec<Theme>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsummarized_record_serializes_nulls() {
        let record = SharedEntryRecord {
            entry_id: "e1".to_string(),
            text: "Shared but never summarized.".to_string(),
            prompt_used: None,
            created_at: None,
            summary: None,
            themes: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        // Absent values stay as explicit nulls so every record has the same keys
        assert!(json["created_at"].is_null());
        assert!(json["summary"].is_null());
        assert!(json["themes"].is_null());
        assert_eq!(json["text"], "Shared but never summarized.");
    }

    #[test]
    fn test_summarized_record_serializes_timestamp_and_themes() {
        let record = SharedEntryRecord {
            entry_id: "e1".to_string(),
            text: "A good day.".to_string(),
            prompt_used: Some("How's your day going?".to_string()),
            created_at: Some(Utc::now()),
            summary: Some("A calm recap.".to_string()),
            themes: Some(vec![Theme::new("Gratitude", "Small things going right.")]),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json["created_at"].is_string());
        assert_eq!(json["summary"], "A calm recap.");
        assert_eq!(json["themes"][0]["name"], "Gratitude");
    }
}
