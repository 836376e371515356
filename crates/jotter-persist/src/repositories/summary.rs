use chrono::Utc;
use mongodb::{bson::doc, bson::oid::ObjectId, Client, Collection};

use jotter_types::NewSummary;

use crate::error::Result;
use crate::models::MongoSummary;

#[derive(Clone)]
pub struct MongoSummaryRepository {
    collection: Collection<MongoSummary>,
}

impl MongoSummaryRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("summaries");
        Self { collection }
    }

    /// Append a summary record for an entry
    pub async fn append_summary(
        &self,
        entry_id: ObjectId,
        summary: NewSummary,
    ) -> Result<MongoSummary> {
        let record = MongoSummary {
            id: ObjectId::new(),
            entry_id,
            summary_text: summary.summary_text,
            themes: summary.themes,
            suggested_prompts: summary.suggested_prompts,
            model: summary.model,
            created_at: Utc::now(),
        };

        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    /// Latest summary for one entry, by creation time
    pub async fn latest_for_entry(&self, entry_id: ObjectId) -> Result<Option<MongoSummary>> {
        let filter = doc! { "entry_id": entry_id };
        let latest = self
            .collection
            .find_one(filter)
            .sort(doc! { "created_at": -1, "_id": -1 })
            .await?;
        Ok(latest)
    }
}
