use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{bson::doc, bson::oid::ObjectId, Client, Collection};

use crate::error::Result;
use crate::models::MongoEntry;

#[derive(Clone)]
pub struct MongoEntryRepository {
    collection: Collection<MongoEntry>,
}

impl MongoEntryRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("entries");
        Self { collection }
    }

    /// Insert a new entry; the id and creation timestamp are assigned here
    pub async fn create_entry(
        &self,
        user_id: String,
        text: String,
        prompt_used: Option<String>,
    ) -> Result<MongoEntry> {
        let entry = MongoEntry {
            id: ObjectId::new(),
            user_id,
            text,
            prompt_used,
            created_at: Utc::now(),
            is_shared: false,
        };

        self.collection.insert_one(&entry).await?;
        Ok(entry)
    }

    /// Get one entry scoped to its owner
    pub async fn get_entry(&self, user_id: &str, entry_id: ObjectId) -> Result<Option<MongoEntry>> {
        let filter = doc! { "_id": entry_id, "user_id": user_id };
        Ok(self.collection.find_one(filter).await?)
    }

    /// All entries for a user, newest first
    pub async fn list_entries(&self, user_id: &str) -> Result<Vec<MongoEntry>> {
        let filter = doc! { "user_id": user_id };
        let entries = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1, "_id": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(entries)
    }

    /// The most recent entries, newest first (aggregation window)
    pub async fn recent_entries(&self, user_id: &str, last_n: usize) -> Result<Vec<MongoEntry>> {
        let filter = doc! { "user_id": user_id };
        let entries = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1, "_id": -1 })
            .limit(last_n.try_into().unwrap_or(i64::MAX))
            .await?
            .try_collect()
            .await?;
        Ok(entries)
    }

    /// Shared entries only, oldest first (export order)
    pub async fn shared_entries(&self, user_id: &str) -> Result<Vec<MongoEntry>> {
        let filter = doc! { "user_id": user_id, "is_shared": true };
        let entries = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": 1, "_id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(entries)
    }

    /// Flip the shared flag; Ok(false) when no entry matched
    pub async fn set_shared(
        &self,
        user_id: &str,
        entry_id: ObjectId,
        is_shared: bool,
    ) -> Result<bool> {
        let filter = doc! { "_id": entry_id, "user_id": user_id };
        let update = doc! { "$set": { "is_shared": is_shared } };
        let result = self.collection.update_one(filter, update).await?;
        Ok(result.matched_count > 0)
    }
}
