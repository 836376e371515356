use std::collections::BTreeMap;

use async_trait::async_trait;
use mongodb::{bson::oid::ObjectId, Client};

use jotter_types::themes;
use jotter_types::{Entry, EntryWithSummary, NewSummary, SharedEntryRecord, SummaryRecord};

use crate::error::{Result, StoreError};
use crate::models::MongoEntry;
use crate::repositories::{MongoEntryRepository, MongoSummaryRepository};
use crate::store::JournalStore;

/// MongoDB-backed journal store
///
/// Entries and summaries live in separate collections; summaries reference
/// their entry by id and "latest" is resolved per entry at read time.
pub struct MongoJournalStore {
    entry_repo: MongoEntryRepository,
    summary_repo: MongoSummaryRepository,
}

impl MongoJournalStore {
    /// Connect to MongoDB and create the store
    pub async fn connect(mongodb_uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        tracing::info!(database = %database, "connected to MongoDB");

        let entry_repo = MongoEntryRepository::new(&client, database);
        let summary_repo = MongoSummaryRepository::new(&client, database);

        Ok(Self {
            entry_repo,
            summary_repo,
        })
    }

    fn parse_entry_id(entry_id: &str) -> Result<ObjectId> {
        ObjectId::parse_str(entry_id).map_err(|_| StoreError::InvalidEntryId(entry_id.to_string()))
    }

    async fn latest_summary(&self, entry: &MongoEntry) -> Result<Option<SummaryRecord>> {
        let latest = self.summary_repo.latest_for_entry(entry.id).await?;
        Ok(latest.map(Into::into))
    }
}

#[async_trait]
impl JournalStore for MongoJournalStore {
    async fn create_entry(
        &self,
        user_id: &str,
        text: &str,
        prompt_used: Option<String>,
    ) -> Result<Entry> {
        let entry = self
            .entry_repo
            .create_entry(user_id.to_string(), text.to_string(), prompt_used)
            .await?;
        Ok(entry.into())
    }

    async fn get_entry(&self, user_id: &str, entry_id: &str) -> Result<EntryWithSummary> {
        let object_id = Self::parse_entry_id(entry_id)?;
        let entry = self
            .entry_repo
            .get_entry(user_id, object_id)
            .await?
            .ok_or_else(|| StoreError::EntryNotFound(entry_id.to_string()))?;

        let latest = self.latest_summary(&entry).await?;
        Ok(EntryWithSummary {
            entry: entry.into(),
            latest_summary: latest,
        })
    }

    async fn append_summary(
        &self,
        user_id: &str,
        entry_id: &str,
        summary: NewSummary,
    ) -> Result<SummaryRecord> {
        let object_id = Self::parse_entry_id(entry_id)?;

        // The entry must exist and belong to this user before we attach
        // anything to it
        self.entry_repo
            .get_entry(user_id, object_id)
            .await?
            .ok_or_else(|| StoreError::EntryNotFound(entry_id.to_string()))?;

        let record = self.summary_repo.append_summary(object_id, summary).await?;
        Ok(record.into())
    }

    async fn list_entries(
        &self,
        user_id: &str,
        theme_filter: Option<&str>,
    ) -> Result<Vec<EntryWithSummary>> {
        let entries = self.entry_repo.list_entries(user_id).await?;

        let mut out = Vec::with_capacity(entries.len());
        for entry in entries {
            let latest = self.latest_summary(&entry).await?;

            if let Some(filter) = theme_filter {
                if !themes::latest_summary_matches(latest.as_ref(), filter) {
                    continue;
                }
            }

            out.push(EntryWithSummary {
                entry: entry.into(),
                latest_summary: latest,
            });
        }
        Ok(out)
    }

    async fn set_shared(
        &self,
        user_id: &str,
        entry_id: &str,
        is_shared: bool,
    ) -> Result<EntryWithSummary> {
        let object_id = Self::parse_entry_id(entry_id)?;

        let matched = self
            .entry_repo
            .set_shared(user_id, object_id, is_shared)
            .await?;
        if !matched {
            return Err(StoreError::EntryNotFound(entry_id.to_string()));
        }

        self.get_entry(user_id, entry_id).await
    }

    async fn export_shared(&self, user_id: &str) -> Result<Vec<SharedEntryRecord>> {
        let entries = self.entry_repo.shared_entries(user_id).await?;

        let mut out = Vec::with_capacity(entries.len());
        for entry in entries {
            let latest = self.latest_summary(&entry).await?;

            out.push(SharedEntryRecord {
                entry_id: entry.id.to_hex(),
                text: entry.text,
                prompt_used: entry.prompt_used,
                created_at: Some(entry.created_at),
                summary: latest.as_ref().map(|s| s.summary_text.clone()),
                themes: latest.map(|s| s.themes),
            });
        }
        Ok(out)
    }

    async fn theme_counts(&self, user_id: &str, last_n: usize) -> Result<BTreeMap<String, u64>> {
        let entries = self.entry_repo.recent_entries(user_id, last_n).await?;

        let mut counts = BTreeMap::new();
        for entry in entries {
            if let Some(latest) = self.latest_summary(&entry).await? {
                themes::accumulate_theme_counts(&mut counts, &latest.themes);
            }
        }
        Ok(counts)
    }
}
