use std::collections::BTreeMap;

use async_trait::async_trait;

use jotter_types::{Entry, EntryWithSummary, NewSummary, SharedEntryRecord, SummaryRecord};

use crate::error::Result;

/// Trait for journal persistence operations
///
/// Implementations provide store-specific CRUD; ids and creation timestamps
/// are assigned by the store. Every operation is scoped to one owning user.
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Create a new entry; the shared flag starts false
    async fn create_entry(
        &self,
        user_id: &str,
        text: &str,
        prompt_used: Option<String>,
    ) -> Result<Entry>;

    /// Get one entry by ID, joined with its latest summary
    async fn get_entry(&self, user_id: &str, entry_id: &str) -> Result<EntryWithSummary>;

    /// Append a summary to an entry (summaries are never updated in place)
    async fn append_summary(
        &self,
        user_id: &str,
        entry_id: &str,
        summary: NewSummary,
    ) -> Result<SummaryRecord>;

    /// List a user's entries newest first, each joined with its latest
    /// summary
    ///
    /// With a theme filter, only entries whose latest summary contains the
    /// title-cased theme name are returned; entries without a summary never
    /// match a filter.
    async fn list_entries(
        &self,
        user_id: &str,
        theme_filter: Option<&str>,
    ) -> Result<Vec<EntryWithSummary>>;

    /// Update the shared flag, returning the updated entry joined with its
    /// latest summary
    async fn set_shared(
        &self,
        user_id: &str,
        entry_id: &str,
        is_shared: bool,
    ) -> Result<EntryWithSummary>;

    /// Shared entries oldest first, projected into export records
    async fn export_shared(&self, user_id: &str) -> Result<Vec<SharedEntryRecord>>;

    /// Theme frequency over the latest summaries of the most recent
    /// `last_n` entries, one count per theme name per entry
    async fn theme_counts(&self, user_id: &str, last_n: usize) -> Result<BTreeMap<String, u64>>;
}
