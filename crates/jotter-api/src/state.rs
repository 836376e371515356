use std::sync::Arc;

use jotter_llm::Summarizer;
use jotter_persist::JournalStore;

use crate::config::Config;

/// Shared application state passed to all handlers
///
/// Collaborators are held behind trait objects so any compatible store or
/// generative backend can be substituted (the tests swap in an in-memory
/// store and a scripted model).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn JournalStore>,
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn JournalStore>, summarizer: Summarizer) -> Self {
        Self {
            config: Arc::new(config),
            store,
            summarizer: Arc::new(summarizer),
        }
    }
}
