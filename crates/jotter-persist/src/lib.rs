pub mod client;
pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use client::MongoJournalStore;
pub use error::{Result, StoreError};
pub use store::JournalStore;
