pub mod entry;
pub mod summary;

pub use entry::MongoEntryRepository;
pub use summary::MongoSummaryRepository;
