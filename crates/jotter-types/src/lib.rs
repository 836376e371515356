pub mod entry;
pub mod export;
pub mod summary;
pub mod themes;

pub use entry::{Entry, EntryWithSummary};
pub use export::SharedEntryRecord;
pub use summary::{EntrySummary, NewSummary, SummaryRecord, Theme};
