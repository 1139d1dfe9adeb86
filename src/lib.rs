// Pocket Ledger - Core Library
// Entry model, balance summary, form and list state for the TUI and tests

pub mod entry;
pub mod error;
pub mod summary;
pub mod format;
pub mod editor;
pub mod list;
pub mod ledger;

// Re-export commonly used types
pub use entry::{
    Category, Entry, EntryDraft, EntryId, EntryParseError, EntryType,
    DESCRIPTION_MAX_LEN,
};
pub use error::LedgerError;
pub use summary::{BalanceTone, Summary};
pub use format::{format_amount, format_date};
pub use editor::{today, EditorField, EditorMode, EntryEditor};
pub use list::{EntryList, ListCommand, ListRow, EMPTY_PLACEHOLDER};
pub use ledger::Ledger;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
