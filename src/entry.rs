// 🧾 Entry Model - the single record type of the ledger
//
// "Entry id is IDENTITY (never changes), every other field is a VALUE"
//
// An edit replaces all values at once and keeps the id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum description length accepted by the editor (in characters).
pub const DESCRIPTION_MAX_LEN: usize = 44;

// ============================================================================
// ENTRY ID
// ============================================================================

/// Opaque identifier assigned by the ledger when an entry is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Fresh random id (UUID v4)
    pub fn generate() -> Self {
        EntryId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        EntryId(value)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// PARSE ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryParseError {
    #[error("unknown entry type: {0}")]
    UnknownType(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

// ============================================================================
// ENTRY TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money coming in
    Income,

    /// Money going out
    #[default]
    Expense,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Income => "income",
            EntryType::Expense => "expense",
        }
    }

    /// Upper-case badge shown next to each row
    pub fn badge(&self) -> &'static str {
        match self {
            EntryType::Income => "INCOME",
            EntryType::Expense => "EXPENSE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryType::Income => "Income",
            EntryType::Expense => "Expense",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            EntryType::Income => EntryType::Expense,
            EntryType::Expense => EntryType::Income,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = EntryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(EntryType::Income),
            "expense" => Ok(EntryType::Expense),
            _ => Err(EntryParseError::UnknownType(s.to_string())),
        }
    }
}

// ============================================================================
// CATEGORY
// ============================================================================

/// Fixed category set offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Rent,
    Salary,
    Transport,
    Shopping,
    Health,
    Other,
}

impl Category {
    /// All categories in the order the editor offers them
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Rent,
        Category::Salary,
        Category::Transport,
        Category::Shopping,
        Category::Health,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Salary => "Salary",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }

    fn position(&self) -> usize {
        Category::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }

    /// Next category in `ALL`, wrapping around
    pub fn next(&self) -> Self {
        Category::ALL[(self.position() + 1) % Category::ALL.len()]
    }

    /// Previous category in `ALL`, wrapping around
    pub fn previous(&self) -> Self {
        let len = Category::ALL.len();
        Category::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EntryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EntryParseError::UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// ENTRY + DRAFT
// ============================================================================

/// Every field of an entry except its id.
///
/// This is the payload the editor produces and the ledger consumes, both when
/// creating an entry and when replacing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl Entry {
    /// Build an entry from a draft and an id chosen by the owner
    pub fn from_draft(id: EntryId, draft: EntryDraft) -> Self {
        Entry {
            id,
            entry_type: draft.entry_type,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            description: draft.description,
        }
    }

    /// Replace every value field; `id` stays as it is
    pub fn apply(&mut self, draft: EntryDraft) {
        self.entry_type = draft.entry_type;
        self.amount = draft.amount;
        self.category = draft.category;
        self.date = draft.date;
        self.description = draft.description;
    }

    /// Value fields of this entry
    pub fn draft(&self) -> EntryDraft {
        EntryDraft {
            entry_type: self.entry_type,
            amount: self.amount,
            category: self.category,
            date: self.date,
            description: self.description.clone(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.entry_type == EntryType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.entry_type == EntryType::Expense
    }
}
