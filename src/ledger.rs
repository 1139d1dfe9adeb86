// 📒 Ledger - in-memory owner of the entry collection
//
// Assigns ids, applies create / update / delete intents and nothing else.
// Entries live only as long as the ledger does.

use crate::entry::{Entry, EntryDraft, EntryId};
use crate::error::{LedgerError, Result};
use crate::list::ListCommand;
use crate::summary::Summary;

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot, order preserved
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Ledger { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn summary(&self) -> Summary {
        Summary::from_entries(&self.entries)
    }

    /// Append a new entry under a freshly generated id
    pub fn add(&mut self, draft: EntryDraft) -> EntryId {
        let id = EntryId::generate();
        tracing::info!(id = %id, kind = %draft.entry_type, amount = draft.amount, "entry added");
        self.entries.push(Entry::from_draft(id.clone(), draft));
        id
    }

    /// Replace every field of `id` except the id itself
    pub fn update(&mut self, id: &EntryId, draft: EntryDraft) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| LedgerError::NotFound(id.clone()))?;
        entry.apply(draft);
        tracing::info!(id = %id, "entry updated");
        Ok(())
    }

    pub fn remove(&mut self, id: &EntryId) -> Result<Entry> {
        let index = self
            .entries
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| LedgerError::NotFound(id.clone()))?;
        let removed = self.entries.remove(index);
        tracing::info!(id = %id, "entry removed");
        Ok(removed)
    }

    /// Carry out a command coming from the entry list
    pub fn apply(&mut self, command: ListCommand) -> Result<()> {
        match command {
            ListCommand::Delete(id) => self.remove(&id).map(|_| ()),
            ListCommand::Edit { id, draft } => self.update(&id, draft),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Category, EntryType};
    use chrono::NaiveDate;

    fn draft(entry_type: EntryType, amount: f64, category: Category) -> EntryDraft {
        EntryDraft {
            entry_type,
            amount,
            category,
            date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            description: String::new(),
        }
    }

    #[test]
    fn test_add_assigns_unique_ids_in_order() {
        let mut ledger = Ledger::new();
        let a = ledger.add(draft(EntryType::Income, 1000.0, Category::Salary));
        let b = ledger.add(draft(EntryType::Expense, 250.0, Category::Rent));

        assert_ne!(a, b);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.entries()[0].id, a);
        assert_eq!(ledger.entries()[1].id, b);
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let mut ledger = Ledger::new();
        let a = ledger.add(draft(EntryType::Expense, 10.0, Category::Food));
        let b = ledger.add(draft(EntryType::Expense, 20.0, Category::Food));

        ledger
            .update(&a, draft(EntryType::Income, 15.0, Category::Other))
            .unwrap();

        let updated = &ledger.entries()[0];
        assert_eq!(updated.id, a);
        assert_eq!(updated.entry_type, EntryType::Income);
        assert_eq!(updated.amount, 15.0);
        assert_eq!(updated.category, Category::Other);
        assert_eq!(ledger.entries()[1].id, b);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let mut ledger = Ledger::new();
        let missing = EntryId::from("missing");

        assert_eq!(
            ledger.update(&missing, draft(EntryType::Expense, 1.0, Category::Food)),
            Err(LedgerError::NotFound(missing.clone()))
        );
        assert_eq!(
            ledger.remove(&missing),
            Err(LedgerError::NotFound(missing))
        );
    }

    #[test]
    fn test_apply_list_commands() {
        let mut ledger = Ledger::new();
        let a = ledger.add(draft(EntryType::Income, 1000.0, Category::Salary));
        let b = ledger.add(draft(EntryType::Expense, 250.0, Category::Rent));

        ledger
            .apply(ListCommand::Edit {
                id: b.clone(),
                draft: draft(EntryType::Expense, 300.0, Category::Rent),
            })
            .unwrap();
        assert_eq!(ledger.get(&b).map(|e| e.amount), Some(300.0));

        ledger.apply(ListCommand::Delete(a.clone())).unwrap();
        assert!(ledger.get(&a).is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_summary_tracks_mutations() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.summary(), Summary::default());

        ledger.add(draft(EntryType::Income, 1000.0, Category::Salary));
        let rent = ledger.add(draft(EntryType::Expense, 250.0, Category::Rent));
        ledger.add(draft(EntryType::Expense, 50.0, Category::Food));
        assert_eq!(ledger.summary().balance, 700.0);

        ledger.remove(&rent).unwrap();
        assert_eq!(ledger.summary().expenses, 50.0);
        assert_eq!(ledger.summary().balance, 950.0);
    }
}
