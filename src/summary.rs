// 📊 Balance Summary - income / expenses / balance over a set of entries
//
// Pure and cheap: recomputed from scratch every time the entries change.

use crate::entry::{Entry, EntryType};
use serde::Serialize;

/// Display accent for the balance figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTone {
    NonNegative,
    Negative,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

impl Summary {
    /// Totals for the given entries, in any order. Empty input gives all zeros.
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut income = 0.0;
        let mut expenses = 0.0;

        for entry in entries {
            match entry.entry_type {
                EntryType::Income => income += entry.amount,
                EntryType::Expense => expenses += entry.amount,
            }
        }

        Summary {
            income,
            expenses,
            balance: income - expenses,
        }
    }

    pub fn tone(&self) -> BalanceTone {
        if self.balance >= 0.0 {
            BalanceTone::NonNegative
        } else {
            BalanceTone::Negative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Category, EntryDraft, EntryId};
    use chrono::NaiveDate;

    fn entry(entry_type: EntryType, amount: f64) -> Entry {
        Entry::from_draft(
            EntryId::generate(),
            EntryDraft {
                entry_type,
                amount,
                category: Category::Other,
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                description: String::new(),
            },
        )
    }

    #[test]
    fn test_empty_entries_are_all_zero() {
        let summary = Summary::from_entries(&[]);
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.balance, 0.0);
        assert_eq!(summary.tone(), BalanceTone::NonNegative);
    }

    #[test]
    fn test_income_minus_expenses() {
        let entries = vec![
            entry(EntryType::Income, 1000.0),
            entry(EntryType::Expense, 250.0),
            entry(EntryType::Expense, 50.0),
        ];

        let summary = Summary::from_entries(&entries);
        assert_eq!(summary.income, 1000.0);
        assert_eq!(summary.expenses, 300.0);
        assert_eq!(summary.balance, 700.0);
        assert_eq!(summary.tone(), BalanceTone::NonNegative);
    }

    #[test]
    fn test_negative_balance_tone() {
        let entries = vec![
            entry(EntryType::Income, 10.0),
            entry(EntryType::Expense, 25.5),
        ];

        let summary = Summary::from_entries(&entries);
        assert_eq!(summary.balance, -15.5);
        assert_eq!(summary.tone(), BalanceTone::Negative);
    }

    #[test]
    fn test_every_entry_lands_in_one_bucket() {
        let entries: Vec<Entry> = (1..=20)
            .map(|i| {
                let kind = if i % 3 == 0 {
                    EntryType::Income
                } else {
                    EntryType::Expense
                };
                entry(kind, i as f64)
            })
            .collect();

        let summary = Summary::from_entries(&entries);
        let total: f64 = entries.iter().map(|e| e.amount).sum();

        assert_eq!(summary.income + summary.expenses, total);
        assert_eq!(summary.balance, summary.income - summary.expenses);
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut entries = vec![
            entry(EntryType::Expense, 12.0),
            entry(EntryType::Income, 40.0),
            entry(EntryType::Expense, 3.0),
        ];
        let forward = Summary::from_entries(&entries);
        entries.reverse();
        let backward = Summary::from_entries(&entries);

        assert_eq!(forward, backward);
    }
}
