// ✏️ Entry Editor - controlled form state for one entry
//
// Fields are kept as the user typed them and only converted on submit.
// An incomplete form never produces a draft and never reports an error:
// submit simply returns None and leaves every field as it was.

use crate::entry::{Category, Entry, EntryDraft, EntryType, DESCRIPTION_MAX_LEN};
use chrono::{NaiveDate, Utc};

const DATE_INPUT_MAX_LEN: usize = 10;

/// Today's calendar date (UTC), the default for new entries
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

// ============================================================================
// MODE + FIELDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Composing a new entry; the form resets after each submit
    Create,
    /// Editing an existing entry in place
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Type,
    Amount,
    Category,
    Date,
    Description,
}

impl EditorField {
    pub const ALL: [EditorField; 5] = [
        EditorField::Type,
        EditorField::Amount,
        EditorField::Category,
        EditorField::Date,
        EditorField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EditorField::Type => "Type",
            EditorField::Amount => "Amount",
            EditorField::Category => "Category",
            EditorField::Date => "Date",
            EditorField::Description => "Description",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            EditorField::Type => EditorField::Amount,
            EditorField::Amount => EditorField::Category,
            EditorField::Category => EditorField::Date,
            EditorField::Date => EditorField::Description,
            EditorField::Description => EditorField::Type,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            EditorField::Type => EditorField::Description,
            EditorField::Amount => EditorField::Type,
            EditorField::Category => EditorField::Amount,
            EditorField::Date => EditorField::Category,
            EditorField::Description => EditorField::Date,
        }
    }
}

// ============================================================================
// EDITOR
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct EntryEditor {
    mode: EditorMode,
    focus: EditorField,
    entry_type: EntryType,
    amount: String,
    category: Option<Category>,
    date: String,
    description: String,
}

impl EntryEditor {
    /// Empty form for a new entry
    pub fn create(today: NaiveDate) -> Self {
        EntryEditor {
            mode: EditorMode::Create,
            focus: EditorField::Type,
            entry_type: EntryType::Expense,
            amount: String::new(),
            category: None,
            date: today.to_string(),
            description: String::new(),
        }
    }

    /// Form pre-filled with every field of an existing entry
    pub fn edit(entry: &Entry) -> Self {
        EntryEditor {
            mode: EditorMode::Edit,
            focus: EditorField::Type,
            entry_type: entry.entry_type,
            amount: entry.amount.to_string(),
            category: Some(entry.category),
            date: entry.date.to_string(),
            description: entry.description.clone(),
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditorMode::Edit
    }

    pub fn focus(&self) -> EditorField {
        self.focus
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Caption for the submit action
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            EditorMode::Create => "Add",
            EditorMode::Edit => "Update",
        }
    }

    // ------------------------------------------------------------------------
    // Field updates
    // ------------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn set_focus(&mut self, field: EditorField) {
        self.focus = field;
    }

    pub fn set_type(&mut self, entry_type: EntryType) {
        self.entry_type = entry_type;
    }

    pub fn toggle_type(&mut self) {
        self.entry_type = self.entry_type.toggled();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    /// Step through the fixed category list; an unset category starts at
    /// the first (forward) or last (backward) option.
    pub fn cycle_category(&mut self, forward: bool) {
        self.category = Some(match (self.category, forward) {
            (Some(current), true) => current.next(),
            (Some(current), false) => current.previous(),
            (None, true) => Category::ALL[0],
            (None, false) => Category::ALL[Category::ALL.len() - 1],
        });
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    /// Anything past the description limit is dropped
    pub fn set_description(&mut self, description: &str) {
        self.description = description.chars().take(DESCRIPTION_MAX_LEN).collect();
    }

    /// Type a character into the focused field.
    ///
    /// Amount takes digits and one decimal point, date takes digits and
    /// dashes. On the type and category selectors a space steps the choice.
    pub fn input(&mut self, ch: char) {
        match self.focus {
            EditorField::Type => {
                if ch == ' ' {
                    self.toggle_type();
                }
            }
            EditorField::Category => {
                if ch == ' ' {
                    self.cycle_category(true);
                }
            }
            EditorField::Amount => {
                if ch.is_ascii_digit() || (ch == '.' && !self.amount.contains('.')) {
                    self.amount.push(ch);
                }
            }
            EditorField::Date => {
                if (ch.is_ascii_digit() || ch == '-') && self.date.len() < DATE_INPUT_MAX_LEN {
                    self.date.push(ch);
                }
            }
            EditorField::Description => {
                if !ch.is_control() && self.description.chars().count() < DESCRIPTION_MAX_LEN {
                    self.description.push(ch);
                }
            }
        }
    }

    /// Delete the last character of the focused text field.
    /// On the category selector this clears the choice.
    pub fn backspace(&mut self) {
        match self.focus {
            EditorField::Type => {}
            EditorField::Category => self.category = None,
            EditorField::Amount => {
                self.amount.pop();
            }
            EditorField::Date => {
                self.date.pop();
            }
            EditorField::Description => {
                self.description.pop();
            }
        }
    }

    // ------------------------------------------------------------------------
    // Submit / cancel
    // ------------------------------------------------------------------------

    /// Amount as a number if the text is a finite value above zero
    fn parsed_amount(&self) -> Option<f64> {
        let amount: f64 = self.amount.trim().parse().ok()?;
        (amount.is_finite() && amount > 0.0).then_some(amount)
    }

    /// Date as a calendar date; an empty field means `today`
    fn parsed_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return Some(today);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Whether submit would currently produce a draft
    pub fn is_complete(&self, today: NaiveDate) -> bool {
        self.parsed_amount().is_some()
            && self.category.is_some()
            && self.parsed_date(today).is_some()
    }

    /// Produce the draft for the current fields.
    ///
    /// Returns `None` and leaves the form untouched when the amount is
    /// missing or not above zero, no category is selected, or the date text
    /// is not an ISO date. In create mode a successful submit resets the
    /// form; in edit mode the caller closes the editor.
    pub fn submit(&mut self, today: NaiveDate) -> Option<EntryDraft> {
        let Some(amount) = self.parsed_amount() else {
            tracing::debug!(amount = %self.amount, "submit suppressed: amount missing or invalid");
            return None;
        };
        let Some(category) = self.category else {
            tracing::debug!("submit suppressed: no category selected");
            return None;
        };
        let Some(date) = self.parsed_date(today) else {
            tracing::debug!(date = %self.date, "submit suppressed: date is not YYYY-MM-DD");
            return None;
        };

        let draft = EntryDraft {
            entry_type: self.entry_type,
            amount,
            category,
            date,
            description: self.description.clone(),
        };

        if self.mode == EditorMode::Create {
            self.reset(today);
        }

        Some(draft)
    }

    /// Only an edit can be cancelled; returns whether the caller should
    /// close the editor. Never touches the fields.
    pub fn cancel(&self) -> bool {
        self.mode == EditorMode::Edit
    }

    fn reset(&mut self, today: NaiveDate) {
        *self = EntryEditor::create(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryId;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn existing_entry() -> Entry {
        Entry::from_draft(
            EntryId::from("rent-march"),
            EntryDraft {
                entry_type: EntryType::Expense,
                amount: 1250.5,
                category: Category::Rent,
                date: day(2025, 3, 1),
                description: "March rent".to_string(),
            },
        )
    }

    #[test]
    fn test_create_defaults() {
        let editor = EntryEditor::create(day(2025, 6, 2));

        assert_eq!(editor.mode(), EditorMode::Create);
        assert_eq!(editor.entry_type(), EntryType::Expense);
        assert_eq!(editor.amount(), "");
        assert_eq!(editor.category(), None);
        assert_eq!(editor.date(), "2025-06-02");
        assert_eq!(editor.description(), "");
        assert_eq!(editor.submit_label(), "Add");
    }

    #[test]
    fn test_edit_prefills_every_field() {
        let editor = EntryEditor::edit(&existing_entry());

        assert!(editor.is_editing());
        assert_eq!(editor.entry_type(), EntryType::Expense);
        assert_eq!(editor.amount(), "1250.5");
        assert_eq!(editor.category(), Some(Category::Rent));
        assert_eq!(editor.date(), "2025-03-01");
        assert_eq!(editor.description(), "March rent");
        assert_eq!(editor.submit_label(), "Update");
    }

    #[test]
    fn test_whole_amount_prefills_without_fraction() {
        let mut entry = existing_entry();
        entry.amount = 250.0;
        assert_eq!(EntryEditor::edit(&entry).amount(), "250");
    }

    #[test]
    fn test_empty_amount_is_suppressed() {
        let mut editor = EntryEditor::create(day(2025, 6, 2));
        editor.set_category(Some(Category::Food));
        let before = editor.clone();

        assert_eq!(editor.submit(day(2025, 6, 2)), None);
        assert_eq!(editor, before);
    }

    #[test]
    fn test_missing_category_is_suppressed() {
        let mut editor = EntryEditor::create(day(2025, 6, 2));
        editor.set_amount("12.00");
        let before = editor.clone();

        assert_eq!(editor.submit(day(2025, 6, 2)), None);
        assert_eq!(editor, before);
    }

    #[test]
    fn test_zero_and_garbage_amounts_are_suppressed() {
        for raw in ["0", "0.00", ".", "abc", "-5", "inf", "NaN"] {
            let mut editor = EntryEditor::create(day(2025, 6, 2));
            editor.set_category(Some(Category::Food));
            editor.set_amount(raw);
            assert_eq!(editor.submit(day(2025, 6, 2)), None, "amount {raw:?}");
        }
    }

    #[test]
    fn test_invalid_date_is_suppressed() {
        let mut editor = EntryEditor::create(day(2025, 6, 2));
        editor.set_amount("10");
        editor.set_category(Some(Category::Health));
        editor.set_date("2025-13-40");

        assert_eq!(editor.submit(day(2025, 6, 2)), None);
        assert_eq!(editor.date(), "2025-13-40");
    }

    #[test]
    fn test_empty_date_defaults_to_today() {
        let mut editor = EntryEditor::create(day(2025, 6, 2));
        editor.set_amount("10");
        editor.set_category(Some(Category::Health));
        editor.set_date("");

        let draft = editor.submit(day(2025, 7, 9)).unwrap();
        assert_eq!(draft.date, day(2025, 7, 9));
    }

    #[test]
    fn test_create_submit_resets_form() {
        let mut editor = EntryEditor::create(day(2025, 6, 2));
        editor.set_type(EntryType::Income);
        editor.set_amount("1000");
        editor.set_category(Some(Category::Salary));
        editor.set_date("2025-05-31");
        editor.set_description("May salary");
        editor.set_focus(EditorField::Description);

        let draft = editor.submit(day(2025, 6, 3)).unwrap();
        assert_eq!(
            draft,
            EntryDraft {
                entry_type: EntryType::Income,
                amount: 1000.0,
                category: Category::Salary,
                date: day(2025, 5, 31),
                description: "May salary".to_string(),
            }
        );

        assert_eq!(editor, EntryEditor::create(day(2025, 6, 3)));
    }

    #[test]
    fn test_edit_submit_keeps_fields() {
        let mut editor = EntryEditor::edit(&existing_entry());
        editor.set_amount("1300");

        let draft = editor.submit(day(2025, 6, 2)).unwrap();
        assert_eq!(draft.amount, 1300.0);
        assert_eq!(draft.category, Category::Rent);
        assert_eq!(editor.amount(), "1300");
        assert!(editor.is_editing());
    }

    #[test]
    fn test_cancel_only_in_edit_mode() {
        let create = EntryEditor::create(day(2025, 6, 2));
        assert!(!create.cancel());

        let edit = EntryEditor::edit(&existing_entry());
        let before = edit.clone();
        assert!(edit.cancel());
        assert_eq!(edit, before);
    }

    #[test]
    fn test_description_is_capped() {
        let mut editor = EntryEditor::create(day(2025, 6, 2));
        editor.set_description(&"x".repeat(60));
        assert_eq!(editor.description().chars().count(), DESCRIPTION_MAX_LEN);

        editor.set_focus(EditorField::Description);
        editor.input('y');
        assert_eq!(editor.description().chars().count(), DESCRIPTION_MAX_LEN);
        assert!(!editor.description().contains('y'));
    }

    #[test]
    fn test_typed_input_respects_field_rules() {
        let mut editor = EntryEditor::create(day(2025, 6, 2));

        editor.set_focus(EditorField::Amount);
        for ch in "12a.5.0".chars() {
            editor.input(ch);
        }
        assert_eq!(editor.amount(), "12.50");

        editor.backspace();
        assert_eq!(editor.amount(), "12.5");

        editor.set_focus(EditorField::Date);
        for _ in 0..10 {
            editor.backspace();
        }
        for ch in "2025-01-15x99".chars() {
            editor.input(ch);
        }
        assert_eq!(editor.date(), "2025-01-15");
    }

    #[test]
    fn test_selectors_cycle() {
        let mut editor = EntryEditor::create(day(2025, 6, 2));

        editor.input(' ');
        assert_eq!(editor.entry_type(), EntryType::Income);

        editor.set_focus(EditorField::Category);
        editor.input(' ');
        assert_eq!(editor.category(), Some(Category::Food));
        editor.cycle_category(false);
        assert_eq!(editor.category(), Some(Category::Other));
        editor.backspace();
        assert_eq!(editor.category(), None);
        editor.cycle_category(false);
        assert_eq!(editor.category(), Some(Category::Other));
    }

    #[test]
    fn test_is_complete_needs_amount_and_category() {
        let mut editor = EntryEditor::create(day(2025, 6, 2));
        assert!(!editor.is_complete(day(2025, 6, 2)));
        editor.set_amount("3.20");
        assert!(!editor.is_complete(day(2025, 6, 2)));
        editor.set_category(Some(Category::Transport));
        assert!(editor.is_complete(day(2025, 6, 2)));
    }

    #[test]
    fn test_is_complete_agrees_with_submit() {
        let mut editor = EntryEditor::create(day(2025, 6, 2));
        editor.set_amount("8");
        editor.set_category(Some(Category::Food));

        editor.set_date("2025-02-30");
        assert!(!editor.is_complete(day(2025, 6, 2)));
        assert_eq!(editor.clone().submit(day(2025, 6, 2)), None);

        editor.set_date("");
        assert!(editor.is_complete(day(2025, 6, 2)));
        assert!(editor.submit(day(2025, 6, 2)).is_some());
    }

    #[test]
    fn test_focus_wraps() {
        let mut editor = EntryEditor::create(day(2025, 6, 2));
        editor.focus_prev();
        assert_eq!(editor.focus(), EditorField::Description);
        editor.focus_next();
        assert_eq!(editor.focus(), EditorField::Type);
    }
}
