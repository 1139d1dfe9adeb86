// 📋 Entry List - row state for the entry table
//
// The list never owns entries. It receives a snapshot on every call, keeps a
// keyboard cursor plus at most one inline editor, and hands edit/delete
// commands back to whoever owns the entries.
//
// Edit state machine:
//   NoneEditing --begin_edit(id)--> Editing(id)
//   Editing(a)  --begin_edit(b)---> Editing(b)
//   Editing(_)  --submit/cancel---> NoneEditing

use crate::editor::EntryEditor;
use crate::entry::{Entry, EntryDraft, EntryId};
use chrono::NaiveDate;

/// Shown instead of the table when there are no entries
pub const EMPTY_PLACEHOLDER: &str = "No entries yet. Start adding your expenses or income.";

/// Intent emitted by the list for the entry owner
#[derive(Debug, Clone, PartialEq)]
pub enum ListCommand {
    Delete(EntryId),
    Edit { id: EntryId, draft: EntryDraft },
}

/// One row of the rendered list
#[derive(Debug)]
pub enum ListRow<'a> {
    Display(&'a Entry),
    Editing(&'a Entry, &'a EntryEditor),
}

impl<'a> ListRow<'a> {
    pub fn entry(&self) -> &'a Entry {
        match self {
            ListRow::Display(entry) | ListRow::Editing(entry, _) => *entry,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, ListRow::Editing(..))
    }
}

#[derive(Debug, Clone)]
struct InlineEdit {
    id: EntryId,
    editor: EntryEditor,
}

#[derive(Debug, Clone, Default)]
pub struct EntryList {
    selected: Option<usize>,
    editing: Option<InlineEdit>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // RENDERING
    // ========================================================================

    /// Entries in the order given, with the edit target swapped for its editor
    pub fn rows<'a>(&'a self, entries: &'a [Entry]) -> Vec<ListRow<'a>> {
        entries
            .iter()
            .map(|entry| match &self.editing {
                Some(edit) if edit.id == entry.id => ListRow::Editing(entry, &edit.editor),
                _ => ListRow::Display(entry),
            })
            .collect()
    }

    // ========================================================================
    // EDIT STATE
    // ========================================================================

    pub fn editing_id(&self) -> Option<&EntryId> {
        self.editing.as_ref().map(|edit| &edit.id)
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editor(&self) -> Option<&EntryEditor> {
        self.editing.as_ref().map(|edit| &edit.editor)
    }

    pub fn editor_mut(&mut self) -> Option<&mut EntryEditor> {
        self.editing.as_mut().map(|edit| &mut edit.editor)
    }

    /// Open the inline editor on `entry`, closing any other one
    pub fn begin_edit(&mut self, entry: &Entry) {
        if let Some(previous) = self.editing.as_ref() {
            if previous.id != entry.id {
                tracing::debug!(closed = %previous.id, opened = %entry.id, "switching inline editor");
            }
        }
        self.editing = Some(InlineEdit {
            id: entry.id.clone(),
            editor: EntryEditor::edit(entry),
        });
    }

    /// Submit the inline editor.
    ///
    /// On success the editor closes and the edit command is returned. An
    /// incomplete form keeps the editor open and yields nothing.
    pub fn submit_edit(&mut self, today: NaiveDate) -> Option<ListCommand> {
        let edit = self.editing.as_mut()?;
        let draft = edit.editor.submit(today)?;
        let id = edit.id.clone();
        self.editing = None;
        Some(ListCommand::Edit { id, draft })
    }

    /// Close the inline editor without emitting anything
    pub fn cancel_edit(&mut self) {
        if let Some(edit) = self.editing.take() {
            tracing::debug!(id = %edit.id, "inline edit cancelled");
        }
    }

    /// Delete intent for `entry`; nothing is removed here
    pub fn request_delete(&self, entry: &Entry) -> ListCommand {
        ListCommand::Delete(entry.id.clone())
    }

    // ========================================================================
    // CURSOR
    // ========================================================================

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected<'a>(&self, entries: &'a [Entry]) -> Option<&'a Entry> {
        self.selected.and_then(|i| entries.get(i))
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    pub fn select_first(&mut self, len: usize) {
        self.selected = if len == 0 { None } else { Some(0) };
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.checked_sub(1);
    }

    /// Reconcile with a new snapshot: clamp the cursor and drop the inline
    /// editor if its entry is gone.
    pub fn sync(&mut self, entries: &[Entry]) {
        self.selected = match (self.selected, entries.len()) {
            (_, 0) => None,
            (Some(i), len) if i >= len => Some(len - 1),
            (None, _) => Some(0),
            (current, _) => current,
        };

        let gone = self
            .editing
            .as_ref()
            .is_some_and(|edit| !entries.iter().any(|e| e.id == edit.id));
        if gone {
            self.editing = None;
        }
    }
}
