mod keymap;
mod render;
mod terminal;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use crossterm::event::{self, Event};

use pocket_ledger::{format_amount, EditorField, EntryEditor, EntryList, Ledger, ListCommand};

pub use keymap::AppAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Composer,
    List,
}

impl Pane {
    pub fn toggled(&self) -> Self {
        match self {
            Pane::Composer => Pane::List,
            Pane::List => Pane::Composer,
        }
    }
}

pub struct App {
    pub ledger: Ledger,
    pub composer: EntryEditor,
    pub list: EntryList,
    pub pane: Pane,
    pub status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(ledger: Ledger) -> Self {
        let mut list = EntryList::new();
        list.sync(ledger.entries());

        Self {
            ledger,
            composer: EntryEditor::create(pocket_ledger::today()),
            list,
            pane: Pane::Composer,
            status: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle(&mut self, action: AppAction, today: NaiveDate) {
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        if self.list.is_editing() {
            self.handle_inline_edit(action, today);
            return;
        }

        match self.pane {
            Pane::Composer => self.handle_composer(action, today),
            Pane::List => self.handle_list(action),
        }
    }

    fn handle_composer(&mut self, action: AppAction, today: NaiveDate) {
        match action {
            AppAction::SwitchPane | AppAction::Cancel => self.pane = self.pane.toggled(),
            AppAction::Submit => {
                if let Some(draft) = self.composer.submit(today) {
                    let label = format!("Added {} {}", draft.entry_type, format_amount(draft.amount));
                    self.ledger.add(draft);
                    self.list.sync(self.ledger.entries());
                    self.list.select_last(self.ledger.len());
                    self.status = Some(label);
                }
            }
            other => edit_fields(&mut self.composer, other),
        }
    }

    fn handle_inline_edit(&mut self, action: AppAction, today: NaiveDate) {
        match action {
            AppAction::Cancel => self.list.cancel_edit(),
            AppAction::Submit => {
                if let Some(command) = self.list.submit_edit(today) {
                    self.dispatch(command);
                }
            }
            other => {
                if let Some(editor) = self.list.editor_mut() {
                    edit_fields(editor, other);
                }
            }
        }
    }

    fn handle_list(&mut self, action: AppAction) {
        let len = self.ledger.len();
        match action {
            AppAction::SwitchPane | AppAction::Cancel => self.pane = self.pane.toggled(),
            AppAction::Input('q') => self.should_quit = true,
            AppAction::Input('a') => self.pane = Pane::Composer,
            AppAction::Down | AppAction::Input('j') => self.list.select_next(len),
            AppAction::Up | AppAction::Input('k') => self.list.select_previous(len),
            AppAction::Home => self.list.select_first(len),
            AppAction::End => self.list.select_last(len),
            AppAction::Submit | AppAction::Input('e') => {
                if let Some(entry) = self.list.selected(self.ledger.entries()).cloned() {
                    self.list.begin_edit(&entry);
                }
            }
            AppAction::Input('d') => {
                let command = self
                    .list
                    .selected(self.ledger.entries())
                    .map(|entry| self.list.request_delete(entry));
                if let Some(command) = command {
                    self.dispatch(command);
                }
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, command: ListCommand) {
        let label = match &command {
            ListCommand::Delete(_) => "Entry deleted",
            ListCommand::Edit { .. } => "Entry updated",
        };

        match self.ledger.apply(command) {
            Ok(()) => self.status = Some(label.to_string()),
            Err(err) => {
                tracing::warn!(error = %err, "list command rejected");
                self.status = Some(err.to_string());
            }
        }
        self.list.sync(self.ledger.entries());
    }
}

/// Keys shared by the composer and the inline editor
fn edit_fields(editor: &mut EntryEditor, action: AppAction) {
    match action {
        AppAction::Up => editor.focus_prev(),
        AppAction::Down => editor.focus_next(),
        AppAction::Left | AppAction::Right => {
            let forward = action == AppAction::Right;
            match editor.focus() {
                EditorField::Type => editor.toggle_type(),
                EditorField::Category => editor.cycle_category(forward),
                _ => {}
            }
        }
        AppAction::Backspace => editor.backspace(),
        AppAction::Input(ch) => editor.input(ch),
        _ => {}
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    let mut terminal = terminal::setup_terminal().context("failed to set up terminal")?;

    let res = run_app(&mut terminal, app);

    terminal::restore_terminal(&mut terminal).context("failed to restore terminal")?;
    res
}

fn run_app(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| render::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle(keymap::map_key(key), pocket_ledger::today());
        }
    }
    Ok(())
}
