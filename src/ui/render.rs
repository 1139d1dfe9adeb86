use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use pocket_ledger::{
    format::truncate, format_amount, format_date, BalanceTone, EditorField, EntryEditor,
    EntryType, ListRow, DESCRIPTION_MAX_LEN, EMPTY_PLACEHOLDER,
};

use super::{App, Pane};

const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(10),
    Constraint::Length(14),
    Constraint::Length(12),
    Constraint::Length(12),
    Constraint::Min(20),
];

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Balance summary
            Constraint::Length(3), // Composer form
            Constraint::Min(0),    // Entry list
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_summary(f, chunks[0], app);
    render_composer(f, chunks[1], app);
    render_entries(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);
}

fn type_color(entry_type: EntryType) -> Color {
    match entry_type {
        EntryType::Income => Color::Green,
        EntryType::Expense => Color::Red,
    }
}

fn pane_border(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_summary(f: &mut Frame, area: Rect, app: &App) {
    let summary = app.ledger.summary();
    let balance_color = match summary.tone() {
        BalanceTone::NonNegative => Color::LightGreen,
        BalanceTone::Negative => Color::LightRed,
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let figures = [
        ("INCOME", summary.income, Color::Green),
        ("EXPENSES", summary.expenses, Color::Red),
        ("BALANCE", summary.balance, balance_color),
    ];

    for ((label, value, color), column) in figures.into_iter().zip(columns.iter()) {
        let text = vec![
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                format_amount(value),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ];
        let figure = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));
        f.render_widget(figure, *column);
    }
}

/// Field values as shown in a form, with the focused one marked
fn field_spans(editor: &EntryEditor, highlight_focus: bool) -> Vec<(EditorField, Span<'static>)> {
    EditorField::ALL
        .iter()
        .map(|field| {
            let (text, mut style) = match field {
                EditorField::Type => (
                    editor.entry_type().label().to_string(),
                    Style::default().fg(type_color(editor.entry_type())),
                ),
                EditorField::Amount => (
                    if editor.amount().is_empty() {
                        "0.00".to_string()
                    } else {
                        editor.amount().to_string()
                    },
                    if editor.amount().is_empty() {
                        Style::default().fg(Color::DarkGray)
                    } else {
                        Style::default()
                    },
                ),
                EditorField::Category => match editor.category() {
                    Some(category) => (category.to_string(), Style::default()),
                    None => ("Select".to_string(), Style::default().fg(Color::DarkGray)),
                },
                EditorField::Date => (editor.date().to_string(), Style::default()),
                EditorField::Description => {
                    if editor.description().is_empty() {
                        (
                            "Details (optional)".to_string(),
                            Style::default().fg(Color::DarkGray),
                        )
                    } else {
                        (editor.description().to_string(), Style::default())
                    }
                }
            };

            if highlight_focus && *field == editor.focus() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            (*field, Span::styled(text, style))
        })
        .collect()
}

fn render_composer(f: &mut Frame, area: Rect, app: &App) {
    let active = app.pane == Pane::Composer && !app.list.is_editing();

    let mut spans = vec![];
    for (i, (field, value)) in field_spans(&app.composer, active).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }
        spans.push(Span::styled(
            format!("{}: ", field.label()),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(value);
    }
    spans.push(Span::raw("   "));
    let submit_style = if app.composer.is_complete(pocket_ledger::today()) {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    spans.push(Span::styled(
        format!("[Enter] {}", app.composer.submit_label()),
        submit_style,
    ));

    let composer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(pane_border(active))
            .title(" New Entry "),
    );

    f.render_widget(composer, area);
}

fn render_entries(f: &mut Frame, area: Rect, app: &App) {
    let active = app.pane == Pane::List || app.list.is_editing();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(pane_border(active))
        .title(format!(" Entries ({}) ", app.ledger.len()));

    if app.ledger.is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let header_cells = ["Type", "Amount", "Category", "Date", "Description"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.list.rows(app.ledger.entries()).into_iter().map(|row| match row {
        ListRow::Display(entry) => {
            let color = type_color(entry.entry_type);
            Row::new(vec![
                Cell::from(entry.entry_type.badge()).style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Cell::from(format_amount(entry.amount)),
                Cell::from(entry.category.as_str()).style(Style::default().fg(Color::Gray)),
                Cell::from(format_date(entry.date)).style(Style::default().fg(Color::Gray)),
                Cell::from(truncate(&entry.description, DESCRIPTION_MAX_LEN)),
            ])
            .height(1)
        }
        ListRow::Editing(_, editor) => {
            let cells: Vec<Cell> = field_spans(editor, true)
                .into_iter()
                .map(|(_, span)| Cell::from(Line::from(span)))
                .collect();
            Row::new(cells)
                .style(Style::default().bg(Color::Blue))
                .height(1)
        }
    });

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    let mut state = TableState::default().with_selected(app.list.selected_index());
    f.render_stateful_widget(table, area, &mut state);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let mut status_spans = vec![];
    if let Some(message) = &app.status {
        status_spans.push(Span::styled(
            format!(" {} ", message),
            Style::default().fg(Color::Green),
        ));
        status_spans.push(Span::raw("| "));
    }

    if let Some(editor) = app.list.editor() {
        status_spans.extend([
            key("↑/↓"),
            Span::raw(" Field | "),
            key("←/→"),
            Span::raw(" Choose | "),
            key("Enter"),
            Span::raw(format!(" {} | ", editor.submit_label())),
            key("Esc"),
            Span::raw(" Cancel"),
        ]);
    } else {
        match app.pane {
            Pane::Composer => status_spans.extend([
                key("↑/↓"),
                Span::raw(" Field | "),
                key("←/→"),
                Span::raw(" Choose | "),
                key("Enter"),
                Span::raw(" Add | "),
                key("Tab"),
                Span::raw(" Entries"),
            ]),
            Pane::List => status_spans.extend([
                key("↑/↓"),
                Span::raw(" Nav | "),
                key("e"),
                Span::raw(" Edit | "),
                key("d"),
                Span::raw(" Delete | "),
                key("Tab"),
                Span::raw(" New entry | "),
            ]),
        }
    }

    if app.pane == Pane::List && !app.list.is_editing() {
        status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
        status_spans.push(Span::raw(" Quit"));
    } else {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled("Ctrl-C", Style::default().fg(Color::Red)));
        status_spans.push(Span::raw(" Quit"));
    }

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}
