use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs},
    Frame,
};

use super::app::{App, FormField, InputMode};
use super::theme;
use super::util::{format_amount, truncate};
use crate::controller::{EditState, WindowSummary};
use crate::models::Window;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Window tabs
            Constraint::Min(5),    // Records + totals
            Constraint::Length(3), // Form
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let summary = app.summary();
    render_tab_bar(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);
    render_records(f, body[0], app, &summary);
    render_totals(f, body[1], app, &summary);

    render_form(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let active = app.controller.state().window;
    let titles: Vec<Line> = Window::all()
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let style = if *w == active {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::dim_style()
            };
            Line::from(Span::styled(format!("{}:{w}", i + 1), style))
        })
        .collect();

    let tabs = Tabs::new(titles).divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)));
    f.render_widget(tabs, area);
}

fn render_records(f: &mut Frame, area: Rect, app: &App, summary: &WindowSummary) {
    let title = format!(" {} ({}) ", app.controller.state().window, summary.records.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ));

    if summary.records.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No expenses in this window", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled("Press a to add one", theme::dim_style())),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header = Row::new(
        ["Date", "Category", "Amount", "Note"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );

    let editing = app.controller.state().edit.editing_id();
    let rows: Vec<Row> = summary
        .records
        .iter()
        .enumerate()
        .skip(app.list_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, expense)| {
            let style = if Some(expense.id) == editing {
                theme::editing_row_style()
            } else if i == app.list_index && app.input_mode == InputMode::Normal {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(expense.date.clone()),
                Cell::from(truncate(&expense.category, 18)),
                Cell::from(format_amount(expense.amount)),
                Cell::from(truncate(expense.note_or_empty(), 30)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(18),
            Constraint::Length(14),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block);
    f.render_widget(table, area);
}

fn render_totals(f: &mut Frame, area: Rect, app: &App, summary: &WindowSummary) {
    let lines = match &summary.totals {
        Ok(totals) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Total  ", theme::dim_style()),
                    Span::styled(
                        format_amount(totals.total),
                        theme::amount_style().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(""),
            ];
            let width = area.width.saturating_sub(18) as usize;
            for (category, amount) in &totals.by_category {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<width$}", truncate(category, width)),
                        theme::normal_style(),
                    ),
                    Span::styled(format!(" {:>14}", format_amount(*amount)), theme::amount_style()),
                ]));
            }
            lines
        }
        Err(e) => vec![Line::from(Span::styled(e.to_string(), theme::error_style()))],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" By category: {} ", app.controller.state().window),
            Style::default().fg(theme::TEXT),
        ));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let state = app.controller.state();
    let title = match state.edit {
        EditState::Idle => " Add expense ".to_string(),
        EditState::Editing(id) => format!(" Edit expense #{id} "),
    };
    let active = app.input_mode == InputMode::Editing;

    let mut spans = Vec::new();
    for field in FormField::all() {
        let value = match field {
            FormField::Amount => &state.form.amount,
            FormField::Category => &state.form.category,
            FormField::Note => &state.form.note,
        };
        let focused = active && *field == app.focused;
        let value_style = if focused {
            theme::selected_style()
        } else {
            theme::normal_style()
        };
        spans.push(Span::styled(format!("{}: ", field.label()), theme::dim_style()));
        let shown = if focused {
            format!("{value}_")
        } else {
            value.clone()
        };
        spans.push(Span::styled(format!("{shown:<12}"), value_style));
        spans.push(Span::raw("  "));
    }

    let border = if active { theme::ACCENT } else { theme::OVERLAY };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(title, Style::default().fg(theme::TEXT)));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let hint = match app.input_mode {
        InputMode::Normal => "a add  e edit  d delete  1-3/Tab window  r reload  q quit",
        InputMode::Editing => "Tab next  Shift-Tab prev  Enter save  Esc cancel",
        InputMode::Confirm => "y confirm  any other key cancels",
    };
    let message_style = if app.status_is_error {
        theme::error_style()
    } else {
        theme::normal_style()
    };
    let line = Line::from(vec![
        Span::styled(format!(" {} ", app.input_mode), theme::header_style()),
        Span::raw(" "),
        Span::styled(app.status_message.clone(), message_style),
        Span::raw("  "),
        Span::styled(hint, theme::dim_style()),
    ]);
    f.render_widget(Paragraph::new(line).style(theme::status_bar_style()), area);
}
