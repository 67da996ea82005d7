use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
    Frame,
};
use todotab_core::{Presentation, EMPTY_MESSAGE};

use crate::tui::app::{AddField, App, FilterField, Mode, PendingAction};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Table
            Constraint::Length(4), // Form / status
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let header = Paragraph::new("TODOTAB")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_task_table(f, app, main_chunks[1]);
    draw_form_area(f, app, main_chunks[2]);

    // The alert takes over the footer until the next accepted action.
    let (footer_text, footer_style) = match &app.alert {
        Some(alert) => (
            alert.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None => (help_line(app), Style::default().fg(Color::DarkGray)),
    };
    let footer = Paragraph::new(footer_text)
        .style(footer_style)
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);
}

fn draw_task_table(f: &mut Frame, app: &mut App, area: Rect) {
    let rows: Vec<Row> = match &app.presentation {
        Presentation::Empty => vec![Row::new(vec![
            Span::raw(""),
            Span::styled(
                EMPTY_MESSAGE,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ),
            Span::raw(""),
            Span::raw(""),
            Span::raw(""),
        ])],
        Presentation::Rows(rendered) => rendered
            .iter()
            .map(|row| {
                let status_style = if row.status == "Done" {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Yellow)
                };
                Row::new(vec![
                    Span::raw(row.row_no.to_string()),
                    Span::styled(row.description.clone(), Style::default()),
                    Span::raw(row.due_date.clone()),
                    Span::styled(row.status.clone(), status_style),
                    Span::styled(row.action_label, Style::default().fg(Color::Cyan)),
                ])
            })
            .collect(),
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),  // Row number
            Constraint::Min(20),    // Description
            Constraint::Length(12), // Due date
            Constraint::Length(9),  // Status
            Constraint::Length(8),  // Action
        ],
    )
    .header(
        Row::new(vec!["No.", "Description", "Due Date", "Status", "Action"])
            .style(Style::default().fg(Color::Yellow)),
    )
    .block(
        Block::default()
            .title(" Tasks ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn draw_form_area(f: &mut Frame, app: &App, area: Rect) {
    match app.mode {
        Mode::Adding => draw_add_form(f, app, area),
        Mode::Filtering => draw_filter_form(f, app, area),
        Mode::Confirming(action) => draw_confirm_prompt(f, action, area),
        Mode::Normal => draw_status_lines(f, app, area),
    }
}

fn draw_add_form(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let description = Paragraph::new(app.description_input.value.as_str())
        .block(field_block(" Description ", app.add_focus == AddField::Description));
    f.render_widget(description, chunks[0]);

    let due_date = Paragraph::new(app.due_date_input.value.as_str())
        .block(field_block(" Due Date (YYYY-MM-DD) ", app.add_focus == AddField::DueDate));
    f.render_widget(due_date, chunks[1]);
}

fn draw_filter_form(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(10)])
        .split(area);

    let kind = Paragraph::new(app.kind_label())
        .block(field_block(" Filter Kind ", app.filter_focus == FilterField::Kind));
    f.render_widget(kind, chunks[0]);

    let query = Paragraph::new(app.query_input.value.as_str())
        .block(field_block(" Query ", app.filter_focus == FilterField::Query));
    f.render_widget(query, chunks[1]);
}

fn draw_confirm_prompt(f: &mut Frame, action: PendingAction, area: Rect) {
    let prompt = Paragraph::new(action.prompt())
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(prompt, area);
}

fn draw_status_lines(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![Line::from(Span::styled(
        app.filter_status(),
        Style::default().fg(Color::Blue),
    ))];

    let status = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style)
}

fn help_line(app: &App) -> &'static str {
    match app.mode {
        Mode::Normal => {
            "j/k: Navigate | Space: Toggle | a: Add | d: Delete | f: Filter | c: Clear filter | x: Clear all | q: Quit"
        }
        Mode::Adding => "Tab: Switch field | Enter: Add task | Esc: Back",
        Mode::Filtering => "Left/Right: Cycle kind | Tab: Switch field | Enter: Apply | Esc: Back",
        Mode::Confirming(_) => "y: Confirm | n: Cancel",
    }
}
