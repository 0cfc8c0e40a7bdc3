//! Rendering routines for the records terminal client.

use crate::app::App;
use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

/// Draw the entire frame from the current application state.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(0),    // record list
            Constraint::Length(3), // input
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    let header = Paragraph::new(Line::from(Span::styled(
        "Records",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, root[0]);

    draw_records(frame, app, root[1]);

    let input = Paragraph::new(app.draft.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("New record (Enter to submit)"),
    );
    frame.render_widget(input, root[2]);

    draw_status_bar(frame, app, root[3]);
}

fn draw_records(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let block = Block::default().borders(Borders::ALL).title("Record list");

    if app.records.is_empty() {
        let placeholder = Paragraph::new("No records found")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem<'_>> = app
        .records
        .iter()
        .map(|record| {
            let timestamp = record
                .created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S");
            ListItem::new(vec![
                Line::from(record.content.clone()),
                Line::from(Span::styled(
                    timestamp.to_string(),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_status_bar(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let status = if app.is_loading {
        Line::from(Span::styled("Loading...", Style::default().fg(Color::Yellow)))
    } else if let Some(error) = &app.error {
        Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
    } else {
        Line::from(Span::styled(
            "Ctrl+R: refresh  Esc: quit",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(status), area);
}
