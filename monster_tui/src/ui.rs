//! UI rendering

mod bestiary_view;
mod breakdown_view;
mod help_view;
mod sheet_view;

use crate::app::{App, Tab};
use monster_core::DieSize;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Bestiary => bestiary_view::draw(f, app, chunks[1]),
        Tab::Sheet => sheet_view::draw(f, app, chunks[1]),
        Tab::Breakdown => breakdown_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    let status = Paragraph::new(format!(" {}", app.status)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, chunks[2]);

    draw_keybindings(f, app, chunks[3]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![
        ("Tab", "Next tab"),
        ("q", "Quit"),
    ];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Bestiary => vec![
            ("↑/↓", "Select"),
            ("Enter", "Open sheet"),
        ],
        Tab::Sheet => vec![
            ("↑/↓", "Attribute"),
            ("←/→", "Die size"),
            ("+/-", "Level"),
            ("w/W", "Weight"),
            ("z", "Random"),
        ],
        Tab::Breakdown => vec![
            ("↑/↓", "Scroll"),
        ],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span<'static>> = Vec::new();
    push_key_hints(
        &mut spans,
        &tab_keys,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        Style::default().fg(Color::White),
    );
    push_key_hints(
        &mut spans,
        &common_keys,
        Style::default().fg(Color::Cyan),
        Style::default().fg(Color::Gray),
    );

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

/// Append `[key] desc` hints, separated from each other and from earlier spans
fn push_key_hints(spans: &mut Vec<Span<'static>>, keys: &[(&str, &str)], key_style: Style, desc_style: Style) {
    for (key, desc) in keys {
        if !spans.is_empty() {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("[{}]", key), key_style));
        spans.push(Span::styled(format!(" {}", desc), desc_style));
    }
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Monster Sheets "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub fn stat_line(name: &str, value: impl Into<i64>) -> Line<'static> {
    let value: i64 = value.into();
    let color = if value < 0 { Color::Red } else { Color::White };
    Line::from(vec![
        Span::styled(
            format!("{:20}", name),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("{}", value),
            Style::default().fg(color),
        ),
    ])
}

/// Die token, or a dash for an unset attribute
pub fn die_label(die: Option<DieSize>) -> String {
    match die {
        Some(die) => die.to_string(),
        None => "-".to_string(),
    }
}
