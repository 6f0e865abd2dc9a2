//! Help tab view

use crate::app::App;
use crate::ui::section_header;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let source = match &app.source {
        Some(path) => path.display().to_string(),
        None => "bundled bestiary".to_string(),
    };

    let lines = vec![
        section_header("Navigation"),
        key_line("1-4", "Jump to tab (Bestiary/Sheet/Calc/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select monster or attribute / scroll"),
        key_line("Enter", "Open the selected monster's sheet"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section_header("Editing"),
        key_line("←/→", "Step selected attribute die down/up"),
        key_line("x", "Unset selected attribute"),
        key_line("+ / -", "Raise/lower level"),
        key_line("w / W", "Raise/lower physical weight"),
        key_line("z", "Randomize attributes"),
        key_line("r", "Reload from source (drops edits)"),
        Line::from(""),
        section_header("Source"),
        Line::from(Span::styled(format!("  {}", source), Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            "  Log: monster_tui.log (filter with MONSTER_TUI_LOG)",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
