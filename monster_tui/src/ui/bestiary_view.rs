//! Bestiary tab view

use crate::app::App;
use crate::ui::{die_label, section_header, stat_line};
use monster_core::CoreAttribute;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(60),
        ])
        .split(area);

    draw_monster_list(f, app, chunks[0]);
    draw_summary(f, app, chunks[1]);
}

fn draw_monster_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .monsters
        .iter()
        .enumerate()
        .map(|(i, monster)| {
            let style = if i == app.selected_monster {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let prefix = if i == app.selected_monster { "► " } else { "  " };
            let incomplete = if monster.attributes.is_complete() { "" } else { " *" };
            ListItem::new(Line::from(Span::styled(
                format!("{}{} (L{}){}", prefix, monster.name, monster.level, incomplete),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Monsters (* = attributes not all set) "),
    );

    f.render_widget(list, area);
}

fn draw_summary(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Summary ");

    let (monster, stats) = match (app.current_monster(), app.derived()) {
        (Some(monster), Some(stats)) => (monster, stats),
        _ => {
            let empty = Paragraph::new("No monsters loaded.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(empty, area);
            return;
        }
    };

    let mut lines = vec![
        Line::from(Span::styled(
            monster.name.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(description) = &monster.description {
        lines.push(Line::from(Span::styled(
            description.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));

    lines.push(section_header("Attributes"));
    let dice: Vec<String> = CoreAttribute::all()
        .iter()
        .map(|attr| format!("{} {}", &attr.name()[..3], die_label(monster.attributes.get(*attr))))
        .collect();
    lines.push(Line::from(dice.join("  ")));
    lines.push(Line::from(""));

    lines.push(section_header("Combat"));
    lines.push(stat_line("Weapon Skill Dice", stats.weapon_skill_dice()));
    lines.push(stat_line("Armor Skill Dice", stats.armor_skill_dice()));
    lines.push(stat_line("Willpower Dice", stats.willpower_dice()));
    lines.push(stat_line("Dodge", stats.dodge));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
