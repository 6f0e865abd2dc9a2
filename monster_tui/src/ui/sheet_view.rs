//! Monster sheet tab - editable attributes and derived values

use crate::app::App;
use crate::ui::{die_label, section_header, stat_line};
use monster_core::CoreAttribute;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    draw_attributes(f, app, chunks[0]);
    draw_derived(f, app, chunks[1]);
}

fn draw_attributes(f: &mut Frame, app: &App, area: Rect) {
    let Some(monster) = app.current_monster() else {
        let block = Block::default().borders(Borders::ALL).title(" Attributes ");
        f.render_widget(Paragraph::new("No monster selected.").block(block), area);
        return;
    };

    let mut lines = vec![
        section_header("Profile"),
        stat_line("Level", monster.level),
        stat_line("Physical Weight", monster.physical_weight),
        Line::from(""),
        section_header("Core Attributes"),
    ];

    let selected = app.current_attribute();
    for attr in CoreAttribute::all() {
        let is_selected = *attr == selected;
        let die = monster.attributes.get(*attr);
        let name_style = if is_selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let die_style = match die {
            Some(_) => Style::default().fg(Color::White),
            None => Style::default().fg(Color::DarkGray),
        };

        lines.push(Line::from(vec![
            Span::styled(if is_selected { "► " } else { "  " }, name_style),
            Span::styled(format!("{:18}", attr.name()), name_style),
            Span::styled(format!("◄ {:>3} ►", die_label(die)), die_style),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", monster.name)),
    );

    f.render_widget(paragraph, area);
}

fn draw_derived(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Derived ");
    let Some(stats) = app.derived() else {
        f.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let mut lines = vec![section_header("Numeric Values")];
    for attr in CoreAttribute::all() {
        lines.push(stat_line(attr.name(), stats.numeric(*attr)));
    }
    lines.push(Line::from(""));
    lines.push(section_header("Skill Dice"));
    lines.push(stat_line("Weapon Skill", stats.weapon_skill_dice()));
    lines.push(stat_line("Armor Skill", stats.armor_skill_dice()));
    lines.push(stat_line("Willpower", stats.willpower_dice()));
    lines.push(Line::from(""));
    lines.push(section_header("Defense"));
    lines.push(stat_line("Dodge", stats.dodge));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
