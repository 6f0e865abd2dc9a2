//! Breakdown tab - shows how each derived value is calculated

use crate::app::App;
use crate::ui::{die_label, section_header};
use monster_core::{DieSize, SkillDiceBreakdown};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ])
        .split(area);

    draw_monster_breakdown(f, app, chunks[0]);
    draw_formulas(f, chunks[1]);
}

fn draw_monster_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let (Some(monster), Some(stats)) = (app.current_monster(), app.derived()) else {
        let block = block.title(" Breakdown ");
        f.render_widget(Paragraph::new("No monster selected.").block(block), area);
        return;
    };
    let attrs = &monster.attributes;

    let mut lines: Vec<Line> = vec![];

    lines.push(section_header("Weapon Skill"));
    lines.extend(pool_breakdown(("Attack", attrs.attack), ("Bravery", attrs.bravery), &stats.weapon_skill));
    lines.push(Line::from(""));

    lines.push(section_header("Armor Skill"));
    lines.extend(pool_breakdown(("Defence", attrs.defence), ("Fortitude", attrs.fortitude), &stats.armor_skill));
    lines.push(Line::from(""));

    lines.push(section_header("Willpower"));
    lines.extend(pool_breakdown(("Support", attrs.support), ("Bravery", attrs.bravery), &stats.willpower));
    lines.push(Line::from(""));

    lines.push(section_header("Dodge"));
    lines.push(detail_line(format!(
        "Defence {} + Intellect {} + Level {} - Weight {}",
        stats.defence, stats.intellect, monster.level, monster.physical_weight
    )));
    lines.push(result_line(format!("= {}", stats.dodge), stats.dodge < 0));

    let paragraph = Paragraph::new(lines)
        .block(block.title(format!(" {} Breakdown ", monster.name)))
        .scroll((app.breakdown_scroll as u16, 0));

    f.render_widget(paragraph, area);
}

fn pool_breakdown(
    first: (&str, Option<DieSize>),
    second: (&str, Option<DieSize>),
    breakdown: &SkillDiceBreakdown,
) -> Vec<Line<'static>> {
    vec![
        detail_line(format!(
            "{} {} -> {}   {} {} -> {}",
            first.0,
            die_label(first.1),
            breakdown.first_contribution,
            second.0,
            die_label(second.1),
            breakdown.second_contribution,
        )),
        detail_line(format!(
            "max(1, ceil({} / 2))",
            breakdown.total
        )),
        result_line(format!("= {} dice", breakdown.count), false),
    ]
}

fn detail_line(text: String) -> Line<'static> {
    Line::from(Span::styled(format!("  {}", text), Style::default().fg(Color::Gray)))
}

fn result_line(text: String, negative: bool) -> Line<'static> {
    let color = if negative { Color::Red } else { Color::Green };
    Line::from(Span::styled(format!("  {}", text), Style::default().fg(color)))
}

fn draw_formulas(f: &mut Frame, area: Rect) {
    let lines = vec![
        section_header("Formulas"),
        Line::from(""),
        Line::from(Span::styled("Numeric value:", Style::default().fg(Color::Yellow))),
        Line::from("  Face count of the die, 0 if unset"),
        Line::from(""),
        Line::from(Span::styled("Skill dice contribution:", Style::default().fg(Color::Yellow))),
        Line::from("  round(faces / 2), 0 if unset"),
        Line::from("  D4 2  D6 3  D8 4  D10 5  D12 6"),
        Line::from(""),
        Line::from(Span::styled("Skill dice count:", Style::default().fg(Color::Yellow))),
        Line::from("  max(1, ceil((c1 + c2) / 2))"),
        Line::from("  Weapon    = Attack + Bravery"),
        Line::from("  Armor     = Defence + Fortitude"),
        Line::from("  Willpower = Support + Bravery"),
        Line::from(""),
        Line::from(Span::styled("Dodge:", Style::default().fg(Color::Yellow))),
        Line::from("  Defence + Intellect + Level - Weight"),
        Line::from("  Not clamped, can go negative"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Formulas "));

    f.render_widget(paragraph, area);
}
