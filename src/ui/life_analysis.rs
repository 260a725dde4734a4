// ui/life_analysis.rs

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::*,
};

use crate::{markup, planet::Planet, simulation::LifeAnalysisData};

/// Modal shown over the main menu once a life analysis arrives.
pub fn draw_life_analysis(f: &mut Frame, planet: &Planet, analysis: &LifeAnalysisData) {
    let area = center_rect(f.area(), 70, 75);
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Life analysis - {} ", planet.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let base_style = Style::default().fg(Color::White);

    let mut lines: Vec<Line> = Vec::new();
    let sections = [
        ("Possibility of life", &analysis.life_possibility),
        ("Dominant life form", &analysis.dominant_life_form),
        ("Reasoning", &analysis.reasoning),
        ("Adaptations", &analysis.adaptation_features),
    ];
    for (title, text) in sections {
        lines.push(Line::styled(title.to_string(), heading));
        lines.extend(markup::styled_lines(text, base_style));
        lines.push(Line::default());
    }

    let chunks = Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).split(inner);

    let content = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(content, chunks[0]);

    let hint = Paragraph::new("Enter/Esc to close, i to render the life form")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[1]);
}

fn center_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    area
}
