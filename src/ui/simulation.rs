// ui/simulation.rs

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::*,
};

use super::chat::resident_roles;
use crate::{app::App, markup, screen::Screen, simulation::SimulationData};

pub fn draw_simulation(f: &mut Frame, app: &mut App) {
    let Screen::Simulation { planet, report } = &app.screen else {
        return;
    };
    // Clones keep the borrow checker away from the stateful list below.
    let planet = planet.clone();
    let report = report.clone();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Max(1),
        ])
        .split(f.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            report.city_name.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  on {}", planet.name),
            Style::default().fg(Color::White),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);

    draw_report_panels(f, &report, body[0]);
    draw_target_menu(f, app, body[1]);

    let status =
        Paragraph::new("↑↓ pick an inhabitant, Enter to chat, i to render the city, Esc to go back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
    f.render_widget(status, chunks[2]);
}

fn draw_report_panels(f: &mut Frame, report: &SimulationData, area: Rect) {
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let base_style = Style::default().fg(Color::White);
    let sections = [
        (" Overview ", &report.city_overview),
        (" Lifestyle ", &report.lifestyle),
        (" Technology ", &report.technology),
    ];
    for (&(title, text), panel) in sections.iter().zip(panels.iter()) {
        let paragraph = Paragraph::new(markup::styled_lines(text, base_style))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, *panel);
    }
}

fn draw_target_menu(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = resident_roles()
        .iter()
        .map(|role| ListItem::new(role.to_string()))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Talk to an inhabitant ")
                .border_style(Style::default().fg(Color::Green)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    f.render_stateful_widget(list, area, &mut app.target_menu_state);
}
