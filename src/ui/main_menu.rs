// src/ui/main_menu.rs

use super::{
    constants::{ART, TITLE},
    planet_form,
};
use crate::{
    app::{App, InputMode},
    message::MessageType,
    persona::LUMINARIES,
    screen::MenuTab,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::*,
};
use strum::IntoEnumIterator;

// Function to draw the main menu interface.
pub fn draw_main_menu(f: &mut Frame, app: &mut App, tab: MenuTab) {
    let size = f.area();

    // Define layout constraints for different sections of the main menu.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Max(1),
                Constraint::Length(if size.height > 44 { 16 } else { 0 }),
                Constraint::Length(6),
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Max(2),
                Constraint::Max(1),
            ]
            .as_ref(),
        )
        .split(size);

    render_header(f, chunks[0]);
    if size.height > 44 {
        render_art(f, chunks[1]);
    }
    render_title(f, chunks[2]);
    render_tabs(f, tab, chunks[3]);
    match tab {
        MenuTab::Explore | MenuTab::Life => render_planet_list(f, app, tab, chunks[4]),
        MenuTab::Create => planet_form::draw_planet_form(f, app, chunks[4]),
        MenuTab::Luminaries => render_luminaries(f, app, chunks[4]),
        MenuTab::Astronaut => render_astronaut(f, chunks[4]),
    }
    render_console(f, app, chunks[5]);
    render_status(f, app, tab, chunks[6]);
}

// Function to render the header section of the menu.
fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(format!("Planetfall v{}", env!("CARGO_PKG_VERSION")))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

// Function to render the art section of the menu.
fn render_art(f: &mut Frame, area: Rect) {
    let art = Paragraph::new(ART)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green));
    f.render_widget(art, area);
}

// Function to render the title section of the menu.
fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green));
    f.render_widget(title, area);
}

fn render_tabs(f: &mut Frame, tab: MenuTab, area: Rect) {
    let titles: Vec<Line> = MenuTab::iter().map(|t| Line::from(t.to_string())).collect();
    let selected = MenuTab::iter().position(|t| t == tab).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_planet_list(f: &mut Frame, app: &mut App, tab: MenuTab, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let title = match tab {
        MenuTab::Life => " Analyze life on… ",
        _ => " Choose a planet ",
    };
    let items: Vec<ListItem> = app
        .planets
        .iter()
        .map(|planet| ListItem::new(planet.name.clone()))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Green)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    f.render_stateful_widget(list, chunks[0], &mut app.planet_menu_state);

    let selected = app.planet_menu_state.selected().unwrap_or(0);
    let description = app
        .planets
        .get(selected)
        .map(|planet| planet.description.clone())
        .unwrap_or_default();
    let details = Paragraph::new(description)
        .block(Block::default().borders(Borders::ALL).title(" About "))
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });
    f.render_widget(details, chunks[1]);
}

fn render_luminaries(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = LUMINARIES
        .iter()
        .map(|luminary| {
            ListItem::new(Line::from(vec![
                Span::raw(luminary.name),
                Span::styled(
                    format!("  ({})", luminary.lifespan),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Talk to a great mind ")
                .border_style(Style::default().fg(Color::Green)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    f.render_stateful_widget(list, chunks[0], &mut app.luminary_menu_state);

    let selected = app.luminary_menu_state.selected().unwrap_or(0);
    let bio = LUMINARIES
        .get(selected)
        .map(|luminary| luminary.bio)
        .unwrap_or_default();
    let details = Paragraph::new(bio)
        .block(Block::default().borders(Borders::ALL).title(" Persona "))
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });
    f.render_widget(details, chunks[1]);
}

fn render_astronaut(f: &mut Frame, area: Rect) {
    let text = "A veteran astronaut is on the line.\n\n\
                Ask about re-entry, exoplanets, or what Earth looks like from orbit.\n\n\
                Press Enter to start the conversation.";
    let invite = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Mission control ")
                .border_style(Style::default().fg(Color::Green)),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(invite, area);
}

// Function to render the console section of the menu.
fn render_console(f: &mut Frame, app: &App, area: Rect) {
    let console_message = app
        .console
        .last()
        .filter(|content| content.message_type == MessageType::System)
        .map(|content| {
            Paragraph::new(content.content.to_string())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow))
        });

    if let Some(message) = console_message {
        f.render_widget(message, area);
    }
}

// Function to render the status bar at the bottom of the menu.
fn render_status(f: &mut Frame, app: &App, tab: MenuTab, area: Rect) {
    let status_message = match tab {
        MenuTab::Create if app.input_mode == InputMode::Editing => {
            "Type into the focused field, Tab/↓ next field, Enter to simulate, Esc to stop editing"
        }
        MenuTab::Create => "Press 'e' or Enter to edit the form, Tab to switch tabs, q to quit",
        MenuTab::Astronaut => "Press Enter to start the chat, Tab to switch tabs, q to quit",
        _ => "↑↓ and Enter to select, i to view the planet, Tab to switch tabs, q to quit",
    };
    let status = Paragraph::new(status_message)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(status, area);
}
