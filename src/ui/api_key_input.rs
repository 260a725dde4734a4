// ui/api_key_input.rs

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Position},
    style::{Color, Style},
    widgets::*,
};

use crate::{app::App, message::MessageType};

pub fn draw_api_key_input(f: &mut Frame, app: &App) {
    let [area] = Layout::horizontal([Constraint::Length(70)])
        .flex(Flex::Center)
        .areas(f.area());
    let [area] = Layout::vertical([Constraint::Length(7)])
        .flex(Flex::Center)
        .areas(area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    let input_block = Block::default()
        .title(" OpenAI API key ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = input_block.inner(chunks[0]);
    f.render_widget(input_block, chunks[0]);

    let value = app.api_key_input.value().to_string();
    let input = Paragraph::new(value).style(Style::default().fg(Color::White));
    f.render_widget(input, inner);
    let cursor_x = inner.x + app.api_key_input.visual_cursor() as u16;
    f.set_cursor_position(Position::new(cursor_x.min(inner.right()), inner.y));

    let hint = Paragraph::new("Paste with Ctrl+V, validate with Enter, Esc to leave")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[1]);

    if let Some(message) = app
        .console
        .last()
        .filter(|m| m.message_type == MessageType::System)
    {
        let console = Paragraph::new(message.content.clone())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(console, chunks[2]);
    }
}
