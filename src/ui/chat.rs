// ui/chat.rs

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::Line,
    widgets::*,
};
use strum::IntoEnumIterator;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::{
    ai::ChatSession,
    app::{App, InputMode},
    markup,
    message::MessageType,
    persona::CityRole,
    screen::Screen,
};

pub fn resident_roles() -> Vec<CityRole> {
    CityRole::iter().collect()
}

/// Wraps and markup-renders the transcript into display lines. User messages
/// sit right in cyan, the persona's answers left in green, console notices
/// centered in yellow.
pub fn parse_transcript(
    session: &ChatSession,
    max_width: usize,
) -> Vec<(Line<'static>, Alignment)> {
    let mut all_lines = Vec::new();

    for (i, message) in session.transcript.iter().enumerate() {
        let (base_style, alignment) = match message.message_type {
            MessageType::User => (Style::default().fg(Color::Cyan), Alignment::Right),
            MessageType::Model => (Style::default().fg(Color::Green), Alignment::Left),
            MessageType::System => (Style::default().fg(Color::Yellow), Alignment::Center),
        };

        if i > 0 {
            all_lines.push((Line::default(), Alignment::Left));
        }

        let wrapped_lines = textwrap::wrap(&message.content, max_width);
        for line in wrapped_lines {
            let parsed_line = markup::styled_line(&line, base_style);
            all_lines.push((parsed_line, alignment));
        }
    }

    all_lines
}

pub fn draw_chat(f: &mut Frame, app: &mut App) {
    let Screen::Chat {
        planet,
        target,
        session,
        ..
    } = &app.screen
    else {
        return;
    };
    let title = format!(" {} - {} ", target.display_name(), planet.name);
    let session_empty = session.transcript.is_empty();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(5)])
        .split(f.area());

    draw_transcript(f, app, &title, session_empty, chunks[0]);
    draw_user_input(f, app, chunks[1]);
}

fn draw_transcript(f: &mut Frame, app: &mut App, title: &str, empty: bool, area: Rect) {
    let transcript_block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    f.render_widget(&transcript_block, area);
    let inner_area = transcript_block.inner(area);

    let max_width = inner_area.width.saturating_sub(2) as usize;
    let max_height = inner_area.height as usize;

    app.update_cached_content(max_width);

    let visible_lines: Vec<Line> = match app.cached_chat_lines.as_ref() {
        Some(all_lines) => {
            app.total_lines = all_lines.len();
            all_lines
                .iter()
                .skip(app.chat_scroll)
                .take(max_height)
                .map(|(line, alignment)| {
                    let mut new_line = line.clone();
                    new_line.alignment = Some(*alignment);
                    new_line
                })
                .collect()
        }
        None => Vec::new(),
    };

    if empty {
        let hint = Paragraph::new("Say hello - your conversation partner is listening.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hint, inner_area);
    } else {
        let content = Paragraph::new(visible_lines).wrap(Wrap { trim: true });
        f.render_widget(content, inner_area);
    }

    app.visible_lines = max_height;
    app.update_scroll();
}

fn draw_user_input(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(match app.input_mode {
            InputMode::Normal => " Press 'e' to write, ↑↓ to scroll, Esc to leave the chat ",
            InputMode::Editing => " Message - Enter to send, Esc to stop editing ",
        })
        .borders(Borders::ALL)
        .border_style(Style::default().fg(match app.input_mode {
            InputMode::Normal => Color::DarkGray,
            InputMode::Editing => Color::White,
        }));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let max_width = inner_area.width.saturating_sub(2) as usize;

    let text = app.chat_input.value();

    // Wrap the text manually, considering grapheme clusters and their widths
    let mut wrapped_lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for grapheme in text.graphemes(true) {
        let grapheme_width = grapheme.width();
        if current_width + grapheme_width > max_width {
            wrapped_lines.push(current_line);
            current_line = String::new();
            current_width = 0;
        }
        current_line.push_str(grapheme);
        current_width += grapheme_width;
    }
    if !current_line.is_empty() {
        wrapped_lines.push(current_line);
    }

    // Calculate cursor position
    let cursor_position = app.chat_input.visual_cursor();
    let mut cursor_x = 0;
    let mut cursor_y = 0;
    let mut total_width = 0;

    for (line_idx, line) in wrapped_lines.iter().enumerate() {
        let line_width: usize = line.width();
        if total_width + line_width >= cursor_position {
            cursor_y = line_idx;
            cursor_x = cursor_position - total_width;
            break;
        }
        total_width += line_width;
        cursor_y = line_idx + 1;
    }

    // Ensure cursor_x doesn't exceed the line width
    if cursor_y < wrapped_lines.len() {
        cursor_x = cursor_x.min(wrapped_lines[cursor_y].width());
    }

    let joined_lines = wrapped_lines.join("\n");

    let input = Paragraph::new(joined_lines)
        .style(Style::default().fg(match app.input_mode {
            InputMode::Normal => Color::DarkGray,
            InputMode::Editing => Color::Yellow,
        }))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(input, inner_area);

    // Adjust cursor position if it's beyond the visible area
    let visible_lines = inner_area.height.saturating_sub(1) as usize;
    if cursor_y >= visible_lines {
        cursor_y = visible_lines.saturating_sub(1);
    }

    // Set cursor
    if let InputMode::Editing = app.input_mode {
        f.set_cursor_position(Position::new(
            inner_area.x + cursor_x as u16,
            inner_area.y + cursor_y as u16,
        ));
    }
}
