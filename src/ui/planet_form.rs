// ui/planet_form.rs

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::*,
};

use super::input::InputState;
use crate::{
    app::{App, InputMode},
    planet::CustomPlanetParams,
};

const FIELD_LABELS: &[&str] = &[
    "Name",
    "Planet type",
    "Atmosphere",
    "Gravity",
    "Dominant life",
    "Key resources",
    "Notes",
];

/// State of the custom planet creator: one input per field plus the focus.
#[derive(Debug, Clone)]
pub struct PlanetForm {
    inputs: Vec<InputState>,
    focused: usize,
}

impl Default for PlanetForm {
    fn default() -> Self {
        PlanetForm {
            inputs: vec![InputState::default(); FIELD_LABELS.len()],
            focused: 0,
        }
    }
}

impl PlanetForm {
    pub fn focused_input(&mut self) -> &mut InputState {
        &mut self.inputs[self.focused]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.inputs.len();
    }

    pub fn focus_previous(&mut self) {
        self.focused = (self.focused + self.inputs.len() - 1) % self.inputs.len();
    }

    pub fn to_params(&self) -> CustomPlanetParams {
        CustomPlanetParams {
            name: self.inputs[0].value().to_string(),
            planet_type: self.inputs[1].value().to_string(),
            atmosphere: self.inputs[2].value().to_string(),
            gravity: self.inputs[3].value().to_string(),
            life_form: self.inputs[4].value().to_string(),
            resources: self.inputs[5].value().to_string(),
            description: self.inputs[6].value().to_string(),
        }
    }
}

pub fn draw_planet_form(f: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Create a planet ")
        .border_style(Style::default().fg(if editing { Color::Yellow } else { Color::Green }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1); FIELD_LABELS.len()];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let label_width = 16;
    for (i, label) in FIELD_LABELS.iter().enumerate() {
        let form = &app.planet_form;
        let focused = editing && form.focused == i;
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let value_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let line = Line::from(vec![
            Span::styled(format!("{label:<label_width$}"), label_style),
            Span::styled(form.inputs[i].value().to_string(), value_style),
        ]);
        f.render_widget(Paragraph::new(line), rows[i]);

        if focused {
            let cursor_x = rows[i].x + label_width as u16 + form.inputs[i].visual_cursor() as u16;
            f.set_cursor_position(Position::new(cursor_x.min(rows[i].right()), rows[i].y));
        }
    }
}
