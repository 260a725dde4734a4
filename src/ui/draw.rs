// ui/draw.rs

use crate::app::App;
use crate::screen::Screen;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use super::{api_key_input, chat, life_analysis, main_menu, simulation, spinner::spinner_frame};

pub const MIN_WIDTH: u16 = 90;
pub const MIN_HEIGHT: u16 = 30;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let warning = Paragraph::new("Terminal too small. Please resize.")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        f.render_widget(warning, size);
        return;
    }

    match &app.screen {
        Screen::MainMenu { tab } => {
            let tab = *tab;
            main_menu::draw_main_menu(f, app, tab);
        }
        Screen::Simulation { .. } => simulation::draw_simulation(f, app),
        Screen::Chat { .. } => chat::draw_chat(f, app),
        Screen::ApiKeyInput => api_key_input::draw_api_key_input(f, app),
    }

    if let Some((planet, analysis)) = &app.life_analysis {
        life_analysis::draw_life_analysis(f, planet, analysis);
    }

    app.update_spinner();
    if app.spinner_active {
        let spinner_area = Rect::new(size.x, size.bottom() - 1, size.width, 1);
        let spinner_widget = Paragraph::new(spinner_frame(&app.spinner))
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center);
        f.render_widget(spinner_widget, spinner_area);
    }
}
