// ui/mod.rs

mod api_key_input;
pub mod chat;
mod constants;
mod draw;
pub mod input;
mod life_analysis;
mod main_menu;
pub mod planet_form;
mod simulation;
pub mod spinner;

pub use draw::{MIN_HEIGHT, MIN_WIDTH, draw};
