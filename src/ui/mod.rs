mod components;
mod help;
pub mod layout;
mod rooms;
mod utils;

use crate::app::{App, AppMode};
use ratatui::Frame;

pub fn render(f: &mut Frame, app: &App) {
    match app.mode {
        AppMode::Rooms => rooms::render_rooms_view(f, app),
        AppMode::Help => help::render_help_view(f),
    }
}
