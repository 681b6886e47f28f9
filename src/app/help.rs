use crate::app::{App, AppMode};

impl App {
    pub fn open_help(&mut self) {
        self.touch.cancel();
        self.mode = AppMode::Help;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Rooms;
    }
}
