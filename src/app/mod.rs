mod carousel;
mod help;
mod input;
mod navigation;
mod touch;
mod types;
mod wheel;

pub use carousel::{Carousel, Slot, SlotCache};
pub use input::Handled;
pub use navigation::Navigable;
pub use touch::TouchGesture;
pub use types::*;
pub use wheel::{WheelDebounce, WheelOutcome, WheelSettings};

use crate::config::Config;
use crate::protocol;
use std::time::Duration;

/// Application mode state
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Rooms,
    Help,
}

/// Main application state
pub struct App {
    pub mode: AppMode,
    pub should_quit: bool,
    pub rooms: Carousel<Room, SlotCache>,
    pub wheel: WheelDebounce,
    pub wheel_notch_delta: f64,
    pub touch: TouchGesture,
    pub server_url: String,
    pub display_name: String,
    /// Route of the room picked with Enter, printed on exit
    pub chosen_route: Option<String>,
    pub status_toast: Option<StatusToast>,
}

impl App {
    /// Creates the picker. `route` selects the initial room (`/chat/<id>`);
    /// unknown or missing routes start on the first room.
    pub fn new(config: &Config, route: Option<&str>) -> Self {
        let wanted = route.and_then(protocol::parse_room_route);
        let rooms = Carousel::select_where(
            config.rooms.clone(),
            |room| Some(room.id) == wanted,
            SlotCache::default(),
        );
        if let Some(route) = route
            && wanted.is_none()
        {
            tracing::warn!(route, "ignoring malformed room route");
        }

        Self {
            mode: AppMode::Rooms,
            should_quit: false,
            rooms,
            wheel: WheelDebounce::new(config.carousel.wheel_settings()),
            wheel_notch_delta: config.carousel.wheel_notch_delta,
            touch: TouchGesture::new(),
            server_url: config.chat.server_url.clone(),
            display_name: config.display_name(),
            chosen_route: None,
            status_toast: None,
        }
    }

    #[must_use]
    pub fn active_room(&self) -> Option<&Room> {
        self.rooms.active_item()
    }

    /// Picks the active room and quits. Does nothing when there are no rooms.
    pub fn choose_active_room(&mut self) {
        if let Some(room) = self.active_room() {
            let route = room.route();
            tracing::info!(room_id = room.id, %route, "room chosen");
            self.chosen_route = Some(route);
            self.should_quit = true;
        }
    }

    pub fn show_status_toast(&mut self, message: impl Into<String>) {
        self.status_toast = Some(StatusToast::new(message));
    }

    pub fn clear_expired_status_toast(&mut self) {
        let should_clear = self
            .status_toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(Duration::from_secs(3)));
        if should_clear {
            self.status_toast = None;
        }
    }

    #[must_use]
    pub fn status_toast_message(&self) -> Option<&str> {
        self.status_toast.as_ref().map(|toast| toast.message.as_str())
    }
}
