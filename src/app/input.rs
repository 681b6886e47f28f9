use crossterm::event::KeyCode;
use std::time::Instant;

use crate::app::{App, Navigable, WheelOutcome};

/// Whether an input event was consumed by the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Consumed; the event must not reach any other binding
    Yes,
    No,
}

impl App {
    /// Directional keys move the carousel one room. They are consumed even at
    /// the ends of the list, where the step itself is a no-op.
    pub fn handle_carousel_key(&mut self, key_code: KeyCode) -> Handled {
        let changed = match key_code {
            KeyCode::Up | KeyCode::Left => self.rooms.previous_item(),
            KeyCode::Down | KeyCode::Right => self.rooms.next_item(),
            KeyCode::Home => self.rooms.first_item(),
            KeyCode::End => self.rooms.last_item(),
            _ => return Handled::No,
        };
        if changed {
            self.on_room_changed("key");
        }
        Handled::Yes
    }

    /// Feeds one raw wheel delta; positive deltas move forward
    pub fn handle_wheel(&mut self, delta: f64, now: Instant) -> bool {
        match self.wheel.feed(delta, now) {
            WheelOutcome::Step(direction) => {
                let changed = self.rooms.step(direction);
                tracing::debug!(direction, changed, "wheel step");
                if changed {
                    self.on_room_changed("wheel");
                }
                changed
            }
            WheelOutcome::Cooling => {
                tracing::trace!(accumulated = self.wheel.accumulated(), "wheel step held back");
                false
            }
            WheelOutcome::Pending => false,
        }
    }

    /// One terminal scroll event; `forward` is scroll down/right
    pub fn handle_scroll_notch(&mut self, forward: bool, now: Instant) -> bool {
        let delta = if forward {
            self.wheel_notch_delta
        } else {
            -self.wheel_notch_delta
        };
        self.handle_wheel(delta, now)
    }

    /// A click on the room at `index`
    pub fn handle_click(&mut self, index: usize) -> bool {
        let changed = self.rooms.jump_to(index);
        if changed {
            self.on_room_changed("click");
        }
        changed
    }

    pub fn handle_touch_start(&mut self, column: u16, row: u16) {
        self.touch.begin(column, row);
    }

    pub fn handle_touch_move(&mut self, column: u16, row: u16) {
        self.touch.moved(column, row);
    }

    /// Ends a drag gesture. Swipes are logged only; they never move the carousel.
    pub fn handle_touch_end(&mut self, column: u16, row: u16) {
        if let Some(swipe) = self.touch.end(column, row) {
            tracing::debug!(dx = swipe.dx, dy = swipe.dy, "drag gesture finished");
        }
    }

    fn on_room_changed(&mut self, source: &str) {
        let Some(room) = self.rooms.active_item() else {
            return;
        };
        tracing::info!(room_id = room.id, room = %room.name, source, "active room changed");
        let message = room.name.to_uppercase();
        self.show_status_toast(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::time::Duration;

    fn app() -> App {
        App::new(&Config::default(), None)
    }

    fn refreshes(app: &App) -> usize {
        app.rooms.presenter().refreshes()
    }

    #[test]
    fn test_arrow_keys_step_once() {
        let mut app = app();
        assert_eq!(app.handle_carousel_key(KeyCode::Down), Handled::Yes);
        assert_eq!(app.rooms.active(), Some(1));
        assert_eq!(refreshes(&app), 2);

        assert_eq!(app.handle_carousel_key(KeyCode::Up), Handled::Yes);
        assert_eq!(app.rooms.active(), Some(0));
        assert_eq!(refreshes(&app), 3);
        assert_eq!(app.status_toast_message(), Some("GENERAL"));
    }

    #[test]
    fn test_keys_at_edge_are_consumed_without_change() {
        let mut app = app();
        assert_eq!(app.handle_carousel_key(KeyCode::Left), Handled::Yes);
        assert_eq!(app.rooms.active(), Some(0));
        assert_eq!(refreshes(&app), 1);
        assert!(app.status_toast.is_none());
    }

    #[test]
    fn test_other_keys_pass_through() {
        let mut app = app();
        assert_eq!(app.handle_carousel_key(KeyCode::Enter), Handled::No);
        assert_eq!(app.handle_carousel_key(KeyCode::Char('q')), Handled::No);
        assert_eq!(refreshes(&app), 1);
    }

    #[test]
    fn test_home_and_end() {
        let mut app = app();
        app.handle_carousel_key(KeyCode::End);
        assert_eq!(app.rooms.active(), Some(3));
        app.handle_carousel_key(KeyCode::Home);
        assert_eq!(app.rooms.active(), Some(0));
    }

    #[test]
    fn test_three_notches_make_one_step() {
        let mut app = app();
        let start = Instant::now();

        assert!(!app.handle_scroll_notch(true, start));
        assert!(!app.handle_scroll_notch(true, start + Duration::from_millis(10)));
        assert!(app.handle_scroll_notch(true, start + Duration::from_millis(20)));
        assert_eq!(app.rooms.active(), Some(1));
        assert_eq!(refreshes(&app), 2);
    }

    #[test]
    fn test_wheel_burst_within_cooldown_steps_once() {
        let mut app = app();
        let start = Instant::now();

        assert!(app.handle_wheel(35.0, start));
        assert!(!app.handle_wheel(35.0, start + Duration::from_millis(40)));
        assert_eq!(app.rooms.active(), Some(1));
        assert!(app.handle_wheel(0.0, start + Duration::from_millis(130)));
        assert_eq!(app.rooms.active(), Some(2));
    }

    #[test]
    fn test_wheel_past_end_does_not_notify() {
        let mut app = app();
        let start = Instant::now();
        assert!(!app.handle_wheel(-50.0, start));
        assert_eq!(app.rooms.active(), Some(0));
        assert_eq!(refreshes(&app), 1);
    }

    #[test]
    fn test_click_jumps() {
        let mut app = app();
        assert!(app.handle_click(2));
        assert!(!app.handle_click(2));
        assert!(!app.handle_click(42));
        assert_eq!(app.rooms.active(), Some(2));
        assert_eq!(refreshes(&app), 2);
    }

    #[test]
    fn test_drag_never_moves_carousel() {
        let mut app = app();
        app.handle_touch_start(5, 20);
        app.handle_touch_move(5, 10);
        app.handle_touch_end(5, 2);
        assert_eq!(app.rooms.active(), Some(0));
        assert_eq!(refreshes(&app), 1);
        assert!(!app.touch.is_active());
    }

    #[test]
    fn test_empty_room_list_ignores_all_input() {
        let config = Config {
            rooms: Vec::new(),
            ..Config::default()
        };
        let mut app = App::new(&config, None);
        let start = Instant::now();

        for step in 0..10u64 {
            assert_eq!(app.handle_carousel_key(KeyCode::Down), Handled::Yes);
            app.handle_wheel(100.0, start + Duration::from_millis(step * 200));
        }
        assert!(!app.handle_click(0));
        assert_eq!(app.rooms.active(), None);
        assert_eq!(refreshes(&app), 1);
    }
}
