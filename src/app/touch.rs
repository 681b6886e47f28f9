/// Displacement of a finished drag gesture, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swipe {
    pub dx: i32,
    pub dy: i32,
}

/// Tracks a press-drag-release gesture
///
/// Gestures are only measured. How a swipe should map onto carousel steps is
/// still undecided, so nothing here moves the selection.
#[derive(Debug, Clone, Default)]
pub struct TouchGesture {
    start: Option<(u16, u16)>,
    last: Option<(u16, u16)>,
}

impl TouchGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a gesture, discarding any unfinished one
    pub fn begin(&mut self, column: u16, row: u16) {
        self.start = Some((column, row));
        self.last = Some((column, row));
    }

    /// Records movement; ignored when no gesture is in progress
    pub fn moved(&mut self, column: u16, row: u16) {
        if self.start.is_some() {
            self.last = Some((column, row));
        }
    }

    /// Finishes the gesture and returns its total displacement
    pub fn end(&mut self, column: u16, row: u16) -> Option<Swipe> {
        self.moved(column, row);
        let (start_column, start_row) = self.start.take()?;
        let (column, row) = self.last.take()?;
        Some(Swipe {
            dx: i32::from(column) - i32::from(start_column),
            dy: i32::from(row) - i32::from(start_row),
        })
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.last = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_reports_displacement() {
        let mut touch = TouchGesture::new();
        touch.begin(10, 5);
        touch.moved(12, 3);
        assert!(touch.is_active());
        assert_eq!(touch.end(14, 1), Some(Swipe { dx: 4, dy: -4 }));
        assert!(!touch.is_active());
    }

    #[test]
    fn test_move_without_begin_is_ignored() {
        let mut touch = TouchGesture::new();
        touch.moved(3, 3);
        assert!(!touch.is_active());
        assert_eq!(touch.end(3, 3), None);
    }

    #[test]
    fn test_cancel_drops_gesture() {
        let mut touch = TouchGesture::new();
        touch.begin(0, 0);
        touch.cancel();
        assert_eq!(touch.end(5, 5), None);
    }
}
