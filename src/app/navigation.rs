/// Generic navigation trait for list-like UI components
/// Movement is clamped to the list: requests past either end are ignored, never wrapped
pub trait Navigable {
    /// Returns the total number of items in the list
    fn get_item_count(&self) -> usize;

    /// Returns the currently selected index
    fn get_selected_index(&self) -> usize;

    /// Sets the selected index
    ///
    /// Only called by the provided methods, with an in-range index that differs
    /// from the current one.
    fn set_selected_index(&mut self, index: usize);

    /// Moves the selection by `delta`. Returns true if the selection changed.
    fn step(&mut self, delta: isize) -> bool {
        let current = self.get_selected_index();
        let Some(target) = current.checked_add_signed(delta) else {
            return false;
        };
        if target >= self.get_item_count() || target == current {
            return false;
        }
        self.set_selected_index(target);
        true
    }

    /// Selects `index` directly. Returns true if the selection changed.
    fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.get_item_count() || index == self.get_selected_index() {
            return false;
        }
        self.set_selected_index(index);
        true
    }

    /// Moves to the next item (stops at the end)
    fn next_item(&mut self) -> bool {
        self.step(1)
    }

    /// Moves to the previous item (stops at the start)
    fn previous_item(&mut self) -> bool {
        self.step(-1)
    }

    fn first_item(&mut self) -> bool {
        self.jump_to(0)
    }

    fn last_item(&mut self) -> bool {
        match self.get_item_count().checked_sub(1) {
            Some(last) => self.jump_to(last),
            None => false,
        }
    }
}
