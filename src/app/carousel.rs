use crate::app::Navigable;

/// Presentation state for one carousel item, recomputed after every accepted change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub index: usize,
    /// Signed distance from the active item (`index - active`)
    pub offset: isize,
    pub active: bool,
    pub focusable: bool,
    /// Hidden from assistive output (screen readers, status lines)
    pub hidden: bool,
}

/// Receives the slot layout whenever the carousel changes
pub trait Presenter {
    fn refresh(&mut self, slots: &[Slot]);
}

impl<F> Presenter for F
where
    F: FnMut(&[Slot]),
{
    fn refresh(&mut self, slots: &[Slot]) {
        self(slots);
    }
}

/// Presenter that keeps the latest slots around for the renderer
#[derive(Debug, Clone, Default)]
pub struct SlotCache {
    slots: Vec<Slot>,
    refreshes: usize,
}

impl SlotCache {
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of refreshes received, including the initial one
    #[cfg(test)]
    #[must_use]
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }
}

impl Presenter for SlotCache {
    fn refresh(&mut self, slots: &[Slot]) {
        self.slots.clear();
        self.slots.extend_from_slice(slots);
        self.refreshes += 1;
    }
}

/// Fixed list of items with a single clamped active index
///
/// The item list never changes after construction. Navigation goes through
/// [`Navigable`]; every accepted change refreshes the presenter exactly once,
/// rejected requests leave both the index and the presenter untouched.
#[derive(Debug)]
pub struct Carousel<T, P> {
    items: Vec<T>,
    active: usize,
    presenter: P,
}

impl<T, P: Presenter> Carousel<T, P> {
    /// Builds the carousel and performs the initial presentation refresh.
    ///
    /// A missing or out-of-range `initial` index falls back to the first item.
    pub fn new(items: Vec<T>, initial: Option<usize>, presenter: P) -> Self {
        let active = initial.filter(|index| *index < items.len()).unwrap_or(0);
        let mut carousel = Self {
            items,
            active,
            presenter,
        };
        carousel.present();
        carousel
    }

    /// Builds the carousel with the first item matching `predicate` active
    pub fn select_where(items: Vec<T>, predicate: impl Fn(&T) -> bool, presenter: P) -> Self {
        let initial = items.iter().position(predicate);
        Self::new(items, initial, presenter)
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Active index, or `None` for an empty carousel
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.active)
    }

    #[must_use]
    pub fn active_item(&self) -> Option<&T> {
        self.items.get(self.active)
    }

    #[must_use]
    pub fn slots(&self) -> Vec<Slot> {
        (0..self.items.len())
            .map(|index| {
                let active = index == self.active;
                Slot {
                    index,
                    offset: signed_offset(index, self.active),
                    active,
                    focusable: active,
                    hidden: !active,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn present(&mut self) {
        let slots = self.slots();
        self.presenter.refresh(&slots);
    }
}

impl<T, P: Presenter> Navigable for Carousel<T, P> {
    fn get_item_count(&self) -> usize {
        self.items.len()
    }

    fn get_selected_index(&self) -> usize {
        self.active
    }

    fn set_selected_index(&mut self, index: usize) {
        self.active = index;
        self.present();
    }
}

fn signed_offset(index: usize, active: usize) -> isize {
    if index >= active {
        isize::try_from(index - active).unwrap_or(isize::MAX)
    } else {
        isize::try_from(active - index).map_or(isize::MIN, |distance| -distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(count: usize, initial: Option<usize>) -> Carousel<usize, SlotCache> {
        Carousel::new((0..count).collect(), initial, SlotCache::default())
    }

    #[test]
    fn test_initial_index_defaults_to_first() {
        let rooms = carousel(3, None);
        assert_eq!(rooms.active(), Some(0));
        assert_eq!(rooms.presenter().refreshes(), 1);
    }

    #[test]
    fn test_out_of_range_initial_index_falls_back_to_first() {
        let rooms = carousel(3, Some(7));
        assert_eq!(rooms.active(), Some(0));
    }

    #[test]
    fn test_select_where_matches_identifier() {
        let rooms = Carousel::select_where(vec!["a", "b", "c"], |name| *name == "c", SlotCache::default());
        assert_eq!(rooms.active(), Some(2));
        assert_eq!(rooms.active_item(), Some(&"c"));

        let rooms = Carousel::select_where(vec!["a", "b"], |name| *name == "z", SlotCache::default());
        assert_eq!(rooms.active(), Some(0));
    }

    #[test]
    fn test_step_in_range_notifies_once() {
        let mut rooms = carousel(5, Some(1));
        assert!(rooms.step(1));
        assert_eq!(rooms.active(), Some(2));
        assert_eq!(rooms.presenter().refreshes(), 2);
    }

    #[test]
    fn test_step_out_of_range_does_not_notify() {
        let mut rooms = carousel(3, Some(2));
        assert!(!rooms.step(1));
        assert!(!rooms.step(-3));
        assert_eq!(rooms.active(), Some(2));
        assert_eq!(rooms.presenter().refreshes(), 1);
    }

    #[test]
    fn test_jump_to_notifies_once() {
        let mut rooms = carousel(4, None);
        assert!(rooms.jump_to(3));
        assert_eq!(rooms.active(), Some(3));
        assert_eq!(rooms.presenter().refreshes(), 2);

        assert!(!rooms.jump_to(4));
        assert!(!rooms.jump_to(3));
        assert_eq!(rooms.presenter().refreshes(), 2);
    }

    #[test]
    fn test_index_stays_in_bounds_for_any_sequence() {
        let mut rooms = carousel(4, None);
        let moves: [isize; 12] = [1, 1, 1, 1, 1, -2, 3, -9, 9, -1, -1, -1];
        for delta in moves {
            rooms.step(delta);
            let active = rooms.active().unwrap_or(usize::MAX);
            assert!(active < rooms.len());
        }
        for index in [0, 10, 2, 4, 3, usize::MAX] {
            rooms.jump_to(index);
            let active = rooms.active().unwrap_or(usize::MAX);
            assert!(active < rooms.len());
        }
    }

    #[test]
    fn test_empty_carousel_never_moves() {
        let mut rooms = carousel(0, Some(0));
        for _ in 0..20 {
            assert!(!rooms.step(1));
        }
        assert!(!rooms.jump_to(0));
        assert_eq!(rooms.active(), None);
        assert!(rooms.active_item().is_none());
        assert!(rooms.presenter().slots().is_empty());
    }

    #[test]
    fn test_slots_follow_active_item() {
        let mut rooms = carousel(3, None);
        rooms.jump_to(1);

        let slots = rooms.presenter().slots();
        let offsets: Vec<isize> = slots.iter().map(|slot| slot.offset).collect();
        assert_eq!(offsets, vec![-1, 0, 1]);

        let active: Vec<&Slot> = slots.iter().filter(|slot| slot.active).collect();
        assert_eq!(active.len(), 1);
        assert!(active.iter().all(|slot| slot.focusable && !slot.hidden));
        assert!(slots.iter().filter(|slot| !slot.active).all(|slot| slot.hidden && !slot.focusable));
    }

    #[test]
    fn test_closure_presenter() {
        let mut calls = Vec::new();
        {
            let mut rooms = Carousel::new(vec!['x', 'y'], None, |slots: &[Slot]| {
                calls.push(slots.iter().position(|slot| slot.active));
            });
            rooms.next_item();
            rooms.next_item();
        }
        assert_eq!(calls, vec![Some(0), Some(1)]);
    }

    #[test]
    fn test_offsets_are_relative_to_active() {
        let rooms = carousel(5, Some(2));
        let offsets: Vec<isize> = rooms.slots().iter().map(|slot| slot.offset).collect();
        assert_eq!(offsets, vec![-2, -1, 0, 1, 2]);
    }
}
