//! FAQ disclosure state: category tabs plus a single-open accordion
//!
//! One instance owns the whole FAQ section. Exactly one category is active
//! at a time, and at most one item is open across *all* categories, not per
//! category. Operations are total: indices outside the ranges captured at
//! construction are ignored, so a malformed or empty section degrades to an
//! inert widget instead of panicking.

/// Explicit disclosure state for the FAQ section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureState {
    categories: usize,
    items: usize,
    active_category: usize,
    open_item: Option<usize>,
}

impl DisclosureState {
    /// Creates state over `categories` tabs and `items` accordion entries
    /// (items are indexed globally across categories).
    pub fn new(categories: usize, items: usize) -> Self {
        Self {
            categories,
            items,
            active_category: 0,
            open_item: None,
        }
    }

    pub fn active_category(&self) -> usize {
        self.active_category
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open_item
    }

    pub fn is_category_active(&self, idx: usize) -> bool {
        self.categories > 0 && self.active_category == idx
    }

    pub fn is_item_open(&self, idx: usize) -> bool {
        self.open_item == Some(idx)
    }

    /// Activates the given category and deactivates all others. Calling
    /// with the already-active category or an out-of-range index changes
    /// nothing.
    pub fn select_category(&mut self, idx: usize) {
        if idx < self.categories {
            self.active_category = idx;
        }
    }

    /// Toggles an accordion item. Opening an item closes whichever other
    /// item was open, keeping the global single-open invariant.
    pub fn toggle_item(&mut self, idx: usize) {
        if idx >= self.items {
            return;
        }
        if self.open_item == Some(idx) {
            self.open_item = None;
        } else {
            self.open_item = Some(idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_first_category_active_nothing_open() {
        let state = DisclosureState::new(3, 9);
        assert!(state.is_category_active(0));
        assert!(!state.is_category_active(1));
        assert_eq!(state.open_item(), None);
    }

    #[test]
    fn test_select_category_is_exclusive() {
        let mut state = DisclosureState::new(3, 9);
        for idx in [2, 1, 2, 0] {
            state.select_category(idx);
            let active: Vec<usize> = (0..3).filter(|i| state.is_category_active(*i)).collect();
            assert_eq!(active, vec![idx]);
        }
    }

    #[test]
    fn test_select_active_category_is_idempotent() {
        let mut state = DisclosureState::new(3, 9);
        state.select_category(1);
        let before = state.clone();
        state.select_category(1);
        assert_eq!(state, before);
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let mut state = DisclosureState::new(3, 9);
        state.select_category(7);
        assert!(state.is_category_active(0));
    }

    #[test]
    fn test_toggle_opens_one_item_at_most() {
        let mut state = DisclosureState::new(3, 9);
        for idx in [0, 4, 8, 2] {
            state.toggle_item(idx);
            let open: Vec<usize> = (0..9).filter(|i| state.is_item_open(*i)).collect();
            assert_eq!(open, vec![idx]);
        }
    }

    #[test]
    fn test_toggle_open_item_closes_it() {
        let mut state = DisclosureState::new(3, 9);
        state.toggle_item(4);
        state.toggle_item(4);
        assert_eq!(state.open_item(), None);
    }

    #[test]
    fn test_single_open_holds_across_category_switch() {
        let mut state = DisclosureState::new(3, 9);
        state.toggle_item(1);
        state.select_category(2);
        // Items belong to a global accordion, switching tabs does not reset it.
        assert!(state.is_item_open(1));
        state.toggle_item(7);
        assert!(!state.is_item_open(1));
        assert!(state.is_item_open(7));
    }

    #[test]
    fn test_empty_disclosure_is_inert() {
        let mut state = DisclosureState::new(0, 0);
        state.select_category(0);
        state.toggle_item(0);
        assert!(!state.is_category_active(0));
        assert_eq!(state.open_item(), None);
    }
}
