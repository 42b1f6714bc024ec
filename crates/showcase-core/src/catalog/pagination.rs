//! Incremental reveal state for the product list.

/// How many products are currently revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationState {
    displayed_count: usize,
}

impl PaginationState {
    /// Create a state revealing `initial` products.
    pub fn new(initial: usize) -> Self {
        Self {
            displayed_count: initial,
        }
    }

    /// Number of revealed products.
    pub fn displayed_count(&self) -> usize {
        self.displayed_count
    }

    /// Go back to the first page.
    pub fn reset(&mut self, initial: usize) {
        self.displayed_count = initial;
    }

    /// Reveal `step` more products and return the new count.
    pub fn advance(&mut self, step: usize) -> usize {
        self.displayed_count = self.displayed_count.saturating_add(step);
        self.displayed_count
    }

    /// Never reveal more than `total` products.
    pub fn clamp(&mut self, total: usize) {
        self.displayed_count = self.displayed_count.min(total);
    }

    /// Whether products beyond the revealed ones remain.
    pub fn has_more(&self, total: usize) -> bool {
        self.displayed_count < total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_and_advance() {
        let mut state = PaginationState::default();
        state.reset(6);
        assert_eq!(state.displayed_count(), 6);
        assert_eq!(state.advance(6), 12);
        state.reset(6);
        assert_eq!(state.displayed_count(), 6);
    }

    #[test]
    fn test_advance_is_monotonic() {
        let mut state = PaginationState::new(usize::MAX - 3);
        let mut previous = state.displayed_count();
        for step in [0, 1, 2, 10, usize::MAX] {
            let next = state.advance(step);
            assert!(next >= previous);
            previous = next;
        }
        assert_eq!(previous, usize::MAX);
    }

    #[test]
    fn test_clamp_never_exceeds_total() {
        for (initial, total) in [(6, 10), (6, 3), (0, 0), (12, 12), (100, 7)] {
            let mut state = PaginationState::new(initial);
            state.clamp(total);
            assert!(state.displayed_count() <= total);
            assert_eq!(state.displayed_count(), initial.min(total));
        }
    }

    #[test]
    fn test_has_more() {
        let mut state = PaginationState::new(6);
        assert!(state.has_more(10));
        state.advance(6);
        state.clamp(10);
        assert_eq!(state.displayed_count(), 10);
        assert!(!state.has_more(10));
    }
}
