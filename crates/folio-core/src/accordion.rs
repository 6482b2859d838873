//! Accordion panel state
//!
//! Each panel toggles on its own. Opening one does not close the others.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccordionState {
    open: Vec<bool>,
}

impl AccordionState {
    /// All `panel_count` panels collapsed.
    pub fn new(panel_count: usize) -> Self {
        Self {
            open: vec![false; panel_count],
        }
    }

    /// Flip panel `index`. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(open) = self.open.get_mut(index) {
            *open = !*open;
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|o| **o).count()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let state = AccordionState::new(3);
        assert_eq!(state.open_count(), 0);
        assert!(!state.is_open(0));
    }

    #[test]
    fn panels_toggle_independently() {
        let mut state = AccordionState::new(3);
        state.toggle(0);
        state.toggle(2);
        assert!(state.is_open(0));
        assert!(!state.is_open(1));
        assert!(state.is_open(2));

        state.toggle(0);
        assert!(!state.is_open(0));
        assert!(state.is_open(2));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut state = AccordionState::new(1);
        state.toggle(5);
        assert_eq!(state.open_count(), 0);
        assert!(!state.is_open(5));
    }
}
