//! DemoState - Screen-Local Interaction State
//!
//! Holds the press counter and the modal visibility flag. Lives as long as
//! the demo page that owns it; nothing here is persisted.

/// How the modal was closed, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClose {
    /// The "Close Modal" button inside the dialog
    Button,
    /// Platform dismissal: Escape key or a click outside the dialog
    Dismissed,
}

impl ModalClose {
    pub fn label(&self) -> &'static str {
        match self {
            ModalClose::Button => "button",
            ModalClose::Dismissed => "dismissed",
        }
    }
}

/// Interaction state of the demo screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoState {
    press_count: u64,
    modal_visible: bool,
}

impl DemoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of counter activations since the screen was mounted
    pub fn press_count(&self) -> u64 {
        self.press_count
    }

    /// Whether the modal overlay should be drawn
    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    /// Record one counter activation and return the new count
    pub fn press(&mut self) -> u64 {
        self.press_count = self.press_count.saturating_add(1);
        self.press_count
    }

    /// Show the modal
    pub fn open_modal(&mut self) {
        self.modal_visible = true;
    }

    /// Hide the modal. Returns whether it was visible.
    pub fn close_modal(&mut self) -> bool {
        std::mem::replace(&mut self.modal_visible, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DemoState::new();
        assert_eq!(state.press_count(), 0);
        assert!(!state.modal_visible());
    }

    #[test]
    fn test_count_equals_number_of_presses() {
        for n in [1u64, 2, 10, 257] {
            let mut state = DemoState::new();
            let mut last = 0;
            for _ in 0..n {
                let next = state.press();
                assert_eq!(next, last + 1);
                last = next;
            }
            assert_eq!(state.press_count(), n);
        }
    }

    #[test]
    fn test_press_saturates() {
        let mut state = DemoState {
            press_count: u64::MAX,
            modal_visible: false,
        };
        assert_eq!(state.press(), u64::MAX);
    }

    #[test]
    fn test_open_then_close_modal() {
        let mut state = DemoState::new();
        state.open_modal();
        assert!(state.modal_visible());
        assert!(state.close_modal());
        assert!(!state.modal_visible());
        assert_eq!(state, DemoState::new());
    }

    #[test]
    fn test_close_when_hidden_is_noop() {
        let mut state = DemoState::new();
        assert!(!state.close_modal());
        assert!(!state.modal_visible());
    }

    #[test]
    fn test_modal_does_not_touch_counter() {
        let mut state = DemoState::new();
        state.press();
        state.press();
        state.open_modal();
        state.open_modal();
        state.close_modal();
        assert_eq!(state.press_count(), 2);
        state.press();
        assert_eq!(state.press_count(), 3);
    }
}
