//! TabsState - Tab Navigation State

use crate::app::navigation::ActivePage;

/// State for tab navigation
#[derive(Debug, Default)]
pub struct TabsState {
    /// Currently active page
    pub active_page: ActivePage,
}

impl TabsState {
    /// Set the active page (from tab bar click)
    ///
    /// Returns whether the page actually changed.
    pub fn set_active_page(&mut self, page: ActivePage) -> bool {
        if self.active_page == page {
            return false;
        }
        self.active_page = page;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_ui_demo() {
        let tabs = TabsState::default();
        assert_eq!(tabs.active_page, ActivePage::UiDemo);
    }

    #[test]
    fn test_reselecting_active_page_is_noop() {
        let mut tabs = TabsState::default();
        assert!(!tabs.set_active_page(ActivePage::UiDemo));
        assert_eq!(tabs.active_page, ActivePage::UiDemo);
    }
}
