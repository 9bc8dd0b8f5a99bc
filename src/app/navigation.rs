//! Navigation - Tab Pages
//!
//! Defines the pages the bottom tab bar can mount.

use crate::assets::CustomIconName;

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivePage {
    /// The UI components demo screen
    #[default]
    UiDemo,
}

impl ActivePage {
    /// Get the icon for the tab bar
    pub fn icon(&self) -> CustomIconName {
        match self {
            ActivePage::UiDemo => CustomIconName::Components,
        }
    }

    /// Get the translation key for the tab label
    pub fn tab_title_key(&self) -> &'static str {
        match self {
            ActivePage::UiDemo => "tabs.ui_demo",
        }
    }

    /// Get the translation key for the header title
    pub fn header_title_key(&self) -> &'static str {
        match self {
            ActivePage::UiDemo => "header.ui_demo",
        }
    }

    /// Get all pages registered in the tab bar
    pub fn all() -> &'static [ActivePage] {
        &[ActivePage::UiDemo]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, tr};

    #[test]
    fn test_single_registered_tab() {
        assert_eq!(ActivePage::all(), &[ActivePage::UiDemo]);
    }

    #[test]
    fn test_titles() {
        let page = ActivePage::UiDemo;
        assert_eq!(tr(Locale::En, page.tab_title_key()).as_ref(), "UI Demo");
        assert_eq!(
            tr(Locale::En, page.header_title_key()).as_ref(),
            "UI Components Demo"
        );
    }
}
