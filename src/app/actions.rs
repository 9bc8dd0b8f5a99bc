//! Actions and Key Bindings

use gpui::{Action, KeyBinding, actions};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::constants::DEMO_KEY_CONTEXT;
use crate::i18n::Locale;

actions!(ui_demo, [Quit, DismissModal]);

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

impl LocaleAction {
    pub fn locale(&self) -> Locale {
        match self {
            LocaleAction::En => Locale::En,
            LocaleAction::Zh => Locale::Zh,
        }
    }
}

impl From<Locale> for LocaleAction {
    fn from(locale: Locale) -> Self {
        match locale {
            Locale::En => LocaleAction::En,
            Locale::Zh => LocaleAction::Zh,
        }
    }
}

/// Global key bindings
pub fn key_bindings() -> Vec<KeyBinding> {
    vec![
        // Closing the modal with Escape mirrors the platform back gesture
        KeyBinding::new("escape", DismissModal, Some(DEMO_KEY_CONTEXT)),
        KeyBinding::new("secondary-q", Quit, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_action_round_trip() {
        for locale in [Locale::En, Locale::Zh] {
            assert_eq!(LocaleAction::from(locale).locale(), locale);
        }
    }
}
