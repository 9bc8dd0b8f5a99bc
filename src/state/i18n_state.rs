//! I18nState - Internationalization State

use crate::i18n::Locale;

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl I18nState {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Set the locale
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_locale() {
        let mut state = I18nState::new(Locale::En);
        state.set_locale(Locale::Zh);
        assert_eq!(state.locale, Locale::Zh);
        state.set_locale(Locale::Zh);
        assert_eq!(state.locale, Locale::Zh);
    }
}
