//! i18n - Internationalization Module
//!
//! Thin helpers over `rust-i18n` catalogs in `locales/`, plus locale resolution
//! from configuration and the operating system.

use gpui::{App, SharedString};
use rust_i18n::t;

use crate::app::entities::AppEntities;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Chinese (Simplified)
    Zh,
}

impl Locale {
    /// Catalog code used by `rust-i18n`
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "中文",
        }
    }

    /// The other supported locale
    pub fn toggled(&self) -> Self {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        }
    }

    /// Parse a language tag such as "zh", "zh-CN" or "en_US"
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }

    /// Pick the configured locale, else the system one, else English
    pub fn resolve(configured: Option<&str>, system: Option<&str>) -> Self {
        configured
            .and_then(Self::from_tag)
            .or_else(|| system.and_then(Self::from_tag))
            .unwrap_or_default()
    }
}

/// Translate a key for an explicit locale
pub fn tr(locale: Locale, key: &str) -> SharedString {
    t!(key, locale = locale.code()).to_string().into()
}

/// Translate a key using the app's current locale
pub fn i18n(cx: &App, key: &str) -> SharedString {
    tr(current_locale(cx), key)
}

/// The app's current locale
pub fn current_locale(cx: &App) -> Locale {
    cx.try_global::<AppEntities>()
        .map(|entities| entities.i18n.read(cx).locale)
        .unwrap_or_default()
}

/// Label of the counter button
pub fn press_count_label(locale: Locale, count: u64) -> SharedString {
    t!("demo.button.press_count", count = count, locale = locale.code())
        .to_string()
        .into()
}

/// Title and message of the notification shown after a counter activation
pub fn press_notification(locale: Locale, count: u64) -> (SharedString, SharedString) {
    let title = tr(locale, "demo.button.pressed_title");
    let message = t!("demo.button.pressed_message", count = count, locale = locale.code())
        .to_string()
        .into();
    (title, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("zh_CN"), Some(Locale::Zh));
        assert_eq!(Locale::from_tag("ZH"), Some(Locale::Zh));
        assert_eq!(Locale::from_tag("fr-FR"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn test_locale_resolution_order() {
        assert_eq!(Locale::resolve(Some("zh"), Some("en-US")), Locale::Zh);
        assert_eq!(Locale::resolve(Some("de"), Some("zh-CN")), Locale::Zh);
        assert_eq!(Locale::resolve(None, Some("fr")), Locale::En);
        assert_eq!(Locale::resolve(None, None), Locale::En);
    }

    #[test]
    fn test_press_count_label() {
        assert_eq!(press_count_label(Locale::En, 0).as_ref(), "Press Count: 0");
        assert_eq!(press_count_label(Locale::En, 1).as_ref(), "Press Count: 1");
    }

    #[test]
    fn test_press_notification_contains_count() {
        let (title, message) = press_notification(Locale::En, 1);
        assert_eq!(title.as_ref(), "Button Pressed!");
        assert_eq!(message.as_ref(), "Button has been pressed 1 times!");
        assert!(message.contains('1'));

        let (_, message) = press_notification(Locale::Zh, 7);
        assert!(message.contains('7'));
    }
}
