//! AppEntities - Global Entity Handles
//!
//! App-wide GPUI entities collected in one `Global`. Screen-local state
//! (the demo counter and modal flag) is owned by the page instead.

use gpui::{App, AppContext, Entity, Global};

use crate::i18n::Locale;
use crate::state::{i18n_state::I18nState, tabs_state::TabsState};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Tab navigation state
    pub tabs: Entity<TabsState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities
    pub fn init(locale: Locale, cx: &mut App) -> Self {
        Self {
            tabs: cx.new(|_| TabsState::default()),
            i18n: cx.new(|_| I18nState::new(locale)),
        }
    }
}
