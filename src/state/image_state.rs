//! ImageState - Remote Image Load State

use std::sync::Arc;

use gpui::{Image, SharedString};

/// Lifecycle of a single remote image fetch
#[derive(Clone, Default)]
pub enum ImageState {
    /// Fetch in flight
    #[default]
    Loading,
    /// Image bytes ready for rendering
    Loaded(Arc<Image>),
    /// Fetch failed with the given reason
    Failed(SharedString),
}

impl ImageState {
    pub fn image(&self) -> Option<&Arc<Image>> {
        match self {
            ImageState::Loaded(image) => Some(image),
            _ => None,
        }
    }

    /// Resolve a finished fetch into its terminal state
    pub fn from_result<E: std::fmt::Display>(result: Result<Arc<Image>, E>) -> Self {
        match result {
            Ok(image) => ImageState::Loaded(image),
            Err(e) => ImageState::Failed(e.to_string().into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let state = ImageState::default();
        assert!(matches!(state, ImageState::Loading));
        assert!(state.image().is_none());
    }

    #[test]
    fn test_failed_result_keeps_reason() {
        let state = ImageState::from_result::<&str>(Err("connection refused"));
        let ImageState::Failed(reason) = state else {
            panic!("expected a failed state");
        };
        assert_eq!(reason.as_ref(), "connection refused");
    }
}
