//! Log Filter
//!
//! `info` by default; `RUST_LOG` overrides it, including the global level.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Filter built from `RUST_LOG`, falling back to `info`
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

/// Filter built from explicit directives, falling back to `info` when empty
pub fn parse_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(parse_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_global_level_overrides_default() {
        assert_eq!(
            parse_filter("debug").max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(parse_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
    }
}
