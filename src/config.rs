//! Panel configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

/// Top-level panel configuration.
///
/// Loaded once at startup via [`PanelConfig::from_env`].
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// WebSocket endpoint address (e.g. `ws://localhost:8080`).
    pub url: String,

    /// Whether to render ANSI colors in the status display.
    pub color: bool,
}

impl PanelConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set. Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// The URL is not validated here; a malformed address surfaces as a
    /// connect error at runtime.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let url =
            std::env::var("WS_URL").unwrap_or_else(|_| "ws://localhost:8080".to_string());
        let color = color_enabled(std::env::var("NO_COLOR").ok().as_deref());

        Self { url, color }
    }
}

/// Interprets the `NO_COLOR` convention: colors are disabled when the
/// variable is set to any non-empty value.
fn color_enabled(no_color: Option<&str>) -> bool {
    match no_color {
        Some(value) => value.is_empty(),
        None => true,
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn color_enabled_when_unset() {
        assert!(color_enabled(None));
    }

    #[test]
    fn color_enabled_when_empty() {
        assert!(color_enabled(Some("")));
    }

    #[test]
    fn color_disabled_when_set() {
        assert!(!color_enabled(Some("1")));
        assert!(!color_enabled(Some("true")));
    }
}
