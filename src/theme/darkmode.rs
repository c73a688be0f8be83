//! Dark-mode preference shared across the process

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Process-wide dark-mode preference
///
/// Cloning yields another handle to the same flag, so the value set through
/// one handle is visible through every other. The renderer only reads it;
/// the server's toggle endpoint is the only writer.
#[derive(Debug, Clone, Default)]
pub struct DarkMode {
    enabled: Arc<AtomicBool>,
}

impl DarkMode {
    /// Create a preference with an initial value
    pub fn new(is_dark_mode: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(is_dark_mode)),
        }
    }

    /// Current preference
    pub fn is_dark_mode(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Replace the preference
    pub fn set_is_dark_mode(&self, is_dark_mode: bool) {
        self.enabled.store(is_dark_mode, Ordering::Relaxed);
        tracing::debug!("Dark mode set to {}", is_dark_mode);
    }
}

/// Icon colors for the current color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTint {
    /// Stroke/glyph color
    pub color: &'static str,
    /// Background fill behind the glyph
    pub fill_color: &'static str,
}

impl IconTint {
    pub fn for_scheme(is_dark_mode: bool) -> Self {
        if is_dark_mode {
            Self {
                color: "#FEFDFB",
                fill_color: "#111827",
            }
        } else {
            Self {
                color: "#333531",
                fill_color: "#FEFDFB",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_share_state() {
        let mode = DarkMode::new(false);
        let other = mode.clone();
        other.set_is_dark_mode(true);
        assert!(mode.is_dark_mode());
        mode.set_is_dark_mode(false);
        assert!(!other.is_dark_mode());
    }

    #[test]
    fn test_default_is_light() {
        assert!(!DarkMode::default().is_dark_mode());
    }

    #[test]
    fn test_icon_tint() {
        assert_eq!(IconTint::for_scheme(true).color, "#FEFDFB");
        assert_eq!(IconTint::for_scheme(false).color, "#333531");
        assert_eq!(IconTint::for_scheme(true).fill_color, "#111827");
    }
}
