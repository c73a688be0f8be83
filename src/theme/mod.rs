//! Color scheme: dark-mode preference and icon tints

mod darkmode;

pub use darkmode::{DarkMode, IconTint};
