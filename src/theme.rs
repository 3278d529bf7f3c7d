//! Dark/light theme toggle.
//!
//! Reads the saved preference and applies a `dark` class to `<body>`.
//! Toggling flips the class, writes the new theme back to storage, and
//! relabels the trigger with the glyph of the theme it just switched to.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage failures are logged and the visual
//! toggle still happens.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::dom::{ClassList, TextLabel};
use crate::storage::PreferenceStore;

/// Storage key for the saved theme.
pub const STORAGE_KEY: &str = "smetic-theme";

/// Body class that enables the dark presentation.
pub const DARK_CLASS: &str = "dark";

/// Trigger label after switching to dark.
pub const SUN_GLYPH: &str = "\u{2600}\u{fe0f}";

/// Trigger label after switching to light.
pub const MOON_GLYPH: &str = "\u{1f319}";

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored value. Only the literal `"dark"` selects dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Trigger label shown once this theme is active.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => MOON_GLYPH,
            Self::Dark => SUN_GLYPH,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read the saved theme, treating a missing or unreadable value as light.
pub fn saved_theme(store: &impl PreferenceStore) -> Theme {
    match store.get(STORAGE_KEY) {
        Ok(value) => Theme::from_stored(value.as_deref()),
        Err(e) => {
            leptos::logging::warn!("theme preference unreadable: {e}");
            Theme::Light
        }
    }
}

/// Apply the saved theme to `body` at page load.
///
/// Only adds the dark class; a light preference leaves `body` untouched.
pub fn apply_saved(body: &impl ClassList, store: &impl PreferenceStore) -> Theme {
    let theme = saved_theme(store);
    if theme.is_dark() {
        body.set_class(DARK_CLASS, true);
    }
    theme
}

/// Flip the theme on `body`, persist it, and relabel `trigger`.
pub fn toggle(body: &impl ClassList, store: &impl PreferenceStore, trigger: &impl TextLabel) -> Theme {
    let next = Theme::from_dark(body.toggle_class(DARK_CLASS));
    if let Err(e) = store.set(STORAGE_KEY, next.as_str()) {
        leptos::logging::warn!("theme preference not saved: {e}");
    }
    trigger.set_label(next.label());
    next
}
