//! Leptos components wrapping the toggles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages rendered through Leptos use these instead of the `onclick` globals;
//! both call the same functions in `theme` and `password`.

pub mod password_field;
pub mod theme_toggle;
