//! Header button switching between dark and light themes.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::theme::MOON_GLYPH;

/// Theme toggle button.
///
/// Starts with the moon glyph; each click flips the `<body>` theme and
/// persists it to `localStorage`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let button_ref = NodeRef::<leptos::html::Button>::new();

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(button) = button_ref.get() else {
                return;
            };
            let trigger: &web_sys::HtmlElement = &button;
            crate::browser::toggle_theme(trigger);
        }
    };

    view! {
        <button type="button" class="theme-toggle" title="Toggle theme" node_ref=button_ref on:click=on_click>
            {MOON_GLYPH}
        </button>
    }
}
