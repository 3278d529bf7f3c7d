//! Password input with a show/hide button.

#[cfg(test)]
#[path = "password_field_test.rs"]
mod password_field_test;

use leptos::prelude::*;

use crate::password::SHOW_LABEL;

/// Masked input plus a button that reveals or hides its value.
///
/// `name` and `placeholder` are only rendered when given.
#[component]
pub fn PasswordField(
    #[prop(into)] id: String,
    #[prop(into, optional)] name: Option<String>,
    #[prop(into, optional)] placeholder: Option<String>,
) -> impl IntoView {
    let button_ref = NodeRef::<leptos::html::Button>::new();
    let target = id.clone();

    let on_toggle = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(button) = button_ref.get() else {
                return;
            };
            let trigger: &web_sys::HtmlElement = &button;
            crate::browser::toggle_password(&target, trigger);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &target;
        }
    };

    view! {
        <div class="password-field">
            <input id=id name=name type="password" placeholder=placeholder class="password-field__input"/>
            <button type="button" class="password-field__toggle" node_ref=button_ref on:click=on_toggle>
                {SHOW_LABEL}
            </button>
        </div>
    }
}
