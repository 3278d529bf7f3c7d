//! `web-sys` adapters and the JS-callable entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server-rendered pages wire buttons as `onclick="toggleTheme(this)"` and
//! `onclick="togglePassword('password', this)"`. The exports below resolve
//! the document and `localStorage`, then delegate to [`crate::theme`] and
//! [`crate::password`].

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlInputElement, Storage};

use crate::dom::{ClassList, FieldLookup, InputField, TextLabel};
use crate::storage::{PreferenceStore, StorageError};

/// [`PreferenceStore`] backed by `window.localStorage`.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// Open the current window's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoWindow`] outside a window context and
    /// [`StorageError::Unavailable`] when storage is disabled or blocked.
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::NoWindow)?;
        let storage = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Read { key: key.to_owned(), message: format!("{e:?}") })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_owned(), message: format!("{e:?}") })
    }
}

impl ClassList for HtmlElement {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_class(&self, class: &str, present: bool) {
        let class_list = self.class_list();
        let result = if present { class_list.add_1(class) } else { class_list.remove_1(class) };
        if let Err(e) = result {
            log::warn!("class `{class}` not updated: {e:?}");
        }
    }
}

impl TextLabel for HtmlElement {
    fn set_label(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

impl InputField for HtmlInputElement {
    fn input_type(&self) -> String {
        self.type_()
    }

    fn set_input_type(&self, kind: &str) {
        self.set_type(kind);
    }
}

impl FieldLookup for Document {
    type Field = HtmlInputElement;

    /// Elements that are not `<input>`s are treated as missing.
    fn field_by_id(&self, id: &str) -> Option<HtmlInputElement> {
        self.get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
    }
}

/// The current page's `document`, if running in a window.
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// The current page's `<body>`.
pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

/// Install logging and apply the saved theme before any interaction.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(body) = body() else {
        log::warn!("no document body; saved theme not applied");
        return;
    };
    match LocalStore::open() {
        Ok(store) => {
            let theme = crate::theme::apply_saved(&body, &store);
            log::debug!("applied saved theme: {theme}");
        }
        Err(e) => log::warn!("saved theme not applied: {e}"),
    }
}

/// Global `toggleTheme(btn)`.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme(btn: &HtmlElement) {
    let Some(body) = body() else {
        log::warn!("no document body; theme not toggled");
        return;
    };
    match LocalStore::open() {
        Ok(store) => {
            crate::theme::toggle(&body, &store, btn);
        }
        Err(e) => {
            log::warn!("{e}; theme change will not persist");
            crate::theme::toggle(&body, &crate::storage::MemoryStore::new(), btn);
        }
    }
}

/// Global `togglePassword(id, btn)`.
#[wasm_bindgen(js_name = togglePassword)]
pub fn toggle_password(id: &str, btn: &HtmlElement) {
    let Some(doc) = document() else {
        return;
    };
    crate::password::toggle(&doc, id, btn);
}
