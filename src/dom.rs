//! Element ports the toggles operate on.
//!
//! Methods take `&self` because DOM nodes are shared handles; the browser
//! adapters live in `browser`, test doubles in `testing`.

/// Class membership on an element (`element.classList`).
pub trait ClassList {
    fn has_class(&self, class: &str) -> bool;
    fn set_class(&self, class: &str, present: bool);

    /// Flip `class` and return whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool {
        let present = !self.has_class(class);
        self.set_class(class, present);
        present
    }
}

/// Visible text of a trigger element such as a button.
pub trait TextLabel {
    fn set_label(&self, text: &str);
}

/// The `type` attribute of an `<input>`.
pub trait InputField {
    fn input_type(&self) -> String;
    fn set_input_type(&self, kind: &str);
}

/// Resolves input elements by id (`document.getElementById`).
pub trait FieldLookup {
    type Field: InputField;

    fn field_by_id(&self, id: &str) -> Option<Self::Field>;
}
