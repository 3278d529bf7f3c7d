//! Show/hide toggle for password inputs.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use crate::dom::{FieldLookup, InputField, TextLabel};

/// Trigger label while the value is shown in plain text.
pub const HIDE_LABEL: &str = "Hide";

/// Trigger label while the value is masked.
pub const SHOW_LABEL: &str = "Show";

/// Display mode of a sensitive input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Masked,
    Plain,
}

impl Visibility {
    /// Only `type="password"` counts as masked.
    pub fn from_input_type(kind: &str) -> Self {
        if kind == "password" { Self::Masked } else { Self::Plain }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Plain => "text",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Plain,
            Self::Plain => Self::Masked,
        }
    }

    /// Trigger label offering the opposite mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::Masked => SHOW_LABEL,
            Self::Plain => HIDE_LABEL,
        }
    }
}

/// Flip the input with `id` between masked and plain text.
///
/// Returns `None` without touching anything when no such input exists.
pub fn toggle<D: FieldLookup>(doc: &D, id: &str, trigger: &impl TextLabel) -> Option<Visibility> {
    let field = doc.field_by_id(id)?;
    let next = Visibility::from_input_type(&field.input_type()).toggled();
    field.set_input_type(next.input_type());
    trigger.set_label(next.label());
    Some(next)
}
