use super::*;
use crate::testing::{FakeDocument, FakeElement, FakeInput};

#[test]
fn visibility_maps_input_types() {
    assert_eq!(Visibility::from_input_type("password"), Visibility::Masked);
    assert_eq!(Visibility::from_input_type("text"), Visibility::Plain);
    assert_eq!(Visibility::Masked.input_type(), "password");
    assert_eq!(Visibility::Plain.input_type(), "text");
    assert_eq!(Visibility::Masked.toggled(), Visibility::Plain);
    assert_eq!(Visibility::Plain.toggled(), Visibility::Masked);
}

#[test]
fn toggle_missing_field_is_silent_noop() {
    let doc = FakeDocument::default().with_field("pw", FakeInput::new("password"));
    let btn = FakeElement::with_label(SHOW_LABEL);

    assert_eq!(toggle(&doc, "nope", &btn), None);
    assert_eq!(btn.label(), SHOW_LABEL);
    assert_eq!(doc.field_by_id("pw").unwrap().input_type(), "password");
}

#[test]
fn toggle_reveals_then_masks_again() {
    let input = FakeInput::new("password");
    let doc = FakeDocument::default().with_field("pw", input.clone());
    let btn = FakeElement::with_label(SHOW_LABEL);

    assert_eq!(toggle(&doc, "pw", &btn), Some(Visibility::Plain));
    assert_eq!(input.input_type(), "text");
    assert_eq!(btn.label(), HIDE_LABEL);

    assert_eq!(toggle(&doc, "pw", &btn), Some(Visibility::Masked));
    assert_eq!(input.input_type(), "password");
    assert_eq!(btn.label(), SHOW_LABEL);
}

#[test]
fn toggle_masks_any_non_password_type() {
    let input = FakeInput::new("email");
    let doc = FakeDocument::default().with_field("mail", input.clone());
    let btn = FakeElement::default();

    assert_eq!(toggle(&doc, "mail", &btn), Some(Visibility::Masked));
    assert_eq!(input.input_type(), "password");
    assert_eq!(btn.label(), SHOW_LABEL);
}
