//! In-memory doubles for the element and storage ports.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::dom::{ClassList, FieldLookup, InputField, TextLabel};
use crate::storage::{PreferenceStore, StorageError};

/// Element with a class set and a text label.
#[derive(Debug, Default)]
pub struct FakeElement {
    classes: RefCell<BTreeSet<String>>,
    label: RefCell<String>,
}

impl FakeElement {
    pub fn with_label(text: &str) -> Self {
        let el = Self::default();
        el.set_label(text);
        el
    }

    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl ClassList for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn set_class(&self, class: &str, present: bool) {
        let mut classes = self.classes.borrow_mut();
        if present {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }
}

impl TextLabel for FakeElement {
    fn set_label(&self, text: &str) {
        *self.label.borrow_mut() = text.to_owned();
    }
}

/// Input handle; clones share the same `type`, like DOM references.
#[derive(Clone, Debug)]
pub struct FakeInput {
    kind: Rc<RefCell<String>>,
}

impl FakeInput {
    pub fn new(kind: &str) -> Self {
        Self { kind: Rc::new(RefCell::new(kind.to_owned())) }
    }
}

impl InputField for FakeInput {
    fn input_type(&self) -> String {
        self.kind.borrow().clone()
    }

    fn set_input_type(&self, kind: &str) {
        *self.kind.borrow_mut() = kind.to_owned();
    }
}

/// Id-indexed set of inputs.
#[derive(Debug, Default)]
pub struct FakeDocument {
    fields: HashMap<String, FakeInput>,
}

impl FakeDocument {
    pub fn with_field(mut self, id: &str, field: FakeInput) -> Self {
        self.fields.insert(id.to_owned(), field);
        self
    }
}

impl FieldLookup for FakeDocument {
    type Field = FakeInput;

    fn field_by_id(&self, id: &str) -> Option<FakeInput> {
        self.fields.get(id).cloned()
    }
}

/// Store whose reads and writes always fail.
#[derive(Debug, Default)]
pub struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read { key: key.to_owned(), message: "SecurityError".to_owned() })
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write { key: key.to_owned(), message: "QuotaExceededError".to_owned() })
    }
}
