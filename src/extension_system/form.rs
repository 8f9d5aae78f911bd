//! Form description types - the UI contract between an extension and the host
//!
//! An extension never renders anything. It hands the host a [`Form`]: ordered
//! groups of typed fields, which the host lays out row by row. The host sends
//! edited values back as strings keyed by [`FormField::key`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Button key for the primary submit action.
pub const BUTTON_SUBMIT: &str = "submit";
/// Button key for cancelling the extension's current operation.
pub const BUTTON_CANCEL: &str = "cancel";

/// Widget type of a form field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Single-line text input
    #[default]
    Input,
    /// Masked text input
    Password,
    /// Text input with email keyboard/autofill hints
    Email,
    /// Boolean toggle
    Switch,
    /// Multi-line text input
    TextArea,
    /// Single choice among [`FormField::items`]
    RadioButton,
    /// Multiple choice among [`FormField::items`]
    Checkbox,
    /// Read-only scrolling log view
    Console,
    /// Pressing it delivers a [`super::SubmitEvent`] with this field's key
    Button,
}

/// One selectable option of a radio button or checkbox group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SelectItem {
    pub label: String,
    pub value: String,
}

impl SelectItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Host-side input validator attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    /// Reject any character outside 0-9 while typing
    DigitsOnly,
}

/// A single typed field inside a form row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormField {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub readonly: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// Visible line count for multi-line widgets (text areas, consoles)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SelectItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<Validator>,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl FormField {
    pub fn new(field_type: FieldType, key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field_type,
            key: key.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    /// Shorthand for a button row entry
    pub fn button(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(FieldType::Button, key, label)
    }

    /// Shorthand for a console log view
    pub fn console(
        key: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
        lines: u16,
    ) -> Self {
        Self {
            value: value.into(),
            lines: Some(lines),
            ..Self::new(FieldType::Console, key, label)
        }
    }
}

/// A complete form: what the host renders for an extension
///
/// Fields are ordered groups - the outer Vec is render order, each inner Vec
/// is one row laid out side by side (typically a row of buttons).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Form {
    pub title: String,
    pub description: String,
    pub fields: Vec<Vec<FormField>>,
}

impl Form {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            fields: Vec::new(),
        }
    }

    /// Append one row of fields
    pub fn row(mut self, fields: Vec<FormField>) -> Self {
        self.fields.push(fields);
        self
    }

    /// Append a row holding a single field
    pub fn field(self, field: FormField) -> Self {
        self.row(vec![field])
    }

    /// Iterate every field regardless of grouping
    pub fn iter_fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter().flatten()
    }

    /// JSON schema of the form wire format, for host-side validation tooling
    pub fn schema() -> serde_json::Value {
        let schema = schemars::schema_for!(Form);
        serde_json::to_value(schema).unwrap()
    }
}
