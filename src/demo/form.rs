//! Form construction for the demo extension
//!
//! Two renderings exist: the editable form while idle, and a console view
//! with a cancel button while the counter task runs.

use super::extension::DemoExtension;
use super::types::{keys, DemoData};
use crate::extension_system::form::{
    FieldType, Form, FormField, SelectItem, Validator, BUTTON_CANCEL, BUTTON_SUBMIT,
};

fn base_form() -> Form {
    Form::new(DemoExtension::TITLE, DemoExtension::DESCRIPTION)
}

/// The editable form shown while no counter task is running
pub fn stopped_form(data: &DemoData) -> Form {
    base_form()
        .field(FormField {
            placeholder: Some("This will be the count".to_string()),
            required: true,
            value: data.count.to_string(),
            validator: Some(Validator::DigitsOnly),
            ..FormField::new(FieldType::Input, keys::COUNT, "Count")
        })
        .field(FormField {
            placeholder: Some("Hi Group flutter".to_string()),
            required: true,
            value: data.input.clone(),
            ..FormField::new(FieldType::Input, keys::INPUT, "Hi Group")
        })
        .field(FormField {
            required: true,
            value: data.password.clone(),
            ..FormField::new(FieldType::Password, keys::PASSWORD, "Password")
        })
        .field(FormField {
            placeholder: Some("Enter your email".to_string()),
            required: true,
            value: data.email.clone(),
            ..FormField::new(FieldType::Email, keys::EMAIL, "Email Label")
        })
        .field(FormField {
            value: data.selected.to_string(),
            ..FormField::new(FieldType::Switch, keys::SELECT, "Select Label")
        })
        .field(FormField {
            placeholder: Some("Enter your text".to_string()),
            required: true,
            value: data.textarea.clone(),
            ..FormField::new(FieldType::TextArea, keys::TEXTAREA, "TextArea Label")
        })
        .field(FormField {
            value: data.switch_val.to_string(),
            ..FormField::new(FieldType::Switch, keys::SWITCH, "Switch Label")
        })
        .field(FormField {
            required: true,
            value: data.radiobox.clone(),
            items: vec![SelectItem::new("A", "A"), SelectItem::new("B", "B")],
            ..FormField::new(FieldType::RadioButton, keys::RADIOBOX, "Radio Label")
        })
        .field(FormField {
            readonly: true,
            value: data.content.clone(),
            lines: Some(10),
            ..FormField::new(FieldType::TextArea, keys::CONTENT, "Content")
        })
        .row(vec![
            FormField::button(keys::BUTTON_TEST, "Test"),
            FormField::button(BUTTON_SUBMIT, "Submit"),
            FormField::button(BUTTON_CANCEL, "Cancel"),
        ])
}

/// The console view shown while the counter task runs
pub fn running_form(console: &str) -> Form {
    base_form()
        .field(FormField::console(keys::CONSOLE, "Console", console, 20))
        .field(FormField::button(BUTTON_CANCEL, "Cancel"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_form_field_order() {
        let form = stopped_form(&DemoData::default());
        let field_keys: Vec<&str> = form.iter_fields().map(|f| f.key.as_str()).collect();
        assert_eq!(
            field_keys,
            vec![
                keys::COUNT,
                keys::INPUT,
                keys::PASSWORD,
                keys::EMAIL,
                keys::SELECT,
                keys::TEXTAREA,
                keys::SWITCH,
                keys::RADIOBOX,
                keys::CONTENT,
                keys::BUTTON_TEST,
                BUTTON_SUBMIT,
                BUTTON_CANCEL,
            ]
        );
    }

    #[test]
    fn test_stopped_form_renders_data() {
        let data = DemoData {
            count: 42,
            switch_val: false,
            ..DemoData::default()
        };
        let form = stopped_form(&data);

        let count = form.iter_fields().find(|f| f.key == keys::COUNT).unwrap();
        assert_eq!(count.value, "42");
        assert_eq!(count.validator, Some(Validator::DigitsOnly));

        let switch = form.iter_fields().find(|f| f.key == keys::SWITCH).unwrap();
        assert_eq!(switch.value, "false");

        let content = form.iter_fields().find(|f| f.key == keys::CONTENT).unwrap();
        assert!(content.readonly);
    }

    #[test]
    fn test_button_row_is_grouped() {
        let form = stopped_form(&DemoData::default());
        let last_row = form.fields.last().unwrap();
        assert_eq!(last_row.len(), 3);
        assert!(last_row.iter().all(|f| f.field_type == FieldType::Button));
    }

    #[test]
    fn test_running_form_shape() {
        let form = running_form("line two\nline one\n");
        let field_keys: Vec<&str> = form.iter_fields().map(|f| f.key.as_str()).collect();
        assert_eq!(field_keys, vec![keys::CONSOLE, BUTTON_CANCEL]);

        let console = form.iter_fields().next().unwrap();
        assert_eq!(console.field_type, FieldType::Console);
        assert_eq!(console.lines, Some(20));
        assert!(console.value.starts_with("line two"));
    }
}
