//! The demo extension: validation, dispatch and task lifecycle

use super::console::Console;
use super::form;
use super::task::{self, TaskHandle};
use super::types::{keys, parse_flexible_bool, DemoData, DemoSettings};
use crate::extension_system::{
    Extension, ExtensionError, ExtensionFactory, Form, HostLink, SubmitEvent, BUTTON_CANCEL,
    BUTTON_SUBMIT,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Counts at or below this are rejected on submission
const MIN_COUNT: u32 = 5;

/// Demonstration extension showcasing every form widget plus a cancellable
/// background counter
///
/// While the counter runs the UI collapses to a console view with a cancel
/// button; submitting again restarts the counter, cancelling any prior run.
pub struct DemoExtension {
    data: DemoData,
    settings: DemoSettings,
    console: Arc<Mutex<Console>>,
    link: HostLink,
    task: Option<TaskHandle>,
}

impl DemoExtension {
    pub const ID: &'static str = "app_demo";
    pub const TITLE: &'static str = "app-demo-extension";
    pub const DESCRIPTION: &'static str =
        "Demonstration extension showcasing form widgets and a cancellable counter task";
    /// Stable extension id for host-side routing
    pub const EXTENSION_UUID: Uuid = uuid::uuid!("7b1e62a4-9c0f-5d38-8a42-63f0be12c9d7");

    pub fn new(link: HostLink) -> Self {
        Self::with_settings(link, DemoSettings::default())
    }

    pub fn with_settings(link: HostLink, settings: DemoSettings) -> Self {
        let console = Console::with_welcome(settings.console_capacity, Self::TITLE);
        Self {
            data: DemoData::default(),
            settings,
            console: Arc::new(Mutex::new(console)),
            link,
            task: None,
        }
    }

    /// Factory entry the host registry instantiates from
    pub fn factory() -> ExtensionFactory {
        ExtensionFactory::new(
            Self::ID,
            Self::EXTENSION_UUID,
            Self::TITLE,
            Self::DESCRIPTION,
            |link| Box::new(DemoExtension::new(link)),
        )
    }

    /// Current form state
    pub fn data(&self) -> &DemoData {
        &self.data
    }

    /// Current console text, newest line first
    pub fn console_contents(&self) -> String {
        self.console.lock().unwrap().contents()
    }

    fn task_running(&self) -> bool {
        self.task.as_ref().is_some_and(TaskHandle::is_running)
    }

    /// Validate and apply a submitted field map
    ///
    /// Partial updates are allowed: only provided keys are touched. Work
    /// happens on a scratch copy so a rejected submission changes nothing.
    fn apply_submission(&mut self, fields: &HashMap<String, String>) -> Result<(), ExtensionError> {
        let mut next = self.data.clone();

        if let Some(raw) = fields.get(keys::COUNT) {
            let count: u32 = raw.trim().parse().map_err(|e| ExtensionError::InvalidField {
                key: keys::COUNT.to_string(),
                reason: format!("{e}: {raw:?}"),
            })?;
            if count <= MIN_COUNT {
                return Err(ExtensionError::CountTooSmall { got: count });
            }
            next.count = count;
        }
        if let Some(raw) = fields.get(keys::INPUT) {
            next.input = raw.clone();
        }
        if let Some(raw) = fields.get(keys::PASSWORD) {
            next.password = raw.clone();
        }
        if let Some(raw) = fields.get(keys::EMAIL) {
            next.email = raw.clone();
        }
        if let Some(raw) = fields.get(keys::SELECT) {
            next.selected = parse_bool_field(keys::SELECT, raw)?;
        }
        if let Some(raw) = fields.get(keys::TEXTAREA) {
            next.textarea = raw.clone();
        }
        if let Some(raw) = fields.get(keys::SWITCH) {
            next.switch_val = parse_bool_field(keys::SWITCH, raw)?;
        }
        if let Some(raw) = fields.get(keys::RADIOBOX) {
            next.radiobox = raw.clone();
        }
        if let Some(raw) = fields.get(keys::CONTENT) {
            next.content = raw.clone();
        }

        self.data = next;
        Ok(())
    }

    /// Cancel any prior counter and start a fresh one for the current count
    fn start_counter(&mut self) {
        if let Some(prior) = self.task.take() {
            tracing::debug!("replacing counter task, cancelling prior run");
            prior.cancel();
        }
        let handle = task::spawn_counter(
            self.data.count,
            self.settings.tick,
            Arc::clone(&self.console),
            self.data.clone(),
            self.link.clone(),
        );
        self.task = Some(handle);
    }
}

fn parse_bool_field(key: &str, raw: &str) -> Result<bool, ExtensionError> {
    parse_flexible_bool(raw).ok_or_else(|| ExtensionError::InvalidField {
        key: key.to_string(),
        reason: format!("not a boolean: {raw:?}"),
    })
}

#[async_trait]
impl Extension for DemoExtension {
    fn ui(&self) -> Form {
        if self.task_running() {
            form::running_form(&self.console_contents())
        } else {
            form::stopped_form(&self.data)
        }
    }

    async fn submit(&mut self, event: SubmitEvent) -> Result<(), ExtensionError> {
        tracing::debug!(button = %event.button, "submission received");
        match event.button.as_str() {
            BUTTON_SUBMIT => {
                if let Err(err) = self.apply_submission(&event.data) {
                    self.link.show_message("Invalid data", err.to_string());
                    return Err(err);
                }
                self.start_counter();
                Ok(())
            }
            BUTTON_CANCEL => self.cancel().await,
            keys::BUTTON_TEST => {
                self.link
                    .show_message(Self::TITLE, "Test button pressed - everything is wired up");
                Ok(())
            }
            other => Err(ExtensionError::UnknownButton(other.to_string())),
        }
    }

    async fn cancel(&mut self) -> Result<(), ExtensionError> {
        if let Some(task) = self.task.take() {
            tracing::debug!("cancel requested");
            task.cancel();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio_stream::wrappers::UnboundedReceiverStream;

    fn stopped_extension() -> (DemoExtension, UnboundedReceiverStream<crate::extension_system::HostUpdate>) {
        let (link, updates) = HostLink::channel();
        (DemoExtension::new(link), updates)
    }

    #[test]
    fn test_apply_partial_update_touches_only_given_keys() {
        let (mut ext, _updates) = stopped_extension();
        let fields = HashMap::from([
            (keys::COUNT.to_string(), "8".to_string()),
            (keys::INPUT.to_string(), "hello".to_string()),
        ]);

        ext.apply_submission(&fields).unwrap();

        assert_eq!(ext.data().count, 8);
        assert_eq!(ext.data().input, "hello");
        // Untouched fields keep their defaults
        assert_eq!(ext.data().password, "123456");
        assert_eq!(ext.data().radiobox, "A");
    }

    #[test]
    fn test_apply_rejects_small_count_without_side_effects() {
        let (mut ext, _updates) = stopped_extension();
        let fields = HashMap::from([
            (keys::COUNT.to_string(), "5".to_string()),
            (keys::INPUT.to_string(), "changed".to_string()),
        ]);

        let err = ext.apply_submission(&fields).unwrap_err();
        assert!(matches!(err, ExtensionError::CountTooSmall { got: 5 }));
        // The scratch copy was discarded wholesale
        assert_eq!(ext.data().count, 10);
        assert_eq!(ext.data().input, "default");
    }

    #[test]
    fn test_apply_rejects_non_numeric_count() {
        let (mut ext, _updates) = stopped_extension();
        let fields = HashMap::from([(keys::COUNT.to_string(), "ten".to_string())]);

        let err = ext.apply_submission(&fields).unwrap_err();
        assert!(matches!(err, ExtensionError::InvalidField { key, .. } if key == keys::COUNT));
    }

    #[test]
    fn test_apply_rejects_bad_boolean() {
        let (mut ext, _updates) = stopped_extension();
        let fields = HashMap::from([(keys::SWITCH.to_string(), "maybe".to_string())]);

        let err = ext.apply_submission(&fields).unwrap_err();
        assert!(matches!(err, ExtensionError::InvalidField { key, .. } if key == keys::SWITCH));
    }

    #[test]
    fn test_apply_accepts_flexible_booleans() {
        let (mut ext, _updates) = stopped_extension();
        let fields = HashMap::from([
            (keys::SELECT.to_string(), "T".to_string()),
            (keys::SWITCH.to_string(), "0".to_string()),
        ]);

        ext.apply_submission(&fields).unwrap();
        assert!(ext.data().selected);
        assert!(!ext.data().switch_val);
    }

    #[test]
    fn test_ui_is_stopped_form_initially() {
        let (ext, _updates) = stopped_extension();
        let form = ext.ui();
        assert!(form.iter_fields().any(|f| f.key == keys::COUNT));
    }
}
