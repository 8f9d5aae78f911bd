//! Submission events delivered by the host

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A button press or form submission forwarded by the host
///
/// `button` is the key of the pressed button field; `data` carries the current
/// value of every editable field, keyed by field key. All values arrive as
/// strings - parsing them is the extension's job.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SubmitEvent {
    pub button: String,
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl SubmitEvent {
    pub fn new(button: impl Into<String>) -> Self {
        Self {
            button: button.into(),
            data: HashMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}
