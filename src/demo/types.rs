//! Data record, settings and task events for the demo extension

use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Field keys, matching the JSON keys of [`DemoData`]
pub mod keys {
    pub const COUNT: &str = "count";
    pub const INPUT: &str = "input";
    pub const PASSWORD: &str = "password";
    pub const EMAIL: &str = "email";
    pub const SELECT: &str = "select";
    pub const TEXTAREA: &str = "textarea";
    pub const SWITCH: &str = "switchVal";
    pub const RADIOBOX: &str = "radiobox";
    pub const CONTENT: &str = "content";
    pub const CONSOLE: &str = "console";
    pub const BUTTON_TEST: &str = "button_test";
}

/// The demo extension's flat form state
///
/// Edited by form submission, reset on process restart - there is no
/// persistence by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DemoData {
    pub count: u32,
    pub input: String,
    pub password: String,
    pub email: String,
    pub selected: bool,
    pub textarea: String,
    pub switch_val: bool,
    pub radiobox: String,
    pub content: String,
}

impl Default for DemoData {
    fn default() -> Self {
        Self {
            count: 10,
            input: "default".to_string(),
            password: "123456".to_string(),
            email: "appdemo@extension.com".to_string(),
            selected: false,
            textarea: "area".to_string(),
            switch_val: true,
            radiobox: "A".to_string(),
            content: "Welcome to Example Extension".to_string(),
        }
    }
}

/// Runtime knobs for the demo extension
#[derive(Debug, Clone)]
pub struct DemoSettings {
    /// Delay between counter ticks
    pub tick: Duration,
    /// Maximum console lines kept; oldest lines fall off
    pub console_capacity: usize,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            console_capacity: 200,
        }
    }
}

impl DemoSettings {
    /// Defaults overridden by `DEMO_EXTENSION_TICK_MS` and
    /// `DEMO_EXTENSION_CONSOLE_LINES`
    pub fn from_env() -> anyhow::Result<Self> {
        let mut settings = Self::default();
        if let Ok(raw) = std::env::var("DEMO_EXTENSION_TICK_MS") {
            let ms: u64 = raw
                .parse()
                .with_context(|| format!("DEMO_EXTENSION_TICK_MS is not a number: {raw:?}"))?;
            settings.tick = Duration::from_millis(ms);
        }
        if let Ok(raw) = std::env::var("DEMO_EXTENSION_CONSOLE_LINES") {
            settings.console_capacity = raw
                .parse()
                .with_context(|| format!("DEMO_EXTENSION_CONSOLE_LINES is not a number: {raw:?}"))?;
        }
        Ok(settings)
    }
}

/// Events emitted by the background counter task
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TaskEvent {
    /// One counter step completed
    Tick { n: u32, timestamp: i64 },
    /// All steps completed
    Finished { total: u32, timestamp: i64 },
    /// Cancelled after `completed` steps
    Canceled { completed: u32, timestamp: i64 },
}

impl TaskEvent {
    pub fn tick(n: u32) -> Self {
        TaskEvent::Tick {
            n,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    pub fn finished(total: u32) -> Self {
        TaskEvent::Finished {
            total,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    pub fn canceled(completed: u32) -> Self {
        TaskEvent::Canceled {
            completed,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    /// Whether this event ends the task
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TaskEvent::Tick { .. })
    }
}

/// Parse the boolean lexicon switches arrive in: 1/t/T/TRUE/true/True and
/// the matching false forms.
pub fn parse_flexible_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
