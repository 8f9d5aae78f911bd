mod console;
mod extension;
mod form;
mod task;
mod types;

pub use console::Console;
pub use extension::DemoExtension;
pub use types::{keys, parse_flexible_bool, DemoData, DemoSettings, TaskEvent};
