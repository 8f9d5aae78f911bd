pub mod errors;
pub mod event;
pub mod extension;
pub mod form;
pub mod host;
pub mod registry;

pub use errors::ExtensionError;
pub use event::SubmitEvent;
pub use extension::Extension;
pub use form::{FieldType, Form, FormField, SelectItem, Validator, BUTTON_CANCEL, BUTTON_SUBMIT};
pub use host::{HostLink, HostUpdate};
pub use registry::{ExtensionFactory, ExtensionInfo, ExtensionRegistry};
