pub mod builder;
pub mod demo;
pub mod extension_system;

// Re-export commonly used items
pub use builder::build_registry;
pub use demo::DemoExtension;
pub use extension_system::{
    Extension, ExtensionError, ExtensionFactory, ExtensionInfo, ExtensionRegistry, FieldType,
    Form, FormField, HostLink, HostUpdate, SelectItem, SubmitEvent,
};
