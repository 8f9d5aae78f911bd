//! Registry builder - constructs the registry a host instantiates from

use crate::demo::DemoExtension;
use crate::extension_system::ExtensionRegistry;

/// Build the registry with every extension this crate ships
pub fn build_registry() -> ExtensionRegistry {
    ExtensionRegistry::new().register(DemoExtension::factory())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_extension_is_registered() {
        let registry = build_registry();
        assert_eq!(registry.ids(), vec![DemoExtension::ID]);

        let info = &registry.infos()[0];
        assert_eq!(info.title, DemoExtension::TITLE);
        assert_eq!(info.uuid, DemoExtension::EXTENSION_UUID);
    }
}
