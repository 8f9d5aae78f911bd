//! Extension factories and the registry the host instantiates from

use super::errors::ExtensionError;
use super::extension::Extension;
use super::host::HostLink;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

type Builder = Box<dyn Fn(HostLink) -> Box<dyn Extension> + Send + Sync>;

/// Metadata plus constructor for one extension
pub struct ExtensionFactory {
    pub id: &'static str,
    /// Stable instance id for host-side routing
    pub uuid: Uuid,
    pub title: &'static str,
    pub description: &'static str,
    builder: Builder,
}

impl ExtensionFactory {
    pub fn new(
        id: &'static str,
        uuid: Uuid,
        title: &'static str,
        description: &'static str,
        builder: impl Fn(HostLink) -> Box<dyn Extension> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            uuid,
            title,
            description,
            builder: Box::new(builder),
        }
    }

    /// Build a fresh instance wired to the given host link
    pub fn build(&self, link: HostLink) -> Box<dyn Extension> {
        (self.builder)(link)
    }

    pub fn info(&self) -> ExtensionInfo {
        ExtensionInfo {
            id: self.id.to_string(),
            uuid: self.uuid,
            title: self.title.to_string(),
            description: self.description.to_string(),
        }
    }
}

/// Serializable listing entry for a registered extension
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtensionInfo {
    pub id: String,
    pub uuid: Uuid,
    pub title: String,
    pub description: String,
}

/// Registry the host looks extensions up in
///
/// Registration is chained, mirroring how instances are assembled in
/// [`crate::builder`].
#[derive(Default)]
pub struct ExtensionRegistry {
    factories: HashMap<String, ExtensionFactory>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory; a later registration under the same id replaces
    /// the earlier one.
    pub fn register(mut self, factory: ExtensionFactory) -> Self {
        self.factories.insert(factory.id.to_string(), factory);
        self
    }

    /// All registered ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Listing of all registered extensions, sorted by id
    pub fn infos(&self) -> Vec<ExtensionInfo> {
        let mut infos: Vec<ExtensionInfo> =
            self.factories.values().map(ExtensionFactory::info).collect();
        infos.sort_by(|a, b| a.id.cmp(&b.id));
        infos
    }

    /// Instantiate an extension by id
    pub fn instantiate(
        &self,
        id: &str,
        link: HostLink,
    ) -> Result<Box<dyn Extension>, ExtensionError> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| ExtensionError::ExtensionNotFound(id.to_string()))?;
        tracing::debug!(id, "instantiating extension");
        Ok(factory.build(link))
    }
}
