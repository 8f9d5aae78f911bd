//! The Extension trait - what the host drives

use super::errors::ExtensionError;
use super::event::SubmitEvent;
use super::form::Form;
use async_trait::async_trait;

/// An installable extension instance
///
/// The host owns the lifecycle: it builds the instance through an
/// [`super::ExtensionFactory`], calls [`ui`](Extension::ui) whenever it needs
/// to (re)render, forwards every button press to
/// [`submit`](Extension::submit), and calls [`stop`](Extension::stop) on
/// teardown. Anything the extension wants to say in between goes through the
/// [`super::HostLink`] it received at construction.
#[async_trait]
pub trait Extension: Send + Sync {
    /// Current form description
    fn ui(&self) -> Form;

    /// Handle a button press or form submission
    async fn submit(&mut self, event: SubmitEvent) -> Result<(), ExtensionError>;

    /// Cancel whatever the extension is currently doing
    async fn cancel(&mut self) -> Result<(), ExtensionError>;

    /// Called once when the host closes the extension
    async fn stop(&mut self) -> Result<(), ExtensionError> {
        self.cancel().await
    }
}
