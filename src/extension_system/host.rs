//! The push channel from an extension back to the host
//!
//! Extensions are driven by the host, but a running background task needs to
//! push refreshed UI and modal messages the other way. [`HostLink`] is the
//! extension-side handle; the host (or a test) drains the paired stream.

use super::form::Form;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Everything an extension can push at the host
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostUpdate {
    /// Replace the currently rendered form
    Ui { form: Form },
    /// Show a modal message
    Message { title: String, message: String },
}

/// Cloneable sender handed to an extension at construction
///
/// Sends never block and never fail loudly: once the host side is gone the
/// extension keeps working and updates are dropped.
#[derive(Clone)]
pub struct HostLink {
    tx: mpsc::UnboundedSender<HostUpdate>,
}

impl HostLink {
    /// Create a link plus the host-side stream of updates
    pub fn channel() -> (Self, UnboundedReceiverStream<HostUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, UnboundedReceiverStream::new(rx))
    }

    pub fn send(&self, update: HostUpdate) {
        if self.tx.send(update).is_err() {
            tracing::debug!("host side closed, dropping update");
        }
    }

    pub fn update_ui(&self, form: Form) {
        self.send(HostUpdate::Ui { form });
    }

    pub fn show_message(&self, title: impl Into<String>, message: impl Into<String>) {
        self.send(HostUpdate::Message {
            title: title.into(),
            message: message.into(),
        });
    }
}
