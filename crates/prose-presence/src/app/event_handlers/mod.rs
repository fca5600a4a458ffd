// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use async_trait::async_trait;
use minidom::Element;

pub use presence_dispatcher::{PresenceDispatcher, PresenceOutcome};
pub use stanza_queue::StanzaQueue;

use crate::ClientEvent;

mod presence_dispatcher;
mod stanza_queue;

/// Tells the stanza routing whether a handler wants to receive further stanzas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerDisposition {
    /// The stanza was consumed and the handler stays registered.
    Preserve,
    /// The handler is done and should be unregistered.
    Remove,
}

/// A handler for received stanzas. Handlers deal with their errors themselves, the routing
/// only looks at the returned `HandlerDisposition`.
#[async_trait]
pub trait StanzaHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_stanza(&self, stanza: &Element) -> HandlerDisposition;
}

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcherTrait: Send + Sync {
    fn dispatch_event(&self, event: ClientEvent);
}
