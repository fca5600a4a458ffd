// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::sync::Arc;

use anyhow::{anyhow, Result};
use minidom::Element;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::app::event_handlers::{HandlerDisposition, StanzaHandler};

/// The number of stanzas that may wait for the handler before `enqueue` applies backpressure.
const DEFAULT_CAPACITY: usize = 256;

/// Feeds the stanzas of a single account to a handler one at a time, in the order they were
/// received.
pub struct StanzaQueue {
    sender: mpsc::Sender<Element>,
    task: JoinHandle<()>,
}

impl StanzaQueue {
    /// Must be called from within a tokio runtime.
    pub fn spawn(handler: Arc<dyn StanzaHandler>) -> Self {
        Self::with_capacity(handler, DEFAULT_CAPACITY)
    }

    /// Like `spawn` but lets at most `capacity` stanzas wait for the handler.
    pub fn with_capacity(handler: Arc<dyn StanzaHandler>, capacity: usize) -> Self {
        let (sender, mut receiver) = mpsc::channel::<Element>(capacity.max(1));

        let task = tokio::spawn(async move {
            while let Some(stanza) = receiver.recv().await {
                if handler.handle_stanza(&stanza).await == HandlerDisposition::Remove {
                    debug!("Stanza handler '{}' unregistered itself.", handler.name());
                    break;
                }
            }
        });

        Self { sender, task }
    }

    /// Waits for a free slot if the handler is lagging behind.
    pub async fn enqueue(&self, stanza: Element) -> Result<()> {
        self.sender.send(stanza).await.map_err(|_| {
            warn!("Dropping stanza since the handler is no longer registered.");
            anyhow!("Stanza handler is no longer registered")
        })
    }

    /// Stops accepting stanzas and waits until the queued ones have been handled.
    pub async fn close(self) -> Result<()> {
        drop(self.sender);
        self.task.await?;
        Ok(())
    }
}
