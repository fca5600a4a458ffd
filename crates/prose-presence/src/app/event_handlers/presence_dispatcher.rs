// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use anyhow::Result;
use async_trait::async_trait;
use minidom::Element;
use tracing::{debug, error, warn};

use crate::app::deps::{
    AppDependencies, DynAccountContext, DynClientEventDispatcher, DynContactRegistry,
};
use crate::app::event_handlers::{HandlerDisposition, StanzaHandler};
use crate::app::services::{SubscriptionResult, SubscriptionWorkflow};
use crate::domain::presence::models::{
    PresenceError, PresenceType, RawPresenceEvent, StanzaErrorDetails,
};
use crate::domain::presence::services::classify;
use crate::domain::presence::StanzaQuery;
use crate::domain::shared::models::PresenceStatus;
use crate::ClientEvent;

/// What `PresenceDispatcher::handle_presence` did with a stanza.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenceOutcome {
    /// The stanza was an echo of our own presence. `updated` is true if it came from our
    /// connected resource and thus replaced our presence.
    OwnPresence { updated: bool },
    /// The stanza was an error which has been logged.
    Error(StanzaErrorDetails),
    /// The stanza was a presence subscription request.
    Subscription(SubscriptionResult),
    /// The sender is not in our contact list.
    UnknownContact,
    /// The stanza carried a `show` value we don't know. Nothing was changed.
    UnknownStatus { show: String },
    ContactUpdated {
        presence: PresenceStatus,
        old_presence: PresenceStatus,
    },
}

/// Interprets received presence stanzas for a single account.
pub struct PresenceDispatcher {
    client_event_dispatcher: DynClientEventDispatcher,
    contact_registry: DynContactRegistry,
    ctx: DynAccountContext,
    subscription_workflow: SubscriptionWorkflow,
}

impl From<&AppDependencies> for PresenceDispatcher {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            contact_registry: deps.contact_registry.clone(),
            ctx: deps.ctx.clone(),
            subscription_workflow: SubscriptionWorkflow::from(deps),
        }
    }
}

#[async_trait]
impl StanzaHandler for PresenceDispatcher {
    fn name(&self) -> &'static str {
        "presence"
    }

    async fn handle_stanza(&self, stanza: &Element) -> HandlerDisposition {
        if stanza.name() != "presence" {
            return HandlerDisposition::Preserve;
        }

        match self.handle_presence(stanza).await {
            Ok(outcome) => debug!("Handled presence: {:?}", outcome),
            Err(err) => warn!("Failed to handle presence stanza. {}", err),
        }

        HandlerDisposition::Preserve
    }
}

impl PresenceDispatcher {
    pub async fn handle_presence<S: StanzaQuery + Sync>(
        &self,
        stanza: &S,
    ) -> Result<PresenceOutcome> {
        let event = RawPresenceEvent::parse(stanza)?;
        let status = classify(&event);

        let from = event.from.to_bare();
        let connected_jid = self.ctx.connected_jid();

        if from == connected_jid.to_bare() {
            if event.from.resource_str() != Some(connected_jid.resource_str()) {
                return Ok(PresenceOutcome::OwnPresence { updated: false });
            }

            let status = match status {
                Ok(status) => status,
                Err(err) => return unknown_status(err),
            };

            self.ctx.set_presence(status);
            return Ok(PresenceOutcome::OwnPresence { updated: true });
        }

        if event.r#type == PresenceType::Error {
            let details = event.error.unwrap_or_default();
            error!("[XMPP] Presence error from {}: {}", event.from, details);
            return Ok(PresenceOutcome::Error(details));
        }

        if event.r#type == PresenceType::Subscribe {
            debug!("Received presence subscription request from {}.", event.from);
            let contact = self.contact_registry.get(&from).await;
            let result = self
                .subscription_workflow
                .handle_subscribe_request(&from, contact, event.nickname)
                .await?;
            return Ok(PresenceOutcome::Subscription(result));
        }

        let Some(contact) = self.contact_registry.get(&from).await else {
            warn!("Could not find contact for presence of {}.", event.from);
            return Ok(PresenceOutcome::UnknownContact);
        };

        let status = match status {
            Ok(status) => status,
            Err(err) => return unknown_status(err),
        };

        let old_presence = contact.presence();

        contact.set_status(event.status);
        contact.set_presence(event.from.resource_str().unwrap_or_default(), status);
        // Route new messages to the bare JID again.
        contact.set_pinned_resource(None);

        let presence = contact.presence();
        debug!("Presence of {} is now {}.", event.from, status);

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ContactPresenceChanged {
                id: from,
                presence,
                old_presence,
            });

        Ok(PresenceOutcome::ContactUpdated {
            presence,
            old_presence,
        })
    }
}

fn unknown_status(err: PresenceError) -> Result<PresenceOutcome> {
    let PresenceError::UnknownShow { value } = err else {
        return Err(err.into());
    };
    warn!("Ignoring presence with unknown show value '{}'.", value);
    Ok(PresenceOutcome::UnknownStatus { show: value })
}
