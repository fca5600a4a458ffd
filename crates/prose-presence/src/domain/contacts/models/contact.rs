// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::fmt::{Debug, Formatter};

use indexmap::IndexMap;
use jid::BareJid;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::domain::shared::models::PresenceStatus;

/// The presence subscription between our account and a contact.
/// https://xmpp.org/rfcs/rfc6121.html#roster-syntax-items-subscription
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Subscription {
    /// Neither side is subscribed to the other's presence.
    #[default]
    None,
    /// We are subscribed to the contact's presence.
    To,
    /// The contact is subscribed to our presence.
    From,
    /// Both sides are subscribed.
    Both,
}

/// A contact of the logged-in account. Contacts are shared between the contact list and the
/// presence handling, hence the interior mutability.
pub struct Contact {
    jid: BareJid,
    state: RwLock<ContactState>,
}

#[derive(Debug, Default)]
struct ContactState {
    nickname: Option<String>,
    status: Option<String>,
    subscription: Subscription,
    /// Presence per connected resource. A presence sent from the bare JID is stored under "".
    resources: IndexMap<String, PresenceStatus>,
    pinned_resource: Option<String>,
}

impl Contact {
    pub fn new(jid: BareJid, subscription: Subscription) -> Self {
        Self {
            jid,
            state: RwLock::new(ContactState {
                subscription,
                ..Default::default()
            }),
        }
    }

    pub fn jid(&self) -> &BareJid {
        &self.jid
    }

    pub fn nickname(&self) -> Option<String> {
        self.state.read().nickname.clone()
    }

    pub fn set_nickname(&self, nickname: impl Into<String>) {
        self.state.write().nickname = Some(nickname.into());
    }

    /// The free-text status message of the contact.
    pub fn status(&self) -> Option<String> {
        self.state.read().status.clone()
    }

    pub fn set_status(&self, status: impl Into<String>) {
        let status = status.into();
        self.state.write().status = (!status.is_empty()).then_some(status);
    }

    pub fn subscription(&self) -> Subscription {
        self.state.read().subscription
    }

    pub fn set_subscription(&self, subscription: Subscription) {
        self.state.write().subscription = subscription;
    }

    /// The most available presence across all connected resources.
    pub fn presence(&self) -> PresenceStatus {
        self.state
            .read()
            .resources
            .values()
            .min_by_key(|status| status.availability_rank())
            .copied()
            .unwrap_or(PresenceStatus::Offline)
    }

    pub fn resource_presence(&self, resource: &str) -> PresenceStatus {
        self.state
            .read()
            .resources
            .get(resource)
            .copied()
            .unwrap_or(PresenceStatus::Offline)
    }

    /// Sets the presence of a single resource. Going offline forgets the resource.
    pub fn set_presence(&self, resource: impl Into<String>, status: PresenceStatus) {
        let resource = resource.into();
        let mut state = self.state.write();

        if status == PresenceStatus::Offline {
            state.resources.shift_remove(&resource);
        } else {
            state.resources.insert(resource, status);
        }
    }

    /// The resources we've received a presence from, in order of arrival.
    pub fn resources(&self) -> Vec<String> {
        self.state.read().resources.keys().cloned().collect()
    }

    /// The resource outgoing messages are addressed to. `None` means the bare JID is used.
    pub fn pinned_resource(&self) -> Option<String> {
        self.state.read().pinned_resource.clone()
    }

    pub fn set_pinned_resource(&self, resource: Option<String>) {
        self.state.write().pinned_resource = resource;
    }
}

impl Debug for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Contact")
            .field("jid", &self.jid)
            .field("state", &*self.state.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> Contact {
        Contact::new("friend@prose.org".parse().unwrap(), Subscription::Both)
    }

    #[test]
    fn test_presence_without_resources_is_offline() {
        assert_eq!(contact().presence(), PresenceStatus::Offline);
    }

    #[test]
    fn test_aggregates_most_available_resource() {
        let contact = contact();
        contact.set_presence("phone", PresenceStatus::Xa);
        contact.set_presence("desktop", PresenceStatus::Dnd);
        assert_eq!(contact.presence(), PresenceStatus::Xa);

        contact.set_presence("laptop", PresenceStatus::Online);
        assert_eq!(contact.presence(), PresenceStatus::Online);
    }

    #[test]
    fn test_offline_forgets_resource() {
        let contact = contact();
        contact.set_presence("phone", PresenceStatus::Away);
        contact.set_presence("desktop", PresenceStatus::Chat);
        contact.set_presence("desktop", PresenceStatus::Offline);

        assert_eq!(contact.resources(), vec!["phone".to_string()]);
        assert_eq!(contact.presence(), PresenceStatus::Away);
        assert_eq!(contact.resource_presence("desktop"), PresenceStatus::Offline);
    }

    #[test]
    fn test_empty_status_is_cleared() {
        let contact = contact();
        contact.set_status("In a meeting");
        assert_eq!(contact.status(), Some("In a meeting".to_string()));
        contact.set_status("");
        assert_eq!(contact.status(), None);
    }
}
