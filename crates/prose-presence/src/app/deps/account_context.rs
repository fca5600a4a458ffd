// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use jid::{BareJid, FullJid};
use parking_lot::RwLock;

use crate::domain::shared::models::PresenceStatus;

/// State of the logged-in account.
pub struct AccountContext {
    connected_jid: FullJid,
    presence: RwLock<PresenceStatus>,
    nickname: RwLock<Option<String>>,
}

impl AccountContext {
    pub fn new(connected_jid: FullJid) -> Self {
        Self {
            connected_jid,
            presence: Default::default(),
            nickname: Default::default(),
        }
    }

    pub fn connected_jid(&self) -> &FullJid {
        &self.connected_jid
    }

    pub fn bare_jid(&self) -> BareJid {
        self.connected_jid.to_bare()
    }

    /// Our own presence, as echoed back by the server.
    pub fn presence(&self) -> PresenceStatus {
        *self.presence.read()
    }

    pub fn set_presence(&self, presence: PresenceStatus) {
        *self.presence.write() = presence;
    }

    pub fn nickname(&self) -> Option<String> {
        self.nickname.read().clone()
    }

    pub fn set_nickname(&self, nickname: Option<String>) {
        *self.nickname.write() = nickname;
    }

    /// The nickname to present to others, falling back to our bare JID.
    pub fn display_nickname(&self) -> String {
        self.nickname()
            .filter(|nickname| !nickname.is_empty())
            .unwrap_or_else(|| self.bare_jid().to_string())
    }
}
