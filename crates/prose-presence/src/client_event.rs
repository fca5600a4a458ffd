// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::BareJid;

use crate::domain::shared::models::PresenceStatus;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The aggregated presence of a contact was recomputed after a presence stanza.
    ContactPresenceChanged {
        id: BareJid,
        presence: PresenceStatus,
        old_presence: PresenceStatus,
    },
}
