// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
pub use roster_service::XMPPRosterService;
pub use stanza_sender::StanzaSender;

mod roster_service;
mod stanza_query;
mod stanza_sender;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::stanza_sender::MockStanzaSender;
}
