// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use jid::BareJid;
use minidom::Element;
use xmpp_parsers::presence::{Presence, Type};

use crate::domain::contacts::services::RosterService;
use crate::infra::xmpp::StanzaSender;

const NS_NICK: &str = "http://jabber.org/protocol/nick";

/// Implements the subscription handshake with plain presence stanzas.
/// https://xmpp.org/rfcs/rfc6121.html#sub
pub struct XMPPRosterService {
    sender: Arc<dyn StanzaSender>,
}

impl XMPPRosterService {
    pub fn new(sender: Arc<dyn StanzaSender>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl RosterService for XMPPRosterService {
    async fn send_subscription_answer(&self, to: &BareJid, approve: bool) -> Result<()> {
        let r#type = if approve {
            Type::Subscribed
        } else {
            Type::Unsubscribed
        };
        self.sender
            .send_stanza(Presence::new(r#type).with_to(to.clone()).into())
    }

    async fn request_subscription(&self, to: &BareJid, nickname: Option<String>) -> Result<()> {
        let mut presence = Presence::new(Type::Subscribe).with_to(to.clone());

        if let Some(nickname) = nickname {
            presence
                .payloads
                .push(Element::builder("nick", NS_NICK).append(nickname).build());
        }

        self.sender.send_stanza(presence.into())
    }
}
