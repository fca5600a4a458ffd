// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use anyhow::Result;
use async_trait::async_trait;
use jid::BareJid;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RosterService: Send + Sync {
    /// Answers a presence subscription request of `to` with either `subscribed` or
    /// `unsubscribed`.
    async fn send_subscription_answer(&self, to: &BareJid, approve: bool) -> Result<()>;

    /// Asks `to` for a subscription to their presence, optionally announcing our nickname.
    /// https://xmpp.org/extensions/xep-0172.html#example-3
    async fn request_subscription(&self, to: &BareJid, nickname: Option<String>) -> Result<()>;
}
