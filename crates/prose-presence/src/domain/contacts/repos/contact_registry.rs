// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::sync::Arc;

use async_trait::async_trait;
use jid::BareJid;

use crate::domain::contacts::models::Contact;

/// The account's contact list. Contacts are created and destroyed by the contact list, the
/// presence handling only looks them up and mutates their state.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ContactRegistry: Send + Sync {
    async fn get(&self, jid: &BareJid) -> Option<Arc<Contact>>;
}
