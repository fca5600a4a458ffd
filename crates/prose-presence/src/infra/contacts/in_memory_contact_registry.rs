// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use jid::BareJid;
use parking_lot::RwLock;

use crate::domain::contacts::models::Contact;
use crate::domain::contacts::repos::ContactRegistry;

pub struct InMemoryContactRegistry {
    contacts: RwLock<HashMap<BareJid, Arc<Contact>>>,
}

impl InMemoryContactRegistry {
    pub fn new() -> Self {
        Self {
            contacts: Default::default(),
        }
    }

    /// Adds `contact`, replacing a previous contact with the same JID.
    pub fn insert(&self, contact: Arc<Contact>) -> Option<Arc<Contact>> {
        self.contacts.write().insert(contact.jid().clone(), contact)
    }

    pub fn remove(&self, jid: &BareJid) -> Option<Arc<Contact>> {
        self.contacts.write().remove(jid)
    }

    pub fn all(&self) -> Vec<Arc<Contact>> {
        self.contacts.read().values().cloned().collect()
    }
}

impl Default for InMemoryContactRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRegistry for InMemoryContactRegistry {
    async fn get(&self, jid: &BareJid) -> Option<Arc<Contact>> {
        self.contacts.read().get(jid).cloned()
    }
}
