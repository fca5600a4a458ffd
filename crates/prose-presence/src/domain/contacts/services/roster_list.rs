// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::sync::Arc;

use crate::domain::contacts::models::Contact;

/// The visible contact list.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RosterList: Send + Sync {
    fn add(&self, contact: Arc<Contact>);
}
