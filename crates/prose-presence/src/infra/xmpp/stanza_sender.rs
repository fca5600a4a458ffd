// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use anyhow::Result;
use minidom::Element;

/// The outgoing side of the connection.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait StanzaSender: Send + Sync {
    fn send_stanza(&self, stanza: Element) -> Result<()>;
}
