// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
pub use presence_error::PresenceError;
pub use raw_presence_event::{PresenceType, RawPresenceEvent};
pub use stanza_error_details::StanzaErrorDetails;

mod presence_error;
mod raw_presence_event;
mod stanza_error_details;
