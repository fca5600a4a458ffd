// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::str::FromStr;

use jid::Jid;
use strum_macros::{Display, EnumString};

use crate::domain::presence::models::{PresenceError, StanzaErrorDetails};
use crate::domain::presence::StanzaQuery;

/// https://xmpp.org/rfcs/rfc6121.html#presence-syntax-type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PresenceType {
    /// No `type` attribute, i.e. the sender is available.
    #[strum(disabled)]
    None,
    Error,
    Probe,
    Subscribe,
    Subscribed,
    Unavailable,
    Unsubscribe,
    Unsubscribed,
}

/// A received presence stanza, reduced to what the presence handling looks at. Lives only for
/// the duration of a single dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPresenceEvent {
    pub r#type: PresenceType,
    pub from: Jid,
    /// The `<show/>` value. Empty if absent.
    pub show: String,
    /// The free-text `<status/>`. Empty if absent.
    pub status: String,
    /// The XEP-0172 nickname the sender announced, if any.
    pub nickname: Option<String>,
    /// Only set for presences of type `error`.
    pub error: Option<StanzaErrorDetails>,
}

impl RawPresenceEvent {
    pub fn parse<S: StanzaQuery>(stanza: &S) -> Result<Self, PresenceError> {
        let r#type = match stanza.attribute("type") {
            None => PresenceType::None,
            Some(value) => PresenceType::from_str(value).map_err(|_| {
                PresenceError::UnknownType {
                    value: value.to_string(),
                }
            })?,
        };

        let from = stanza
            .attribute("from")
            .ok_or(PresenceError::MissingAttribute { name: "from" })?
            .parse::<Jid>()?;

        let error = (r#type == PresenceType::Error).then(|| {
            stanza
                .child("error")
                .map(StanzaErrorDetails::parse)
                .unwrap_or_default()
        });

        Ok(RawPresenceEvent {
            r#type,
            from,
            show: stanza.child_text("show").unwrap_or_default(),
            status: stanza.child_text("status").unwrap_or_default(),
            nickname: stanza.child_text("nick").filter(|nick| !nick.is_empty()),
            error,
        })
    }
}
