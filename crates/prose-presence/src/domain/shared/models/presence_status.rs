// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The normalized presence of an entity, derived from the `type` and `show` of a presence
/// stanza. The labels match the values of the XMPP `<show/>` element where one exists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PresenceStatus {
    Online,
    Chat,
    Away,
    Xa,
    Dnd,
    #[default]
    Offline,
}

impl PresenceStatus {
    /// Lower is more available. Only used to pick the aggregate presence of a contact with
    /// multiple connected resources.
    pub(crate) fn availability_rank(&self) -> u8 {
        match self {
            PresenceStatus::Online => 0,
            PresenceStatus::Chat => 1,
            PresenceStatus::Away => 2,
            PresenceStatus::Xa => 3,
            PresenceStatus::Dnd => 4,
            PresenceStatus::Offline => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_parses_lowercase_labels() {
        assert_eq!(PresenceStatus::from_str("dnd"), Ok(PresenceStatus::Dnd));
        assert_eq!(PresenceStatus::from_str("xa"), Ok(PresenceStatus::Xa));
        assert_eq!(PresenceStatus::from_str("chat"), Ok(PresenceStatus::Chat));
        assert!(PresenceStatus::from_str("DND").is_err());
        assert!(PresenceStatus::from_str("busy").is_err());
    }

    #[test]
    fn test_display_roundtrips_label() {
        assert_eq!(PresenceStatus::Away.to_string(), "away");
        assert_eq!(PresenceStatus::default(), PresenceStatus::Offline);
    }
}
