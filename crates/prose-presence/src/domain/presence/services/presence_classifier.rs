// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::str::FromStr;

use crate::domain::presence::models::{PresenceError, PresenceType, RawPresenceEvent};
use crate::domain::shared::models::PresenceStatus;

/// Derives the normalized status of a presence. A `show` value that doesn't name a known
/// status is reported as `PresenceError::UnknownShow` instead of being coerced.
pub fn classify(event: &RawPresenceEvent) -> Result<PresenceStatus, PresenceError> {
    if matches!(
        event.r#type,
        PresenceType::Unavailable | PresenceType::Unsubscribed
    ) {
        return Ok(PresenceStatus::Offline);
    }

    if event.show.is_empty() {
        return Ok(PresenceStatus::Online);
    }

    PresenceStatus::from_str(&event.show).map_err(|_| PresenceError::UnknownShow {
        value: event.show.clone(),
    })
}
