// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::fmt::{Display, Formatter};

use crate::domain::presence::StanzaQuery;

/// The diagnostic fields of an `<error/>` element in a presence stanza of type `error`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StanzaErrorDetails {
    pub code: String,
    pub r#type: String,
    /// The name of the first child element, usually the defined condition.
    pub condition: Option<String>,
    pub text: Option<String>,
}

impl StanzaErrorDetails {
    pub fn parse<S: StanzaQuery>(error: &S) -> Self {
        StanzaErrorDetails {
            code: error.attribute("code").unwrap_or_default().to_string(),
            r#type: error.attribute("type").unwrap_or_default().to_string(),
            condition: error.first_child_name().map(ToString::to_string),
            text: error.child_text("text").filter(|text| !text.is_empty()),
        }
    }
}

impl Display for StanzaErrorDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.r#type,
            self.code,
            self.condition.as_deref().unwrap_or_default(),
            self.text.as_deref().unwrap_or_default()
        )
    }
}
