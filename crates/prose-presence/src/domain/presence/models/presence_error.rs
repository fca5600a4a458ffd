// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    #[error("Missing required attribute '{name}' in presence stanza.")]
    MissingAttribute { name: &'static str },
    #[error(transparent)]
    InvalidJid(#[from] jid::Error),
    #[error("Unknown presence type '{value}'.")]
    UnknownType { value: String },
    #[error("Unknown presence show value '{value}'.")]
    UnknownShow { value: String },
}
