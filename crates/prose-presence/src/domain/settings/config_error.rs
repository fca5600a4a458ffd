// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid option key path '{key}'.")]
    InvalidKeyPath { key: String },
    #[error("Cannot set option '{key}' since '{segment}' is not an object.")]
    NotAnObject { key: String, segment: String },
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
