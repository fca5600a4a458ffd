// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::domain::settings::ConfigError;

/// A dotted option path like `presence.priority.online`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The top-level key of the option document this path points into.
    pub fn root(&self) -> &str {
        &self.0[0]
    }

    pub(crate) fn split_leaf(&self) -> (&[String], &str) {
        let (leaf, parents) = self
            .0
            .split_last()
            .expect("KeyPath always contains at least one segment");
        (parents, leaf)
    }
}

impl FromStr for KeyPath {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = s.split('.').map(ToString::to_string).collect::<Vec<_>>();

        if segments.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidKeyPath { key: s.to_string() });
        }

        Ok(KeyPath(segments))
    }
}

impl Display for KeyPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}
