// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use serde::{Deserialize, Serialize};

/// The result of a XEP-0030 disco#info query against an entity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiscoInfo {
    pub identities: Vec<String>,
    pub features: Vec<String>,
    /// The XEP-0115 verification string this info was cached under.
    pub caps_version: Option<String>,
}

impl DiscoInfo {
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Returns true if at least one of `features` is supported. An empty list never matches.
    pub fn has_any_feature<S: AsRef<str>>(&self, features: &[S]) -> bool {
        features.iter().any(|f| self.has_feature(f.as_ref()))
    }
}
