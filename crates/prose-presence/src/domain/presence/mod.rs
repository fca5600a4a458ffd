// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
pub use stanza_query::StanzaQuery;

pub mod models;
pub mod services;
mod stanza_query;
