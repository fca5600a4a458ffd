// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use serde_json::{json, Map, Value};

/// The built-in option schema. `ConfigDefaults::overwrite` only accepts keys listed here.
pub fn default_options() -> Map<String, Value> {
    json!({
        "xmpp": {
            "url": null,
            "domain": null,
            "resource": null,
            "overwrite": false,
        },
        "presence": {
            "priority": {
                "online": 0,
                "chat": 0,
                "away": 0,
                "xa": 0,
                "dnd": 0,
            },
        },
        "notification": {
            "enable": true,
            "mute": false,
        },
        "nickname": null,
        "numberOfMessages": 10,
    })
    .as_object()
    .cloned()
    .unwrap_or_default()
}
