// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::settings::models::default_options;

/// Receives `(account_id, key, value, export)` after an option was written. `export`
/// returns the complete override document of the account.
pub type ChangeListener =
    Arc<dyn Fn(&str, &str, &Value, &dyn Fn() -> Map<String, Value>) + Send + Sync>;

/// Must be applied before anything else since logging may depend on it.
const STORAGE_KEY: &str = "storage";

/// The process-wide default options, shared by the `ConfigStore` of every account.
pub struct ConfigDefaults {
    options: RwLock<Map<String, Value>>,
    change_listener: RwLock<Option<ChangeListener>>,
}

impl ConfigDefaults {
    pub fn new(options: Map<String, Value>) -> Self {
        Self {
            options: RwLock::new(options),
            change_listener: Default::default(),
        }
    }

    /// Defaults initialized with the built-in option schema.
    pub fn standard() -> Self {
        Self::new(default_options())
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.options.read().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.options.read().contains_key(key)
    }

    pub(crate) fn to_value(&self) -> Value {
        Value::Object(self.options.read().clone())
    }

    /// Replaces default values. Keys that are not part of the defaults yet are dropped, with
    /// the exception of `storage`. Returns the dropped keys.
    pub fn overwrite(&self, mut options: Map<String, Value>) -> Vec<String> {
        if let Some(storage) = options.remove(STORAGE_KEY) {
            self.options.write().insert(STORAGE_KEY.to_string(), storage);
        }

        let unknown_keys = {
            let defaults = self.options.read();
            options
                .keys()
                .filter(|key| !defaults.contains_key(*key))
                .cloned()
                .collect::<Vec<_>>()
        };

        if !unknown_keys.is_empty() {
            warn!(
                "Ignoring unknown options {:?}. Only known options can be overwritten.",
                unknown_keys
            );
            for key in unknown_keys.iter() {
                options.remove(key);
            }
        }

        self.options.write().extend(options);
        unknown_keys
    }

    /// Registers new default values. Keys that already have a default keep it. Returns the
    /// dropped keys.
    pub fn add(&self, mut options: Map<String, Value>) -> Vec<String> {
        let known_keys = {
            let defaults = self.options.read();
            options
                .keys()
                .filter(|key| defaults.contains_key(*key))
                .cloned()
                .collect::<Vec<_>>()
        };

        if !known_keys.is_empty() {
            debug!("Options {:?} already have a default value.", known_keys);
            for key in known_keys.iter() {
                options.remove(key);
            }
        }

        self.options.write().extend(options);
        known_keys
    }

    pub fn set_change_listener(
        &self,
        listener: impl Fn(&str, &str, &Value, &dyn Fn() -> Map<String, Value>)
            + Send
            + Sync
            + 'static,
    ) {
        let listener: ChangeListener = Arc::new(listener);
        *self.change_listener.write() = Some(listener);
    }

    pub fn clear_change_listener(&self) {
        *self.change_listener.write() = None;
    }

    pub(crate) fn change_listener(&self) -> Option<ChangeListener> {
        self.change_listener.read().clone()
    }
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_overwrite_drops_unknown_keys() {
        let defaults = ConfigDefaults::new(map(json!({"a": 1, "b": 2})));
        let dropped = defaults.overwrite(map(json!({"a": 10, "unknownKey": 1})));

        assert_eq!(dropped, vec!["unknownKey".to_string()]);
        assert_eq!(defaults.get("a"), Some(json!(10)));
        assert_eq!(defaults.get("b"), Some(json!(2)));
        assert_eq!(defaults.get("unknownKey"), None);
    }

    #[test]
    fn test_overwrite_always_applies_storage() {
        let defaults = ConfigDefaults::new(map(json!({"a": 1})));
        let dropped = defaults.overwrite(map(json!({"storage": "local", "typo": true})));

        assert_eq!(dropped, vec!["typo".to_string()]);
        assert_eq!(defaults.get("storage"), Some(json!("local")));
        assert_eq!(defaults.get("typo"), None);
    }

    #[test]
    fn test_add_keeps_existing_defaults() {
        let defaults = ConfigDefaults::new(map(json!({"a": 1})));
        let dropped = defaults.add(map(json!({"a": 99, "plugin": {"enabled": true}})));

        assert_eq!(dropped, vec!["a".to_string()]);
        assert_eq!(defaults.get("a"), Some(json!(1)));
        assert_eq!(defaults.get("plugin"), Some(json!({"enabled": true})));
    }

    #[test]
    fn test_first_add_wins() {
        let defaults = ConfigDefaults::new(Map::new());
        defaults.add(map(json!({"plugin": 1})));
        defaults.add(map(json!({"plugin": 2})));
        assert_eq!(defaults.get("plugin"), Some(json!(1)));
    }
}
