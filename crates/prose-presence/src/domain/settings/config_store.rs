// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::sync::Arc;

use parking_lot::ReentrantMutex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::settings::models::{resolve, KeyPath};
use crate::domain::settings::repos::KeyValueStore;
use crate::domain::settings::{ConfigDefaults, ConfigError};

/// The storage key the override document is persisted under.
const OPTIONS_KEY: &str = "options";

/// Resolves the options of a single account by layering its persisted overrides on top of the
/// shared `ConfigDefaults`.
pub struct ConfigStore {
    storage: Arc<dyn KeyValueStore>,
    defaults: Arc<ConfigDefaults>,
    /// Serializes read-modify-write cycles of the override document. Reentrant so that hooks
    /// may write options themselves.
    write_lock: ReentrantMutex<()>,
}

impl ConfigStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, defaults: Arc<ConfigDefaults>) -> Self {
        Self {
            storage,
            defaults,
            write_lock: ReentrantMutex::new(()),
        }
    }

    /// The account identifier, `client` if the storage is unnamed.
    pub fn id(&self) -> String {
        let name = self.storage.name();
        if name.is_empty() {
            return "client".to_string();
        }
        name
    }

    pub fn defaults(&self) -> &Arc<ConfigDefaults> {
        &self.defaults
    }

    /// Returns the configured value at `key` or `None` if neither the account nor the
    /// defaults define it.
    pub fn get(&self, key: &str) -> Result<Option<Value>, ConfigError> {
        let path = key.parse::<KeyPath>()?;
        let overrides = self.storage.get_item(OPTIONS_KEY);
        let value = resolve(&path, overrides.as_ref(), &self.defaults.to_value());

        if value.is_none() {
            debug!("No value configured for option '{}'.", key);
        }

        Ok(value)
    }

    /// Persists `value` at `key` in the account's override document and notifies the
    /// change listener of the defaults, if any.
    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        let path = key.parse::<KeyPath>()?;
        let value = value.into();

        let _guard = self.write_lock.lock();

        let mut options = self.export();
        insert_value(&mut options, &path, value.clone())?;
        self.storage.set_item(OPTIONS_KEY, Value::Object(options))?;

        if let Some(listener) = self.defaults.change_listener() {
            listener(&self.id(), key, &value, &|| self.export());
        }

        Ok(())
    }

    /// Calls `hook` with the new and the previous value whenever the resolved value at `key`
    /// changes. Writes that don't change the resolved value are not reported, in particular
    /// writes to other top-level options.
    pub fn register_hook(
        &self,
        key: &str,
        hook: impl Fn(Option<&Value>, Option<&Value>) + Send + Sync + 'static,
    ) -> Result<(), ConfigError> {
        let path = key.parse::<KeyPath>()?;
        let defaults = self.defaults.clone();

        self.storage.register_hook(
            OPTIONS_KEY,
            Box::new(move |new_options, old_options| {
                let root = path.root();
                if Some(new_options.get(root)) == old_options.map(|options| options.get(root)) {
                    return;
                }

                let defaults = defaults.to_value();
                let new_value = resolve(&path, Some(new_options), &defaults);
                let old_value = resolve(&path, old_options, &defaults);

                if new_value != old_value {
                    hook(new_value.as_ref(), old_value.as_ref());
                }
            }),
        );

        Ok(())
    }

    /// The account's override document.
    pub fn export(&self) -> Map<String, Value> {
        match self.storage.get_item(OPTIONS_KEY) {
            Some(Value::Object(options)) => options,
            Some(_) => {
                warn!("Stored options are not an object. Ignoring them.");
                Map::new()
            }
            None => Map::new(),
        }
    }
}

fn insert_value(
    options: &mut Map<String, Value>,
    path: &KeyPath,
    value: Value,
) -> Result<(), ConfigError> {
    let (parents, leaf) = path.split_leaf();
    let mut node = options;

    for segment in parents {
        let child = node
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));

        if child.is_null() {
            *child = Value::Object(Map::new());
        }

        node = child
            .as_object_mut()
            .ok_or_else(|| ConfigError::NotAnObject {
                key: path.to_string(),
                segment: segment.clone(),
            })?;
    }

    node.insert(leaf.to_string(), value);
    Ok(())
}
