// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
pub use config_defaults::{ChangeListener, ConfigDefaults};
pub use config_error::ConfigError;
pub use config_store::ConfigStore;

pub mod models;
pub mod repos;

mod config_defaults;
mod config_error;
mod config_store;
