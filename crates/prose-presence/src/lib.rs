// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::event_handlers::{HandlerDisposition, PresenceDispatcher, StanzaHandler, StanzaQueue};
pub use app::services::SubscriptionWorkflow;
pub use client_event::ClientEvent;
pub use domain::settings::{ConfigDefaults, ConfigError, ConfigStore};

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client_event;
pub mod domain;
pub mod infra;
