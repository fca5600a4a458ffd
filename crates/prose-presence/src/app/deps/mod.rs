// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
pub use account_context::AccountContext;
pub use app_dependencies::*;

mod account_context;
mod app_dependencies;
