// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::sync::Arc;

use crate::app::deps::AccountContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::contacts::repos::ContactRegistry;
use crate::domain::contacts::services::{NoticeSink, RosterList, RosterService};

pub type DynAccountContext = Arc<AccountContext>;
pub type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub type DynContactRegistry = Arc<dyn ContactRegistry>;
pub type DynNoticeSink = Arc<dyn NoticeSink>;
pub type DynRosterList = Arc<dyn RosterList>;
pub type DynRosterService = Arc<dyn RosterService>;

/// Everything the presence handling of a single account depends on.
pub struct AppDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub contact_registry: DynContactRegistry,
    pub ctx: DynAccountContext,
    pub notice_sink: DynNoticeSink,
    pub roster_list: DynRosterList,
    pub roster_service: DynRosterService,
}
