// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
pub use notice_sink::NoticeSink;
pub use roster_list::RosterList;
pub use roster_service::RosterService;

mod notice_sink;
mod roster_list;
mod roster_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::notice_sink::MockNoticeSink;
    pub use super::roster_list::MockRosterList;
    pub use super::roster_service::MockRosterService;
}
