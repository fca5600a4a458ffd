// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use jid::BareJid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeType {
    /// A notice that concerns a (potential) contact.
    Contact,
}

/// What happens once the user answers a notice.
#[derive(Debug, Clone, PartialEq)]
pub enum NoticeAction {
    /// Approve or deny the presence subscription request of `from`.
    ContactRequest {
        from: BareJid,
        nickname: Option<String>,
    },
}

/// A pending item that needs the user's attention, e.g. an incoming friendship request.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub r#type: NoticeType,
    pub action: NoticeAction,
}

impl Notice {
    pub fn contact_request(from: BareJid, nickname: Option<String>) -> Self {
        Notice {
            title: "Friendship request".to_string(),
            description: format!("from {}", from),
            r#type: NoticeType::Contact,
            action: NoticeAction::ContactRequest { from, nickname },
        }
    }
}
