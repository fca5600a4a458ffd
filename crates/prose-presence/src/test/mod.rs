// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
pub use mock_app_dependencies::{mock_account_jid, MockAppDependencies};


#[macro_export]
macro_rules! jid {
    ($jid:expr) => {
        $jid.parse::<jid::Jid>().unwrap()
    };
}

#[macro_export]
macro_rules! bare {
    ($jid:expr) => {
        $jid.parse::<jid::BareJid>().unwrap()
    };
}

#[macro_export]
macro_rules! full {
    ($jid:expr) => {
        $jid.parse::<jid::FullJid>().unwrap()
    };
}

#[macro_export]
macro_rules! stanza {
    ($xml:expr) => {
        $xml.trim().parse::<minidom::Element>().unwrap()
    };
}
