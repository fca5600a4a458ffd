// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::sync::Arc;

use anyhow::Result;
use jid::BareJid;
use tracing::{debug, info, warn};

use crate::app::deps::{
    AppDependencies, DynAccountContext, DynNoticeSink, DynRosterList, DynRosterService,
};
use crate::domain::contacts::models::{Contact, Notice, NoticeAction, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionResult {
    /// The requester is a known contact and was approved right away.
    AutoApproved,
    /// A notice was raised and the user has to decide.
    PendingApproval,
}

/// Handles incoming presence subscription requests (friendship requests).
pub struct SubscriptionWorkflow {
    ctx: DynAccountContext,
    notice_sink: DynNoticeSink,
    roster_list: DynRosterList,
    roster_service: DynRosterService,
}

impl From<&AppDependencies> for SubscriptionWorkflow {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            notice_sink: deps.notice_sink.clone(),
            roster_list: deps.roster_list.clone(),
            roster_service: deps.roster_service.clone(),
        }
    }
}

impl SubscriptionWorkflow {
    /// Requests of contacts we already know are approved automatically. Everyone else needs
    /// the user's consent, which is asked for via a `Notice`. Sending the answer is not
    /// retried; if it fails the contact is still updated.
    pub async fn handle_subscribe_request(
        &self,
        requester: &BareJid,
        existing_contact: Option<Arc<Contact>>,
        nickname: Option<String>,
    ) -> Result<SubscriptionResult> {
        let Some(contact) = existing_contact else {
            info!("Received presence subscription request from {}.", requester);
            self.notice_sink
                .add_notice(Notice::contact_request(requester.clone(), nickname));
            return Ok(SubscriptionResult::PendingApproval);
        };

        debug!(
            "Auto-approving presence subscription request from {} since it is a known contact.",
            requester
        );

        if let Err(err) = self
            .roster_service
            .send_subscription_answer(contact.jid(), true)
            .await
        {
            warn!(
                "Failed to approve presence subscription request from {}. {}",
                requester, err
            );
        }

        if let Some(nickname) = nickname {
            contact.set_nickname(nickname);
        }

        if contact.subscription() != Subscription::To {
            self.roster_list.add(contact);
        }

        Ok(SubscriptionResult::AutoApproved)
    }

    /// Performs the user's answer to a notice raised by `handle_subscribe_request`.
    /// Approving also asks for a subscription in return so that the relationship is mutual.
    /// That request carries our own nickname, or our bare JID if we don't have one.
    pub async fn resolve_notice(&self, action: &NoticeAction, approve: bool) -> Result<()> {
        match action {
            NoticeAction::ContactRequest { from, .. } => {
                self.roster_service
                    .send_subscription_answer(from, approve)
                    .await?;

                if approve {
                    self.roster_service
                        .request_subscription(from, Some(self.ctx.display_nickname()))
                        .await?;
                }
            }
        }

        Ok(())
    }
}
