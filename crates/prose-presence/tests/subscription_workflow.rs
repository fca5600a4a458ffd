// prose-core-client/prose-presence
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)
use std::sync::Arc;

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use prose_presence::app::services::{SubscriptionResult, SubscriptionWorkflow};
use prose_presence::domain::contacts::models::{Contact, Notice, NoticeAction, Subscription};
use prose_presence::test::MockAppDependencies;
use prose_presence::bare;

#[tokio::test]
async fn test_known_contact_with_to_subscription_is_not_re_added() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.roster_service
        .expect_send_subscription_answer()
        .once()
        .with(predicate::eq(bare!("friend@prose.org")), predicate::eq(true))
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    deps.roster_list.expect_add().never();

    let workflow = SubscriptionWorkflow::from(&deps.into_deps());
    let contact = Arc::new(Contact::new(bare!("friend@prose.org"), Subscription::To));
    contact.set_nickname("Robert");

    let result = workflow
        .handle_subscribe_request(&bare!("friend@prose.org"), Some(contact.clone()), None)
        .await?;

    assert_eq!(result, SubscriptionResult::AutoApproved);
    assert_eq!(contact.nickname(), Some("Robert".to_string()));

    Ok(())
}

#[tokio::test]
async fn test_known_contact_is_added_to_roster_for_other_subscriptions() -> Result<()> {
    for subscription in [Subscription::None, Subscription::From, Subscription::Both] {
        let mut deps = MockAppDependencies::default();

        deps.roster_service
            .expect_send_subscription_answer()
            .once()
            .return_once(|_, _| Box::pin(async { Ok(()) }));
        deps.roster_list.expect_add().once().return_const(());

        let workflow = SubscriptionWorkflow::from(&deps.into_deps());
        let contact = Arc::new(Contact::new(bare!("friend@prose.org"), subscription));

        let result = workflow
            .handle_subscribe_request(
                &bare!("friend@prose.org"),
                Some(contact.clone()),
                Some("Bob".to_string()),
            )
            .await?;

        assert_eq!(result, SubscriptionResult::AutoApproved);
        assert_eq!(contact.nickname(), Some("Bob".to_string()));
        assert_eq!(contact.subscription(), subscription);
    }

    Ok(())
}

#[tokio::test]
async fn test_failed_answer_still_updates_contact() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.roster_service
        .expect_send_subscription_answer()
        .once()
        .return_once(|_, _| Box::pin(async { Err(anyhow::anyhow!("Not connected")) }));
    deps.roster_list
        .expect_add()
        .once()
        .withf(|contact| contact.jid() == &bare!("friend@prose.org"))
        .return_const(());

    let workflow = SubscriptionWorkflow::from(&deps.into_deps());
    let contact = Arc::new(Contact::new(bare!("friend@prose.org"), Subscription::None));

    let result = workflow
        .handle_subscribe_request(
            &bare!("friend@prose.org"),
            Some(contact.clone()),
            Some("Bob".to_string()),
        )
        .await?;

    assert_eq!(result, SubscriptionResult::AutoApproved);
    assert_eq!(contact.nickname(), Some("Bob".to_string()));

    Ok(())
}

#[tokio::test]
async fn test_unknown_requester_raises_single_notice() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.notice_sink
        .expect_add_notice()
        .once()
        .with(predicate::eq(Notice::contact_request(
            bare!("stranger@prose.org"),
            Some("Stranger".to_string()),
        )))
        .return_const(());
    deps.roster_service.expect_send_subscription_answer().never();
    deps.roster_list.expect_add().never();

    let workflow = SubscriptionWorkflow::from(&deps.into_deps());

    let result = workflow
        .handle_subscribe_request(
            &bare!("stranger@prose.org"),
            None,
            Some("Stranger".to_string()),
        )
        .await?;

    assert_eq!(result, SubscriptionResult::PendingApproval);

    Ok(())
}

#[test]
fn test_contact_request_notice() {
    let notice = Notice::contact_request(bare!("stranger@prose.org"), None);

    assert_eq!(notice.title, "Friendship request");
    assert_eq!(notice.description, "from stranger@prose.org");
    assert_eq!(
        notice.action,
        NoticeAction::ContactRequest {
            from: bare!("stranger@prose.org"),
            nickname: None
        }
    );
}

#[tokio::test]
async fn test_approving_notice_subscribes_back() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx.set_nickname(Some("Jane".to_string()));

    let mut seq = mockall::Sequence::new();

    deps.roster_service
        .expect_send_subscription_answer()
        .once()
        .in_sequence(&mut seq)
        .with(predicate::eq(bare!("stranger@prose.org")), predicate::eq(true))
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    deps.roster_service
        .expect_request_subscription()
        .once()
        .in_sequence(&mut seq)
        .with(
            predicate::eq(bare!("stranger@prose.org")),
            predicate::eq(Some("Jane".to_string())),
        )
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    let workflow = SubscriptionWorkflow::from(&deps.into_deps());
    let notice = Notice::contact_request(bare!("stranger@prose.org"), Some("Bob".to_string()));

    workflow.resolve_notice(&notice.action, true).await?;

    Ok(())
}

#[tokio::test]
async fn test_approving_notice_without_nickname_announces_bare_jid() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.roster_service
        .expect_send_subscription_answer()
        .once()
        .return_once(|_, _| Box::pin(async { Ok(()) }));
    deps.roster_service
        .expect_request_subscription()
        .once()
        .with(
            predicate::eq(bare!("stranger@prose.org")),
            predicate::eq(Some("jane.doe@prose.org".to_string())),
        )
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    let workflow = SubscriptionWorkflow::from(&deps.into_deps());
    let notice = Notice::contact_request(bare!("stranger@prose.org"), None);

    workflow.resolve_notice(&notice.action, true).await?;

    Ok(())
}

#[tokio::test]
async fn test_denying_notice_only_answers() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.roster_service
        .expect_send_subscription_answer()
        .once()
        .with(predicate::eq(bare!("stranger@prose.org")), predicate::eq(false))
        .return_once(|_, _| Box::pin(async { Ok(()) }));
    deps.roster_service.expect_request_subscription().never();

    let workflow = SubscriptionWorkflow::from(&deps.into_deps());
    let notice = Notice::contact_request(bare!("stranger@prose.org"), None);

    workflow.resolve_notice(&notice.action, false).await?;

    Ok(())
}
