use chrono::prelude::*;
use mailcast_domain::{Client, DeliveryStatus, Frequency, Mailing, MailingStatus, Message};
use mailcast_infra::{setup_context, ISys, InMemoryEmailSender};
use mailcast_scheduler::mailing::dispatch_due_mailings::DispatchDueMailingsUseCase;
use mailcast_scheduler::shared::usecase::execute;
use std::sync::Arc;

struct StaticTimeSys(i64);
impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.0
    }
}

#[tokio::test]
async fn dispatches_a_due_weekly_mailing_end_to_end() {
    let now = Utc.ymd(2024, 3, 5).and_hms(10, 0, 0).timestamp_millis();
    let window_start = Utc.ymd(2024, 3, 4).and_hms(9, 0, 0).timestamp_millis();
    let window_end = Utc.ymd(2025, 3, 4).and_hms(9, 0, 0).timestamp_millis();

    let mut ctx = setup_context();
    ctx.sys = Arc::new(StaticTimeSys(now));
    let sender = Arc::new(InMemoryEmailSender::new());
    ctx.email_sender = sender.clone();

    let message = Message::new("Weekly digest", "All the news that fits");
    ctx.repos.messages.insert(&message).await.unwrap();

    let clients = vec![
        Client::new("first@example.com", "First Reader"),
        Client::new("second@example.com", "Second Reader"),
    ];
    for client in &clients {
        ctx.repos.clients.insert(client).await.unwrap();
    }

    let mut mailing = Mailing::new("newsletter", window_start, window_end, Frequency::Weekly);
    mailing.message_id = Some(message.id.clone());
    mailing.client_ids = clients.iter().map(|c| c.id.clone()).collect();
    ctx.repos.mailings.insert(&mailing).await.unwrap();

    let summary = execute(DispatchDueMailingsUseCase, &ctx).await.unwrap();
    assert_eq!(summary.selected, 1);
    assert_eq!(summary.delivered, 1);
    assert_eq!(summary.failed, 0);

    let mailing = ctx.repos.mailings.find(&mailing.id).await.unwrap();
    assert_eq!(mailing.status, MailingStatus::Completed);
    assert_eq!(mailing.last_sent, Some(now));

    let logs = ctx.repos.delivery_logs.find_by_mailing(&mailing.id).await;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].status, DeliveryStatus::Success);
    assert_eq!(logs[0].detail, "delivered=2, recipients=2");
    assert_eq!(logs[0].attempt_time, now);

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Weekly digest");
    assert_eq!(
        sent[0].recipients,
        vec!["first@example.com", "second@example.com"]
    );

    // the weekly interval has not elapsed, so re-running the tick selects nothing
    let summary = execute(DispatchDueMailingsUseCase, &ctx).await.unwrap();
    assert_eq!(summary.selected, 0);
    assert_eq!(
        ctx.repos
            .delivery_logs
            .find_by_mailing(&mailing.id)
            .await
            .len(),
        1
    );
}
