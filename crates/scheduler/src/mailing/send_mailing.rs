use crate::shared::usecase::UseCase;
use mailcast_domain::{DeliveryLog, DeliveryStatus, Mailing, MailingStatus, ID};
use mailcast_infra::MailcastContext;
use std::time::Duration;
use tokio::time::timeout;

/// Runs the delivery cycle for one mailing: transition to `Started`, hand
/// the message to the transport, append the attempt to the delivery log and
/// finish the cycle. Transport and configuration failures end up in the log
/// entry, never in the returned error.
#[derive(Debug)]
pub struct SendMailingUseCase {
    pub mailing_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    AlreadyStarted(ID),
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for SendMailingUseCase {
    type Response = DeliveryLog;
    type Error = UseCaseError;

    const NAME: &'static str = "SendMailing";

    async fn execute(&mut self, ctx: &MailcastContext) -> Result<Self::Response, Self::Error> {
        let mut mailing = match ctx.repos.mailings.mark_started(&self.mailing_id).await {
            Some(mailing) => mailing,
            None => {
                return Err(match ctx.repos.mailings.find(&self.mailing_id).await {
                    Some(_) => UseCaseError::AlreadyStarted(self.mailing_id.clone()),
                    None => UseCaseError::NotFound(self.mailing_id.clone()),
                })
            }
        };

        let outcome = attempt_delivery(&mailing, ctx).await;
        let (status, detail) = match outcome {
            Ok(detail) => (DeliveryStatus::Success, detail),
            Err(detail) => (DeliveryStatus::Failed, detail),
        };

        let log = DeliveryLog {
            id: Default::default(),
            mailing_id: mailing.id.clone(),
            attempt_time: ctx.sys.get_timestamp_millis(),
            status,
            detail,
        };
        ctx.repos
            .delivery_logs
            .insert(&log)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        // The cycle completes whatever the attempt's outcome was, and a
        // failed attempt still advances last_sent by a full interval.
        mailing.status = MailingStatus::Completed;
        mailing.last_sent = Some(ctx.sys.get_timestamp_millis());
        ctx.repos
            .mailings
            .save(&mailing)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(log)
    }
}

/// Resolves the message and recipient list and invokes the transport under
/// the configured timeout. Returns the log detail for the attempt: Ok for a
/// delivered batch, Err with the reason it failed.
async fn attempt_delivery(mailing: &Mailing, ctx: &MailcastContext) -> Result<String, String> {
    let message = match &mailing.message_id {
        Some(message_id) => match ctx.repos.messages.find(message_id).await {
            Some(message) => message,
            None => return Err(format!("message {} does not exist", message_id)),
        },
        None => return Err("no message configured".into()),
    };

    let recipients: Vec<String> = ctx
        .repos
        .clients
        .find_many(&mailing.client_ids)
        .await
        .into_iter()
        .map(|client| client.email)
        .collect();
    if recipients.is_empty() {
        return Err("no recipients configured".into());
    }

    let send_timeout = Duration::from_millis(ctx.config.send_timeout_millis);
    let sent = timeout(
        send_timeout,
        ctx.email_sender
            .send(&message.subject, &message.body, &recipients),
    )
    .await;

    match sent {
        Ok(Ok(delivered)) => Ok(format!(
            "delivered={}, recipients={}",
            delivered,
            recipients.len()
        )),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err(format!(
            "send timed out after {}ms",
            ctx.config.send_timeout_millis
        )),
    }
}
