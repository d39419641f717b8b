use super::get_due_mailings::GetDueMailingsUseCase;
use super::send_mailing::SendMailingUseCase;
use crate::shared::usecase::{execute, UseCase};
use mailcast_domain::DeliveryStatus;
use mailcast_infra::MailcastContext;
use tracing::warn;

/// One scheduler tick: select every due mailing and run its delivery, one
/// mailing at a time. Nothing a single mailing does can abort the batch;
/// outcomes are visible through the delivery log and the returned summary.
#[derive(Debug)]
pub struct DispatchDueMailingsUseCase;

#[derive(Debug)]
pub enum UseCaseError {}

#[derive(Debug, Default, PartialEq)]
pub struct DispatchSummary {
    pub selected: usize,
    pub delivered: usize,
    pub failed: usize,
}

#[async_trait::async_trait]
impl UseCase for DispatchDueMailingsUseCase {
    type Response = DispatchSummary;
    type Error = UseCaseError;

    const NAME: &'static str = "DispatchDueMailings";

    async fn execute(&mut self, ctx: &MailcastContext) -> Result<Self::Response, Self::Error> {
        let due = execute(GetDueMailingsUseCase, ctx).await.unwrap_or_default();

        let mut summary = DispatchSummary {
            selected: due.len(),
            ..Default::default()
        };

        for mailing in due {
            let usecase = SendMailingUseCase {
                mailing_id: mailing.id.clone(),
            };
            match execute(usecase, ctx).await {
                Ok(log) if log.status == DeliveryStatus::Success => summary.delivered += 1,
                Ok(_) => summary.failed += 1,
                Err(e) => {
                    warn!("Skipping mailing {}: {:?}", mailing.id, e);
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}
