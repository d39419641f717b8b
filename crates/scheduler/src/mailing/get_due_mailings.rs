use crate::shared::usecase::UseCase;
use mailcast_domain::Mailing;
use mailcast_infra::MailcastContext;

/// Selects the mailings that are due for delivery at the current time.
/// Selection is a pure function of the clock and the stored mailings; it
/// makes no guarantee about the order of the returned set.
#[derive(Debug)]
pub struct GetDueMailingsUseCase;

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait]
impl UseCase for GetDueMailingsUseCase {
    type Response = Vec<Mailing>;
    type Error = UseCaseError;

    const NAME: &'static str = "GetDueMailings";

    async fn execute(&mut self, ctx: &MailcastContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let due = ctx
            .repos
            .mailings
            .find_all()
            .await
            .into_iter()
            .filter(|m| m.is_due(now))
            .collect();
        Ok(due)
    }
}
