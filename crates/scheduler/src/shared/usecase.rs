use mailcast_infra::MailcastContext;
use std::fmt::Debug;
use tracing::error;

#[async_trait::async_trait]
pub trait UseCase: Debug + Send {
    type Response;
    type Error;

    const NAME: &'static str;

    async fn execute(&mut self, ctx: &MailcastContext) -> Result<Self::Response, Self::Error>;
}

#[tracing::instrument(name = "Executing usecase", skip(usecase, ctx))]
pub async fn execute<U>(mut usecase: U, ctx: &MailcastContext) -> Result<U::Response, U::Error>
where
    U: UseCase,
    U::Error: Debug,
{
    let res = usecase.execute(ctx).await;

    if let Err(e) = &res {
        error!("Use case {} error: {:?}", U::NAME, e);
    }

    res
}
