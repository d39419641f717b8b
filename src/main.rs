mod telemetry;

use mailcast_infra::{setup_context, SmtpEmailSender};
use mailcast_scheduler::job_schedulers::start_mailing_dispatch_job;
use std::sync::Arc;
use telemetry::{get_subscriber, init_subscriber};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("mailcast".into(), "info".into());
    init_subscriber(subscriber);

    let mut context = setup_context();
    match SmtpEmailSender::from_env() {
        Ok(sender) => context.email_sender = Arc::new(sender),
        Err(e) => warn!(
            "SMTP transport is not configured ({}). Outgoing mail will only be recorded in memory.",
            e
        ),
    }

    start_mailing_dispatch_job(context);
    info!("mailcast is running");

    tokio::signal::ctrl_c().await?;
    Ok(())
}
