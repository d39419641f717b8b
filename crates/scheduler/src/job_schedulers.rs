use crate::mailing::dispatch_due_mailings::DispatchDueMailingsUseCase;
use crate::shared::usecase::execute;
use mailcast_infra::MailcastContext;
use std::time::Duration;
use tokio::time::{interval_at, Instant};
use tracing::info;

/// Seconds until the next minute boundary, used to align dispatch runs
/// with the wall clock.
pub fn secs_to_next_minute(now_ts_millis: i64) -> u64 {
    (60 - (now_ts_millis / 1000) % 60) as u64
}

/// Spawns the periodic job that dispatches due mailings. The first run is
/// aligned to the next minute boundary, every following run happens after
/// `dispatch_interval_secs`.
pub fn start_mailing_dispatch_job(ctx: MailcastContext) {
    tokio::spawn(async move {
        let start_delay = secs_to_next_minute(ctx.sys.get_timestamp_millis());
        let period = Duration::from_secs(ctx.config.dispatch_interval_secs);
        let mut interval = interval_at(Instant::now() + Duration::from_secs(start_delay), period);

        loop {
            interval.tick().await;
            if let Ok(summary) = execute(DispatchDueMailingsUseCase, &ctx).await {
                if summary.selected > 0 {
                    info!(
                        "Mailing dispatch finished ({} delivered, {} failed).",
                        summary.delivered, summary.failed
                    );
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_delay_is_aligned_to_the_next_minute() {
        assert_eq!(secs_to_next_minute(0), 60);
        assert_eq!(secs_to_next_minute(59 * 1000), 1);
        assert_eq!(secs_to_next_minute(60 * 1000), 60);
        assert_eq!(secs_to_next_minute(90 * 1000 + 500), 30);
    }
}
