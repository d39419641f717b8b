use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// How often the dispatch job scans for due mailings, in seconds
    pub dispatch_interval_secs: u64,
    /// Upper bound in millis on one transport send. An attempt that takes
    /// longer is recorded as failed, like any other transport failure.
    pub send_timeout_millis: u64,
}

impl Config {
    pub fn new() -> Self {
        let default_dispatch_interval = "60";
        let dispatch_interval_secs =
            std::env::var("DISPATCH_INTERVAL_SECS").unwrap_or_else(|_| default_dispatch_interval.into());
        let dispatch_interval_secs = match dispatch_interval_secs.parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                warn!(
                    "The given DISPATCH_INTERVAL_SECS: {} is not valid, falling back to the default: {}.",
                    dispatch_interval_secs, default_dispatch_interval
                );
                default_dispatch_interval.parse::<u64>().unwrap()
            }
        };

        let default_send_timeout = "30000";
        let send_timeout_millis =
            std::env::var("SEND_TIMEOUT_MILLIS").unwrap_or_else(|_| default_send_timeout.into());
        let send_timeout_millis = match send_timeout_millis.parse::<u64>() {
            Ok(millis) if millis > 0 => millis,
            _ => {
                warn!(
                    "The given SEND_TIMEOUT_MILLIS: {} is not valid, falling back to the default: {}.",
                    send_timeout_millis, default_send_timeout
                );
                default_send_timeout.parse::<u64>().unwrap()
            }
        };

        Self {
            dispatch_interval_secs,
            send_timeout_millis,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
