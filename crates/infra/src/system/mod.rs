use chrono::Utc;

/// Clock used by the selection and delivery use cases. Everything that asks
/// "is this mailing due" or stamps `last_sent` and `attempt_time` goes
/// through this trait, so tests can pin the scheduler to a fixed instant.
pub trait ISys: Send + Sync {
    /// The current unix timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
}

/// Wall clock, used outside of tests
pub struct RealSys {}

impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
