use crate::shared::entity::{Entity, ID};
use chrono::prelude::*;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// How often a `Mailing` recurs within its delivery window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Minimum spacing between two sends of the same mailing
    pub fn interval(&self) -> Duration {
        match self {
            Self::Daily => Duration::days(1),
            Self::Weekly => Duration::days(7),
            Self::Monthly => Duration::days(30),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailingStatus {
    Created,
    Started,
    Completed,
}

/// A `Mailing` is a recurring email campaign: a `Message` delivered to a
/// set of `Client`s on a daily, weekly or monthly cycle for as long as the
/// current time falls inside the delivery window.
#[derive(Debug, Clone)]
pub struct Mailing {
    pub id: ID,
    pub name: String,
    /// Opening of the delivery window in unix millis. Its clock time also
    /// acts as the earliest time of day a run may happen.
    pub start_time: i64,
    /// Closing of the delivery window in unix millis. Once the current time
    /// reaches this the mailing is permanently excluded from selection.
    pub completion_time: i64,
    pub frequency: Frequency,
    /// Only transitions Created -> Started -> Completed. A Completed
    /// mailing is recycled once its recurrence interval has elapsed.
    pub status: MailingStatus,
    /// The `Message` this mailing delivers. A mailing without one cannot
    /// be sent and fails its attempts explicitly.
    pub message_id: Option<ID>,
    /// Recipient `Client`s of this mailing
    pub client_ids: Vec<ID>,
    /// Timestamp of the last completed run cycle, None until the first one
    pub last_sent: Option<i64>,
}

impl Mailing {
    pub fn new(name: &str, start_time: i64, completion_time: i64, frequency: Frequency) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            start_time,
            completion_time,
            frequency,
            status: MailingStatus::Created,
            message_id: None,
            client_ids: Vec::new(),
            last_sent: None,
        }
    }

    /// Whether this mailing should be picked up for delivery at `now`.
    ///
    /// A mailing mid-delivery (`Started`) is never re-selected. `now` must
    /// fall strictly inside the delivery window, the clock time of `now`
    /// must be strictly past the clock time of `start_time`, and at least
    /// one full recurrence interval must have elapsed since `last_sent`
    /// (the interval bound is inclusive).
    pub fn is_due(&self, now: i64) -> bool {
        let selectable = matches!(
            self.status,
            MailingStatus::Created | MailingStatus::Completed
        );
        let inside_window = self.start_time < now && now < self.completion_time;
        let past_start_clock_time = time_of_day(now) > time_of_day(self.start_time);
        let interval_elapsed = match self.last_sent {
            None => true,
            Some(last_sent) => now - last_sent >= self.frequency.interval().num_milliseconds(),
        };

        selectable && inside_window && past_start_clock_time && interval_elapsed
    }
}

impl Entity for Mailing {
    fn id(&self) -> &ID {
        &self.id
    }
}

fn time_of_day(timestamp_millis: i64) -> NaiveTime {
    Utc.timestamp_millis(timestamp_millis).time()
}

#[cfg(test)]
mod test {
    use super::*;

    const HOUR: i64 = 1000 * 60 * 60;
    const DAY: i64 = 24 * HOUR;
    /// 2024-03-05 09:00:00 UTC
    const TODAY_0900: i64 = 1_709_629_200_000;

    /// Window opened yesterday at 09:00 and closes a year out
    fn mailing(frequency: Frequency) -> Mailing {
        Mailing::new(
            "newsletter",
            TODAY_0900 - DAY,
            TODAY_0900 + 365 * DAY,
            frequency,
        )
    }

    #[test]
    fn recurrence_intervals_are_day_granular() {
        assert_eq!(Frequency::Daily.interval(), Duration::days(1));
        assert_eq!(Frequency::Weekly.interval(), Duration::days(7));
        assert_eq!(Frequency::Monthly.interval(), Duration::days(30));
    }

    #[test]
    fn due_when_never_sent_before() {
        let m = mailing(Frequency::Daily);
        assert!(m.is_due(TODAY_0900 + HOUR));
    }

    #[test]
    fn never_due_while_mid_delivery() {
        let mut m = mailing(Frequency::Daily);
        m.status = MailingStatus::Started;

        assert!(!m.is_due(TODAY_0900 + HOUR));
        assert!(!m.is_due(TODAY_0900 + 10 * DAY + HOUR));
    }

    #[test]
    fn completed_mailing_is_recycled() {
        let mut m = mailing(Frequency::Daily);
        m.status = MailingStatus::Completed;
        m.last_sent = Some(TODAY_0900 + HOUR - DAY);

        assert!(m.is_due(TODAY_0900 + HOUR));
    }

    #[test]
    fn window_bounds_are_strict() {
        let m = mailing(Frequency::Daily);

        assert!(!m.is_due(m.start_time));
        assert!(!m.is_due(m.completion_time));
        assert!(!m.is_due(m.completion_time + DAY));
    }

    #[test]
    fn never_due_past_the_window_regardless_of_state() {
        let mut m = mailing(Frequency::Daily);
        m.status = MailingStatus::Completed;
        m.last_sent = Some(m.start_time + HOUR);

        assert!(!m.is_due(m.completion_time + HOUR));
    }

    #[test]
    fn inverted_window_is_never_eligible() {
        let m = Mailing::new(
            "newsletter",
            TODAY_0900 + DAY,
            TODAY_0900 - DAY,
            Frequency::Daily,
        );

        assert!(!m.is_due(TODAY_0900 + HOUR));
    }

    #[test]
    fn waits_for_the_start_clock_time_every_day() {
        let m = mailing(Frequency::Daily);

        // a day into the window, but earlier in the day than 09:00
        assert!(!m.is_due(TODAY_0900 - HOUR));
        // exactly 09:00 is not strictly past it
        assert!(!m.is_due(TODAY_0900));
        assert!(m.is_due(TODAY_0900 + HOUR));
        // the clock time gate applies on any later day too
        assert!(!m.is_due(TODAY_0900 + 30 * DAY - HOUR));
        assert!(m.is_due(TODAY_0900 + 30 * DAY + HOUR));
    }

    #[test]
    fn recurrence_bound_is_inclusive() {
        let now = TODAY_0900 + HOUR;

        let mut m = mailing(Frequency::Daily);
        m.status = MailingStatus::Completed;
        m.last_sent = Some(now - DAY);
        assert!(m.is_due(now));

        m.last_sent = Some(now - 23 * HOUR);
        assert!(!m.is_due(now));
    }

    #[test]
    fn weekly_and_monthly_intervals_gate_selection() {
        let now = TODAY_0900 + HOUR;

        let mut m = mailing(Frequency::Weekly);
        m.status = MailingStatus::Completed;
        m.last_sent = Some(now - 7 * DAY);
        assert!(m.is_due(now));
        m.last_sent = Some(now - 6 * DAY);
        assert!(!m.is_due(now));

        let mut m = mailing(Frequency::Monthly);
        m.status = MailingStatus::Completed;
        m.last_sent = Some(now - 30 * DAY);
        assert!(m.is_due(now));
        m.last_sent = Some(now - 29 * DAY);
        assert!(!m.is_due(now));
    }
}
