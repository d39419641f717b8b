mod inmemory;

pub use inmemory::InMemoryMailingRepo;
use mailcast_domain::{Mailing, ID};

#[async_trait::async_trait]
pub trait IMailingRepo: Send + Sync {
    async fn insert(&self, mailing: &Mailing) -> anyhow::Result<()>;
    async fn save(&self, mailing: &Mailing) -> anyhow::Result<()>;
    async fn find(&self, mailing_id: &ID) -> Option<Mailing>;
    async fn find_all(&self) -> Vec<Mailing>;
    async fn delete(&self, mailing_id: &ID) -> Option<Mailing>;
    /// Transition the mailing to `Started`, but only if it is currently
    /// `Created` or `Completed`. Returns the updated mailing, or None when
    /// the mailing is missing or already mid-delivery. The check and the
    /// transition are one atomic step, so two overlapping scheduler ticks
    /// cannot both pick up the same mailing.
    async fn mark_started(&self, mailing_id: &ID) -> Option<Mailing>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailcast_domain::{Frequency, MailingStatus};

    #[tokio::test]
    async fn mark_started_only_transitions_idle_mailings() {
        let repo = InMemoryMailingRepo::new();
        let mailing = Mailing::new("newsletter", 0, 100, Frequency::Daily);
        repo.insert(&mailing).await.unwrap();

        let started = repo
            .mark_started(&mailing.id)
            .await
            .expect("To start mailing");
        assert_eq!(started.status, MailingStatus::Started);

        // mid-delivery, a second transition is refused
        assert!(repo.mark_started(&mailing.id).await.is_none());

        let mut completed = started;
        completed.status = MailingStatus::Completed;
        repo.save(&completed).await.unwrap();
        assert!(repo.mark_started(&mailing.id).await.is_some());
    }

    #[tokio::test]
    async fn mark_started_on_unknown_mailing_is_none() {
        let repo = InMemoryMailingRepo::new();
        assert!(repo.mark_started(&Default::default()).await.is_none());
    }
}
