use super::IMailingRepo;
use crate::repos::shared::inmemory_repo::*;
use mailcast_domain::{Mailing, MailingStatus, ID};
use std::sync::Mutex;

pub struct InMemoryMailingRepo {
    mailings: Mutex<Vec<Mailing>>,
}

impl InMemoryMailingRepo {
    pub fn new() -> Self {
        Self {
            mailings: Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IMailingRepo for InMemoryMailingRepo {
    async fn insert(&self, mailing: &Mailing) -> anyhow::Result<()> {
        insert(mailing, &self.mailings);
        Ok(())
    }

    async fn save(&self, mailing: &Mailing) -> anyhow::Result<()> {
        save(mailing, &self.mailings);
        Ok(())
    }

    async fn find(&self, mailing_id: &ID) -> Option<Mailing> {
        find(mailing_id, &self.mailings)
    }

    async fn find_all(&self) -> Vec<Mailing> {
        find_by(&self.mailings, |_| true)
    }

    async fn delete(&self, mailing_id: &ID) -> Option<Mailing> {
        delete(mailing_id, &self.mailings)
    }

    async fn mark_started(&self, mailing_id: &ID) -> Option<Mailing> {
        update_by(
            &self.mailings,
            |m| {
                m.id == *mailing_id
                    && matches!(m.status, MailingStatus::Created | MailingStatus::Completed)
            },
            |m| m.status = MailingStatus::Started,
        )
    }
}
