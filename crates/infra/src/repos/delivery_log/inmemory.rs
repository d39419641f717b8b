use super::IDeliveryLogRepo;
use crate::repos::shared::inmemory_repo::*;
use mailcast_domain::{DeliveryLog, ID};
use std::sync::Mutex;

pub struct InMemoryDeliveryLogRepo {
    logs: Mutex<Vec<DeliveryLog>>,
}

impl InMemoryDeliveryLogRepo {
    pub fn new() -> Self {
        Self {
            logs: Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IDeliveryLogRepo for InMemoryDeliveryLogRepo {
    async fn insert(&self, log: &DeliveryLog) -> anyhow::Result<()> {
        insert(log, &self.logs);
        Ok(())
    }

    async fn find_by_mailing(&self, mailing_id: &ID) -> Vec<DeliveryLog> {
        find_by(&self.logs, |log| log.mailing_id == *mailing_id)
    }

    async fn find_all(&self) -> Vec<DeliveryLog> {
        find_by(&self.logs, |_| true)
    }
}
