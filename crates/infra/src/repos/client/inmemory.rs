use super::IClientRepo;
use crate::repos::shared::inmemory_repo::*;
use mailcast_domain::{Client, ID};
use std::sync::Mutex;

pub struct InMemoryClientRepo {
    clients: Mutex<Vec<Client>>,
}

impl InMemoryClientRepo {
    pub fn new() -> Self {
        Self {
            clients: Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IClientRepo for InMemoryClientRepo {
    async fn insert(&self, client: &Client) -> anyhow::Result<()> {
        insert(client, &self.clients);
        Ok(())
    }

    async fn find(&self, client_id: &ID) -> Option<Client> {
        find(client_id, &self.clients)
    }

    async fn find_many(&self, client_ids: &[ID]) -> Vec<Client> {
        find_many(client_ids, &self.clients)
    }
}
