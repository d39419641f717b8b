mod inmemory;

pub use inmemory::InMemoryClientRepo;
use mailcast_domain::{Client, ID};

#[async_trait::async_trait]
pub trait IClientRepo: Send + Sync {
    async fn insert(&self, client: &Client) -> anyhow::Result<()>;
    async fn find(&self, client_id: &ID) -> Option<Client>;
    async fn find_many(&self, client_ids: &[ID]) -> Vec<Client>;
}
