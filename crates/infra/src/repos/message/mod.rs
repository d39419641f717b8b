mod inmemory;

pub use inmemory::InMemoryMessageRepo;
use mailcast_domain::{Message, ID};

/// Messages are immutable from the scheduler's point of view: they are
/// inserted by the surrounding CRUD surface and only ever read here.
#[async_trait::async_trait]
pub trait IMessageRepo: Send + Sync {
    async fn insert(&self, message: &Message) -> anyhow::Result<()>;
    async fn find(&self, message_id: &ID) -> Option<Message>;
}
