mod inmemory;

pub use inmemory::InMemoryDeliveryLogRepo;
use mailcast_domain::{DeliveryLog, ID};

/// The delivery log is append only: attempts are inserted and read back,
/// never updated or deleted.
#[async_trait::async_trait]
pub trait IDeliveryLogRepo: Send + Sync {
    async fn insert(&self, log: &DeliveryLog) -> anyhow::Result<()>;
    async fn find_by_mailing(&self, mailing_id: &ID) -> Vec<DeliveryLog>;
    async fn find_all(&self) -> Vec<DeliveryLog>;
}
