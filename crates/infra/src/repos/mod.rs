mod client;
mod delivery_log;
mod mailing;
mod message;
mod shared;

pub use client::{IClientRepo, InMemoryClientRepo};
pub use delivery_log::{IDeliveryLogRepo, InMemoryDeliveryLogRepo};
pub use mailing::{IMailingRepo, InMemoryMailingRepo};
pub use message::{IMessageRepo, InMemoryMessageRepo};
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub mailings: Arc<dyn IMailingRepo>,
    pub clients: Arc<dyn IClientRepo>,
    pub messages: Arc<dyn IMessageRepo>,
    pub delivery_logs: Arc<dyn IDeliveryLogRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            mailings: Arc::new(InMemoryMailingRepo::new()),
            clients: Arc::new(InMemoryClientRepo::new()),
            messages: Arc::new(InMemoryMessageRepo::new()),
            delivery_logs: Arc::new(InMemoryDeliveryLogRepo::new()),
        }
    }
}
