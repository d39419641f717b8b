use super::IMessageRepo;
use crate::repos::shared::inmemory_repo::*;
use mailcast_domain::{Message, ID};
use std::sync::Mutex;

pub struct InMemoryMessageRepo {
    messages: Mutex<Vec<Message>>,
}

impl InMemoryMessageRepo {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IMessageRepo for InMemoryMessageRepo {
    async fn insert(&self, message: &Message) -> anyhow::Result<()> {
        insert(message, &self.messages);
        Ok(())
    }

    async fn find(&self, message_id: &ID) -> Option<Message> {
        find(message_id, &self.messages)
    }
}
