use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone)]
pub struct Message {
    pub id: ID,
    pub subject: String,
    pub body: String,
}

impl Message {
    pub fn new(subject: &str, body: &str) -> Self {
        Self {
            id: Default::default(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

impl Entity for Message {
    fn id(&self) -> &ID {
        &self.id
    }
}
