use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone)]
pub struct Client {
    pub id: ID,
    pub email: String,
    pub full_name: String,
    pub comments: Option<String>,
}

impl Client {
    pub fn new(email: &str, full_name: &str) -> Self {
        Self {
            id: Default::default(),
            email: email.into(),
            full_name: full_name.into(),
            comments: None,
        }
    }
}

impl Entity for Client {
    fn id(&self) -> &ID {
        &self.id
    }
}
