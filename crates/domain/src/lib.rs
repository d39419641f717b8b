mod client;
mod delivery_log;
mod mailing;
mod message;
mod shared;

pub use client::Client;
pub use delivery_log::{DeliveryLog, DeliveryStatus};
pub use mailing::{Frequency, Mailing, MailingStatus};
pub use message::Message;
pub use shared::entity::{Entity, ID};
