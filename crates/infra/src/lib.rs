mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::Repos;
pub use repos::{IClientRepo, IDeliveryLogRepo, IMailingRepo, IMessageRepo};
pub use services::*;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct MailcastContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub email_sender: Arc<dyn IEmailSender>,
}

/// Will setup the infrastructure context given the environment.
///
/// The store is in memory and the default transport only records sends; the
/// binary swaps in the SMTP transport when one is configured.
pub fn setup_context() -> MailcastContext {
    MailcastContext {
        repos: Repos::create_inmemory(),
        config: Config::new(),
        sys: Arc::new(RealSys {}),
        email_sender: Arc::new(InMemoryEmailSender::new()),
    }
}
