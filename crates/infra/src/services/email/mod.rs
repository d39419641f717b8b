mod smtp;

pub use smtp::SmtpEmailSender;
use std::sync::Mutex;

/// Outbound mail transport capability.
#[async_trait::async_trait]
pub trait IEmailSender: Send + Sync {
    /// Deliver `subject`/`body` to every address in `recipients` and
    /// return the number of messages actually dispatched.
    async fn send(&self, subject: &str, body: &str, recipients: &[String])
        -> anyhow::Result<usize>;
}

/// One delivery recorded by `InMemoryEmailSender`
#[derive(Debug, Clone, PartialEq)]
pub struct SentEmail {
    pub subject: String,
    pub body: String,
    pub recipients: Vec<String>,
}

/// Transport that only records what it is asked to send. Stands in when no
/// SMTP relay is configured and doubles as the transport for tests, where
/// it can be set up to fail every send with a fixed error.
pub struct InMemoryEmailSender {
    sent: Mutex<Vec<SentEmail>>,
    fail_with: Option<String>,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(vec![]),
            fail_with: None,
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            sent: Mutex::new(vec![]),
            fail_with: Some(error.into()),
        }
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IEmailSender for InMemoryEmailSender {
    async fn send(
        &self,
        subject: &str,
        body: &str,
        recipients: &[String],
    ) -> anyhow::Result<usize> {
        if let Some(error) = &self.fail_with {
            return Err(anyhow::anyhow!("{}", error));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(SentEmail {
            subject: subject.into(),
            body: body.into(),
            recipients: recipients.to_vec(),
        });
        Ok(recipients.len())
    }
}
