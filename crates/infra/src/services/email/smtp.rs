use super::IEmailSender;
use anyhow::Context;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// SMTP transport configured from the environment:
///
/// | Variable        | Required | Description                                  |
/// |-----------------|----------|----------------------------------------------|
/// | `SMTP_HOST`     | Yes      | Relay hostname                               |
/// | `SMTP_PORT`     | No       | Port (default 587)                           |
/// | `SMTP_USERNAME` | No       | Username, together with `SMTP_PASSWORD`      |
/// | `SMTP_PASSWORD` | No       | Password, together with `SMTP_USERNAME`      |
/// | `SMTP_FROM`     | Yes      | Sender address                               |
/// | `SMTP_TLS`      | No       | `starttls` (default), `tls` or `none`        |
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailSender {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("SMTP_HOST").context("SMTP_HOST env var to be present")?;
        let from = std::env::var("SMTP_FROM").context("SMTP_FROM env var to be present")?;
        let from = from
            .parse::<Mailbox>()
            .map_err(|_| anyhow::anyhow!("SMTP_FROM is not a valid address: {}", from))?;

        let port = match std::env::var("SMTP_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("SMTP_PORT is not a valid port: {}", port))?,
            Err(_) => 587,
        };

        let tls = std::env::var("SMTP_TLS").unwrap_or_else(|_| "starttls".into());
        let mut builder = match tls.as_str() {
            "starttls" => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host)?,
            "tls" => AsyncSmtpTransport::<Tokio1Executor>::relay(&host)?,
            "none" => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&host),
            other => anyhow::bail!("SMTP_TLS must be starttls, tls or none, got: {}", other),
        };
        builder = builder.port(port);
        if let (Ok(username), Ok(password)) =
            (std::env::var("SMTP_USERNAME"), std::env::var("SMTP_PASSWORD"))
        {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait::async_trait]
impl IEmailSender for SmtpEmailSender {
    async fn send(
        &self,
        subject: &str,
        body: &str,
        recipients: &[String],
    ) -> anyhow::Result<usize> {
        // Build everything up front so one bad address fails the attempt
        // before anything has gone out.
        let mut messages = Vec::with_capacity(recipients.len());
        for recipient in recipients {
            let to = recipient
                .parse::<Mailbox>()
                .map_err(|_| anyhow::anyhow!("invalid recipient address: {}", recipient))?;
            let message = Message::builder()
                .from(self.from.clone())
                .to(to)
                .subject(subject)
                .header(ContentType::TEXT_PLAIN)
                .body(body.to_string())?;
            messages.push(message);
        }

        let mut delivered = 0;
        for message in messages {
            self.transport.send(message).await?;
            delivered += 1;
        }
        Ok(delivered)
    }
}
