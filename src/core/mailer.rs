use std::fmt::Display;

use lettre::message::SinglePart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::model::EmailMessage;
use crate::utils::error::{BriefError, Result};

/// Sends a plain-text message over an injected lettre transport. Production
/// uses the pooled STARTTLS SMTP transport; tests inject a stub.
pub struct Mailer<T> {
    transport: T,
}

impl Mailer<AsyncSmtpTransport<Tokio1Executor>> {
    /// STARTTLS relay on `host:port`, authenticating as `username`. The
    /// pooled transport returns connections on every exit path.
    pub fn from_config(host: &str, port: u16, username: &str, password: &str) -> Result<Self> {
        let credentials = Credentials::new(username.to_string(), password.to_string());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|err| BriefError::SmtpError {
                message: err.to_string(),
            })?
            .port(port)
            .credentials(credentials)
            .build();
        Ok(Self::new(transport))
    }
}

impl<T> Mailer<T>
where
    T: AsyncTransport + Sync,
    T::Error: Display,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn send(&self, email: &EmailMessage) -> Result<()> {
        let message = Message::builder()
            .from(email.from.parse()?)
            .to(email.to.parse()?)
            .subject(email.subject.clone())
            .singlepart(SinglePart::plain(email.body.clone()))?;

        tracing::info!("Sending digest to {}", email.to);
        self.transport
            .send(message)
            .await
            .map_err(|err| BriefError::SmtpError {
                message: err.to_string(),
            })?;

        Ok(())
    }
}
