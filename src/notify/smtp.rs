use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{Email, Notifier};
use crate::constants::DEFAULT_SMTP_PORT;
use crate::error::{RedmanError, RedmanResult};

/// Sends mail through an unauthenticated SMTP relay.
#[derive(Debug, Default)]
pub struct SmtpNotifier;

impl SmtpNotifier {
    pub fn new() -> Self {
        Self
    }
}

/// Split `host[:port]`, defaulting to port 25.
pub fn parse_server(server: &str) -> RedmanResult<(String, u16)> {
    let server = server.trim();
    match server.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() => {
            let port = port.parse::<u16>().map_err(|_| {
                RedmanError::ConfigError(format!("Invalid port in email server '{}'", server))
            })?;
            Ok((host.to_string(), port))
        }
        None if !server.is_empty() => Ok((server.to_string(), DEFAULT_SMTP_PORT)),
        _ => Err(RedmanError::ConfigError(format!(
            "Invalid email server '{}'",
            server
        ))),
    }
}

fn mailbox(address: &str) -> RedmanResult<Mailbox> {
    address
        .parse()
        .map_err(|e| RedmanError::NotificationError(format!("Invalid address '{}': {}", address, e)))
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, email: &Email) -> RedmanResult<()> {
        let message = Message::builder()
            .from(mailbox(&email.sender)?)
            .to(mailbox(&email.recipient)?)
            .subject(email.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                email.html.clone(),
            ))
            .map_err(|e| RedmanError::NotificationError(e.to_string()))?;

        let (host, port) = parse_server(&email.server)?;
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        mailer
            .send(message)
            .await
            .map_err(|e| RedmanError::NotificationError(e.to_string()))?;
        Ok(())
    }
}
