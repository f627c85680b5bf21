pub mod smtp;

pub use smtp::SmtpNotifier;

use async_trait::async_trait;
use tracing::{error, info};

use crate::config::EmailSettings;
use crate::error::RedmanResult;

/// A rendered notification ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub server: String,
    pub html: String,
    pub text: String,
}

impl Email {
    pub fn new(settings: &EmailSettings, html: String, text: String) -> Self {
        Self {
            sender: settings.sender.clone(),
            recipient: settings.recipient.clone(),
            subject: settings.subject.clone(),
            server: settings.server.clone(),
            html,
            text,
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, email: &Email) -> RedmanResult<()>;
}

/// Deliver `email` once. Failures are logged and reported as `false`.
pub async fn deliver(notifier: &dyn Notifier, email: &Email) -> bool {
    match notifier.send(email).await {
        Ok(()) => {
            info!("Email [{}] was sent to: {}", email.subject, email.recipient);
            true
        }
        Err(e) => {
            error!(
                "Problem sending email [{}] to [{}]: {}",
                email.subject, email.recipient, e
            );
            false
        }
    }
}
