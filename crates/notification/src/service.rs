//! Outbound email over SMTP using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart, SinglePart},
    transport::smtp::{PoolConfig, authentication::Credentials},
};
use serde::Deserialize;

pub const PLACEHOLDER_SMTP_USERNAME: &str = "your-email@gmail.com";
pub const PLACEHOLDER_SMTP_PASSWORD: &str = "your-app-password";

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_address: String,
    pub admin_address: String,
}

impl EmailConfig {
    /// True when both SMTP credentials were changed from their placeholders.
    pub fn is_configured(&self) -> bool {
        self.smtp_username != PLACEHOLDER_SMTP_USERNAME
            && self.smtp_password != PLACEHOLDER_SMTP_PASSWORD
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.smtp_server.is_empty() {
            return Err("SMTP server must not be empty".to_string());
        }
        if self.smtp_port == 0 {
            return Err("SMTP port must be greater than 0".to_string());
        }
        if let Err(e) = self.from_address.parse::<Mailbox>() {
            return Err(format!("Invalid sender address '{}': {e}", self.from_address));
        }
        if let Err(e) = self.admin_address.parse::<Mailbox>() {
            return Err(format!("Invalid admin address '{}': {e}", self.admin_address));
        }
        Ok(())
    }
}

/// A rendered message ready to be handed to a [`Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Outcome of a single send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Failed { reason: String },
}

impl Delivery {
    pub fn is_sent(&self) -> bool {
        matches!(self, Delivery::Sent)
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends one message. Failures are reported through [`Delivery`].
    async fn deliver(&self, email: OutgoingEmail) -> Delivery;
}

/// Sends over STARTTLS, holding at most one SMTP connection per send.
#[derive(Clone)]
pub struct SmtpMailer {
    config: EmailConfig,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> Self {
        tracing::info!(
            smtp_server = %config.smtp_server,
            smtp_port = config.smtp_port,
            from = %config.from_address,
            "SMTP mailer initialized"
        );

        Self {
            config: config.clone(),
        }
    }

    fn transport(&self) -> anyhow::Result<SmtpTransport> {
        let creds = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );

        Ok(SmtpTransport::starttls_relay(&self.config.smtp_server)?
            .port(self.config.smtp_port)
            .credentials(creds)
            .pool_config(PoolConfig::new().max_size(1))
            .build())
    }

    async fn send(&self, email: OutgoingEmail) -> anyhow::Result<()> {
        let message = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(email.to.parse()?)
            .subject(email.subject)
            .multipart(MultiPart::alternative().singlepart(SinglePart::html(email.html)))?;

        let transport = self.transport()?;

        tokio::task::spawn_blocking(move || transport.send(&message)).await??;

        Ok(())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn deliver(&self, email: OutgoingEmail) -> Delivery {
        match self.send(email).await {
            Ok(()) => Delivery::Sent,
            Err(err) => Delivery::Failed {
                reason: err.to_string(),
            },
        }
    }
}

/// Sends the rendered form mails and logs what happened to each of them.
#[derive(Clone)]
pub struct Notifier {
    mailer: std::sync::Arc<dyn Mailer>,
    admin_address: String,
}

impl Notifier {
    pub fn new(mailer: std::sync::Arc<dyn Mailer>, admin_address: impl Into<String>) -> Self {
        Self {
            mailer,
            admin_address: admin_address.into(),
        }
    }

    pub fn admin_address(&self) -> &str {
        &self.admin_address
    }

    pub async fn send_email(
        &self,
        to: impl Into<String>,
        subject: impl Into<String>,
        html: impl Into<String>,
    ) -> Delivery {
        self.deliver(OutgoingEmail {
            to: to.into(),
            subject: subject.into(),
            html: html.into(),
        })
        .await
    }

    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn deliver(&self, email: OutgoingEmail) -> Delivery {
        tracing::info!("Sending email");

        let delivery = self.mailer.deliver(email).await;

        match &delivery {
            Delivery::Sent => tracing::info!("Email sent"),
            Delivery::Failed { reason } => {
                tracing::error!(error = %reason, "Failed to send email")
            }
        }

        delivery
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn config(username: &str, password: &str) -> EmailConfig {
        EmailConfig {
            smtp_server: "smtp.gmail.com".to_owned(),
            smtp_port: 587,
            smtp_username: username.to_owned(),
            smtp_password: password.to_owned(),
            from_address: "academy@example.com".to_owned(),
            admin_address: "info@artmountacademy.com".to_owned(),
        }
    }

    #[test]
    fn test_is_configured_requires_both_credentials() {
        assert!(!config(PLACEHOLDER_SMTP_USERNAME, PLACEHOLDER_SMTP_PASSWORD).is_configured());
        assert!(!config("real@example.com", PLACEHOLDER_SMTP_PASSWORD).is_configured());
        assert!(!config(PLACEHOLDER_SMTP_USERNAME, "secret").is_configured());
        assert!(config("real@example.com", "secret").is_configured());
    }

    #[test]
    fn test_validate_rejects_bad_addresses() {
        assert!(config("real@example.com", "secret").validate().is_ok());

        let mut bad_admin = config("real@example.com", "secret");
        bad_admin.admin_address = "info at academy".to_owned();
        assert!(bad_admin.validate().is_err());

        let mut bad_port = config("real@example.com", "secret");
        bad_port.smtp_port = 0;
        assert!(bad_port.validate().is_err());
    }

    #[test]
    fn test_transport_builds_for_valid_relay() {
        let mailer = SmtpMailer::new(&config("real@example.com", "secret"));

        assert!(mailer.transport().is_ok());
    }

    #[tokio::test]
    async fn test_invalid_recipient_is_a_failed_delivery() {
        let mailer = SmtpMailer::new(&config("real@example.com", "secret"));

        let delivery = mailer
            .deliver(OutgoingEmail {
                to: "not an address".to_owned(),
                subject: "Hello".to_owned(),
                html: "<p>Hello</p>".to_owned(),
            })
            .await;

        assert!(!delivery.is_sent());
    }

    struct Recording(Mutex<Vec<OutgoingEmail>>);

    #[async_trait]
    impl Mailer for Recording {
        async fn deliver(&self, email: OutgoingEmail) -> Delivery {
            self.0.lock().unwrap().push(email);
            Delivery::Sent
        }
    }

    #[tokio::test]
    async fn test_send_email_hands_message_to_mailer() {
        let mailer = Arc::new(Recording(Mutex::new(Vec::new())));
        let notifier = Notifier::new(mailer.clone(), "admin@example.com");

        let delivery = notifier
            .send_email("user@example.com", "Subject", "<p>Body</p>")
            .await;

        assert_eq!(delivery, Delivery::Sent);
        assert_eq!(
            mailer.0.lock().unwrap().as_slice(),
            [OutgoingEmail {
                to: "user@example.com".to_owned(),
                subject: "Subject".to_owned(),
                html: "<p>Body</p>".to_owned(),
            }]
        );
    }
}
