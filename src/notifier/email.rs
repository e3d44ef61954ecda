// SMTP delivery of lead e-mails
use crate::config::EmailConfig;
use crate::model::{LeadCapture, NotifyError};
use crate::notifier::template::{lead_body, lead_subject};
use crate::notifier::LeadChannel;
use chrono::Utc;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::time::Duration;
use tracing::{info, warn};

pub struct EmailNotifier {
    config: EmailConfig,
    timeout: Duration,
}

impl EmailNotifier {
    pub fn new(config: EmailConfig, timeout: Duration) -> Self {
        info!("📧 Email notifier initialized - sending to: {}", config.lead_email);
        Self { config, timeout }
    }

    fn build_message(&self, lead: &LeadCapture) -> Result<Message, NotifyError> {
        let from: Mailbox = self
            .config
            .smtp_username
            .parse()
            .map_err(|e| NotifyError::Address(format!("from '{}': {}", self.config.smtp_username, e)))?;
        let to: Mailbox = self
            .config
            .lead_email
            .parse()
            .map_err(|e| NotifyError::Address(format!("to '{}': {}", self.config.lead_email, e)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(lead_subject(lead))
            .header(ContentType::TEXT_PLAIN)
            .body(lead_body(lead, Utc::now()))
            .map_err(|e| NotifyError::Message(e.to_string()))
    }

    fn transport(&self) -> Result<SmtpTransport, NotifyError> {
        let transport = SmtpTransport::starttls_relay(&self.config.smtp_host)
            .map_err(|e| NotifyError::Smtp(format!("relay init failed: {}", e)))?
            .port(self.config.smtp_port)
            .credentials(Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            ))
            .timeout(Some(self.timeout))
            .build();
        Ok(transport)
    }
}

#[async_trait::async_trait]
impl LeadChannel for EmailNotifier {
    async fn deliver(&self, lead: &LeadCapture) -> Result<(), NotifyError> {
        if self.config.smtp_username.is_empty() || self.config.smtp_password.is_empty() {
            return Err(NotifyError::NotConfigured);
        }

        let message = self.build_message(lead)?;
        let transport = self.transport()?;

        // lettre's SmtpTransport blocks, so keep it off the async workers.
        let sent = tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|e| NotifyError::Join(e.to_string()))?;

        match sent {
            Ok(response) => {
                info!("✅ Lead email sent to {} [{}]", self.config.lead_email, response.code());
                Ok(())
            }
            Err(e) => {
                warn!("❌ SMTP error: {}", e);
                Err(NotifyError::Smtp(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::template::tests::lead;

    fn configured() -> EmailConfig {
        EmailConfig {
            smtp_username: "quiz@example.com".to_string(),
            smtp_password: "secret".to_string(),
            ..EmailConfig::default()
        }
    }

    #[test]
    fn message_is_addressed_to_sales() {
        let notifier = EmailNotifier::new(configured(), Duration::from_secs(1));
        let message = notifier.build_message(&lead()).unwrap();
        let envelope = message.envelope();
        assert_eq!(envelope.to()[0].to_string(), "sourcing@bookatestdrive.com.au");
        assert_eq!(envelope.from().map(|a| a.to_string()).as_deref(), Some("quiz@example.com"));
    }

    #[test]
    fn bad_sender_address_is_reported() {
        let config = EmailConfig {
            smtp_username: "not-an-address".to_string(),
            ..configured()
        };
        let notifier = EmailNotifier::new(config, Duration::from_secs(1));
        assert!(matches!(notifier.build_message(&lead()), Err(NotifyError::Address(_))));
    }

    #[tokio::test]
    async fn missing_credentials_skip_delivery() {
        let notifier = EmailNotifier::new(EmailConfig::default(), Duration::from_secs(1));
        assert!(matches!(notifier.deliver(&lead()).await, Err(NotifyError::NotConfigured)));
    }
}
