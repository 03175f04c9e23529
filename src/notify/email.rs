//! SMTP email alerts.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::schema::EmailConfig;
use crate::monitor::state::EndpointState;
use crate::notify::{Notifier, ALERT_THRESHOLD};

/// Error type for notifier construction.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Sends `[ALERT] Endpoint DOWN` mails through an authenticated relay.
pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl EmailNotifier {
    /// Build the STARTTLS transport and parse the addresses up front, so a
    /// misconfigured channel fails at startup rather than at alert time.
    pub fn new(config: &EmailConfig) -> Result<Self, NotifyError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_server)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.username.parse()?,
            to: config.to_email.parse()?,
        })
    }

    fn compose(&self, state: &EndpointState) -> Result<Message, lettre::error::Error> {
        let last_checked = state
            .last_checked
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "never".to_string());
        let status = state
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(format!("[ALERT] Endpoint DOWN: {}", state.name))
            .body(format!(
                "Endpoint {} ({}) is not responding correctly. Last status: {}.\nDate: {}",
                state.name, state.url, status, last_checked
            ))
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn maybe_alert(&self, state: &EndpointState) {
        if state.consecutive_errors < ALERT_THRESHOLD {
            return;
        }

        let message = match self.compose(state) {
            Ok(message) => message,
            Err(e) => {
                tracing::error!(endpoint = %state.name, error = %e, "Failed to compose alert email");
                return;
            }
        };

        match self.transport.send(message).await {
            Ok(_) => {
                tracing::info!(endpoint = %state.name, "Alert email sent");
            }
            Err(e) => {
                tracing::warn!(endpoint = %state.name, error = %e, "Failed to send alert email");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_config() -> EmailConfig {
        EmailConfig {
            smtp_server: "smtp.example.com".into(),
            smtp_port: 587,
            username: "alerts@example.com".into(),
            password: "secret".into(),
            to_email: "oncall@example.com".into(),
        }
    }

    fn failing_state(count: u32) -> EndpointState {
        let mut state = EndpointState::new("api", "http://api.example.com/health");
        state.status = Some(crate::probe::ProbeStatus::Http(503));
        state.consecutive_errors = count;
        state.last_checked = Some(chrono::Local::now());
        state
    }

    #[tokio::test]
    async fn construction_validates_addresses() {
        assert!(EmailNotifier::new(&email_config()).is_ok());

        let mut bad = email_config();
        bad.to_email = "not an address".into();
        assert!(matches!(
            EmailNotifier::new(&bad),
            Err(NotifyError::Address(_))
        ));
    }

    #[tokio::test]
    async fn message_carries_name_url_status_and_subject() {
        let notifier = EmailNotifier::new(&email_config()).unwrap();
        let message = notifier.compose(&failing_state(2)).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("[ALERT] Endpoint DOWN: api"));
        assert!(raw.contains("http://api.example.com/health"));
        assert!(raw.contains("Last status: 503"));
        assert!(raw.contains("To: oncall@example.com"));
    }

    #[tokio::test]
    async fn below_threshold_is_a_no_op() {
        // Would attempt a real SMTP connection if the guard were missing;
        // returning instantly is the observable behavior.
        let notifier = EmailNotifier::new(&email_config()).unwrap();
        notifier.maybe_alert(&failing_state(1)).await;
    }
}
