pub mod templates;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl Mailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
        })
    }

    /// Deliver a reset code. Awaited on the request being served; there is
    /// no timeout or retry on the relay.
    pub async fn send_one_time_code(&self, to_email: &str, code: &str) -> Result<(), String> {
        let body = templates::render_one_time_code(code);
        self.send(to_email, "Your password reset code", &body).await
    }

    async fn send(&self, to: &str, subject: &str, text_body: &str) -> Result<(), String> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(to.parse().map_err(|e| format!("Invalid to address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(text_body.to_string())
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}
