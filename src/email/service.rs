use std::error::Error;

use async_trait::async_trait;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
  Message, Tokio1Executor,
};

use crate::email::types::{EmailMessage, SmtpConfig};

#[derive(Debug)]
pub enum MailError {
  Address(String),
  Build(String),
  Transport(String),
}

impl Error for MailError {}

impl std::fmt::Display for MailError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MailError::Address(msg) => write!(f, "Invalid address: {}", msg),
      MailError::Build(msg) => write!(f, "Failed to build message: {}", msg),
      MailError::Transport(msg) => write!(f, "SMTP transport error: {}", msg),
    }
  }
}

impl From<lettre::address::AddressError> for MailError {
  fn from(err: lettre::address::AddressError) -> Self {
    MailError::Address(err.to_string())
  }
}

impl From<lettre::error::Error> for MailError {
  fn from(err: lettre::error::Error) -> Self {
    MailError::Build(err.to_string())
  }
}

impl From<lettre::transport::smtp::Error> for MailError {
  fn from(err: lettre::transport::smtp::Error) -> Self {
    MailError::Transport(err.to_string())
  }
}

/// Delivers one fully rendered message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, message: EmailMessage) -> Result<(), MailError>;
}

pub struct SmtpMailer {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self, MailError> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(SmtpMailer {
      smtp_config,
      transporter,
    })
  }
}

#[async_trait]
impl Mailer for SmtpMailer {
  async fn send(&self, message: EmailMessage) -> Result<(), MailError> {
    let email = Message::builder()
      .from(message.from.parse()?)
      .to(message.to.parse()?)
      .subject(message.subject)
      .header(ContentType::TEXT_HTML)
      .body(message.html_body)?;

    self.transporter.send(email).await?;
    tracing::debug!(host = %self.smtp_config.host, "message accepted by relay");

    Ok(())
  }
}
