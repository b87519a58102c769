use serde::{Deserialize, Serialize};

use crate::config::MailerConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
}

impl From<&MailerConfig> for SmtpConfig {
  fn from(config: &MailerConfig) -> Self {
    SmtpConfig {
      host: config.mail_host.clone(),
      port: config.mail_port,
      username: config.mail_user.clone(),
      password: config.mail_password.clone(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
  pub from: String,
  pub to: String,
  pub subject: String,
  pub html_body: String,
}

impl EmailMessage {
  pub fn new(from: String, to: String, subject: String, html_body: String) -> Self {
    EmailMessage {
      from,
      to,
      subject,
      html_body,
    }
  }
}
