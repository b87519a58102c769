use std::env;

use anyhow::{anyhow, Context, Result};
use axum::http::StatusCode;

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MAIL_HOST: &str = "smtp-mail.outlook.com";
const DEFAULT_MAIL_PORT: u16 = 587;
const DEFAULT_APP_NAME: &str = "Memories";

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub database_url: String,
  pub server_addr: String,
  pub mailer: MailerConfig,
}

/// Everything the notification dispatcher needs to talk to the mail relay and
/// to build outbound links.
#[derive(Debug, Clone)]
pub struct MailerConfig {
  pub mail_host: String,
  pub mail_port: u16,
  pub mail_user: String,
  pub mail_password: String,
  /// Always ends with `/`, links are appended directly.
  pub app_base_url: String,
  pub app_name: String,
  pub support_email: Option<String>,
  pub failure_status: StatusCode,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    Ok(Self {
      database_url: required("DATABASE_URL")?,
      server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
      mailer: MailerConfig::from_env()?,
    })
  }
}

impl MailerConfig {
  pub fn from_env() -> Result<Self> {
    let mail_port = match env::var("MAIL_PORT") {
      Ok(port) => port.parse().with_context(|| format!("MAIL_PORT is not a valid port: {}", port))?,
      Err(_) => DEFAULT_MAIL_PORT,
    };

    let failure_status = match env::var("DISPATCH_FAILURE_STATUS") {
      Ok(code) => parse_status(&code)?,
      Err(_) => StatusCode::NOT_FOUND,
    };

    Ok(Self {
      mail_host: env::var("MAIL_HOST").unwrap_or_else(|_| DEFAULT_MAIL_HOST.to_string()),
      mail_port,
      mail_user: required("AUTH_EMAIL")?,
      mail_password: required("AUTH_PASSWORD")?,
      app_base_url: normalize_base_url(&required("APP_URL")?),
      app_name: env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()),
      support_email: env::var("SUPPORT_EMAIL").ok().filter(|s| !s.trim().is_empty()),
      failure_status,
    })
  }
}

fn required(key: &str) -> Result<String> {
  env::var(key).map_err(|_| anyhow!("{} environment variable must be set.", key))
}

fn parse_status(code: &str) -> Result<StatusCode> {
  let code: u16 = code
    .trim()
    .parse()
    .with_context(|| format!("DISPATCH_FAILURE_STATUS is not a number: {}", code))?;
  let status = StatusCode::from_u16(code).with_context(|| format!("invalid HTTP status code: {}", code))?;
  if !(status.is_client_error() || status.is_server_error()) {
    return Err(anyhow!("DISPATCH_FAILURE_STATUS must be a 4xx or 5xx code, got {}", code));
  }
  Ok(status)
}

pub fn normalize_base_url(url: &str) -> String {
  let url = url.trim();
  if url.ends_with('/') {
    url.to_string()
  } else {
    format!("{}/", url)
  }
}
