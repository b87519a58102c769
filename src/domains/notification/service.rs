use askama::Template;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::error::Error;
use uuid::Uuid;

use super::{
  model::{DispatchResponse, NewPasswordResetRecord, NewVerificationRecord},
  repository::NotificationRepository,
};
use crate::{
  config::MailerConfig,
  domains::user::model::User,
  email::{ActionEmail, EmailKind, EmailMessage, MailError, Mailer},
  utils::hash_token,
};

pub const VERIFICATION_TTL_MS: i64 = 3_600_000;
pub const PASSWORD_RESET_TTL_MS: i64 = 600_000;

pub const VERIFY_PATH: &str = "users/verify";
pub const RESET_PASSWORD_PATH: &str = "users/reset-password";

pub const VERIFICATION_SENT_MESSAGE: &str =
  "Verification email has been sent to your account. Check your email for verification";
pub const PASSWORD_RESET_SENT_MESSAGE: &str = "Reset Password Link has been sent to your account.";

#[derive(Debug)]
pub enum DispatchError {
  Persistence(String),
  RecordNotCreated,
  Render(String),
  Transport(String),
}

impl Error for DispatchError {}

impl std::fmt::Display for DispatchError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DispatchError::Persistence(msg) => write!(f, "Persistence Error: {}", msg),
      DispatchError::RecordNotCreated => write!(f, "Persistence Error: no record returned"),
      DispatchError::Render(msg) => write!(f, "Render Error: {}", msg),
      DispatchError::Transport(msg) => write!(f, "Transport Error: {}", msg),
    }
  }
}

impl From<sqlx::Error> for DispatchError {
  fn from(err: sqlx::Error) -> Self {
    DispatchError::Persistence(format!("Database error: {}", err))
  }
}

impl From<askama::Error> for DispatchError {
  fn from(err: askama::Error) -> Self {
    DispatchError::Render(err.to_string())
  }
}

impl From<MailError> for DispatchError {
  fn from(err: MailError) -> Self {
    DispatchError::Transport(err.to_string())
  }
}

/// Issues single-use tokens and mails them to users.
///
/// Each call resolves to exactly one [`DispatchResponse`], whatever fails on
/// the way. Failures are logged and collapse into the generic failure body.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
  async fn dispatch_verification_email(&self, user: &User) -> DispatchResponse;
  async fn dispatch_password_reset_email(&self, user: &User) -> DispatchResponse;
}

pub struct NotificationDispatcherImpl<R, M> {
  repository: R,
  mailer: M,
  config: MailerConfig,
}

impl<R, M> NotificationDispatcherImpl<R, M>
where
  R: NotificationRepository,
  M: Mailer,
{
  pub fn new(repository: R, mailer: M, config: MailerConfig) -> Self {
    Self {
      repository,
      mailer,
      config,
    }
  }

  async fn send_verification(&self, user: &User) -> Result<(), DispatchError> {
    let token = issue_token(user.id);
    let link = action_link(&self.config.app_base_url, VERIFY_PATH, user.id, &token);
    tracing::debug!(user_id = user.id, path = VERIFY_PATH, "built action link");

    let created_at = Utc::now();
    let record = NewVerificationRecord {
      user_id: user.id,
      token: hash_token(&token),
      created_at,
      expires_at: created_at + Duration::milliseconds(VERIFICATION_TTL_MS),
    };

    self
      .repository
      .create_verification_record(record)
      .await?
      .ok_or(DispatchError::RecordNotCreated)?;

    let message = self.compose(EmailKind::Verification, user, &link, VERIFICATION_TTL_MS)?;
    self.mailer.send(message).await?;

    Ok(())
  }

  async fn send_password_reset(&self, user: &User) -> Result<(), DispatchError> {
    let token = issue_token(user.id);
    let link = action_link(&self.config.app_base_url, RESET_PASSWORD_PATH, user.id, &token);
    tracing::debug!(user_id = user.id, path = RESET_PASSWORD_PATH, "built action link");

    let created_at = Utc::now();
    let record = NewPasswordResetRecord {
      user_id: user.id,
      email: user.email.clone(),
      token: hash_token(&token),
      created_at,
      expires_at: created_at + Duration::milliseconds(PASSWORD_RESET_TTL_MS),
    };

    self
      .repository
      .create_password_reset_record(record)
      .await?
      .ok_or(DispatchError::RecordNotCreated)?;

    let message = self.compose(EmailKind::PasswordReset, user, &link, PASSWORD_RESET_TTL_MS)?;
    self.mailer.send(message).await?;

    Ok(())
  }

  fn compose(&self, kind: EmailKind, user: &User, link: &str, ttl_ms: i64) -> Result<EmailMessage, DispatchError> {
    let expiry_text = describe_ttl(ttl_ms);
    let html_body = ActionEmail {
      kind,
      recipient_name: &user.display_name,
      action_link: link,
      expiry_text: &expiry_text,
      app_name: &self.config.app_name,
      support_email: self.config.support_email.as_deref(),
    }
    .render()?;

    Ok(EmailMessage::new(
      self.config.mail_user.clone(),
      user.email.clone(),
      kind.subject().to_string(),
      html_body,
    ))
  }

  fn resolve(&self, kind: EmailKind, user: &User, result: Result<(), DispatchError>) -> DispatchResponse {
    match result {
      Ok(()) => {
        tracing::info!(user_id = user.id, kind = ?kind, "email dispatched");
        match kind {
          EmailKind::Verification => DispatchResponse::pending(VERIFICATION_SENT_MESSAGE),
          EmailKind::PasswordReset => DispatchResponse::pending(PASSWORD_RESET_SENT_MESSAGE),
        }
      }
      Err(e) => {
        tracing::error!(user_id = user.id, kind = ?kind, error = %e, "email dispatch failed");
        DispatchResponse::failure(self.config.failure_status)
      }
    }
  }
}

#[async_trait]
impl<R, M> NotificationDispatcher for NotificationDispatcherImpl<R, M>
where
  R: NotificationRepository,
  M: Mailer,
{
  async fn dispatch_verification_email(&self, user: &User) -> DispatchResponse {
    let result = self.send_verification(user).await;
    self.resolve(EmailKind::Verification, user, result)
  }

  async fn dispatch_password_reset_email(&self, user: &User) -> DispatchResponse {
    let result = self.send_password_reset(user).await;
    self.resolve(EmailKind::PasswordReset, user, result)
  }
}

/// Plaintext token: the user id followed by a random v4 UUID.
pub fn issue_token(user_id: i32) -> String {
  format!("{}{}", user_id, Uuid::new_v4())
}

pub fn action_link(base_url: &str, path: &str, user_id: i32, token: &str) -> String {
  format!("{}{}/{}/{}", base_url, path, user_id, token)
}

fn describe_ttl(ttl_ms: i64) -> String {
  let minutes = ttl_ms / 60_000;
  if minutes >= 60 && minutes % 60 == 0 {
    let hours = minutes / 60;
    format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
  } else {
    format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
  }
}
