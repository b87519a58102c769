use std::sync::Arc;

use sqlx::PgPool;

use crate::{
  config::MailerConfig,
  domains::{
    notification::{
      model::DispatchResponse,
      repository::SqlxNotificationRepository,
      service::{NotificationDispatcher, NotificationDispatcherImpl},
    },
    user::repository::{SqlxUserRepository, UserRepository},
  },
  email::SmtpMailer,
  utils::error::AppError,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_verification_email(
    &self,
    user_id: i32,
  ) -> impl std::future::Future<Output = Result<DispatchResponse, AppError>> + Send;
  fn send_password_reset_email(
    &self,
    email: String,
  ) -> impl std::future::Future<Output = Result<DispatchResponse, AppError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub users: Arc<dyn UserRepository>,
  pub dispatcher: Arc<dyn NotificationDispatcher>,
}

impl SharedAppState {
  pub fn new(pool: PgPool, mailer: SmtpMailer, config: MailerConfig) -> Self {
    let users = Arc::new(SqlxUserRepository::new(pool.clone()));
    let dispatcher = Arc::new(NotificationDispatcherImpl::new(
      SqlxNotificationRepository::new(pool),
      mailer,
      config,
    ));

    Self::with_services(users, dispatcher)
  }

  pub fn with_services(users: Arc<dyn UserRepository>, dispatcher: Arc<dyn NotificationDispatcher>) -> Self {
    Self { users, dispatcher }
  }
}

impl AppState for SharedAppState {
  async fn send_verification_email(&self, user_id: i32) -> Result<DispatchResponse, AppError> {
    let user = self
      .users
      .find_by_id(user_id)
      .await?
      .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(self.dispatcher.dispatch_verification_email(&user).await)
  }

  async fn send_password_reset_email(&self, email: String) -> Result<DispatchResponse, AppError> {
    let user = self
      .users
      .find_by_email(&email)
      .await?
      .ok_or_else(|| AppError::not_found("Email address not found"))?;

    Ok(self.dispatcher.dispatch_password_reset_email(&user).await)
  }
}
