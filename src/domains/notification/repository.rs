use async_trait::async_trait;
use sqlx::PgPool;

use super::model::{NewPasswordResetRecord, NewVerificationRecord, PasswordResetRecord, VerificationRecord};

/// Storage for pending verification and password-reset tokens.
///
/// `Ok(None)` means the store accepted the call but produced no record; the
/// dispatcher treats that as a failed dispatch.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
  async fn create_verification_record(
    &self,
    record: NewVerificationRecord,
  ) -> Result<Option<VerificationRecord>, sqlx::Error>;
  async fn create_password_reset_record(
    &self,
    record: NewPasswordResetRecord,
  ) -> Result<Option<PasswordResetRecord>, sqlx::Error>;
}

pub struct SqlxNotificationRepository {
  pub pool: PgPool,
}

impl SqlxNotificationRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl NotificationRepository for SqlxNotificationRepository {
  async fn create_verification_record(
    &self,
    record: NewVerificationRecord,
  ) -> Result<Option<VerificationRecord>, sqlx::Error> {
    VerificationRecord::create(&self.pool, &record).await
  }

  async fn create_password_reset_record(
    &self,
    record: NewPasswordResetRecord,
  ) -> Result<Option<PasswordResetRecord>, sqlx::Error> {
    PasswordResetRecord::create(&self.pool, &record).await
  }
}
