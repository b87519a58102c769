use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use validator::Validate;

pub const PENDING: &str = "PENDING";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize, Serialize)]
pub struct VerificationRecord {
  pub id: i32,
  pub user_id: i32,
  pub token: String,
  pub created_at: DateTime<Utc>,
  pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVerificationRecord {
  pub user_id: i32,
  /// Hash of the emailed token, never the token itself.
  pub token: String,
  pub created_at: DateTime<Utc>,
  pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize, Serialize)]
pub struct PasswordResetRecord {
  pub id: i32,
  pub user_id: i32,
  pub email: String,
  pub token: String,
  pub created_at: DateTime<Utc>,
  pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPasswordResetRecord {
  pub user_id: i32,
  pub email: String,
  pub token: String,
  pub created_at: DateTime<Utc>,
  pub expires_at: DateTime<Utc>,
}

impl VerificationRecord {
  pub async fn create<'e, E>(executor: E, record: &NewVerificationRecord) -> Result<Option<Self>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    sqlx::query_as::<_, VerificationRecord>(
      r#"
            INSERT INTO email_verifications (user_id, token, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, token, created_at, expires_at
            "#,
    )
    .bind(record.user_id)
    .bind(&record.token)
    .bind(record.created_at)
    .bind(record.expires_at)
    .fetch_optional(executor)
    .await
  }
}

impl PasswordResetRecord {
  pub async fn create<'e, E>(executor: E, record: &NewPasswordResetRecord) -> Result<Option<Self>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    sqlx::query_as::<_, PasswordResetRecord>(
      r#"
            INSERT INTO password_resets (user_id, email, token, created_at, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, email, token, created_at, expires_at
            "#,
    )
    .bind(record.user_id)
    .bind(&record.email)
    .bind(&record.token)
    .bind(record.created_at)
    .bind(record.expires_at)
    .fetch_optional(executor)
    .await
  }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct PasswordResetRequest {
  #[validate(email)]
  pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DispatchBody {
  Pending { success: String, message: String },
  Failure { message: String },
}

/// The single response a dispatch resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResponse {
  pub status: StatusCode,
  pub body: DispatchBody,
}

impl DispatchResponse {
  pub fn pending(message: impl Into<String>) -> Self {
    Self {
      status: StatusCode::CREATED,
      body: DispatchBody::Pending {
        success: PENDING.to_string(),
        message: message.into(),
      },
    }
  }

  pub fn failure(status: StatusCode) -> Self {
    Self {
      status,
      body: DispatchBody::Failure {
        message: GENERIC_FAILURE_MESSAGE.to_string(),
      },
    }
  }
}

impl IntoResponse for DispatchResponse {
  fn into_response(self) -> Response {
    (self.status, Json(self.body)).into_response()
  }
}
