use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize, Serialize)]
pub struct User {
  pub id: i32,
  pub email: String,
  pub display_name: String,
  pub created_at: Option<DateTime<Utc>>,
}

impl User {
  pub async fn find_by_email<'e, E>(executor: E, email: &str) -> Result<Option<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    sqlx::query_as::<_, User>(r#"SELECT id, email, display_name, created_at FROM users WHERE email = $1"#)
      .bind(email)
      .fetch_optional(executor)
      .await
  }

  pub async fn find_by_id<'e, E>(executor: E, id: i32) -> Result<Option<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    sqlx::query_as::<_, User>(r#"SELECT id, email, display_name, created_at FROM users WHERE id = $1"#)
      .bind(id)
      .fetch_optional(executor)
      .await
  }
}
