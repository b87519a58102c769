use axum::{
  body::Body,
  http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use memories_api::{
  config::MailerConfig,
  create_app,
  email::{SmtpConfig, SmtpMailer},
  state::SharedAppState,
};
use sqlx::{PgPool, Row};
use tower::ServiceExt;

/// Needs a Postgres at TEST_DATABASE_URL and an SMTP sink (e.g. mailhog) on
/// localhost:1025.
#[tokio::test]
#[ignore]
async fn test_verification_email_persists_hashed_record() {
  let database_url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
  let pool = PgPool::connect(&database_url).await.unwrap();

  sqlx::migrate!("./migrations").run(&pool).await.unwrap();

  sqlx::query("TRUNCATE TABLE users RESTART IDENTITY CASCADE")
    .execute(&pool)
    .await
    .unwrap();

  let user_id: i32 = sqlx::query_scalar("INSERT INTO users (email, display_name) VALUES ($1, $2) RETURNING id")
    .bind("test@example.com")
    .bind("Test User")
    .fetch_one(&pool)
    .await
    .unwrap();

  let config = MailerConfig {
    mail_host: "localhost".to_string(),
    mail_port: 1025,
    mail_user: "noreply@memories.test".to_string(),
    mail_password: "secret".to_string(),
    app_base_url: "http://localhost:3000/".to_string(),
    app_name: "Memories".to_string(),
    support_email: None,
    failure_status: StatusCode::NOT_FOUND,
  };
  let mailer = SmtpMailer::new(SmtpConfig::from(&config)).unwrap();
  let app = create_app(SharedAppState::new(pool.clone(), mailer, config));

  let response = app
    .oneshot(
      Request::builder()
        .method("POST")
        .uri(format!("/api/v1/users/{}/verification-email", user_id))
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::CREATED);

  let body = response.into_body().collect().await.unwrap().to_bytes();
  let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
  assert_eq!(value["success"], "PENDING");

  let row = sqlx::query(
    "SELECT token, EXTRACT(EPOCH FROM (expires_at - created_at))::BIGINT AS ttl FROM email_verifications WHERE user_id = $1",
  )
  .bind(user_id)
  .fetch_one(&pool)
  .await
  .unwrap();

  // Plaintext tokens always carry the UUID hyphens; digests never do.
  let token: String = row.get("token");
  assert_eq!(token.len(), 64);
  assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
  assert!(!token.contains('-'));
  assert_eq!(row.get::<i64, _>("ttl"), 3600);
}
