use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use memories_api::app::create_app;
use memories_api::config::AppConfig;
use memories_api::db::create_pool;
use memories_api::email::{SmtpConfig, SmtpMailer};
use memories_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = AppConfig::from_env()?;

  let pool = create_pool(&config.database_url).await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  tracing::info!("Database migrations applied successfully");

  let mailer = SmtpMailer::new(SmtpConfig::from(&config.mailer))?;
  let app_state = SharedAppState::new(pool, mailer, config.mailer.clone());
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;

  tracing::info!("Server running on http://{}", config.server_addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", e);
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut stream) => {
        stream.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install signal handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
