use axum::{
  extract::{Json, Path, State},
  routing::{post, Router},
};
use validator::Validate;

use super::model::{DispatchResponse, PasswordResetRequest};
use crate::{
  state::{AppState, SharedAppState},
  utils::error::AppError,
};

pub fn notification_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/users/{id}/verification-email", post(send_verification_email_handler))
    .route("/password-reset", post(request_password_reset_handler))
}

pub async fn send_verification_email_handler(
  State(state): State<SharedAppState>,
  Path(user_id): Path<i32>,
) -> Result<DispatchResponse, AppError> {
  state.send_verification_email(user_id).await
}

pub async fn request_password_reset_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<PasswordResetRequest>,
) -> Result<DispatchResponse, AppError> {
  payload.validate()?;
  state.send_password_reset_email(payload.email).await
}
