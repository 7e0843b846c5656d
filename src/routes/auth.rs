use axum::Json;
use axum::extract::State;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{Claims, encode_token};
use crate::auth::{otp, password};
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

/// How long a reset code stays redeemable.
const CODE_TTL_MINUTES: i64 = 15;

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn signup(
    State(state): State<SharedState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    tracing::info!(email = %req.email, "signup requested");

    if db::users::find_by_email(&state.pool, &req.email)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("User already exists".to_string()));
    }

    let password_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    // The UNIQUE constraint is the authority; the pre-check above only
    // improves the error message for the common case.
    let user = match db::users::create(&state.pool, &req.email, &password_hash).await {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => {
            return Err(AppError::BadRequest("User already exists".to_string()));
        }
        Err(e) => return Err(AppError::Database(e)),
    };

    let token =
        encode_token(&Claims::new(&user.email), &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(TokenResponse { token }))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;
    if !valid {
        tracing::info!(email = %req.email, "login rejected");
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let token =
        encode_token(&Claims::new(&user.email), &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(TokenResponse { token }))
}

pub async fn forgot_password(
    State(state): State<SharedState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let code = otp::generate_code();
    db::one_time_codes::create(
        &state.pool,
        &user.email,
        &code,
        Utc::now() + Duration::minutes(CODE_TTL_MINUTES),
    )
    .await?;

    // Delivery happens on this request; the caller waits on the relay.
    match &state.mailer {
        Some(mailer) => {
            mailer
                .send_one_time_code(&user.email, &code)
                .await
                .map_err(AppError::Internal)?;
            tracing::info!(email = %user.email, "reset code sent");
        }
        None => {
            tracing::warn!(email = %user.email, code = %code, "SMTP not configured, reset code not emailed");
        }
    }

    Ok(Json(MessageResponse {
        message: "OTP sent to your email".to_string(),
    }))
}

pub async fn reset_password(
    State(state): State<SharedState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let record = db::one_time_codes::find_valid(&state.pool, &req.email, &req.otp)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid OTP".to_string()))?;

    // A code row without a matching user is stored-state corruption
    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| {
            AppError::Inconsistent(format!("reset code {} has no matching user", record.id))
        })?;

    let password_hash = password::hash(&req.new_password).map_err(AppError::Internal)?;
    db::users::update_password(&state.pool, user.id, &password_hash).await?;
    db::one_time_codes::delete(&state.pool, record.id).await?;

    tracing::info!(email = %user.email, "password reset");

    Ok(Json(MessageResponse {
        message: "Password reset successful".to_string(),
    }))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
