//! Auth API Handlers

use axum::{
    Json,
    extract::{Extension, State},
};
use http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::PasswordChange;

const MIN_PASSWORD_LEN: usize = 4;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(crate::auth::extract_bearer)
}

/// POST /api/auth/login - 登录，签发会话令牌 (公开)
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let snapshot = state.store.load()?;

    if payload.username != snapshot.admin.username
        || payload.password != snapshot.admin.password
    {
        tracing::warn!(username = %payload.username, "Failed login attempt");
        return Err(AppError::invalid_credentials());
    }

    let token = state.sessions.issue(&payload.username);
    tracing::info!(username = %payload.username, "Login succeeded");
    Ok(Json(LoginResponse {
        token,
        username: payload.username,
    }))
}

/// GET /api/auth/session - 会话检查 (公开，前端据此决定是否跳登录页)
pub async fn session(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> Json<SessionReport> {
    let user = bearer_token(&headers).and_then(|token| state.sessions.verify(token));
    Json(SessionReport {
        authenticated: user.is_some(),
        username: user.map(|u| u.username),
    })
}

/// POST /api/auth/logout - 注销当前令牌
pub async fn logout(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    headers: HeaderMap,
) -> AppResult<Json<SessionReport>> {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.revoke(token);
    }
    tracing::info!(username = %current_user.username, "Logged out");
    Ok(Json(SessionReport {
        authenticated: false,
        username: None,
    }))
}

/// POST /api/auth/password - 修改管理员密码
pub async fn change_password(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<PasswordChange>,
) -> AppResult<Json<SessionReport>> {
    if payload.new_password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "New password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    if payload.current != snapshot.admin.password {
        return Err(AppError::validation("Current password is incorrect"));
    }
    snapshot.admin.password = payload.new_password;
    state.store.save(&snapshot)?;

    tracing::info!(username = %current_user.username, "Admin password changed");
    Ok(Json(SessionReport {
        authenticated: true,
        username: Some(current_user.username),
    }))
}
