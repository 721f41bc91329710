//! 会话 handlers
//!
//! - GET /health - 健康检查
//! - POST /login - 登录并登记会话
//! - POST /logout - 注销会话
//! - GET /session - 返回当前会话信息

use crate::AppState;
use crate::middleware::{require_session, session_id};
use crate::utils::response::{auth_error, internal_auth_error};
use api_contract::{ApiResponse, LoginRequest, LoginResponse, SessionDto};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use rms_auth::AuthError;
use rms_telemetry::record_auth_failure;

/// 健康检查
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

/// 登录
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    match state.auth.login(&req.username, &req.password).await {
        Ok((user, handle)) => {
            let response = LoginResponse {
                session_id: handle.session_id,
                user_id: user.user_id,
                display_name: user.display_name,
                is_admin: user.is_admin,
                expires: handle.expires_at_ms.max(0) as u64,
            };
            (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
        }
        Err(AuthError::InvalidCredentials) => {
            record_auth_failure();
            auth_error(StatusCode::UNAUTHORIZED)
        }
        Err(err) => internal_auth_error(err),
    }
}

/// 注销
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session_id = match session_id(&headers) {
        Some(session_id) => session_id,
        None => return auth_error(StatusCode::UNAUTHORIZED),
    };
    if !state.auth.logout(session_id) {
        return auth_error(StatusCode::UNAUTHORIZED);
    }
    (StatusCode::OK, Json(ApiResponse::success(()))).into_response()
}

/// 当前会话
pub async fn get_session(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    let response = SessionDto {
        user_id: ctx.user_id,
        display_name: ctx.display_name,
        is_admin: ctx.is_admin,
    };
    (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
}
