//! 会话与请求上下文中间件
//!
//! 提供以下中间件和辅助函数：
//! - request_context：请求上下文中间件，注入 request_id/trace_id
//! - mock_latency：mock 模式下的人工延迟
//! - session_id：从 x-session-id 头提取会话标识
//! - require_session：校验会话并提取 SessionContext
//! - require_admin：在会话基础上校验管理员标记
//!
//! 会话流程：
//! 1. request_context：在所有请求前注入追踪 ID 并计数
//! 2. session_id：从请求头提取不透明会话标识
//! 3. require_session：在内存会话表中解析 SessionContext
//! 4. require_admin：管理员专属接口的二次校验

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use rms_auth::AuthError;
use rms_telemetry::{new_request_ids, record_api_request, record_auth_failure};
use tracing::{Instrument, info_span};

use crate::AppState;
use crate::utils::response::{auth_error, forbidden_error, internal_auth_error};
use domain::SessionContext;

const SESSION_HEADER: &str = "x-session-id";

/// 请求上下文中间件：注入 request_id/trace_id
pub async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    record_api_request();
    let ids = new_request_ids();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ids.clone());

    let span = info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %method,
        path = %path
    );

    let mut response: axum::response::Response = next.run(req).instrument(span).await;
    response.headers_mut().insert(
        "x-request-id",
        HeaderValue::from_str(&ids.request_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response.headers_mut().insert(
        "x-trace-id",
        HeaderValue::from_str(&ids.trace_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response
}

/// mock 模式的人工网络延迟；aws 模式下延迟为 0，直接放行。
pub async fn mock_latency(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if state.mock_latency_ms > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(state.mock_latency_ms)).await;
    }
    next.run(req).await
}

/// 从请求头中提取会话标识
pub fn session_id(headers: &HeaderMap) -> Option<&str> {
    headers.get(SESSION_HEADER)?.to_str().ok()
}

/// 校验会话并提取 SessionContext
pub fn require_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<SessionContext, Response> {
    let session_id = match session_id(headers) {
        Some(session_id) => session_id,
        None => {
            record_auth_failure();
            return Err(auth_error(StatusCode::UNAUTHORIZED));
        }
    };
    match state.auth.resolve(session_id) {
        Ok(ctx) => Ok(ctx),
        Err(AuthError::SessionInvalid | AuthError::SessionExpired) => {
            record_auth_failure();
            Err(auth_error(StatusCode::UNAUTHORIZED))
        }
        Err(err) => Err(internal_auth_error(err)),
    }
}

/// 校验管理员会话
pub fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<SessionContext, Response> {
    let ctx = require_session(state, headers)?;
    if !ctx.is_admin {
        record_auth_failure();
        return Err(forbidden_error());
    }
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::session_id;
    use axum::http::{HeaderMap, HeaderValue};

    #[test]
    fn session_id_extracts() {
        let mut headers = HeaderMap::new();
        headers.insert("x-session-id", HeaderValue::from_static("session-1"));
        assert_eq!(session_id(&headers), Some("session-1"));
    }

    #[test]
    fn session_id_missing_is_none() {
        let headers = HeaderMap::new();
        assert_eq!(session_id(&headers), None);
    }
}
