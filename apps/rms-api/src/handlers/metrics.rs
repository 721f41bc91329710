//! Telemetry 指标快照
//!
//! - GET /metrics
//!
//! 权限要求：仅限管理员。

use crate::AppState;
use crate::middleware::require_admin;
use api_contract::{ApiResponse, MetricsSnapshotDto};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use rms_telemetry::metrics;

pub async fn get_metrics(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Err(response) = require_admin(&state, &headers) {
        return response;
    }

    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(MetricsSnapshotDto {
            api_requests: snapshot.api_requests,
            auth_failures: snapshot.auth_failures,
            import_runs: snapshot.import_runs,
            import_failures: snapshot.import_failures,
            import_rows: snapshot.import_rows,
            towers_imported: snapshot.towers_imported,
            rooms_imported: snapshot.rooms_imported,
            fixture_rooms: snapshot.fixture_rooms,
            remote_stub_calls: snapshot.remote_stub_calls,
        })),
    )
        .into_response()
}
