//! 导入 handlers
//!
//! - POST /import/csv - 导入 CSV 文件（请求体为原始字节）
//! - POST /import/xlsx - 导入 XLSX 文件（请求体为原始字节）
//!
//! 权限要求：仅限管理员。
//!
//! 导入流程：解析规范化 → 整体替换存量楼塔/房间 → 持久化快照 → 返回摘要。
//! 格式错误/空文件统一返回 400 单条消息，不做部分行报告。

use crate::AppState;
use crate::handlers::rooms::now_epoch_ms;
use crate::middleware::require_admin;
use crate::utils::response::{bad_request_error, storage_error};
use api_contract::{ApiResponse, ImportSummaryDto};
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use domain::SessionContext;
use rms_import::{ImportOutcome, import_csv as parse_csv, import_xlsx as parse_xlsx};
use rms_storage::Snapshot;
use rms_telemetry::{record_import_failure, record_import_outcome, record_import_run};

/// 导入 CSV
pub async fn import_csv(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let ctx = match require_admin(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    record_import_run();
    match parse_csv(&body) {
        Ok(outcome) => apply_import(&state, &ctx, outcome).await,
        Err(err) => {
            record_import_failure();
            bad_request_error(err.to_string())
        }
    }
}

/// 导入 XLSX
pub async fn import_xlsx(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let ctx = match require_admin(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    record_import_run();
    match parse_xlsx(&body) {
        Ok(outcome) => apply_import(&state, &ctx, outcome).await,
        Err(err) => {
            record_import_failure();
            bad_request_error(err.to_string())
        }
    }
}

/// 导入落库：整体替换 + 快照持久化 + 指标记录。
async fn apply_import(state: &AppState, ctx: &SessionContext, outcome: ImportOutcome) -> Response {
    let ImportOutcome {
        towers,
        rooms,
        summary,
    } = outcome;

    if let Err(err) = state.tower_store.replace_all(ctx, towers.clone()).await {
        return storage_error(err);
    }
    if let Err(err) = state.room_store.replace_all(ctx, rooms.clone()).await {
        return storage_error(err);
    }

    if let Some(snapshot_store) = &state.snapshot_store {
        let snapshot = Snapshot {
            imported_at_ms: now_epoch_ms(),
            imported_by: ctx.user_id.clone(),
            towers,
            rooms,
        };
        if let Err(err) = snapshot_store.save(ctx, &snapshot).await {
            return storage_error(err);
        }
    }

    record_import_outcome(
        summary.rows as u64,
        summary.towers as u64,
        summary.rooms as u64,
    );
    tracing::info!(
        rows = summary.rows,
        towers = summary.towers,
        wings = summary.wings,
        rooms = summary.rooms,
        "import applied"
    );

    let response = ImportSummaryDto {
        rows: summary.rows,
        towers: summary.towers,
        wings: summary.wings,
        rooms: summary.rooms,
    };
    (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
}
