//! 房间与设备 handlers
//!
//! - GET /rooms/{id} - 获取房间详情（含设备）
//! - PUT /rooms/{id}/status - 更新房间状态
//! - PUT /rooms/{id}/equipments/{id}/status - 更新设备状态
//!
//! 权限要求：所有接口需要有效会话。

use crate::AppState;
use crate::middleware::require_session;
use crate::utils::response::{not_found_error, storage_error};
use crate::utils::room_to_dto;
use api_contract::{ApiResponse, UpdateEquipmentStatusRequest, UpdateRoomStatusRequest};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

#[derive(serde::Deserialize)]
pub struct RoomPath {
    room_id: String,
}

#[derive(serde::Deserialize)]
pub struct EquipmentPath {
    room_id: String,
    equipment_id: String,
}

/// 获取房间详情
pub async fn get_room(
    State(state): State<AppState>,
    Path(path): Path<RoomPath>,
    headers: HeaderMap,
) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match state.room_store.find_room(&ctx, &path.room_id).await {
        Ok(Some(room)) => (
            StatusCode::OK,
            Json(ApiResponse::success(room_to_dto(room))),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 更新房间状态
pub async fn update_room_status(
    State(state): State<AppState>,
    Path(path): Path<RoomPath>,
    headers: HeaderMap,
    Json(req): Json<UpdateRoomStatusRequest>,
) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match state
        .room_store
        .update_room_status(&ctx, &path.room_id, req.status)
        .await
    {
        Ok(Some(room)) => (
            StatusCode::OK,
            Json(ApiResponse::success(room_to_dto(room))),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 更新设备状态（刷新 last_checked_ms）
pub async fn update_equipment_status(
    State(state): State<AppState>,
    Path(path): Path<EquipmentPath>,
    headers: HeaderMap,
    Json(req): Json<UpdateEquipmentStatusRequest>,
) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match state
        .room_store
        .update_equipment_status(
            &ctx,
            &path.room_id,
            &path.equipment_id,
            req.status,
            now_epoch_ms(),
        )
        .await
    {
        Ok(Some(room)) => (
            StatusCode::OK,
            Json(ApiResponse::success(room_to_dto(room))),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

pub(crate) fn now_epoch_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
