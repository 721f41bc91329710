//! 巡检 handlers
//!
//! - GET /rooms/{id}/inspections - 列出房间巡检记录（按日期倒序）
//! - POST /rooms/{id}/inspections - 创建巡检记录
//! - POST /inspections/{id}/photos - 向巡检追加照片
//! - PUT /inspections/{id}/status - 更新巡检状态
//!
//! 权限要求：所有接口需要有效会话；创建巡检会刷新房间的最近巡检时间。

use crate::AppState;
use crate::handlers::rooms::now_epoch_ms;
use crate::middleware::require_session;
use crate::utils::response::{not_found_error, storage_error};
use crate::utils::{inspection_to_dto, normalize_optional, normalize_required};
use api_contract::{
    AddPhotoRequest, ApiResponse, CreateInspectionRequest, InspectionDto,
    UpdateInspectionStatusRequest,
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use domain::{Inspection, InspectionStatus, Photo};
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct RoomInspectionsPath {
    room_id: String,
}

#[derive(serde::Deserialize)]
pub struct InspectionPath {
    inspection_id: String,
}

/// 列出房间巡检记录
pub async fn list_inspections(
    State(state): State<AppState>,
    Path(path): Path<RoomInspectionsPath>,
    headers: HeaderMap,
) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match state
        .inspection_store
        .list_inspections(&ctx, &path.room_id)
        .await
    {
        Ok(inspections) => {
            let data: Vec<InspectionDto> =
                inspections.into_iter().map(inspection_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 创建巡检记录
pub async fn create_inspection(
    State(state): State<AppState>,
    Path(path): Path<RoomInspectionsPath>,
    headers: HeaderMap,
    Json(req): Json<CreateInspectionRequest>,
) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match state.room_store.find_room(&ctx, &path.room_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return not_found_error(),
        Err(err) => return storage_error(err),
    }

    let now_ms = now_epoch_ms();
    let record = Inspection {
        inspection_id: Uuid::new_v4().to_string(),
        room_id: path.room_id.clone(),
        inspector_id: ctx.user_id.clone(),
        date_ms: now_ms,
        notes: req.notes.unwrap_or_default(),
        photos: Vec::new(),
        status: InspectionStatus::Pending,
    };
    let inspection = match state.inspection_store.create_inspection(&ctx, record).await {
        Ok(inspection) => inspection,
        Err(err) => return storage_error(err),
    };
    if let Err(err) = state
        .room_store
        .touch_last_inspection(&ctx, &path.room_id, now_ms)
        .await
    {
        return storage_error(err);
    }
    (
        StatusCode::OK,
        Json(ApiResponse::success(inspection_to_dto(inspection))),
    )
        .into_response()
}

/// 向巡检追加照片
pub async fn add_photo(
    State(state): State<AppState>,
    Path(path): Path<InspectionPath>,
    headers: HeaderMap,
    Json(req): Json<AddPhotoRequest>,
) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    let url = match normalize_required(req.url, "url") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let caption = match normalize_optional(req.caption, "caption") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let photo = Photo {
        photo_id: Uuid::new_v4().to_string(),
        url,
        caption,
        equipment_id: req.equipment_id,
        taken_at_ms: now_epoch_ms(),
        kind: req.kind,
        equipment_working: req.equipment_working,
    };
    match state
        .inspection_store
        .add_photo(&ctx, &path.inspection_id, photo)
        .await
    {
        Ok(Some(inspection)) => (
            StatusCode::OK,
            Json(ApiResponse::success(inspection_to_dto(inspection))),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 更新巡检状态
pub async fn update_inspection_status(
    State(state): State<AppState>,
    Path(path): Path<InspectionPath>,
    headers: HeaderMap,
    Json(req): Json<UpdateInspectionStatusRequest>,
) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match state
        .inspection_store
        .update_status(&ctx, &path.inspection_id, req.status)
        .await
    {
        Ok(Some(inspection)) => (
            StatusCode::OK,
            Json(ApiResponse::success(inspection_to_dto(inspection))),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}
