//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的错误响应构造函数和 DTO 转换函数：
//! - 错误响应：auth_error, forbidden_error, bad_request_error, not_found_error, internal_auth_error, storage_error
//! - DTO 转换：tower_to_dto, room_to_dto, equipment_to_dto, inspection_to_dto, photo_to_dto
//!
//! 设计原则：
//! - 所有错误返回统一的 ApiResponse 格式
//! - HTTP 状态码与错误码对应
//! - DTO 转换保持领域记录和 DTO 字段一致

use api_contract::{
    ApiResponse, EquipmentDto, InspectionDto, PhotoDto, RoomDto, TowerDto, WingDto,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{Equipment, Inspection, Photo, Room, Tower, Wing};
use rms_auth::AuthError;
use rms_storage::StorageError;

/// 认证错误响应
pub fn auth_error(status: StatusCode) -> Response {
    (
        status,
        Json(ApiResponse::<()>::error(
            "AUTH.UNAUTHORIZED",
            "unauthorized",
        )),
    )
        .into_response()
}

/// 禁止访问错误响应
pub fn forbidden_error() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ApiResponse::<()>::error("AUTH.FORBIDDEN", "forbidden")),
    )
        .into_response()
}

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 资源未找到错误响应
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", "not found")),
    )
        .into_response()
}

/// 认证内部错误响应
pub fn internal_auth_error(err: AuthError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// 存储错误响应
pub fn storage_error(err: StorageError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// Tower 转 TowerDto
pub fn tower_to_dto(record: Tower) -> TowerDto {
    TowerDto {
        tower_id: record.tower_id,
        name: record.name,
        floors: record.floors,
        wings: record.wings.into_iter().map(wing_to_dto).collect(),
    }
}

/// Wing 转 WingDto
pub fn wing_to_dto(record: Wing) -> WingDto {
    WingDto {
        wing_id: record.wing_id,
        name: record.name,
        tower_id: record.tower_id,
        floor_number: record.floor_number,
    }
}

/// Room 转 RoomDto
pub fn room_to_dto(record: Room) -> RoomDto {
    RoomDto {
        room_id: record.room_id,
        name: record.name,
        number: record.number,
        tower_id: record.tower_id,
        floor_number: record.floor_number,
        wing_id: record.wing_id,
        capacity: record.capacity,
        equipments: record.equipments.into_iter().map(equipment_to_dto).collect(),
        status: record.status,
        last_inspection_ms: record.last_inspection_ms,
        image_url: record.image_url,
    }
}

/// Equipment 转 EquipmentDto
pub fn equipment_to_dto(record: Equipment) -> EquipmentDto {
    EquipmentDto {
        equipment_id: record.equipment_id,
        kind: record.kind,
        name: record.name,
        status: record.status,
        last_checked_ms: record.last_checked_ms,
    }
}

/// Inspection 转 InspectionDto
pub fn inspection_to_dto(record: Inspection) -> InspectionDto {
    InspectionDto {
        inspection_id: record.inspection_id,
        room_id: record.room_id,
        inspector_id: record.inspector_id,
        date_ms: record.date_ms,
        notes: record.notes,
        photos: record.photos.into_iter().map(photo_to_dto).collect(),
        status: record.status,
    }
}

/// Photo 转 PhotoDto
pub fn photo_to_dto(record: Photo) -> PhotoDto {
    PhotoDto {
        photo_id: record.photo_id,
        url: record.url,
        caption: record.caption,
        equipment_id: record.equipment_id,
        taken_at_ms: record.taken_at_ms,
        kind: record.kind,
        equipment_working: record.equipment_working,
    }
}
