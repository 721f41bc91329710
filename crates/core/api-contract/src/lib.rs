//! 稳定的 DTO 与 API 响应契约。

use domain::{
    EquipmentKind, EquipmentStatus, InspectionStatus, PhotoKind, RoomStatus,
};
use serde::{Deserialize, Serialize};

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 登录请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 登录响应体（会话为不透明 UUID，非 JWT）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub session_id: String,
    pub user_id: String,
    pub display_name: String,
    pub is_admin: bool,
    pub expires: u64,
}

/// 当前会话响应体。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub user_id: String,
    pub display_name: String,
    pub is_admin: bool,
}

/// 楼塔返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerDto {
    pub tower_id: String,
    pub name: String,
    pub floors: Vec<i32>,
    pub wings: Vec<WingDto>,
}

/// 侧翼返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WingDto {
    pub wing_id: String,
    pub name: String,
    pub tower_id: String,
    pub floor_number: i32,
}

/// 房间返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub room_id: String,
    pub name: String,
    pub number: i32,
    pub tower_id: String,
    pub floor_number: i32,
    pub wing_id: String,
    pub capacity: i32,
    pub equipments: Vec<EquipmentDto>,
    pub status: RoomStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_inspection_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// 设备返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDto {
    pub equipment_id: String,
    pub kind: EquipmentKind,
    pub name: String,
    pub status: EquipmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_checked_ms: Option<i64>,
}

/// 房间状态更新请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomStatusRequest {
    pub status: RoomStatus,
}

/// 设备状态更新请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipmentStatusRequest {
    pub status: EquipmentStatus,
}

/// 房间列表查询参数。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomListQuery {
    pub floor_number: Option<i32>,
    pub wing_id: Option<String>,
}

/// 巡检创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInspectionRequest {
    pub notes: Option<String>,
}

/// 巡检状态更新请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInspectionStatusRequest {
    pub status: InspectionStatus,
}

/// 巡检返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDto {
    pub inspection_id: String,
    pub room_id: String,
    pub inspector_id: String,
    pub date_ms: i64,
    pub notes: String,
    pub photos: Vec<PhotoDto>,
    pub status: InspectionStatus,
}

/// 照片新增请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPhotoRequest {
    pub url: String,
    pub caption: Option<String>,
    pub equipment_id: Option<String>,
    pub kind: Option<PhotoKind>,
    pub equipment_working: Option<bool>,
}

/// 照片返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDto {
    pub photo_id: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_id: Option<String>,
    pub taken_at_ms: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<PhotoKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_working: Option<bool>,
}

/// 导入结果摘要。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummaryDto {
    pub rows: usize,
    pub towers: usize,
    pub wings: usize,
    pub rooms: usize,
}

/// 指标快照返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub api_requests: u64,
    pub auth_failures: u64,
    pub import_runs: u64,
    pub import_failures: u64,
    pub import_rows: u64,
    pub towers_imported: u64,
    pub rooms_imported: u64,
    pub fixture_rooms: u64,
    pub remote_stub_calls: u64,
}
