//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 会话接口：/login, /logout, /session
//! - 楼塔浏览：/towers, /towers/{id}, /towers/{id}/rooms
//! - 房间与设备：/rooms/{id}, /rooms/{id}/status, /rooms/{id}/equipments/{id}/status
//! - 巡检：/rooms/{id}/inspections, /inspections/{id}/photos, /inspections/{id}/status
//! - 导入：/import/csv, /import/xlsx
//! - 指标：/metrics

use crate::AppState;
use crate::handlers::*;
use crate::middleware::{mock_latency, request_context};
use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// 创建 API 路由
pub fn create_api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(get_session))
        .route("/towers", get(list_towers))
        .route("/towers/:tower_id", get(get_tower))
        .route("/towers/:tower_id/rooms", get(list_rooms))
        .route("/rooms/:room_id", get(get_room))
        .route("/rooms/:room_id/status", put(update_room_status))
        .route(
            "/rooms/:room_id/equipments/:equipment_id/status",
            put(update_equipment_status),
        )
        .route(
            "/rooms/:room_id/inspections",
            get(list_inspections).post(create_inspection),
        )
        .route("/inspections/:inspection_id/photos", post(add_photo))
        .route(
            "/inspections/:inspection_id/status",
            put(update_inspection_status),
        )
        .route("/import/csv", post(import_csv))
        .route("/import/xlsx", post(import_xlsx))
        .route("/metrics", get(get_metrics))
        .layer(from_fn_with_state(state.clone(), mock_latency))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(request_context)),
        )
}
