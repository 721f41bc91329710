//! 楼塔浏览 handlers
//!
//! - GET /towers - 列出楼塔（含侧翼）
//! - GET /towers/{id} - 获取楼塔详情
//! - GET /towers/{id}/rooms - 列出楼塔内房间（可按楼层/侧翼过滤）
//!
//! 权限要求：所有接口需要有效会话。

use crate::AppState;
use crate::middleware::require_session;
use crate::utils::response::{not_found_error, storage_error};
use crate::utils::{room_to_dto, tower_to_dto};
use api_contract::{ApiResponse, RoomDto, RoomListQuery, TowerDto};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

#[derive(serde::Deserialize)]
pub struct TowerPath {
    tower_id: String,
}

/// 列出楼塔
pub async fn list_towers(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match state.tower_store.list_towers(&ctx).await {
        Ok(towers) => {
            let data: Vec<TowerDto> = towers.into_iter().map(tower_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 获取楼塔详情
pub async fn get_tower(
    State(state): State<AppState>,
    Path(path): Path<TowerPath>,
    headers: HeaderMap,
) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match state.tower_store.find_tower(&ctx, &path.tower_id).await {
        Ok(Some(tower)) => (
            StatusCode::OK,
            Json(ApiResponse::success(tower_to_dto(tower))),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 列出楼塔内房间
pub async fn list_rooms(
    State(state): State<AppState>,
    Path(path): Path<TowerPath>,
    Query(query): Query<RoomListQuery>,
    headers: HeaderMap,
) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    // 楼塔不存在时与详情接口一致返回 404
    match state.tower_store.find_tower(&ctx, &path.tower_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return not_found_error(),
        Err(err) => return storage_error(err),
    }
    match state
        .room_store
        .list_rooms(
            &ctx,
            &path.tower_id,
            query.floor_number,
            query.wing_id.as_deref(),
        )
        .await
    {
        Ok(rooms) => {
            let data: Vec<RoomDto> = rooms.into_iter().map(room_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use rms_auth::SessionService;
    use rms_fixture::{FixtureConfig, generate};
    use rms_storage::{
        InMemoryInspectionStore, InMemoryRoomStore, InMemoryTowerStore, InMemoryUserStore,
        UserStore,
    };
    use std::sync::Arc;

    fn test_state() -> AppState {
        let fixture = generate(FixtureConfig { seed: Some(1) });
        let user_store: Arc<dyn UserStore> =
            Arc::new(InMemoryUserStore::with_users(fixture.users));
        let auth = Arc::new(SessionService::new(user_store, 3600));
        AppState {
            auth,
            tower_store: Arc::new(InMemoryTowerStore::with_towers(fixture.towers)),
            room_store: Arc::new(InMemoryRoomStore::with_rooms(fixture.rooms)),
            inspection_store: Arc::new(InMemoryInspectionStore::new()),
            snapshot_store: None,
            mock_latency_ms: 0,
        }
    }

    async fn session_headers(state: &AppState, username: &str, password: &str) -> HeaderMap {
        let (_, handle) = state.auth.login(username, password).await.expect("login");
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-session-id",
            HeaderValue::from_str(&handle.session_id).expect("header"),
        );
        headers
    }

    #[tokio::test]
    async fn towers_list_requires_session() {
        let state = test_state();
        let response = list_towers(State(state), HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn towers_list_succeeds_with_session() {
        let state = test_state();
        let headers = session_headers(&state, "inspetor", "inspetor123").await;
        let response = list_towers(State(state), headers).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn rooms_list_unknown_tower_is_not_found() {
        let state = test_state();
        let headers = session_headers(&state, "inspetor", "inspetor123").await;
        let response = list_rooms(
            State(state),
            Path(TowerPath {
                tower_id: "missing".to_string(),
            }),
            Query(RoomListQuery {
                floor_number: None,
                wing_id: None,
            }),
            headers,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
