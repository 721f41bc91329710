//! 巡检管理 HTTP API 服务器。
//!
//! 启动流程：
//! 1. 加载 .env 与环境配置（RMS_* 变量）
//! 2. 初始化结构化日志
//! 3. 按 API 模式装配存储：
//!    - mock：内存存储，开机灌入演示数据；存在导入快照时优先恢复快照
//!    - aws：远端占位存储，所有操作返回 not implemented
//! 4. 绑定监听并服务路由

use rms_auth::SessionService;
use rms_config::{ApiMode, AppConfig};
use rms_fixture::{FixtureConfig, generate};
use rms_storage::{
    FileSnapshotStore, InMemoryInspectionStore, InMemoryRoomStore, InMemoryTowerStore,
    InMemoryUserStore, InspectionStore, RemoteBackend, RemoteInspectionStore, RemoteRoomStore,
    RemoteSnapshotStore, RemoteTowerStore, RemoteUserStore, RoomStore, SnapshotStore, TowerStore,
    UserStore,
};
use rms_telemetry::{init_tracing, record_fixture_rooms};
use std::sync::Arc;

mod handlers;
mod middleware;
mod routes;
mod utils;

/// 全局应用状态（handler 间共享）。
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<SessionService>,
    pub tower_store: Arc<dyn TowerStore>,
    pub room_store: Arc<dyn RoomStore>,
    pub inspection_store: Arc<dyn InspectionStore>,
    pub snapshot_store: Option<Arc<dyn SnapshotStore>>,
    pub mock_latency_ms: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    init_tracing();

    let state = build_state(&config)?;

    let app = routes::create_api_router(state);
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!(addr = %config.http_addr, mode = ?config.api_mode, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// 按配置装配存储与会话服务。
fn build_state(config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    match config.api_mode {
        ApiMode::Mock => build_mock_state(config),
        ApiMode::Aws => build_aws_state(config),
    }
}

fn build_mock_state(config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let fixture = generate(FixtureConfig {
        seed: config.fixture_seed,
    });
    record_fixture_rooms(fixture.rooms.len() as u64);

    let mut towers = fixture.towers;
    let mut rooms = fixture.rooms;

    // 存在导入快照时恢复快照数据，演示数据仅作兜底
    let snapshot_store = match &config.snapshot_path {
        Some(path) => {
            let store = FileSnapshotStore::new(path);
            if let Some(snapshot) = store.load_at_startup()? {
                tracing::info!(
                    towers = snapshot.towers.len(),
                    rooms = snapshot.rooms.len(),
                    "restored import snapshot"
                );
                towers = snapshot.towers;
                rooms = snapshot.rooms;
            }
            Some(Arc::new(store) as Arc<dyn SnapshotStore>)
        }
        None => None,
    };

    let user_store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::with_users(fixture.users));
    let auth = Arc::new(SessionService::new(
        user_store,
        config.session_ttl_seconds,
    ));

    Ok(AppState {
        auth,
        tower_store: Arc::new(InMemoryTowerStore::with_towers(towers)),
        room_store: Arc::new(InMemoryRoomStore::with_rooms(rooms)),
        inspection_store: Arc::new(InMemoryInspectionStore::new()),
        snapshot_store,
        mock_latency_ms: config.mock_latency_ms,
    })
}

fn build_aws_state(config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    // from_env 已保证 aws 模式下两者均存在
    let endpoint = config.aws_endpoint.clone().unwrap_or_default();
    let token = config.aws_token.clone().unwrap_or_default();
    let backend = Arc::new(RemoteBackend::new(endpoint, token));

    let user_store: Arc<dyn UserStore> = Arc::new(RemoteUserStore::new(backend.clone()));
    let auth = Arc::new(SessionService::new(
        user_store,
        config.session_ttl_seconds,
    ));

    Ok(AppState {
        auth,
        tower_store: Arc::new(RemoteTowerStore::new(backend.clone())),
        room_store: Arc::new(RemoteRoomStore::new(backend.clone())),
        inspection_store: Arc::new(RemoteInspectionStore::new(backend.clone())),
        snapshot_store: Some(Arc::new(RemoteSnapshotStore::new(backend))),
        mock_latency_ms: 0,
    })
}
