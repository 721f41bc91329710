//! AWS 远端占位后端
//!
//! aws 模式的存储实现：携带运维方提供的 endpoint 与 bearer token，
//! 暴露将要发起的 JSON HTTP 请求形状（方法/URL/Authorization 头），
//! 但所有操作一律返回 "not implemented" —— 仅为契约占位，没有任何
//! 真实网络调用。错误不重试，直接上抛给调用方展示。

use crate::error::StorageError;
use crate::models::{Snapshot, UserRecord};
use crate::traits::{InspectionStore, RoomStore, SnapshotStore, TowerStore, UserStore};
use domain::{
    EquipmentStatus, Inspection, InspectionStatus, Photo, Room, RoomStatus, SessionContext, Tower,
};
use rms_telemetry::record_remote_stub_call;
use std::sync::Arc;

/// 远端后端占位配置。
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    endpoint: String,
    token: String,
}

/// 占位后端"将要发出"的请求形状。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRequest {
    pub method: &'static str,
    pub url: String,
    pub authorization: String,
}

impl RemoteBackend {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// 构造指定路径的请求形状（契约可测，调用不可用）。
    pub fn request(&self, method: &'static str, path: &str) -> RemoteRequest {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        RemoteRequest {
            method,
            url: format!("{base}/{path}"),
            authorization: format!("Bearer {}", self.token),
        }
    }

    fn not_implemented(&self, operation: &str) -> StorageError {
        record_remote_stub_call();
        StorageError::new(format!("not implemented: aws backend ({operation})"))
    }
}

/// 楼塔远端占位存储。
pub struct RemoteTowerStore {
    backend: Arc<RemoteBackend>,
}

impl RemoteTowerStore {
    pub fn new(backend: Arc<RemoteBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait::async_trait]
impl TowerStore for RemoteTowerStore {
    async fn list_towers(&self, _ctx: &SessionContext) -> Result<Vec<Tower>, StorageError> {
        let _ = self.backend.request("GET", "/towers");
        Err(self.backend.not_implemented("list_towers"))
    }

    async fn find_tower(
        &self,
        _ctx: &SessionContext,
        tower_id: &str,
    ) -> Result<Option<Tower>, StorageError> {
        let _ = self.backend.request("GET", &format!("/towers/{tower_id}"));
        Err(self.backend.not_implemented("find_tower"))
    }

    async fn replace_all(
        &self,
        _ctx: &SessionContext,
        _towers: Vec<Tower>,
    ) -> Result<usize, StorageError> {
        let _ = self.backend.request("PUT", "/towers");
        Err(self.backend.not_implemented("replace_all_towers"))
    }
}

/// 房间远端占位存储。
pub struct RemoteRoomStore {
    backend: Arc<RemoteBackend>,
}

impl RemoteRoomStore {
    pub fn new(backend: Arc<RemoteBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait::async_trait]
impl RoomStore for RemoteRoomStore {
    async fn list_rooms(
        &self,
        _ctx: &SessionContext,
        tower_id: &str,
        _floor_number: Option<i32>,
        _wing_id: Option<&str>,
    ) -> Result<Vec<Room>, StorageError> {
        let _ = self
            .backend
            .request("GET", &format!("/towers/{tower_id}/rooms"));
        Err(self.backend.not_implemented("list_rooms"))
    }

    async fn find_room(
        &self,
        _ctx: &SessionContext,
        room_id: &str,
    ) -> Result<Option<Room>, StorageError> {
        let _ = self.backend.request("GET", &format!("/rooms/{room_id}"));
        Err(self.backend.not_implemented("find_room"))
    }

    async fn update_room_status(
        &self,
        _ctx: &SessionContext,
        room_id: &str,
        _status: RoomStatus,
    ) -> Result<Option<Room>, StorageError> {
        let _ = self
            .backend
            .request("PUT", &format!("/rooms/{room_id}/status"));
        Err(self.backend.not_implemented("update_room_status"))
    }

    async fn update_equipment_status(
        &self,
        _ctx: &SessionContext,
        room_id: &str,
        equipment_id: &str,
        _status: EquipmentStatus,
        _checked_at_ms: i64,
    ) -> Result<Option<Room>, StorageError> {
        let _ = self.backend.request(
            "PUT",
            &format!("/rooms/{room_id}/equipments/{equipment_id}/status"),
        );
        Err(self.backend.not_implemented("update_equipment_status"))
    }

    async fn touch_last_inspection(
        &self,
        _ctx: &SessionContext,
        room_id: &str,
        _inspected_at_ms: i64,
    ) -> Result<bool, StorageError> {
        let _ = self
            .backend
            .request("PUT", &format!("/rooms/{room_id}/last-inspection"));
        Err(self.backend.not_implemented("touch_last_inspection"))
    }

    async fn replace_all(
        &self,
        _ctx: &SessionContext,
        _rooms: Vec<Room>,
    ) -> Result<usize, StorageError> {
        let _ = self.backend.request("PUT", "/rooms");
        Err(self.backend.not_implemented("replace_all_rooms"))
    }
}

/// 巡检远端占位存储。
pub struct RemoteInspectionStore {
    backend: Arc<RemoteBackend>,
}

impl RemoteInspectionStore {
    pub fn new(backend: Arc<RemoteBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait::async_trait]
impl InspectionStore for RemoteInspectionStore {
    async fn list_inspections(
        &self,
        _ctx: &SessionContext,
        room_id: &str,
    ) -> Result<Vec<Inspection>, StorageError> {
        let _ = self
            .backend
            .request("GET", &format!("/rooms/{room_id}/inspections"));
        Err(self.backend.not_implemented("list_inspections"))
    }

    async fn find_inspection(
        &self,
        _ctx: &SessionContext,
        inspection_id: &str,
    ) -> Result<Option<Inspection>, StorageError> {
        let _ = self
            .backend
            .request("GET", &format!("/inspections/{inspection_id}"));
        Err(self.backend.not_implemented("find_inspection"))
    }

    async fn create_inspection(
        &self,
        _ctx: &SessionContext,
        record: Inspection,
    ) -> Result<Inspection, StorageError> {
        let _ = self
            .backend
            .request("POST", &format!("/rooms/{}/inspections", record.room_id));
        Err(self.backend.not_implemented("create_inspection"))
    }

    async fn add_photo(
        &self,
        _ctx: &SessionContext,
        inspection_id: &str,
        _photo: Photo,
    ) -> Result<Option<Inspection>, StorageError> {
        let _ = self
            .backend
            .request("POST", &format!("/inspections/{inspection_id}/photos"));
        Err(self.backend.not_implemented("add_photo"))
    }

    async fn update_status(
        &self,
        _ctx: &SessionContext,
        inspection_id: &str,
        _status: InspectionStatus,
    ) -> Result<Option<Inspection>, StorageError> {
        let _ = self
            .backend
            .request("PUT", &format!("/inspections/{inspection_id}/status"));
        Err(self.backend.not_implemented("update_inspection_status"))
    }
}

/// 用户远端占位存储。
pub struct RemoteUserStore {
    backend: Arc<RemoteBackend>,
}

impl RemoteUserStore {
    pub fn new(backend: Arc<RemoteBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait::async_trait]
impl UserStore for RemoteUserStore {
    async fn find_by_username(
        &self,
        _ctx: &SessionContext,
        _username: &str,
    ) -> Result<Option<UserRecord>, StorageError> {
        let _ = self.backend.request("GET", "/users");
        Err(self.backend.not_implemented("find_by_username"))
    }

    async fn update_password_hash(
        &self,
        _ctx: &SessionContext,
        user_id: &str,
        _password_hash: &str,
    ) -> Result<bool, StorageError> {
        let _ = self
            .backend
            .request("PUT", &format!("/users/{user_id}/password"));
        Err(self.backend.not_implemented("update_password_hash"))
    }
}

/// 快照远端占位存储。
pub struct RemoteSnapshotStore {
    backend: Arc<RemoteBackend>,
}

impl RemoteSnapshotStore {
    pub fn new(backend: Arc<RemoteBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait::async_trait]
impl SnapshotStore for RemoteSnapshotStore {
    async fn save(&self, _ctx: &SessionContext, _snapshot: &Snapshot) -> Result<(), StorageError> {
        let _ = self.backend.request("PUT", "/snapshot");
        Err(self.backend.not_implemented("save_snapshot"))
    }

    async fn load(&self, _ctx: &SessionContext) -> Result<Option<Snapshot>, StorageError> {
        let _ = self.backend.request("GET", "/snapshot");
        Err(self.backend.not_implemented("load_snapshot"))
    }
}
