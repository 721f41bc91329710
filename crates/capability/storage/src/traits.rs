//! 存储接口 Trait 定义
//!
//! 定义所有资源存储的异步接口：
//! - UserStore：用户存储
//! - TowerStore：楼塔存储（含侧翼）
//! - RoomStore：房间存储（含设备）
//! - InspectionStore：巡检存储（含照片）
//! - SnapshotStore：导入快照存储
//!
//! 设计原则：
//! - 所有接口显式接收 SessionContext
//! - 所有接口返回 StorageError
//! - 使用 async_trait 支持动态分发

use crate::error::StorageError;
use crate::models::{Snapshot, UserRecord};
use async_trait::async_trait;
use domain::{
    EquipmentStatus, Inspection, InspectionStatus, Photo, Room, RoomStatus, SessionContext, Tower,
};

/// 用户存储接口
///
/// 提供演示用户查询与口令哈希升级。
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 根据用户名查找用户
    async fn find_by_username(
        &self,
        ctx: &SessionContext,
        username: &str,
    ) -> Result<Option<UserRecord>, StorageError>;

    /// 更新口令哈希（明文种子首次登录后升级为 argon2）
    async fn update_password_hash(
        &self,
        ctx: &SessionContext,
        user_id: &str,
        password_hash: &str,
    ) -> Result<bool, StorageError>;
}

/// 楼塔存储接口
///
/// 楼塔连同其侧翼整体存取；生命周期为创建 + 整体替换。
#[async_trait]
pub trait TowerStore: Send + Sync {
    /// 列出所有楼塔
    async fn list_towers(&self, ctx: &SessionContext) -> Result<Vec<Tower>, StorageError>;

    /// 查找指定楼塔
    async fn find_tower(
        &self,
        ctx: &SessionContext,
        tower_id: &str,
    ) -> Result<Option<Tower>, StorageError>;

    /// 整体替换楼塔集合（导入落库；仅限管理员）
    async fn replace_all(
        &self,
        ctx: &SessionContext,
        towers: Vec<Tower>,
    ) -> Result<usize, StorageError>;
}

/// 房间存储接口
///
/// 设备内嵌于房间记录，随房间整体读写。
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// 列出指定楼塔的房间（可按楼层/侧翼过滤）
    async fn list_rooms(
        &self,
        ctx: &SessionContext,
        tower_id: &str,
        floor_number: Option<i32>,
        wing_id: Option<&str>,
    ) -> Result<Vec<Room>, StorageError>;

    /// 查找指定房间
    async fn find_room(
        &self,
        ctx: &SessionContext,
        room_id: &str,
    ) -> Result<Option<Room>, StorageError>;

    /// 更新房间状态
    async fn update_room_status(
        &self,
        ctx: &SessionContext,
        room_id: &str,
        status: RoomStatus,
    ) -> Result<Option<Room>, StorageError>;

    /// 更新房间内单个设备的状态（并刷新 last_checked_ms）
    async fn update_equipment_status(
        &self,
        ctx: &SessionContext,
        room_id: &str,
        equipment_id: &str,
        status: EquipmentStatus,
        checked_at_ms: i64,
    ) -> Result<Option<Room>, StorageError>;

    /// 刷新房间最近巡检时间
    async fn touch_last_inspection(
        &self,
        ctx: &SessionContext,
        room_id: &str,
        inspected_at_ms: i64,
    ) -> Result<bool, StorageError>;

    /// 整体替换房间集合（导入落库；仅限管理员）
    async fn replace_all(
        &self,
        ctx: &SessionContext,
        rooms: Vec<Room>,
    ) -> Result<usize, StorageError>;
}

/// 巡检存储接口
#[async_trait]
pub trait InspectionStore: Send + Sync {
    /// 列出指定房间的巡检记录（按日期倒序）
    async fn list_inspections(
        &self,
        ctx: &SessionContext,
        room_id: &str,
    ) -> Result<Vec<Inspection>, StorageError>;

    /// 查找指定巡检
    async fn find_inspection(
        &self,
        ctx: &SessionContext,
        inspection_id: &str,
    ) -> Result<Option<Inspection>, StorageError>;

    /// 创建巡检记录
    async fn create_inspection(
        &self,
        ctx: &SessionContext,
        record: Inspection,
    ) -> Result<Inspection, StorageError>;

    /// 向巡检追加照片
    async fn add_photo(
        &self,
        ctx: &SessionContext,
        inspection_id: &str,
        photo: Photo,
    ) -> Result<Option<Inspection>, StorageError>;

    /// 更新巡检状态
    async fn update_status(
        &self,
        ctx: &SessionContext,
        inspection_id: &str,
        status: InspectionStatus,
    ) -> Result<Option<Inspection>, StorageError>;
}

/// 导入快照存储接口
///
/// 最近一次导入的楼塔/房间集合（本地 JSON 文件，浏览器 localStorage 的服务端对应物）。
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// 保存快照（仅限管理员）
    async fn save(&self, ctx: &SessionContext, snapshot: &Snapshot) -> Result<(), StorageError>;

    /// 读取快照（不存在时返回 None）
    async fn load(&self, ctx: &SessionContext) -> Result<Option<Snapshot>, StorageError>;
}
