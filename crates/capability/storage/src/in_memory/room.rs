//! 房间内存存储实现
//!
//! 功能：
//! - 房间列表（楼塔 + 可选楼层/侧翼过滤）
//! - 房间/设备状态更新
//! - 导入后的整体替换（仅限管理员）

use crate::error::StorageError;
use crate::traits::RoomStore;
use crate::validation::{ensure_admin, ensure_user};
use domain::{EquipmentStatus, Room, RoomStatus, SessionContext};
use std::collections::HashMap;
use std::sync::RwLock;

/// 房间内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储；设备内嵌于房间记录。
pub struct InMemoryRoomStore {
    rooms: RwLock<HashMap<String, Room>>,
}

impl InMemoryRoomStore {
    /// 创建空的房间存储
    pub fn new() -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
        }
    }

    /// 以给定集合初始化（fixture 或快照恢复；不做权限校验）
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.rooms.write() {
            for room in rooms {
                map.insert(room.room_id.clone(), room);
            }
        }
        store
    }
}

impl Default for InMemoryRoomStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RoomStore for InMemoryRoomStore {
    /// 列出指定楼塔的房间（可按楼层/侧翼过滤，按编号排序）
    async fn list_rooms(
        &self,
        ctx: &SessionContext,
        tower_id: &str,
        floor_number: Option<i32>,
        wing_id: Option<&str>,
    ) -> Result<Vec<Room>, StorageError> {
        ensure_user(ctx)?;
        let mut items: Vec<Room> = self
            .rooms
            .read()
            .map(|map| {
                map.values()
                    .filter(|room| room.tower_id == tower_id)
                    .filter(|room| floor_number.map_or(true, |floor| room.floor_number == floor))
                    .filter(|room| wing_id.map_or(true, |wing| room.wing_id == wing))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        items.sort_by_key(|room| (room.floor_number, room.number));
        Ok(items)
    }

    /// 查找指定房间
    async fn find_room(
        &self,
        ctx: &SessionContext,
        room_id: &str,
    ) -> Result<Option<Room>, StorageError> {
        ensure_user(ctx)?;
        let item = self
            .rooms
            .read()
            .ok()
            .and_then(|map| map.get(room_id).cloned());
        Ok(item)
    }

    /// 更新房间状态
    async fn update_room_status(
        &self,
        ctx: &SessionContext,
        room_id: &str,
        status: RoomStatus,
    ) -> Result<Option<Room>, StorageError> {
        ensure_user(ctx)?;
        let mut map = self
            .rooms
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let room = match map.get_mut(room_id) {
            Some(room) => room,
            None => return Ok(None),
        };
        room.status = status;
        Ok(Some(room.clone()))
    }

    /// 更新房间内单个设备的状态
    async fn update_equipment_status(
        &self,
        ctx: &SessionContext,
        room_id: &str,
        equipment_id: &str,
        status: EquipmentStatus,
        checked_at_ms: i64,
    ) -> Result<Option<Room>, StorageError> {
        ensure_user(ctx)?;
        let mut map = self
            .rooms
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let room = match map.get_mut(room_id) {
            Some(room) => room,
            None => return Ok(None),
        };
        let equipment = match room
            .equipments
            .iter_mut()
            .find(|item| item.equipment_id == equipment_id)
        {
            Some(equipment) => equipment,
            None => return Ok(None),
        };
        equipment.status = status;
        equipment.last_checked_ms = Some(checked_at_ms);
        Ok(Some(room.clone()))
    }

    /// 刷新房间最近巡检时间
    async fn touch_last_inspection(
        &self,
        ctx: &SessionContext,
        room_id: &str,
        inspected_at_ms: i64,
    ) -> Result<bool, StorageError> {
        ensure_user(ctx)?;
        let mut map = self
            .rooms
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        match map.get_mut(room_id) {
            Some(room) => {
                room.last_inspection_ms = Some(inspected_at_ms);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 整体替换房间集合
    async fn replace_all(
        &self,
        ctx: &SessionContext,
        rooms: Vec<Room>,
    ) -> Result<usize, StorageError> {
        ensure_admin(ctx)?;
        let mut map = self
            .rooms
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        map.clear();
        let count = rooms.len();
        for room in rooms {
            map.insert(room.room_id.clone(), room);
        }
        Ok(count)
    }
}
