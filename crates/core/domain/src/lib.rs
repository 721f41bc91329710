pub mod model;

pub use model::{
    Equipment, EquipmentKind, EquipmentStatus, Inspection, InspectionStatus, Photo, PhotoKind,
    Room, RoomStatus, Tower, Wing,
};

use serde::{Deserialize, Serialize};

/// 会话上下文：所有模块共享的执行上下文。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    pub user_id: String,
    pub display_name: String,
    pub is_admin: bool,
}

impl SessionContext {
    /// 构造显式身份的会话上下文。
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>, is_admin: bool) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            is_admin,
        }
    }
}

impl Default for SessionContext {
    /// 空上下文（仅用于测试或占位）。
    fn default() -> Self {
        Self {
            user_id: "".to_string(),
            display_name: "".to_string(),
            is_admin: false,
        }
    }
}
