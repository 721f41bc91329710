//! 数据模型
//!
//! 定义存储相关的数据模型：
//! - 用户模型：UserRecord（演示账户）
//! - 快照模型：Snapshot（最近一次导入的楼塔/房间集合）
//!
//! 楼宇层级实体（Tower/Wing/Room/Equipment/Inspection/Photo）
//! 直接使用 domain 中的记录，不另做存储侧副本。

use domain::{Room, SessionContext, Tower};
use serde::{Deserialize, Serialize};

/// 用户记录（演示账户）。
///
/// password 字段为 argon2 哈希；历史明文种子在首次登录时升级。
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user_id: String,
    pub username: String,
    pub display_name: String,
    pub password: String,
    pub is_admin: bool,
}

impl UserRecord {
    /// 将用户记录转换为 SessionContext。
    pub fn to_session_context(&self) -> SessionContext {
        SessionContext::new(
            self.user_id.clone(),
            self.display_name.clone(),
            self.is_admin,
        )
    }
}

/// 最近一次导入的快照（JSON 序列化落盘）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub imported_at_ms: i64,
    pub imported_by: String,
    pub towers: Vec<Tower>,
    pub rooms: Vec<Room>,
}
